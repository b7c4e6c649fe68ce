use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router};

use crate::{AppState, Result};

pub fn users_handler() -> Router {
    Router::new().route("/users", get(get_users))
}

async fn get_users(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let users = app_state.users_service.get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}
