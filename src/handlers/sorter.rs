use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router};

use crate::{AppState, Result};

pub fn sorter_handler() -> Router {
    Router::new()
        .route("/sort-author-asc", get(sort_author_asc))
        .route("/sort-author-desc", get(sort_author_desc))
        .route("/sort-date-oldest-first", get(sort_date_oldest_first))
        .route("/sort-date-newest-first", get(sort_date_newest_first))
}

async fn sort_author_asc(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let posts = app_state.sorter_service.sort_author_asc().await?;

    Ok((StatusCode::OK, Json(posts)))
}

async fn sort_author_desc(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let posts = app_state.sorter_service.sort_author_desc().await?;

    Ok((StatusCode::OK, Json(posts)))
}

async fn sort_date_oldest_first(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let posts = app_state.sorter_service.sort_date_oldest_first().await?;

    Ok((StatusCode::OK, Json(posts)))
}

async fn sort_date_newest_first(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let posts = app_state.sorter_service.sort_date_newest_first().await?;

    Ok((StatusCode::OK, Json(posts)))
}
