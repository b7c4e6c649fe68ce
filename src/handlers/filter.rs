use std::sync::Arc;

use axum::{
    extract::Query, http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router,
};

use crate::{
    models::query::{DateRangeQueryDto, KeywordQueryDto},
    AppState, Result,
};

pub fn filter_handler() -> Router {
    Router::new()
        .route("/keyword-filter", get(filter_by_keyword))
        .route("/date-filter", get(filter_by_date_range))
}

async fn filter_by_keyword(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<KeywordQueryDto>,
) -> Result<impl IntoResponse> {
    let posts = app_state
        .filter_service
        .filter_by_keyword(&query.keyword)
        .await?;

    Ok((StatusCode::OK, Json(posts)))
}

async fn filter_by_date_range(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<DateRangeQueryDto>,
) -> Result<impl IntoResponse> {
    let posts = app_state
        .filter_service
        .filter_by_date_range(&query.from_date, &query.to_date)
        .await?;

    Ok((StatusCode::OK, Json(posts)))
}
