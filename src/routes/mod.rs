use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{
        filter::filter_handler, posts::posts_handler, sorter::sorter_handler, user::users_handler,
    },
    AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/posts-api", posts_handler())
        .nest("/filter-api", filter_handler())
        .nest("/sorter-api", sorter_handler())
        .nest("/users-api", users_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}

pub fn configure_cors(origin: &str) -> CorsLayer {
    let origin = origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| panic!("🔒 CORS_ORIGIN is not a valid origin: {origin}"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}
