use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    models::{
        posts::{CreatePostDto, UpdatePostDto},
        response::Response,
    },
    AppState, Error, Result,
};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/posts", get(get_posts))
        .route("/posts", post(add_post))
        .route("/posts/{id}", get(get_post_by_id))
        .route("/posts/{id}", put(update_post))
        .route("/posts/{id}", delete(delete_post))
}

async fn get_posts(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.find_all_posts().await?;

    Ok((StatusCode::OK, Json(posts)))
}

async fn add_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(new_post): Json<CreatePostDto>,
) -> Result<impl IntoResponse> {
    new_post
        .validate()
        .map_err(|err| Error::BadRequest(err.to_string()))?;

    let saved_post = app_state.posts_service.save(&new_post).await?;

    Ok((StatusCode::CREATED, Json(saved_post)))
}

async fn get_post_by_id(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let post = app_state.posts_service.find_by_id(post_id).await?;

    Ok((StatusCode::OK, Json(post)))
}

async fn update_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<i32>,
    Json(update): Json<UpdatePostDto>,
) -> Result<impl IntoResponse> {
    let updated_post = app_state
        .posts_service
        .update_post(post_id, &update)
        .await?;

    Ok((StatusCode::OK, Json(updated_post)))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse> {
    app_state.posts_service.delete_post(post_id).await?;

    Ok((
        StatusCode::OK,
        Json(Response {
            status: "success",
            message: format!("Post {post_id} deleted"),
        }),
    ))
}
