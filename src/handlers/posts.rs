use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Extension, Json, Router,
};

use crate::{
    handlers::extract::{AppJson, AppPath, AppQuery},
    models::{
        posts::{CreatePostDto, UpdatePostDto},
        query::PostFilterQuery,
    },
    AppState, Result,
};

pub fn posts_handler() -> Router {
    let collection = post(create_post).get(get_posts);

    Router::new()
        .route("/posts", collection.clone())
        .route("/posts/", collection)
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/posts/user/{id}", get(get_posts_by_user))
        .route("/posts/{id}/increment_likes", patch(increment_likes))
        .route("/posts/{id}/decrement_likes", patch(decrement_likes))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(new_post): AppJson<CreatePostDto>,
) -> Result<impl IntoResponse> {
    let post = app_state.posts_service.create_post(new_post).await?;
    Ok((StatusCode::OK, Json(post)))
}

async fn get_posts(
    Extension(app_state): Extension<Arc<AppState>>,
    AppQuery(params): AppQuery<PostFilterQuery>,
) -> Result<impl IntoResponse> {
    let posts = app_state
        .posts_service
        .get_posts(params.title.as_deref())
        .await?;
    Ok((StatusCode::OK, Json(posts)))
}

async fn get_post(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(post_id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let post = app_state.posts_service.get_post(post_id).await?;
    Ok(Json(post))
}

async fn update_post(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(post_id): AppPath<i64>,
    AppJson(update): AppJson<UpdatePostDto>,
) -> Result<impl IntoResponse> {
    let updated_post = app_state.posts_service.update_post(post_id, update).await?;
    Ok(Json(updated_post))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(post_id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let deleted_post = app_state.posts_service.delete_post(post_id).await?;
    Ok(Json(deleted_post))
}

async fn get_posts_by_user(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(user_id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.get_posts_by_user(user_id).await?;
    Ok(Json(posts))
}

async fn increment_likes(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(post_id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let post = app_state.posts_service.increment_likes(post_id).await?;
    Ok(Json(post))
}

async fn decrement_likes(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(post_id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let post = app_state.posts_service.decrement_likes(post_id).await?;
    Ok(Json(post))
}
