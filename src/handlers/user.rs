use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::{
    handlers::extract::{AppJson, AppPath, AppQuery},
    models::{
        query::UserFilterQuery,
        users::{CreateUserDto, UpdateUserDto},
    },
    AppState, Result,
};

pub fn users_handler() -> Router {
    let collection = post(create_user).get(get_users);

    Router::new()
        .route("/users", collection.clone())
        .route("/users/", collection)
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn create_user(
    Extension(app_state): Extension<Arc<AppState>>,
    AppJson(new_user): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse> {
    let user = app_state.users_service.create_user(new_user).await?;
    Ok((StatusCode::OK, Json(user)))
}

async fn get_users(
    Extension(app_state): Extension<Arc<AppState>>,
    AppQuery(params): AppQuery<UserFilterQuery>,
) -> Result<impl IntoResponse> {
    let users = app_state
        .users_service
        .get_users(params.name.as_deref())
        .await?;
    Ok((StatusCode::OK, Json(users)))
}

async fn get_user(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(user_id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let user = app_state.users_service.get_user(user_id).await?;
    Ok(Json(user))
}

async fn update_user(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(user_id): AppPath<i64>,
    AppJson(update): AppJson<UpdateUserDto>,
) -> Result<impl IntoResponse> {
    let user = app_state.users_service.update_user(user_id, update).await?;
    Ok(Json(user))
}

async fn delete_user(
    Extension(app_state): Extension<Arc<AppState>>,
    AppPath(user_id): AppPath<i64>,
) -> Result<impl IntoResponse> {
    let deleted_user = app_state.users_service.delete_user(user_id).await?;
    Ok(Json(deleted_user))
}
