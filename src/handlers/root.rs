use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::models::response::MessageResponse;

pub fn root_handler() -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/favicon.ico", get(favicon))
}

async fn read_root() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Welcome to the API".to_string(),
    })
}

async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
