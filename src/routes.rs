use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{posts::posts_handler, root::root_handler, user::users_handler},
    AppState,
};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(root_handler())
        .merge(users_handler())
        .merge(posts_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}
