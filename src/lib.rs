use std::sync::Arc;

use axum::Router;
use config::Config;
use repositories::SqliteRepo;
use services::{posts::PostsService, user::UserService};
use sqlx::SqlitePool;

pub use self::errors::{Error, Result};

pub mod config;
pub mod db;
mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub users_service: UserService,
    pub posts_service: PostsService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let repo = Arc::new(SqliteRepo::new(pool));

        Self {
            users_service: UserService::new(repo.clone()),
            posts_service: PostsService::new(repo),
        }
    }
}

/// Connects to the store, creates missing tables and builds the router.
pub async fn create_app(config: Config) -> Result<Router> {
    let pool = db::connect(&config).await?;
    db::init_schema(&pool).await?;

    Ok(routes::create_routes(Arc::new(AppState::new(pool))))
}
