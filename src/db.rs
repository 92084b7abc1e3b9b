use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::info;

use crate::{config::Config, Result};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        is_admin BOOLEAN NOT NULL DEFAULT 0,
        image_url TEXT NOT NULL DEFAULT ''
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_users_username ON users (username)",
    r#"
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        post_text TEXT NOT NULL,
        likes INTEGER NOT NULL DEFAULT 0,
        user_id INTEGER NOT NULL REFERENCES users (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_posts_title ON posts (title)",
];

/// Opens the pool. Posts may point at users that don't exist, so foreign keys
/// stay off.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    // One connection, so every query sees the same in-memory database.
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        max_connections: 1,
    };
    let pool = connect(&config).await.unwrap();
    init_schema(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_init_is_idempotent() {
        let pool = test_pool().await;
        init_schema(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'posts') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(
            tables.into_iter().map(|(name,)| name).collect::<Vec<_>>(),
            vec!["posts".to_string(), "users".to_string()]
        );
    }
}
