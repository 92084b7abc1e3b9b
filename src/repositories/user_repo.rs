use async_trait::async_trait;
use tracing::instrument;

use crate::{
    models::users::{UpdateUserDto, User},
    Result,
};

use super::SqliteRepo;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, username: &str, is_admin: bool, image_url: &str) -> Result<User>;
    async fn get_users(&self, name: Option<&str>) -> Result<Vec<User>>;
    async fn get_user(&self, user_id: i64) -> Result<Option<User>>;
    async fn update_user(&self, user_id: i64, update: &UpdateUserDto) -> Result<Option<User>>;
    async fn delete_user(&self, user_id: i64) -> Result<Option<User>>;
}

#[async_trait]
impl UserRepository for SqliteRepo {
    #[instrument(skip(self))]
    async fn create_user(&self, username: &str, is_admin: bool, image_url: &str) -> Result<User> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, is_admin, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, username, is_admin, image_url
            "#,
        )
        .bind(username)
        .bind(is_admin)
        .bind(image_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_users(&self, name: Option<&str>) -> Result<Vec<User>> {
        let users = match name {
            Some(name) => {
                sqlx::query_as::<_, User>(
                    r#"
                    SELECT id, username, is_admin, image_url
                    FROM users
                    WHERE username LIKE '%' || $1 || '%'
                    "#,
                )
                .bind(name)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, User>("SELECT id, username, is_admin, image_url FROM users")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        tracing::debug!(count = users.len(), "Users listed");
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, is_admin, image_url FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn update_user(&self, user_id: i64, update: &UpdateUserDto) -> Result<Option<User>> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = COALESCE($2, username),
                is_admin = COALESCE($3, is_admin),
                image_url = COALESCE($4, image_url)
            WHERE id = $1
            RETURNING id, username, is_admin, image_url
            "#,
        )
        .bind(user_id)
        .bind(update.username.as_deref())
        .bind(update.is_admin)
        .bind(update.image_url.as_deref())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: i64) -> Result<Option<User>> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users WHERE id = $1
            RETURNING id, username, is_admin, image_url
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }
}
