use std::sync::Arc;

use tracing::warn;

use crate::{
    models::{
        query::non_empty,
        users::{CreateUserDto, UpdateUserDto, User},
    },
    repositories::user_repo::UserRepository,
    Error, Result,
};

const USER_NOT_FOUND: &str = "User not found";

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Insert failures are reported to the client as 422 with the storage message.
    pub async fn create_user(&self, new_user: CreateUserDto) -> Result<User> {
        self.repo
            .create_user(&new_user.name, new_user.is_admin, &new_user.image_url)
            .await
            .map_err(|err| match err {
                Error::DatabaseError(db_err) => {
                    warn!("Rejected user insert: {}", db_err);
                    Error::Unprocessable(db_err.to_string())
                }
                other => other,
            })
    }

    pub async fn get_users(&self, name: Option<&str>) -> Result<Vec<User>> {
        self.repo.get_users(non_empty(name)).await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        let user = self.repo.get_user(user_id).await?;
        user.ok_or(Error::NotFound(USER_NOT_FOUND))
    }

    pub async fn update_user(&self, user_id: i64, update: UpdateUserDto) -> Result<User> {
        if update.is_empty() {
            return self.get_user(user_id).await;
        }

        let user = self.repo.update_user(user_id, &update).await?;
        user.ok_or(Error::NotFound(USER_NOT_FOUND))
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<User> {
        let user = self.repo.delete_user(user_id).await?;
        user.ok_or(Error::NotFound(USER_NOT_FOUND))
    }
}
