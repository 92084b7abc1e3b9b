use std::sync::Arc;

use crate::{
    models::{
        posts::{CreatePostDto, Post, UpdatePostDto},
        query::non_empty,
    },
    repositories::posts_repo::PostsRepository,
    Error, Result,
};

const POST_NOT_FOUND: &str = "Post not found";
const NO_POSTS_FOR_USER: &str = "No posts found for this user";

#[derive(Clone)]
pub struct PostsService {
    repo: Arc<dyn PostsRepository>,
}

impl PostsService {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self { repo }
    }

    /// The owner id is stored as given; it is not checked against `users`.
    pub async fn create_post(&self, new_post: CreatePostDto) -> Result<Post> {
        self.repo
            .create_post(&new_post.title, &new_post.post_text, new_post.user_id)
            .await
    }

    pub async fn get_posts(&self, title: Option<&str>) -> Result<Vec<Post>> {
        self.repo.get_posts(non_empty(title)).await
    }

    pub async fn get_post(&self, post_id: i64) -> Result<Post> {
        let post = self.repo.get_post(post_id).await?;
        post.ok_or(Error::NotFound(POST_NOT_FOUND))
    }

    pub async fn update_post(&self, post_id: i64, update: UpdatePostDto) -> Result<Post> {
        if update.title.is_none() && update.post_text.is_none() {
            return self.get_post(post_id).await;
        }

        let post = self.repo.update_post(post_id, &update).await?;
        post.ok_or(Error::NotFound(POST_NOT_FOUND))
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<Post> {
        let post = self.repo.delete_post(post_id).await?;
        post.ok_or(Error::NotFound(POST_NOT_FOUND))
    }

    /// Unlike [`Self::get_posts`], an empty result is reported as not found.
    pub async fn get_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>> {
        let posts = self.repo.get_posts_by_user(user_id).await?;
        if posts.is_empty() {
            return Err(Error::NotFound(NO_POSTS_FOR_USER));
        }

        Ok(posts)
    }

    pub async fn increment_likes(&self, post_id: i64) -> Result<Post> {
        let post = self.repo.increment_likes(post_id).await?;
        post.ok_or(Error::NotFound(POST_NOT_FOUND))
    }

    pub async fn decrement_likes(&self, post_id: i64) -> Result<Post> {
        let post = self.repo.decrement_likes(post_id).await?;
        post.ok_or(Error::NotFound(POST_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::{db::test_pool, repositories::SqliteRepo};

    async fn service() -> PostsService {
        PostsService::new(Arc::new(SqliteRepo::new(test_pool().await)))
    }

    #[tokio::test]
    async fn insert_failure_stays_internal_error() {
        let pool = test_pool().await;
        sqlx::query("DROP TABLE posts").execute(&pool).await.unwrap();
        let service = PostsService::new(Arc::new(SqliteRepo::new(pool)));

        let err = service
            .create_post(CreatePostDto {
                title: "Lost".to_string(),
                post_text: "nowhere to go".to_string(),
                user_id: 1,
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, Error::DatabaseError(_)));
    }

    #[tokio::test]
    async fn posts_by_user_without_posts_is_not_found() {
        let service = service().await;
        let err = service.get_posts_by_user(7).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(matches!(err, Error::NotFound(NO_POSTS_FOR_USER)));
    }

    #[tokio::test]
    async fn missing_post_is_not_found_for_every_lookup() {
        let service = service().await;

        assert!(matches!(service.get_post(1).await, Err(Error::NotFound(_))));
        assert!(matches!(service.delete_post(1).await, Err(Error::NotFound(_))));
        assert!(matches!(service.increment_likes(1).await, Err(Error::NotFound(_))));
        assert!(matches!(service.decrement_likes(1).await, Err(Error::NotFound(_))));
        assert!(matches!(
            service.update_post(1, UpdatePostDto::default()).await,
            Err(Error::NotFound(_))
        ));
    }
}
