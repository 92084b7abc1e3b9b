use async_trait::async_trait;
use tracing::instrument;

use crate::{
    models::posts::{Post, UpdatePostDto},
    Result,
};

use super::SqliteRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn create_post(&self, title: &str, post_text: &str, user_id: i64) -> Result<Post>;
    async fn get_posts(&self, title: Option<&str>) -> Result<Vec<Post>>;
    async fn get_post(&self, post_id: i64) -> Result<Option<Post>>;
    async fn update_post(&self, post_id: i64, update: &UpdatePostDto) -> Result<Option<Post>>;
    async fn delete_post(&self, post_id: i64) -> Result<Option<Post>>;
    async fn get_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>>;
    async fn increment_likes(&self, post_id: i64) -> Result<Option<Post>>;
    async fn decrement_likes(&self, post_id: i64) -> Result<Option<Post>>;
}

impl SqliteRepo {
    /// Runs a single-row `UPDATE ... RETURNING` inside its own transaction.
    async fn update_post_row(&self, sql: &str, post_id: i64) -> Result<Option<Post>> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(sql)
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(post)
    }
}

#[async_trait]
impl PostsRepository for SqliteRepo {
    #[instrument(skip(self, post_text))]
    async fn create_post(&self, title: &str, post_text: &str, user_id: i64) -> Result<Post> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, post_text, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, post_text, likes, user_id
            "#,
        )
        .bind(title)
        .bind(post_text)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(post_id = post.id, user_id, "Post created");

        Ok(post)
    }

    #[instrument(skip(self))]
    async fn get_posts(&self, title: Option<&str>) -> Result<Vec<Post>> {
        let posts = match title {
            Some(title) => {
                sqlx::query_as::<_, Post>(
                    r#"
                    SELECT id, title, post_text, likes, user_id
                    FROM posts
                    WHERE title LIKE '%' || $1 || '%'
                    "#,
                )
                .bind(title)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Post>("SELECT id, title, post_text, likes, user_id FROM posts")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn get_post(&self, post_id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, post_text, likes, user_id FROM posts WHERE id = $1",
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    #[instrument(skip(self, update))]
    async fn update_post(&self, post_id: i64, update: &UpdatePostDto) -> Result<Option<Post>> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                post_text = COALESCE($3, post_text)
            WHERE id = $1
            RETURNING id, title, post_text, likes, user_id
            "#,
        )
        .bind(post_id)
        .bind(update.title.as_deref())
        .bind(update.post_text.as_deref())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(post)
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, post_id: i64) -> Result<Option<Post>> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            DELETE FROM posts WHERE id = $1
            RETURNING id, title, post_text, likes, user_id
            "#,
        )
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(post)
    }

    #[instrument(skip(self))]
    async fn get_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, post_text, likes, user_id FROM posts WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn increment_likes(&self, post_id: i64) -> Result<Option<Post>> {
        self.update_post_row(
            r#"
            UPDATE posts
            SET likes = likes + 1
            WHERE id = $1
            RETURNING id, title, post_text, likes, user_id
            "#,
            post_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn decrement_likes(&self, post_id: i64) -> Result<Option<Post>> {
        // Floor at zero.
        self.update_post_row(
            r#"
            UPDATE posts
            SET likes = CASE WHEN likes > 0 THEN likes - 1 ELSE 0 END
            WHERE id = $1
            RETURNING id, title, post_text, likes, user_id
            "#,
            post_id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn post_can_reference_missing_user() {
        let repo = SqliteRepo::new(test_pool().await);
        let post = repo.create_post("Orphan", "no owner", 999).await.unwrap();

        assert_eq!(post.likes, 0);
        assert_eq!(post.user_id, 999);
    }

    #[tokio::test]
    async fn likes_never_go_negative() {
        let repo = SqliteRepo::new(test_pool().await);
        let post = repo.create_post("Hello", "world", 1).await.unwrap();

        for _ in 0..3 {
            repo.increment_likes(post.id).await.unwrap();
        }
        let mut likes = Vec::new();
        for _ in 0..4 {
            likes.push(repo.decrement_likes(post.id).await.unwrap().unwrap().likes);
        }

        assert_eq!(likes, vec![2, 1, 0, 0]);
    }

    #[tokio::test]
    async fn like_changes_on_missing_post_are_none() {
        let repo = SqliteRepo::new(test_pool().await);
        assert_eq!(repo.increment_likes(1).await.unwrap(), None);
        assert_eq!(repo.decrement_likes(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_touches_only_supplied_fields() {
        let repo = SqliteRepo::new(test_pool().await);
        let post = repo.create_post("Draft", "body", 1).await.unwrap();
        repo.increment_likes(post.id).await.unwrap();

        let update = UpdatePostDto {
            post_text: Some("edited".to_string()),
            ..Default::default()
        };
        let updated = repo.update_post(post.id, &update).await.unwrap().unwrap();

        assert_eq!(updated.title, "Draft");
        assert_eq!(updated.post_text, "edited");
        assert_eq!(updated.likes, 1);
        assert_eq!(updated.user_id, 1);
    }

    #[tokio::test]
    async fn posts_by_user_filters_on_owner() {
        let repo = SqliteRepo::new(test_pool().await);
        repo.create_post("a", "x", 1).await.unwrap();
        repo.create_post("b", "y", 2).await.unwrap();
        repo.create_post("c", "z", 1).await.unwrap();

        let titles: Vec<String> = repo
            .get_posts_by_user(1)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles.len(), 2);
        assert!(repo.get_posts_by_user(3).await.unwrap().is_empty());
    }
}
