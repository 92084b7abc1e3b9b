use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub post_text: String,
    pub likes: i64,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostDto {
    pub title: String,
    pub post_text: String,
    pub user_id: i64,
}

/// Only the text fields can be edited; `likes` and `user_id` in the body are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub post_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_dto_ignores_counter_and_owner() {
        let dto: UpdatePostDto =
            serde_json::from_str(r#"{"title": "New", "likes": 99, "user_id": 7}"#).unwrap();
        assert_eq!(dto.title.as_deref(), Some("New"));
        assert_eq!(dto.post_text, None);
    }
}
