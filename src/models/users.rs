use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
    pub image_url: String,
}

/// Body of `POST /users/`. The display name arrives as `name` and is stored
/// as `username`.
#[derive(Debug, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub image_url: String,
}

/// Partial update: `None` leaves the stored value untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub is_admin: Option<bool>,
    pub image_url: Option<String>,
}

impl UpdateUserDto {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.is_admin.is_none() && self.image_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_defaults_optional_fields() {
        let dto: CreateUserDto = serde_json::from_str(r#"{"name": "Anna"}"#).unwrap();
        assert_eq!(dto.name, "Anna");
        assert!(!dto.is_admin);
        assert_eq!(dto.image_url, "");
    }

    #[test]
    fn update_dto_null_is_absent() {
        let dto: UpdateUserDto =
            serde_json::from_str(r#"{"username": null, "is_admin": true}"#).unwrap();
        assert_eq!(dto.username, None);
        assert_eq!(dto.is_admin, Some(true));
        assert!(!dto.is_empty());
        assert!(UpdateUserDto::default().is_empty());
    }
}
