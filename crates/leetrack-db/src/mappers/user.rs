//! User entity <-> model mapper

use chrono::Utc;

use leetrack_core::entities::User;
use leetrack_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.user_id),
            email: model.email,
            password_hash: model.password_hash,
            leetcode_username: model.leetcode_username,
            // Nullable columns with server defaults; NULL means the default
            created_at: model.created_at.unwrap_or_else(Utc::now),
            last_login: model.last_login,
            is_active: model.is_active.unwrap_or(true),
            is_admin: model.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_to_entity() {
        let model = UserModel {
            user_id: 7,
            email: "test@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            leetcode_username: Some("leet_tester".to_string()),
            created_at: Some(Utc::now()),
            last_login: None,
            is_active: Some(true),
            is_admin: false,
        };

        let user = User::from(model);
        assert_eq!(user.id, UserId::new(7));
        assert_eq!(user.email, "test@example.com");
        assert!(user.is_active);
        assert!(!user.is_admin);
    }

    #[test]
    fn test_null_flags_map_to_defaults() {
        let model = UserModel {
            user_id: 8,
            email: "null@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            leetcode_username: None,
            created_at: None,
            last_login: None,
            is_active: None,
            is_admin: true,
        };

        let user = User::from(model);
        assert!(user.is_active);
        assert!(user.is_admin);
    }
}
