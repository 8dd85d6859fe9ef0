//! User model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// ID of the user every fresh installation starts with
pub const DEFAULT_USER_ID: &str = "user-1";

/// Display name of the default user
pub const DEFAULT_USER_NAME: &str = "You";

/// A person who can pay for and share expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, immutable once created
    pub id: UserId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    /// Create a user with a freshly generated ID
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(UserId::generate(), name)
    }

    /// Create a user with a known ID
    pub fn with_id(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            avatar_url: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Normalize a name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this user matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }

        Ok(())
    }
}

impl Default for User {
    fn default() -> Self {
        Self::with_id(UserId::from(DEFAULT_USER_ID), DEFAULT_USER_NAME)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user() {
        let user = User::default();
        assert_eq!(user.id.as_str(), "user-1");
        assert_eq!(user.name, "You");
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let user = User::new("Alice");
        assert!(user.matches_name("  alice "));
        assert!(!user.matches_name("Bob"));
    }

    #[test]
    fn test_validate_empty_name() {
        let user = User::new("   ");
        assert_eq!(user.validate(), Err(UserValidationError::EmptyName));
    }

    #[test]
    fn test_json_shape() {
        let user = User::with_id(UserId::from("u-9"), "Bob");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": "u-9", "name": "Bob"}));

        let parsed: User = serde_json::from_str(
            r#"{"id": "u-2", "name": "Cat", "email": "c@x.io", "avatarUrl": "http://a/b.png"}"#,
        )
        .unwrap();
        assert_eq!(parsed.avatar_url.as_deref(), Some("http://a/b.png"));
        assert_eq!(parsed.email.as_deref(), Some("c@x.io"));
    }
}
