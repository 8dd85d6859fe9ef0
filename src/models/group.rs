//! Group model
//!
//! A group exclusively owns its member list and its expense list. Members are
//! unique by ID and kept in the order they joined; expenses stay in insertion
//! order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::ids::{GroupId, UserId};
use super::user::User;
use super::{now_millis, Timestamp};

/// Name shown for an ID that belongs to no member
pub const UNKNOWN_MEMBER_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub members: Vec<User>,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    pub created_by: UserId,

    pub created_at: Timestamp,
}

impl Group {
    /// Create a group whose only member is its creator
    pub fn new(name: impl Into<String>, description: Option<String>, creator: User) -> Self {
        Self {
            id: GroupId::generate(),
            name: name.into(),
            description,
            created_by: creator.id.clone(),
            members: vec![creator],
            expenses: Vec::new(),
            created_at: now_millis(),
        }
    }

    pub fn has_member(&self, user_id: &UserId) -> bool {
        self.members.iter().any(|m| &m.id == user_id)
    }

    pub fn member(&self, user_id: &UserId) -> Option<&User> {
        self.members.iter().find(|m| &m.id == user_id)
    }

    /// Find a member by name (case-insensitive)
    pub fn member_by_name(&self, name: &str) -> Option<&User> {
        self.members.iter().find(|m| m.matches_name(name))
    }

    /// Display name for a user ID, or "Unknown"
    pub fn member_name(&self, user_id: &UserId) -> &str {
        self.member(user_id)
            .map(|m| m.name.as_str())
            .unwrap_or(UNKNOWN_MEMBER_NAME)
    }

    pub fn member_ids(&self) -> impl Iterator<Item = &UserId> {
        self.members.iter().map(|m| &m.id)
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Check if this group matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        User::normalize_name(&self.name) == User::normalize_name(name)
    }

    /// Validate the group
    pub fn validate(&self) -> Result<(), GroupValidationError> {
        if self.name.trim().is_empty() {
            return Err(GroupValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValidationError {
    EmptyName,
}

impl fmt::Display for GroupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter a group name"),
        }
    }
}

impl std::error::Error for GroupValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_group_has_creator_as_member() {
        let creator = User::default();
        let group = Group::new("Trip", None, creator.clone());

        assert_eq!(group.members, vec![creator.clone()]);
        assert_eq!(group.created_by, creator.id);
        assert!(group.expenses.is_empty());
        assert!(group.created_at > 0);
    }

    #[test]
    fn test_member_lookup() {
        let mut group = Group::new("Flat", None, User::default());
        let alice = User::new("Alice");
        group.members.push(alice.clone());

        assert!(group.has_member(&alice.id));
        assert_eq!(group.member_by_name("ALICE"), Some(&alice));
        assert_eq!(group.member_name(&alice.id), "Alice");
        assert_eq!(group.member_name(&UserId::from("ghost")), "Unknown");
    }

    #[test]
    fn test_validate_empty_name() {
        let group = Group::new(" ", None, User::default());
        assert_eq!(group.validate(), Err(GroupValidationError::EmptyName));
    }

    #[test]
    fn test_json_field_names() {
        let group = Group::new("Trip", Some("Goa".into()), User::default());
        let json = serde_json::to_value(&group).unwrap();

        assert_eq!(json["createdBy"], "user-1");
        assert!(json["createdAt"].is_i64());
        assert_eq!(json["members"][0]["name"], "You");
        assert_eq!(json["description"], "Goa");
    }
}
