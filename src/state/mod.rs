//! Application state
//!
//! [`AppState`] is the whole of the user's data: who the current user is and
//! every group they belong to. It is an ordinary value owned by the caller.
//! Mutations go through the service layer and swap in the new group
//! snapshot; persisting the result is up to whoever owns the state (see
//! [`Store`]).

mod observer;

pub use observer::{StateObserver, Store};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{SplitError, SplitResult};
use crate::ledger;
use crate::models::{Balance, ExpenseDraft, ExpenseId, Group, GroupId, User};
use crate::services;

/// Current user plus all groups, serialized as `{"currentUser", "groups"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    current_user: User,

    #[serde(default)]
    groups: Vec<Group>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(User::default(), Vec::new())
    }
}

impl AppState {
    pub fn new(current_user: User, groups: Vec<Group>) -> Self {
        Self {
            current_user,
            groups,
        }
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Replace the current user
    pub fn set_current_user(&mut self, user: User) -> SplitResult<()> {
        user.validate()
            .map_err(|e| SplitError::Validation(e.to_string()))?;
        self.current_user = user;
        Ok(())
    }

    /// Create a group with the current user as creator and first member
    pub fn add_group(&mut self, name: &str, description: Option<&str>) -> SplitResult<GroupId> {
        let group = services::create_group(name, description, self.current_user.clone())?;
        let id = group.id.clone();
        info!(group = %id, name = %group.name, "group added");
        self.groups.push(group);
        Ok(id)
    }

    pub fn get_group(&self, group_id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == group_id)
    }

    /// Find a group by name (case-insensitive) or ID
    pub fn find_group(&self, identifier: &str) -> Option<&Group> {
        self.groups
            .iter()
            .find(|g| g.matches_name(identifier))
            .or_else(|| self.groups.iter().find(|g| g.id.as_str() == identifier.trim()))
    }

    /// Add a user to a group
    ///
    /// Returns `false` when the user was already a member.
    pub fn add_user_to_group(&mut self, group_id: &GroupId, user: User) -> SplitResult<bool> {
        let index = self.group_index(group_id)?;
        let group = &self.groups[index];
        let before = group.members.len();

        let updated = services::add_member(group, user);
        let added = updated.members.len() > before;
        if added {
            info!(group = %group_id, "member added");
        }

        self.groups[index] = updated;
        Ok(added)
    }

    /// Add an expense to a group, returning its new ID
    pub fn add_expense(&mut self, group_id: &GroupId, draft: ExpenseDraft) -> SplitResult<ExpenseId> {
        let index = self.group_index(group_id)?;
        let expense_id = ExpenseId::generate();
        let updated =
            services::add_expense_with_id(&self.groups[index], draft, expense_id.clone())?;
        info!(group = %group_id, expense = %expense_id, "expense added");

        self.groups[index] = updated;
        Ok(expense_id)
    }

    /// Balances of a group's members; empty when the group does not exist
    pub fn get_group_balances(&self, group_id: &GroupId) -> Vec<Balance> {
        self.get_group(group_id)
            .map(ledger::compute_group_balances)
            .unwrap_or_default()
    }

    /// The current user's balance across all groups
    pub fn get_total_balance(&self) -> Balance {
        ledger::compute_total_balance(&self.groups, &self.current_user.id)
    }

    /// Drop every group; the current user is kept
    pub fn clear_all_data(&mut self) {
        info!(groups = self.groups.len(), "clearing all groups");
        self.groups.clear();
    }

    fn group_index(&self, group_id: &GroupId) -> SplitResult<usize> {
        self.groups
            .iter()
            .position(|g| &g.id == group_id)
            .ok_or_else(|| SplitError::group_not_found(group_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Split, UserId};

    const EPS: f64 = 1e-6;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_user().id.as_str(), "user-1");
        assert!(state.groups().is_empty());
    }

    #[test]
    fn test_add_group_uses_current_user() {
        let mut state = AppState::default();
        let id = state.add_group("Trip", Some("Beach weekend")).unwrap();

        let group = state.get_group(&id).unwrap();
        assert_eq!(group.members, vec![User::default()]);
        assert_eq!(group.created_by.as_str(), "user-1");
        assert_eq!(group.description.as_deref(), Some("Beach weekend"));
        assert!(state.add_group("", None).unwrap_err().is_validation());
        assert_eq!(state.groups().len(), 1);
    }

    #[test]
    fn test_find_group_by_name_or_id() {
        let mut state = AppState::default();
        let id = state.add_group("Flat", None).unwrap();

        assert_eq!(state.find_group("flat").map(|g| &g.id), Some(&id));
        assert_eq!(state.find_group(id.as_str()).map(|g| &g.id), Some(&id));
        assert!(state.find_group("nope").is_none());
    }

    #[test]
    fn test_unknown_group() {
        let mut state = AppState::default();
        let missing = GroupId::from("grp-missing");

        assert!(state.get_group_balances(&missing).is_empty());
        let err = state.add_user_to_group(&missing, User::new("Bob")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_trip_scenario_through_state() {
        let mut state = AppState::default();
        let you = state.current_user().id.clone();
        let group_id = state.add_group("Trip", None).unwrap();

        let alice = User::new("Alice");
        assert!(state.add_user_to_group(&group_id, alice.clone()).unwrap());
        assert!(!state.add_user_to_group(&group_id, alice.clone()).unwrap());

        let split = Split::equal(vec![you.clone(), alice.id.clone()]);
        state
            .add_expense(&group_id, ExpenseDraft::new("Hotel", 100.0, you.clone(), split))
            .unwrap();

        let split = Split::custom(vec![(you.clone(), 50.0), (alice.id.clone(), 50.0)]);
        state
            .add_expense(&group_id, ExpenseDraft::new("Dinner", 60.0, alice.id.clone(), split))
            .unwrap();

        let balances = state.get_group_balances(&group_id);
        assert!((ledger::member_balance(&balances, &you) - 20.0).abs() < EPS);
        assert!((ledger::member_balance(&balances, &alice.id) + 20.0).abs() < EPS);
        assert!((state.get_total_balance().amount - 20.0).abs() < EPS);
    }

    #[test]
    fn test_add_expense_returns_stored_id() {
        let mut state = AppState::default();
        let group_id = state.add_group("Trip", None).unwrap();
        let you = state.current_user().id.clone();

        let split = Split::equal(vec![you.clone()]);
        let expense_id = state
            .add_expense(&group_id, ExpenseDraft::new("Snacks", 12.0, you, split))
            .unwrap();

        let group = state.get_group(&group_id).unwrap();
        assert_eq!(group.expenses.len(), 1);
        assert_eq!(group.expenses[0].id, expense_id);
    }

    #[test]
    fn test_failed_expense_leaves_state_unchanged() {
        let mut state = AppState::default();
        let group_id = state.add_group("Trip", None).unwrap();
        let before = state.clone();

        let split = Split::equal(vec![UserId::from("user-1")]);
        let draft = ExpenseDraft::new("Nothing", -5.0, UserId::from("user-1"), split);
        assert!(state.add_expense(&group_id, draft).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_clear_all_data_keeps_current_user() {
        let mut state = AppState::default();
        state.set_current_user(User::new("Priya")).unwrap();
        state.add_group("Trip", None).unwrap();

        state.clear_all_data();
        assert!(state.groups().is_empty());
        assert_eq!(state.current_user().name, "Priya");
    }

    #[test]
    fn test_set_current_user_rejects_blank_name() {
        let mut state = AppState::default();
        assert!(state.set_current_user(User::new(" ")).is_err());
        assert_eq!(state.current_user().name, "You");
    }

    #[test]
    fn test_json_shape() {
        let mut state = AppState::default();
        state.add_group("Trip", None).unwrap();

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["currentUser"]["id"], "user-1");
        assert_eq!(json["groups"][0]["name"], "Trip");

        let loaded: AppState = serde_json::from_value(json).unwrap();
        assert_eq!(loaded, state);
    }
}
