//! Group and expense mutation operations
//!
//! Each operation validates its input and returns a new group snapshot. The
//! group passed in is never modified.

use tracing::debug;

use crate::error::{SplitError, SplitResult};
use crate::models::{ExpenseDraft, ExpenseId, Group, User};

/// Create a group with `initial_member` as its creator and only member
pub fn create_group(
    name: &str,
    description: Option<&str>,
    initial_member: User,
) -> SplitResult<Group> {
    let name = name.trim();
    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    let group = Group::new(name, description, initial_member);
    group
        .validate()
        .map_err(|e| SplitError::Validation(e.to_string()))?;

    debug!(group = %group.id, name = %group.name, "created group");
    Ok(group)
}

/// Add `user` to the group's members
///
/// A user whose ID is already a member leaves the group unchanged.
pub fn add_member(group: &Group, user: User) -> Group {
    if group.has_member(&user.id) {
        debug!(group = %group.id, user = %user.id, "member already present");
        return group.clone();
    }

    let mut updated = group.clone();
    updated.members.push(user);
    updated
}

/// Append an expense built from `draft`, assigning it a fresh ID
///
/// The payer and every share key must be current members.
pub fn add_expense(group: &Group, draft: ExpenseDraft) -> SplitResult<Group> {
    add_expense_with_id(group, draft, ExpenseId::generate())
}

/// Append an expense built from `draft` under a caller-chosen ID
pub fn add_expense_with_id(
    group: &Group,
    draft: ExpenseDraft,
    expense_id: ExpenseId,
) -> SplitResult<Group> {
    draft
        .validate()
        .map_err(|e| SplitError::Validation(e.to_string()))?;

    if !group.has_member(&draft.paid_by) {
        return Err(SplitError::Validation(format!(
            "Payer {} is not a member of '{}'",
            draft.paid_by, group.name
        )));
    }

    if let Some(outsider) = draft.split.participants().find(|id| !group.has_member(id)) {
        return Err(SplitError::Validation(format!(
            "Split references {} who is not a member of '{}'",
            outsider, group.name
        )));
    }

    let expense = draft.into_expense(expense_id);
    debug!(group = %group.id, expense = %expense.id, amount = expense.amount, "added expense");

    let mut updated = group.clone();
    updated.expenses.push(expense);
    Ok(updated)
}

/// Build a new member from form input
pub fn new_member(name: &str, email: Option<&str>) -> SplitResult<User> {
    let mut user = User::new(name.trim());
    user.email = email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    user.validate()
        .map_err(|e| SplitError::Validation(e.to_string()))?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Split, UserId};

    fn trip() -> (Group, User, User) {
        let you = User::default();
        let alice = User::new("Alice");
        let group = create_group("Trip", None, you.clone()).unwrap();
        let group = add_member(&group, alice.clone());
        (group, you, alice)
    }

    #[test]
    fn test_create_group() {
        let you = User::default();
        let group = create_group("  Trip  ", Some("  "), you.clone()).unwrap();

        assert_eq!(group.name, "Trip");
        assert!(group.description.is_none());
        assert_eq!(group.members, vec![you.clone()]);
        assert_eq!(group.created_by, you.id);
        assert!(group.expenses.is_empty());
    }

    #[test]
    fn test_create_group_rejects_blank_name() {
        let err = create_group("   ", None, User::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_created_groups_get_distinct_ids() {
        let a = create_group("A", None, User::default()).unwrap();
        let b = create_group("A", None, User::default()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_member_is_idempotent() {
        let (group, you, alice) = trip();
        assert_eq!(group.members.len(), 2);

        let same = add_member(&group, alice.clone());
        assert_eq!(same, group);

        let renamed_you = User::with_id(you.id.clone(), "Someone else");
        let same = add_member(&group, renamed_you);
        let ids: Vec<&UserId> = same.member_ids().collect();
        assert_eq!(ids, vec![&you.id, &alice.id]);
        assert_eq!(same.members[0].name, "You");
    }

    #[test]
    fn test_add_expense_appends_with_fresh_id() {
        let (group, you, alice) = trip();
        let split = Split::equal(vec![you.id.clone(), alice.id.clone()]);

        let first = add_expense(&group, ExpenseDraft::new("Taxi", 40.0, you.id.clone(), split.clone())).unwrap();
        let second = add_expense(&first, ExpenseDraft::new("Taxi", 40.0, you.id.clone(), split)).unwrap();

        assert!(group.expenses.is_empty());
        assert_eq!(second.expenses.len(), 2);
        assert_ne!(second.expenses[0].id, second.expenses[1].id);
        assert_eq!(second.expenses[0].title, "Taxi");
    }

    #[test]
    fn test_add_expense_with_id_keeps_given_id() {
        let (group, you, alice) = trip();
        let split = Split::equal(vec![you.id.clone(), alice.id]);
        let draft = ExpenseDraft::new("Fuel", 25.0, you.id, split);

        let updated = add_expense_with_id(&group, draft, ExpenseId::from("exp-fuel")).unwrap();
        assert_eq!(updated.expenses[0].id.as_str(), "exp-fuel");
    }

    #[test]
    fn test_add_expense_validation() {
        let (group, you, alice) = trip();
        let split = Split::equal(vec![you.id.clone(), alice.id.clone()]);

        let zero = ExpenseDraft::new("Taxi", 0.0, you.id.clone(), split.clone());
        assert!(add_expense(&group, zero).unwrap_err().is_validation());

        let untitled = ExpenseDraft::new(" ", 10.0, you.id.clone(), split);
        assert!(add_expense(&group, untitled).unwrap_err().is_validation());

        let bad_custom = Split::custom(vec![(you.id.clone(), 50.0), (alice.id.clone(), 40.0)]);
        let draft = ExpenseDraft::new("Hotel", 10.0, you.id.clone(), bad_custom);
        let err = add_expense(&group, draft).unwrap_err();
        assert!(err.to_string().contains("100%"));
    }

    #[test]
    fn test_add_expense_rejects_outsiders() {
        let (group, you, _) = trip();
        let stranger = UserId::from("stranger");

        let split = Split::equal(vec![you.id.clone(), stranger.clone()]);
        let draft = ExpenseDraft::new("Snacks", 12.0, you.id.clone(), split);
        assert!(add_expense(&group, draft).unwrap_err().is_validation());

        let split = Split::equal(vec![you.id.clone()]);
        let draft = ExpenseDraft::new("Snacks", 12.0, stranger, split);
        assert!(add_expense(&group, draft).unwrap_err().is_validation());
    }

    #[test]
    fn test_new_member() {
        let user = new_member("  Bob ", Some(" bob@example.com ")).unwrap();
        assert_eq!(user.name, "Bob");
        assert_eq!(user.email.as_deref(), Some("bob@example.com"));

        assert!(new_member("", None).unwrap_err().is_validation());
    }
}
