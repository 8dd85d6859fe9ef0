//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the application state.

pub mod balance;
pub mod expense;
pub mod group;
pub mod reset;
pub mod user;

pub use balance::handle_balance_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use group::{handle_group_command, GroupCommands};
pub use reset::handle_reset_command;
pub use user::{handle_user_command, UserCommands};

use crate::error::{SplitError, SplitResult};
use crate::models::{Group, GroupId, UserId};
use crate::state::{StateObserver, Store};

/// Print a block of formatted output, ending in exactly one newline
pub(crate) fn print_block(text: &str) {
    println!("{}", text.trim_end_matches('\n'));
}

/// Resolve a group by name or ID
pub(crate) fn resolve_group<O: StateObserver>(
    store: &Store<O>,
    identifier: &str,
) -> SplitResult<GroupId> {
    store
        .find_group(identifier)
        .map(|g| g.id.clone())
        .ok_or_else(|| SplitError::group_not_found(identifier))
}

/// Resolve a member of a group by name or ID
pub(crate) fn resolve_member(group: &Group, identifier: &str) -> SplitResult<UserId> {
    if let Some(member) = group.member_by_name(identifier) {
        return Ok(member.id.clone());
    }

    group
        .members
        .iter()
        .find(|m| m.id.as_str() == identifier.trim())
        .map(|m| m.id.clone())
        .ok_or_else(|| SplitError::member_not_found(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::state::AppState;
    use crate::storage::MemoryStore;

    #[test]
    fn test_resolve_group_and_member() {
        let mut store = Store::new(AppState::default(), MemoryStore::new());
        let id = store.add_group("Trip", None).unwrap();
        let alice = User::new("Alice");
        store.add_user_to_group(&id, alice.clone()).unwrap();

        assert_eq!(resolve_group(&store, "TRIP").unwrap(), id);
        assert!(resolve_group(&store, "Flat").unwrap_err().is_not_found());

        let group = store.get_group(&id).unwrap();
        assert_eq!(resolve_member(group, "alice").unwrap(), alice.id);
        assert_eq!(resolve_member(group, alice.id.as_str()).unwrap(), alice.id);
        assert!(resolve_member(group, "Bob").unwrap_err().is_not_found());
    }
}
