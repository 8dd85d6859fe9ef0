//! Service layer for groupsplit
//!
//! Validation and snapshot-producing mutations on top of the data model.

pub mod group;

pub use group::{add_expense, add_expense_with_id, add_member, create_group, new_member};
