//! Core data models for groupsplit
//!
//! Plain records for users, groups, expenses, splits and derived balances.

pub mod balance;
pub mod category;
pub mod expense;
pub mod group;
pub mod ids;
pub mod split;
pub mod user;

pub use balance::{Balance, BalanceStatus};
pub use expense::{Expense, ExpenseDraft};
pub use group::Group;
pub use ids::{ExpenseId, GroupId, UserId};
pub use split::{Split, SplitType};
pub use user::User;

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Current time as a [`Timestamp`]
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}
