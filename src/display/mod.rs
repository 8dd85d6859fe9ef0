//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for groups, expenses and balances.

pub mod balance;
pub mod expense;
pub mod group;
pub mod money;

pub use balance::{format_group_balances, format_total_balance};
pub use expense::{describe_split, format_expense_list};
pub use group::{format_group_details, format_group_list};
pub use money::{format_currency, format_date};
