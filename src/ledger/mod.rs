//! Ledger engine
//!
//! Pure functions that turn a group's expense list into per-member balances.
//! Nothing here mutates its input or touches storage.

pub mod balances;

pub use balances::{
    compute_group_balances, compute_total_balance, expense_debits, member_balance,
};
