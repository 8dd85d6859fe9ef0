//! groupsplit - Terminal-based shared expense splitting
//!
//! This library provides the core of the groupsplit application: groups of
//! people, the expenses they share, and the balances that fall out of them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, groups, expenses, splits, balances)
//! - `ledger`: Balance computation
//! - `services`: Validated mutations that return new group snapshots
//! - `state`: Application state and the state-change observer
//! - `storage`: JSON persistence of the application state
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `groupsplit` binary
//!
//! # Example
//!
//! ```rust
//! use groupsplit::models::{ExpenseDraft, Split, User};
//! use groupsplit::state::{AppState, Store};
//! use groupsplit::storage::MemoryStore;
//!
//! let mut store = Store::new(AppState::default(), MemoryStore::new());
//! let trip = store.add_group("Trip", None)?;
//!
//! let alice = User::new("Alice");
//! store.add_user_to_group(&trip, alice.clone())?;
//!
//! let you = store.current_user().id.clone();
//! let split = Split::equal(vec![you.clone(), alice.id.clone()]);
//! store.add_expense(&trip, ExpenseDraft::new("Hotel", 100.0, you, split))?;
//!
//! assert_eq!(store.get_total_balance().amount, 50.0);
//! # Ok::<(), groupsplit::SplitError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{SplitError, SplitResult};
