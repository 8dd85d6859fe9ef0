//! Storage layer for groupsplit
//!
//! Persists the full application state as one JSON blob. The core never
//! calls into this module; callers decide when to save, usually by handing a
//! store to [`crate::state::Store`] as its observer.

pub mod file_io;
pub mod json_store;
pub mod memory;

pub use file_io::{read_json_optional, write_json_atomic};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::SplitResult;
use crate::state::AppState;

/// Save/load contract for the state blob
pub trait Persistence {
    /// Replace the stored snapshot
    fn save(&mut self, state: &AppState) -> SplitResult<()>;

    /// Read the stored snapshot, `None` when nothing has been saved
    fn load(&self) -> SplitResult<Option<AppState>>;

    /// Throw the stored snapshot away entirely
    fn discard(&mut self) -> SplitResult<()>;

    /// Load the stored snapshot or start from an empty state
    fn load_or_default(&self) -> SplitResult<AppState> {
        Ok(self.load()?.unwrap_or_default())
    }
}
