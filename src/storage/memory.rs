//! In-memory persistence
//!
//! Keeps the last saved snapshot as serialized JSON, so a load goes through
//! the same encoding as the file store.

use crate::error::SplitResult;
use crate::state::{AppState, StateObserver};

use super::Persistence;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves since creation
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// The raw JSON of the last save
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl Persistence for MemoryStore {
    fn save(&mut self, state: &AppState) -> SplitResult<()> {
        self.blob = Some(serde_json::to_string(state)?);
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> SplitResult<Option<AppState>> {
        match &self.blob {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    fn discard(&mut self) -> SplitResult<()> {
        self.blob = None;
        Ok(())
    }
}

impl StateObserver for MemoryStore {
    fn on_state_changed(&mut self, state: &AppState) -> SplitResult<()> {
        self.save(state)
    }
}
