//! File-backed persistence of the state blob
//!
//! The whole [`AppState`] lives in a single JSON file. Every save replaces
//! the file with a full snapshot; the last write wins.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::paths::SplitPaths;
use crate::error::SplitResult;
use crate::state::{AppState, StateObserver};

use super::file_io::{read_json_optional, remove_if_exists, write_json_atomic};
use super::Persistence;

/// Stores the state blob as pretty-printed JSON on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the standard state file location
    pub fn from_paths(paths: &SplitPaths) -> Self {
        Self::new(paths.state_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Persistence for JsonFileStore {
    fn save(&mut self, state: &AppState) -> SplitResult<()> {
        write_json_atomic(&self.path, state)?;
        debug!(path = %self.path.display(), groups = state.groups().len(), "state saved");
        Ok(())
    }

    fn load(&self) -> SplitResult<Option<AppState>> {
        let state: Option<AppState> = read_json_optional(&self.path)?;
        debug!(path = %self.path.display(), found = state.is_some(), "state loaded");
        Ok(state)
    }

    fn discard(&mut self) -> SplitResult<()> {
        if remove_if_exists(&self.path)? {
            info!(path = %self.path.display(), "stored state discarded");
        }
        Ok(())
    }
}

impl StateObserver for JsonFileStore {
    fn on_state_changed(&mut self, state: &AppState) -> SplitResult<()> {
        self.save(state)
    }
}
