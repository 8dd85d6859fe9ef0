//! JSON file helpers for the state blob
//!
//! Writes go through a staged file and a rename.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SplitError;

/// Read JSON from a file, returning `None` if the file doesn't exist
pub fn read_json_optional<T, P>(path: P) -> Result<Option<T>, SplitError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| SplitError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| SplitError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Replace `path` with the JSON encoding of `data`
///
/// The snapshot is staged in `<name>.json.tmp` next to the target and
/// renamed over it once it is on disk, so readers see either the old
/// snapshot or the new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SplitError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create", parent, e))?;
    }

    let staged = path.with_extension("json.tmp");
    if let Err(err) = write_staged(&staged, data) {
        let _ = fs::remove_file(&staged);
        return Err(err);
    }

    fs::rename(&staged, path).map_err(|e| {
        let _ = fs::remove_file(&staged);
        storage_error("replace", path, e)
    })
}

fn write_staged<T: Serialize>(staged: &Path, data: &T) -> Result<(), SplitError> {
    let file = File::create(staged).map_err(|e| storage_error("create", staged, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SplitError::Storage(format!("Failed to encode state: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| storage_error("write", staged, e.into_error()))?;
    file.sync_all().map_err(|e| storage_error("sync", staged, e))
}

fn storage_error(action: &str, path: &Path, err: std::io::Error) -> SplitError {
    SplitError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Delete a file if it exists, returning whether anything was removed
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> Result<bool, SplitError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(path).map_err(|e| storage_error("remove", path, e))?;
    Ok(true)
}
