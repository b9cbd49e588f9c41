//! Durable storage for the last observed-and-notified DST state.
//!
//! The state is a flat city-code → boolean mapping persisted as a single JSON
//! object. Loading never fails: a missing, unreadable, or malformed file is
//! logged and treated as "never observed anything", which makes the first run
//! and recovery from corruption safe. Saving replaces the whole file
//! atomically (write to a temp file in the same directory, then rename) so a
//! crash leaves either the old or the new content, never a truncated mix.

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Last-known DST state per city code. An absent key means "never observed".
pub type DstState = BTreeMap<String, bool>;

/// Loads and saves the persisted DST state.
pub trait StateStore {
    /// Load the persisted state. Missing or corrupt data yields an empty map.
    fn load(&self) -> DstState;

    /// Persist the full mapping, replacing any prior content atomically.
    fn save(&self, state: &DstState) -> Result<()>;
}

/// File-backed store keeping the state as one JSON object.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> DstState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not read state file, starting from empty state"
                );
                return DstState::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "state file is malformed, starting from empty state"
                );
                DstState::new()
            }
        }
    }

    fn save(&self, state: &DstState) -> Result<()> {
        // The temp file must live in the target directory so the final rename
        // stays on one filesystem.
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut tmp, state).map_err(io::Error::from)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
