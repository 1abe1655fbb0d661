// Snapshot persistence: one JSON file plays the single durable key

use crate::models::State;
use eyre::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable storage for the whole store state.
///
/// `save` overwrites the full snapshot on every call. That is O(state size)
/// per mutation, which is fine at this scale; an implementation holding large
/// task lists would want something incremental instead.
pub trait Persist {
    /// Read the stored snapshot. `Ok(None)` means the key was never written
    /// or its content is unusable; the caller falls back to a default state.
    fn load(&self) -> Result<Option<State>>;

    /// Overwrite the snapshot with the current state. Failures propagate to
    /// the caller; silent data loss is worse than a visible error here.
    fn save(&self, state: &State) -> Result<()>;
}

/// Snapshot adapter backed by a single JSON file.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persist for JsonFile {
    fn load(&self) -> Result<Option<State>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "No snapshot file, starting from default state");
            return Ok(None);
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = ?self.path, error = ?e, "Failed to read snapshot, falling back to default state");
                return Ok(None);
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                // Corrupt or foreign data must not crash startup
                warn!(path = ?self.path, error = ?e, "Failed to parse snapshot, falling back to default state");
                Ok(None)
            }
        }
    }

    fn save(&self, state: &State) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create snapshot directory")?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .context("Failed to open snapshot file for writing")?;

        // Exclusive lock while writing; released when the file is dropped
        file.lock_exclusive().context("Failed to acquire file lock")?;

        let json = serde_json::to_string(state).context("Failed to serialize state")?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }
}
