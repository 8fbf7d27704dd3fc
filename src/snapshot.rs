//! Snapshot Store
//!
//! Whole-collection JSON snapshots on disk.
//!
//! ## Responsibilities
//! - Persist a full collection under `{data_dir}/{kind}.json`
//! - Replace the entire snapshot on every save (no partial/append writes)
//! - Bootstrap the data directory on first save
//! - Signal "missing" and "unreadable" distinctly, so the resolution engine
//!   knows when to fall back to the origin
//!
//! Saves go through a temp file and an atomic rename so a crash mid-write
//! never leaves a truncated snapshot behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, StrataError};
use crate::model::RecordKind;

/// Reads and writes collection snapshots under a root directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Create a snapshot store rooted at the given directory
    ///
    /// The directory itself is created lazily on the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the snapshot file for a kind
    pub fn path(&self, kind: RecordKind) -> PathBuf {
        self.root.join(kind.snapshot_name())
    }

    /// Serialize and persist a full collection, replacing any prior snapshot
    pub fn save<T: Serialize>(&self, kind: RecordKind, records: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec(records)
            .map_err(|e| StrataError::Persistence(format!("serialize {kind} snapshot: {e}")))?;

        fs::create_dir_all(&self.root).map_err(|e| {
            StrataError::Persistence(format!("create {}: {e}", self.root.display()))
        })?;

        let path = self.path(kind);
        let tmp = path.with_extension("json.tmp");

        self.write_file(&tmp, &bytes)
            .map_err(|e| StrataError::Persistence(format!("write {}: {e}", tmp.display())))?;

        fs::rename(&tmp, &path)
            .map_err(|e| StrataError::Persistence(format!("rename into {}: {e}", path.display())))
    }

    /// Load the raw stored bytes for a kind
    ///
    /// Returns:
    /// - `Ok(bytes)` — snapshot exists and was read
    /// - `Err(SnapshotMissing)` — no snapshot yet (first run)
    /// - `Err(Persistence)` — snapshot exists but could not be read
    pub fn load(&self, kind: RecordKind) -> Result<Vec<u8>> {
        match fs::read(self.path(kind)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StrataError::SnapshotMissing { kind })
            }
            Err(e) => Err(StrataError::Persistence(format!(
                "read {}: {e}",
                self.path(kind).display()
            ))),
        }
    }

    /// Write bytes and flush them to disk before the rename makes them live
    fn write_file(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }
}
