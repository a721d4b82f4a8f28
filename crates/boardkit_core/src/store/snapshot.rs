//! Snapshot store contracts and implementations.
//!
//! # Responsibility
//! - Define the persistence contract used by the orchestrating service.
//! - Provide the file-backed JSON store and an in-memory store for tests.
//!
//! # Invariants
//! - `load` returning `Ok(None)` means no snapshot exists yet.
//! - Implementations never return partially-parsed state.

use super::{StoreError, StoreResult};
use crate::model::board::Board;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// Persistence contract for the board collection snapshot.
pub trait SnapshotStore {
    /// Loads the persisted collection, or `None` when no snapshot exists.
    fn load(&self) -> StoreResult<Option<Vec<Board>>>;
    /// Persists the whole collection, replacing any previous snapshot.
    fn save(&self, boards: &[Board]) -> StoreResult<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn load(&self) -> StoreResult<Option<Vec<Board>>> {
        (**self).load()
    }

    fn save(&self, boards: &[Board]) -> StoreResult<()> {
        (**self).save(boards)
    }
}

/// File-backed JSON snapshot store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing to `path`. Parent directories are created on
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Board>>> {
        let started_at = Instant::now();
        info!("event=snapshot_load module=store status=start mode=file");

        if !self.path.exists() {
            info!(
                "event=snapshot_load module=store status=ok mode=file outcome=empty duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(None);
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=snapshot_load module=store status=error mode=file duration_ms={} error_code=snapshot_read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match serde_json::from_str::<Vec<Board>>(&raw) {
            Ok(boards) => {
                info!(
                    "event=snapshot_load module=store status=ok mode=file outcome=loaded board_count={} duration_ms={}",
                    boards.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Some(boards))
            }
            Err(err) => {
                error!(
                    "event=snapshot_load module=store status=error mode=file duration_ms={} error_code=snapshot_parse_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    fn save(&self, boards: &[Board]) -> StoreResult<()> {
        let started_at = Instant::now();
        info!("event=snapshot_save module=store status=start mode=file");

        let result = write_document(&self.path, boards);
        match &result {
            Ok(()) => info!(
                "event=snapshot_save module=store status=ok mode=file board_count={} duration_ms={}",
                boards.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=snapshot_save module=store status=error mode=file duration_ms={} error_code=snapshot_write_failed error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

fn write_document(path: &Path, boards: &[Board]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let raw = serde_json::to_string(boards)?;
    fs::write(path, raw)?;
    Ok(())
}

/// In-memory snapshot store for tests and smoke integration.
pub struct MemoryStore {
    snapshot: Mutex<Option<Vec<Board>>>,
}

impl MemoryStore {
    /// Creates an empty store: the first `load` reports no snapshot.
    pub fn new() -> Self {
        Self {
            snapshot: Mutex::new(None),
        }
    }

    /// Creates a store pre-seeded with a snapshot, as if previously saved.
    pub fn with_boards(boards: Vec<Board>) -> Self {
        Self {
            snapshot: Mutex::new(Some(boards)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Vec<Board>>> {
        let snapshot = self
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(snapshot.clone())
    }

    fn save(&self, boards: &[Board]) -> StoreResult<()> {
        let mut snapshot = self
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *snapshot = Some(boards.to_vec());
        Ok(())
    }
}
