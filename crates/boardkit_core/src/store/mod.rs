//! Snapshot persistence for the board collection.
//!
//! # Responsibility
//! - Persist and reload the whole collection as one JSON document.
//! - Keep file-system and serialization details inside the store boundary.
//!
//! # Invariants
//! - A missing snapshot is not an error: it means first launch.
//! - `save` replaces the previous document wholesale.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod snapshot;

pub use snapshot::{JsonFileStore, MemoryStore, SnapshotStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from snapshot load/save operations.
#[derive(Debug)]
pub enum StoreError {
    /// File-system failure while reading or writing the snapshot.
    Io(std::io::Error),
    /// Snapshot document could not be parsed or serialized.
    Serde(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot io failure: {err}"),
            Self::Serde(err) => write!(f, "invalid snapshot document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
