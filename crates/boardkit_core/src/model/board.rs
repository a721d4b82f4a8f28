//! Board and item records.
//!
//! # Responsibility
//! - Define the canonical shapes persisted in the snapshot document.
//! - Provide constructors that mint stable identifiers.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a board or item and never reused.
//! - `items` order is significant: it is the displayed order.
//! - An item belongs to exactly one board at any time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Stable identifier for one board.
pub type BoardId = Uuid;

/// Single to-do entry belonging to exactly one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable ID used for drag resolution and persistence.
    pub id: ItemId,
    /// User-entered text. Non-blank after trim at the service boundary.
    pub text: String,
}

impl Item {
    /// Creates a new item with a generated stable ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates an item with a caller-provided stable ID.
    ///
    /// Used by load paths where identity already exists in the snapshot.
    pub fn with_id(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Named ordered collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Stable ID used for drag resolution and persistence.
    pub id: BoardId,
    /// User-facing board title.
    pub title: String,
    /// Owned items; insertion order is the displayed order.
    pub items: Vec<Item>,
}

impl Board {
    /// Creates a new empty board with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates an empty board with a caller-provided stable ID.
    pub fn with_id(id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Returns the position of `item_id` within this board, if present.
    pub fn item_index(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    /// Returns whether this board owns an item with `item_id`.
    pub fn contains_item(&self, item_id: ItemId) -> bool {
        self.item_index(item_id).is_some()
    }
}
