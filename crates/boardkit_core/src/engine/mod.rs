//! Pure move engine for board and item reordering.
//!
//! # Responsibility
//! - Transform the board collection in response to reorder intents.
//! - Stay free of I/O and shared state; callers own persistence and render.
//!
//! # Invariants
//! - No function mutates its input; new collections are returned.
//! - A move never drops or duplicates an item.

pub mod locate;
pub mod moves;
pub mod sequence;
