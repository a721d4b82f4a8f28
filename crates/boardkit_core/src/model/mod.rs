//! Board domain model.
//!
//! # Responsibility
//! - Define the ordered board/item shapes shared by the engine and services.
//!
//! # Invariants
//! - Every board and item carries a stable, never-reused identifier.
//! - Sequence order is the displayed order; only the move engine reorders it.

pub mod board;
