//! Core domain logic for BoardKit.
//! This crate is the single source of truth for board ordering invariants.

pub mod engine;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use engine::locate::{board_containing_item, board_for_target};
pub use engine::moves::{move_board, move_item_across_boards, move_item_within_board};
pub use engine::sequence::{insert_at, move_within, remove_at};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, BoardId, Item, ItemId};
pub use service::board_service::{BoardService, ServiceError, ServiceResult};
pub use service::throttle::{ThrottleGate, DEFAULT_HOVER_INTERVAL};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
