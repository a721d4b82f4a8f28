//! Drag-target locator scans.
//!
//! # Responsibility
//! - Resolve drag source and drop target identifiers to owning boards.
//!
//! # Invariants
//! - Read-only linear scans over the collection; no index structures.
//! - A board-id match wins over an item-containment match.

use crate::model::board::{Board, ItemId};
use uuid::Uuid;

/// Finds the board whose items contain `item_id`.
///
/// Resolves the source side of a drag.
pub fn board_containing_item(boards: &[Board], item_id: ItemId) -> Option<&Board> {
    boards.iter().find(|board| board.contains_item(item_id))
}

/// Finds the board identified by `id`, or else the board containing an item
/// with that id.
///
/// Resolves a drop target that may be a board itself (an empty board or a
/// board header) or a sibling item.
pub fn board_for_target(boards: &[Board], id: Uuid) -> Option<&Board> {
    boards
        .iter()
        .find(|board| board.id == id)
        .or_else(|| boards.iter().find(|board| board.contains_item(id)))
}

#[cfg(test)]
mod tests {
    use super::{board_containing_item, board_for_target};
    use crate::model::board::{Board, Item};
    use uuid::Uuid;

    fn sample() -> (Vec<Board>, Item) {
        let mut left = Board::new("Left");
        let item = Item::new("only item");
        left.items.push(item.clone());
        let right = Board::new("Right");
        (vec![left, right], item)
    }

    #[test]
    fn finds_board_by_contained_item() {
        let (boards, item) = sample();
        let owner = board_containing_item(&boards, item.id).expect("owner exists");
        assert_eq!(owner.id, boards[0].id);
        assert!(board_containing_item(&boards, Uuid::new_v4()).is_none());
    }

    #[test]
    fn target_resolution_prefers_board_id() {
        let (boards, item) = sample();
        let by_board = board_for_target(&boards, boards[1].id).expect("board id resolves");
        assert_eq!(by_board.id, boards[1].id);

        let by_item = board_for_target(&boards, item.id).expect("item id resolves");
        assert_eq!(by_item.id, boards[0].id);

        assert!(board_for_target(&boards, Uuid::new_v4()).is_none());
    }
}
