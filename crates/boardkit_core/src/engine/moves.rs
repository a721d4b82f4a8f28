//! Move policies over the whole board collection.
//!
//! # Responsibility
//! - Apply the three reorder policies: cross-board item move, within-board
//!   item move, and board reorder.
//!
//! # Invariants
//! - Every policy returns a new collection; inputs are never mutated.
//! - Unresolvable operands degrade to an unchanged collection, never to a
//!   dropped or duplicated item.
//! - Boards not named by a move are carried over verbatim.

use crate::engine::sequence::{insert_at, move_within, remove_at};
use crate::model::board::{Board, BoardId, ItemId};
use log::warn;

/// Moves `active_id` out of the `source_id` board and into the `target_id`
/// board.
///
/// The item lands at `over_id`'s position inside the target when that id
/// names an item of the target board; otherwise at position 0 (dropping onto
/// the board itself, e.g. an empty board). `over_id` of `None` is the
/// explicit no-target sentinel and also lands at position 0.
///
/// Callers route same-board moves to [`move_item_within_board`]; equal
/// source and target here is a contract violation and leaves the collection
/// unchanged.
pub fn move_item_across_boards(
    boards: &[Board],
    source_id: BoardId,
    target_id: BoardId,
    active_id: ItemId,
    over_id: Option<ItemId>,
) -> Vec<Board> {
    if source_id == target_id {
        warn!("event=move_item module=engine status=noop reason=same_board board_id={source_id}");
        return boards.to_vec();
    }
    if !boards.iter().any(|board| board.id == target_id) {
        warn!("event=move_item module=engine status=noop reason=target_missing board_id={target_id}");
        return boards.to_vec();
    }

    let moved = boards
        .iter()
        .find(|board| board.id == source_id)
        .and_then(|board| {
            board
                .item_index(active_id)
                .map(|index| (index, board.items[index].clone()))
        });
    let Some((active_index, moved)) = moved else {
        warn!("event=move_item module=engine status=noop reason=active_missing item_id={active_id}");
        return boards.to_vec();
    };

    boards
        .iter()
        .map(|board| {
            if board.id == source_id {
                let mut next = board.clone();
                next.items = remove_at(&board.items, active_index);
                next
            } else if board.id == target_id {
                let insert_index = over_id.and_then(|id| board.item_index(id)).unwrap_or(0);
                let mut next = board.clone();
                next.items = insert_at(&board.items, insert_index, moved.clone());
                next
            } else {
                board.clone()
            }
        })
        .collect()
}

/// Reorders `active_id` relative to `over_id` inside one board.
///
/// Either id missing from the addressed board leaves its sequence unchanged.
pub fn move_item_within_board(
    boards: &[Board],
    board_id: BoardId,
    active_id: ItemId,
    over_id: ItemId,
) -> Vec<Board> {
    boards
        .iter()
        .map(|board| {
            if board.id != board_id {
                return board.clone();
            }
            let mut next = board.clone();
            if let (Some(from), Some(to)) = (board.item_index(active_id), board.item_index(over_id))
            {
                next.items = move_within(&board.items, from, to);
            }
            next
        })
        .collect()
}

/// Reorders the board collection itself; item contents are untouched.
pub fn move_board(boards: &[Board], active_id: BoardId, over_id: BoardId) -> Vec<Board> {
    let from = boards.iter().position(|board| board.id == active_id);
    let to = boards.iter().position(|board| board.id == over_id);
    match (from, to) {
        (Some(from), Some(to)) => move_within(boards, from, to),
        _ => {
            warn!("event=move_board module=engine status=noop reason=board_missing");
            boards.to_vec()
        }
    }
}
