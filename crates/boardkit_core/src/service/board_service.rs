//! Board orchestration service.
//!
//! # Responsibility
//! - Own the in-memory board collection and route reorder intents to the
//!   pure move engine.
//! - Apply the drag dispatch policy (hover vs. completion).
//! - Persist committed state through the snapshot store.
//!
//! # Invariants
//! - Titles and item text are non-blank after trim before they reach state.
//! - Hover handling applies cross-board moves only; same-board reordering
//!   waits for drag completion.
//! - `load` never writes back; persisting the empty initial state would
//!   clobber a previously saved snapshot.

use crate::engine::locate::{board_containing_item, board_for_target};
use crate::engine::moves::{move_board, move_item_across_boards, move_item_within_board};
use crate::model::board::{Board, BoardId, Item, ItemId};
use crate::store::{SnapshotStore, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by board orchestration operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Board title is blank after trim.
    BlankTitle,
    /// Item text is blank after trim.
    BlankText,
    /// Addressed board does not exist.
    BoardNotFound(BoardId),
    /// Addressed item does not exist inside the addressed board.
    ItemNotFound(ItemId),
    /// Snapshot store failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "board title must not be blank"),
            Self::BlankText => write!(f, "item text must not be blank"),
            Self::BoardNotFound(id) => write!(f, "board not found: {id}"),
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Orchestrator owning board state on top of a snapshot store.
///
/// Every committed mutation persists the whole collection. Save failures are
/// logged and swallowed: in-memory state stays authoritative for the session.
pub struct BoardService<S: SnapshotStore> {
    store: S,
    boards: Vec<Board>,
}

impl<S: SnapshotStore> BoardService<S> {
    /// Creates a service with empty state; call [`BoardService::load`] to
    /// hydrate from the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            boards: Vec::new(),
        }
    }

    /// Hydrates state from the snapshot store.
    ///
    /// A missing snapshot leaves the collection empty. Never writes back.
    pub fn load(&mut self) -> ServiceResult<()> {
        self.boards = self.store.load()?.unwrap_or_default();
        info!(
            "event=load module=service status=ok board_count={}",
            self.boards.len()
        );
        Ok(())
    }

    /// Read view of the current collection.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Creates a board with a fresh id, a `New Board {n}` placeholder title
    /// and no items. Returns the new board's id.
    pub fn create_board(&mut self) -> BoardId {
        let board = Board::new(format!("New Board {}", self.boards.len() + 1));
        let board_id = board.id;
        self.boards.push(board);
        self.commit("board_created");
        board_id
    }

    /// Renames a board. The title must be non-blank after trim and is stored
    /// trimmed.
    pub fn rename_board(&mut self, board_id: BoardId, title: impl Into<String>) -> ServiceResult<()> {
        let title = normalize_text(title.into()).ok_or(ServiceError::BlankTitle)?;
        let board = self.board_mut(board_id)?;
        board.title = title;
        self.commit("board_renamed");
        Ok(())
    }

    /// Deletes a board and every item it contains.
    pub fn delete_board(&mut self, board_id: BoardId) -> ServiceResult<()> {
        let before = self.boards.len();
        self.boards.retain(|board| board.id != board_id);
        if self.boards.len() == before {
            return Err(ServiceError::BoardNotFound(board_id));
        }
        self.commit("board_deleted");
        Ok(())
    }

    /// Appends an item with a fresh id to a board. The text must be
    /// non-blank after trim and is stored trimmed. Returns the new item's id.
    pub fn add_item(&mut self, board_id: BoardId, text: impl Into<String>) -> ServiceResult<ItemId> {
        let text = normalize_text(text.into()).ok_or(ServiceError::BlankText)?;
        let board = self.board_mut(board_id)?;
        let item = Item::new(text);
        let item_id = item.id;
        board.items.push(item);
        self.commit("item_added");
        Ok(item_id)
    }

    /// Replaces an item's text in place; identity and position are kept.
    pub fn update_item(
        &mut self,
        board_id: BoardId,
        item_id: ItemId,
        text: impl Into<String>,
    ) -> ServiceResult<()> {
        let text = normalize_text(text.into()).ok_or(ServiceError::BlankText)?;
        let board = self.board_mut(board_id)?;
        let item = board
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(ServiceError::ItemNotFound(item_id))?;
        item.text = text;
        self.commit("item_updated");
        Ok(())
    }

    /// Deletes one item from the addressed board.
    pub fn delete_item(&mut self, board_id: BoardId, item_id: ItemId) -> ServiceResult<()> {
        let board = self.board_mut(board_id)?;
        let before = board.items.len();
        board.items.retain(|item| item.id != item_id);
        if board.items.len() == before {
            return Err(ServiceError::ItemNotFound(item_id));
        }
        self.commit("item_deleted");
        Ok(())
    }

    /// Hover-phase drag handler: live preview for cross-board item moves.
    ///
    /// Same-board reordering is deferred to [`BoardService::drag_end`].
    /// Unresolvable ids leave state untouched. Callers are expected to gate
    /// call frequency (see [`crate::service::throttle::ThrottleGate`]).
    pub fn drag_over(&mut self, active_id: ItemId, over_id: Uuid) {
        let Some(source_id) = board_containing_item(&self.boards, active_id).map(|b| b.id) else {
            return;
        };
        let Some(target_id) = board_for_target(&self.boards, over_id).map(|b| b.id) else {
            return;
        };
        if source_id == target_id {
            return;
        }

        self.boards =
            move_item_across_boards(&self.boards, source_id, target_id, active_id, Some(over_id));
        self.commit("drag_hover");
    }

    /// Completion-phase drag handler: classifies the move and commits it.
    ///
    /// `over_id` of `None` means the pointer was released outside any
    /// droppable area; no state change occurs. Both ids naming boards
    /// reorders the collection; equal source and target boards reorders
    /// within that board; anything else is a cross-board item move.
    pub fn drag_end(&mut self, active_id: Uuid, over_id: Option<Uuid>) {
        let Some(over_id) = over_id else {
            return;
        };
        let Some(active_board_id) = board_for_target(&self.boards, active_id).map(|b| b.id) else {
            return;
        };
        let Some(over_board_id) = board_for_target(&self.boards, over_id).map(|b| b.id) else {
            return;
        };

        if active_board_id == active_id && over_board_id == over_id {
            self.boards = move_board(&self.boards, active_id, over_id);
        } else if active_board_id == over_board_id {
            self.boards = move_item_within_board(&self.boards, over_board_id, active_id, over_id);
        } else {
            self.boards = move_item_across_boards(
                &self.boards,
                active_board_id,
                over_board_id,
                active_id,
                Some(over_id),
            );
        }
        self.commit("drag_end");
    }

    fn board_mut(&mut self, board_id: BoardId) -> ServiceResult<&mut Board> {
        self.boards
            .iter_mut()
            .find(|board| board.id == board_id)
            .ok_or(ServiceError::BoardNotFound(board_id))
    }

    fn commit(&mut self, event: &str) {
        info!(
            "event={event} module=service status=ok board_count={}",
            self.boards.len()
        );
        if let Err(err) = self.store.save(&self.boards) {
            // In-memory state stays authoritative for the session.
            error!("event=snapshot_save module=service status=error error={err}");
        }
    }
}

fn normalize_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
