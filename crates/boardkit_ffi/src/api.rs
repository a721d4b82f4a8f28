//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level board operations to the UI shell via FRB.
//! - Gate hover-phase drag events behind the process-wide throttle.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call rebuilds service state from the configured snapshot file, so
//!   the snapshot is the single source of truth between calls.

use boardkit_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardService, JsonFileStore, ServiceError, ThrottleGate,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};
use uuid::Uuid;

const STORE_FILE_NAME: &str = "boardkit_boards.json";
static STORE_PATH: OnceLock<PathBuf> = OnceLock::new();
static HOVER_GATE: Mutex<Option<ThrottleGate>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Item projection returned to the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Stable item ID in string form.
    pub id: String,
    /// Item text.
    pub text: String,
}

/// Board projection returned to the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Stable board ID in string form.
    pub id: String,
    /// Board title.
    pub title: String,
    /// Items in displayed order.
    pub items: Vec<ItemView>,
}

/// Whole-collection response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardListResponse {
    /// Whether the collection could be read.
    pub ok: bool,
    /// Boards in displayed order (empty on failure or first launch).
    pub boards: Vec<BoardView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for board/item command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional created/affected entity ID.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Lists the whole board collection in displayed order.
///
/// # FFI contract
/// - Sync call, snapshot-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_boards() -> BoardListResponse {
    match with_service(|service| Ok(service.boards().to_vec())) {
        Ok(boards) => BoardListResponse {
            ok: true,
            message: format!("{} board(s).", boards.len()),
            boards: boards.into_iter().map(to_board_view).collect(),
        },
        Err(err) => BoardListResponse {
            ok: false,
            boards: Vec::new(),
            message: format!("list_boards failed: {err}"),
        },
    }
}

/// Creates a board with a placeholder title.
///
/// # FFI contract
/// - Sync call, snapshot-backed execution.
/// - Never panics.
/// - Returns the created board ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn create_board() -> ActionResponse {
    match with_service(|service| Ok(service.create_board())) {
        Ok(board_id) => ActionResponse::success("Board created.", Some(board_id.to_string())),
        Err(err) => ActionResponse::failure(format!("create_board failed: {err}")),
    }
}

/// Renames a board. The title must be non-blank after trim.
#[flutter_rust_bridge::frb(sync)]
pub fn rename_board(board_id: String, title: String) -> ActionResponse {
    let board_id = match parse_id(&board_id, "board_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    match with_service(|service| service.rename_board(board_id, title.clone())) {
        Ok(()) => ActionResponse::success("Board renamed.", Some(board_id.to_string())),
        Err(err) => ActionResponse::failure(format!("rename_board failed: {err}")),
    }
}

/// Deletes a board and every item it contains.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_board(board_id: String) -> ActionResponse {
    let board_id = match parse_id(&board_id, "board_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    match with_service(|service| service.delete_board(board_id)) {
        Ok(()) => ActionResponse::success("Board deleted.", Some(board_id.to_string())),
        Err(err) => ActionResponse::failure(format!("delete_board failed: {err}")),
    }
}

/// Adds an item to a board. The text must be non-blank after trim.
///
/// # FFI contract
/// - Sync call, snapshot-backed execution.
/// - Never panics.
/// - Returns the created item ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_item(board_id: String, text: String) -> ActionResponse {
    let board_id = match parse_id(&board_id, "board_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    match with_service(|service| service.add_item(board_id, text.clone())) {
        Ok(item_id) => ActionResponse::success("Item added.", Some(item_id.to_string())),
        Err(err) => ActionResponse::failure(format!("add_item failed: {err}")),
    }
}

/// Replaces an item's text.
#[flutter_rust_bridge::frb(sync)]
pub fn update_item(board_id: String, item_id: String, text: String) -> ActionResponse {
    let board_id = match parse_id(&board_id, "board_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    let item_id = match parse_id(&item_id, "item_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    match with_service(|service| service.update_item(board_id, item_id, text.clone())) {
        Ok(()) => ActionResponse::success("Item updated.", Some(item_id.to_string())),
        Err(err) => ActionResponse::failure(format!("update_item failed: {err}")),
    }
}

/// Deletes one item from a board.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_item(board_id: String, item_id: String) -> ActionResponse {
    let board_id = match parse_id(&board_id, "board_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    let item_id = match parse_id(&item_id, "item_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    match with_service(|service| service.delete_item(board_id, item_id)) {
        Ok(()) => ActionResponse::success("Item deleted.", Some(item_id.to_string())),
        Err(err) => ActionResponse::failure(format!("delete_item failed: {err}")),
    }
}

/// Hover-phase drag notification for live cross-board preview.
///
/// The UI fires these continuously while the pointer moves; events arriving
/// faster than the hover interval are dropped here.
///
/// # FFI contract
/// - Sync call, snapshot-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_over(active_id: String, over_id: String) -> ActionResponse {
    if !hover_gate_accepts() {
        return ActionResponse::success("Hover event dropped by throttle.", None);
    }

    let active_id = match parse_id(&active_id, "active_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    let over_id = match parse_id(&over_id, "over_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };

    match with_service(|service| {
        service.drag_over(active_id, over_id);
        Ok(())
    }) {
        Ok(()) => ActionResponse::success("Hover applied.", None),
        Err(err) => ActionResponse::failure(format!("drag_over failed: {err}")),
    }
}

/// Completion-phase drag notification committing the move.
///
/// `over_id` of `None` means the pointer was released outside any droppable
/// area; the call is a no-op then.
///
/// # FFI contract
/// - Sync call, snapshot-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_end(active_id: String, over_id: Option<String>) -> ActionResponse {
    let active_id = match parse_id(&active_id, "active_id") {
        Ok(id) => id,
        Err(message) => return ActionResponse::failure(message),
    };
    let over_id = match over_id {
        Some(raw) => match parse_id(&raw, "over_id") {
            Ok(id) => Some(id),
            Err(message) => return ActionResponse::failure(message),
        },
        None => None,
    };

    match with_service(|service| {
        service.drag_end(active_id, over_id);
        Ok(())
    }) {
        Ok(()) => ActionResponse::success("Drag committed.", None),
        Err(err) => ActionResponse::failure(format!("drag_end failed: {err}")),
    }
}

fn hover_gate_accepts() -> bool {
    let mut gate = HOVER_GATE.lock().unwrap_or_else(PoisonError::into_inner);
    gate.get_or_insert_with(ThrottleGate::default).try_accept()
}

fn resolve_store_path() -> PathBuf {
    STORE_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("BOARDKIT_STORE_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_FILE_NAME)
        })
        .clone()
}

fn with_service<T>(
    op: impl FnOnce(&mut BoardService<JsonFileStore>) -> Result<T, ServiceError>,
) -> Result<T, String> {
    let mut service = BoardService::new(JsonFileStore::new(resolve_store_path()));
    if let Err(err) = service.load() {
        // A broken snapshot must not brick the UI; continue with empty state
        // and leave the in-memory session authoritative.
        log::error!("event=snapshot_load module=ffi status=error error={err}");
    }
    op(&mut service).map_err(|err| err.to_string())
}

fn parse_id(value: &str, field: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid {field}: `{value}`"))
}

fn to_board_view(board: boardkit_core::Board) -> BoardView {
    BoardView {
        id: board.id.to_string(),
        title: board.title,
        items: board
            .items
            .into_iter()
            .map(|item| ItemView {
                id: item.id.to_string(),
                text: item.text,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        add_item, core_version, create_board, delete_board, drag_end, init_logging, list_boards,
        ping, rename_board,
    };
    use std::sync::Mutex;

    // The FFI surface shares one snapshot file per process; state-touching
    // tests run under this lock to keep load/save cycles whole.
    static STATE_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/boardkit-logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn malformed_ids_produce_failure_envelopes() {
        let response = rename_board("not-a-uuid".to_string(), "Title".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("board_id"));

        let response = drag_end("also-not-a-uuid".to_string(), None);
        assert!(!response.ok);
    }

    #[test]
    fn board_lifecycle_round_trips_through_the_snapshot() {
        let _guard = STATE_LOCK.lock().unwrap();

        let created = create_board();
        assert!(created.ok, "{}", created.message);
        let board_id = created.id.clone().expect("created board id");

        let renamed = rename_board(board_id.clone(), "FFI lifecycle".to_string());
        assert!(renamed.ok, "{}", renamed.message);

        let added = add_item(board_id.clone(), "first entry".to_string());
        assert!(added.ok, "{}", added.message);

        let listing = list_boards();
        assert!(listing.ok, "{}", listing.message);
        let board = listing
            .boards
            .iter()
            .find(|board| board.id == board_id)
            .expect("created board should be listed");
        assert_eq!(board.title, "FFI lifecycle");
        assert_eq!(board.items.len(), 1);
        assert_eq!(board.items[0].text, "first entry");

        let deleted = delete_board(board_id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        let listing = list_boards();
        assert!(listing.boards.iter().all(|board| board.id != board_id));
    }

    #[test]
    fn blank_item_text_is_rejected_at_the_boundary() {
        let _guard = STATE_LOCK.lock().unwrap();

        let created = create_board();
        assert!(created.ok, "{}", created.message);
        let board_id = created.id.clone().expect("created board id");

        let added = add_item(board_id.clone(), "   ".to_string());
        assert!(!added.ok);
        assert!(added.message.contains("blank"));

        let _ = delete_board(board_id);
    }
}
