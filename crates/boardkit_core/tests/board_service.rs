use boardkit_core::{
    Board, BoardService, Item, MemoryStore, ServiceError, SnapshotStore, StoreResult,
};
use uuid::Uuid;

fn seeded_store() -> (MemoryStore, Vec<Board>) {
    let mut todo = Board::new("Todo");
    todo.items.push(Item::new("write tests"));
    todo.items.push(Item::new("ship it"));
    let mut doing = Board::new("Doing");
    doing.items.push(Item::new("review"));
    let boards = vec![todo, doing];
    (MemoryStore::with_boards(boards.clone()), boards)
}

#[test]
fn load_hydrates_state_without_writing_back() {
    let store = MemoryStore::new();
    let mut service = BoardService::new(&store);

    service.load().unwrap();

    assert!(service.boards().is_empty());
    // No snapshot may be written during the load phase: an empty initial
    // state must not clobber a previously saved one.
    assert!(store.load().unwrap().is_none());
}

#[test]
fn create_board_uses_counted_placeholder_title_and_persists() {
    let store = MemoryStore::new();
    let mut service = BoardService::new(&store);
    service.load().unwrap();

    let first = service.create_board();
    let second = service.create_board();

    assert_eq!(service.boards()[0].title, "New Board 1");
    assert_eq!(service.boards()[1].title, "New Board 2");
    assert_ne!(first, second);

    let persisted = store.load().unwrap().expect("snapshot saved");
    assert_eq!(persisted.len(), 2);
}

#[test]
fn rename_board_trims_and_rejects_blank_titles() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();

    service.rename_board(boards[0].id, "  Backlog  ").unwrap();
    assert_eq!(service.boards()[0].title, "Backlog");

    let err = service.rename_board(boards[0].id, "   ").unwrap_err();
    assert!(matches!(err, ServiceError::BlankTitle));

    let err = service.rename_board(Uuid::new_v4(), "Elsewhere").unwrap_err();
    assert!(matches!(err, ServiceError::BoardNotFound(_)));
}

#[test]
fn delete_board_cascades_its_items() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();

    service.delete_board(boards[0].id).unwrap();

    assert_eq!(service.boards().len(), 1);
    assert_eq!(service.boards()[0].id, boards[1].id);
    let persisted = store.load().unwrap().expect("snapshot saved");
    assert_eq!(persisted.len(), 1);
}

#[test]
fn item_crud_validates_text_and_addressing() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();
    let board_id = boards[0].id;

    let err = service.add_item(board_id, " \t ").unwrap_err();
    assert!(matches!(err, ServiceError::BlankText));

    let item_id = service.add_item(board_id, "  new entry  ").unwrap();
    let added = &service.boards()[0].items[2];
    assert_eq!(added.id, item_id);
    assert_eq!(added.text, "new entry");

    service.update_item(board_id, item_id, "edited entry").unwrap();
    assert_eq!(service.boards()[0].items[2].text, "edited entry");

    let err = service
        .update_item(board_id, Uuid::new_v4(), "ghost")
        .unwrap_err();
    assert!(matches!(err, ServiceError::ItemNotFound(_)));

    service.delete_item(board_id, item_id).unwrap();
    assert_eq!(service.boards()[0].items.len(), 2);

    let err = service.delete_item(board_id, item_id).unwrap_err();
    assert!(matches!(err, ServiceError::ItemNotFound(_)));
}

#[test]
fn drag_over_applies_cross_board_moves_eagerly() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();
    let active = boards[0].items[0].id;
    let over = boards[1].items[0].id;

    service.drag_over(active, over);

    assert_eq!(service.boards()[0].items.len(), 1);
    let target_texts: Vec<&str> = service.boards()[1]
        .items
        .iter()
        .map(|item| item.text.as_str())
        .collect();
    assert_eq!(target_texts, vec!["write tests", "review"]);
}

#[test]
fn drag_over_defers_same_board_reordering() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();
    let active = boards[0].items[0].id;
    let over = boards[0].items[1].id;

    service.drag_over(active, over);

    // Same-board hover is a deliberate no-op; reordering waits for drag end.
    assert_eq!(service.boards(), &boards[..]);
}

#[test]
fn drag_over_with_unresolvable_ids_is_noop() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();

    service.drag_over(Uuid::new_v4(), boards[1].id);
    service.drag_over(boards[0].items[0].id, Uuid::new_v4());

    assert_eq!(service.boards(), &boards[..]);
}

#[test]
fn drag_end_classifies_board_reorder() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();

    service.drag_end(boards[0].id, Some(boards[1].id));

    assert_eq!(service.boards()[0].id, boards[1].id);
    assert_eq!(service.boards()[1].id, boards[0].id);
}

#[test]
fn drag_end_classifies_within_board_move() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();
    let active = boards[0].items[0].id;
    let over = boards[0].items[1].id;

    service.drag_end(active, Some(over));

    let texts: Vec<&str> = service.boards()[0]
        .items
        .iter()
        .map(|item| item.text.as_str())
        .collect();
    assert_eq!(texts, vec!["ship it", "write tests"]);
}

#[test]
fn drag_end_classifies_cross_board_move() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();
    let active = boards[1].items[0].id;
    let over = boards[0].items[1].id;

    service.drag_end(active, Some(over));

    assert!(service.boards()[1].items.is_empty());
    let texts: Vec<&str> = service.boards()[0]
        .items
        .iter()
        .map(|item| item.text.as_str())
        .collect();
    assert_eq!(texts, vec!["write tests", "review", "ship it"]);
}

#[test]
fn drag_end_without_target_changes_nothing() {
    let (store, boards) = seeded_store();
    let mut service = BoardService::new(&store);
    service.load().unwrap();

    service.drag_end(boards[0].items[0].id, None);

    assert_eq!(service.boards(), &boards[..]);
    // Nothing was committed either.
    assert_eq!(store.load().unwrap().expect("seed snapshot"), boards);
}

#[test]
fn save_failures_leave_in_memory_state_authoritative() {
    struct SaveFailStore;

    impl SnapshotStore for SaveFailStore {
        fn load(&self) -> StoreResult<Option<Vec<Board>>> {
            Ok(None)
        }

        fn save(&self, _boards: &[Board]) -> StoreResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    let mut service = BoardService::new(SaveFailStore);
    service.load().unwrap();

    let board_id = service.create_board();
    service.add_item(board_id, "kept despite save failure").unwrap();

    assert_eq!(service.boards().len(), 1);
    assert_eq!(service.boards()[0].items.len(), 1);
}
