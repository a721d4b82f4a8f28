use boardkit_core::{Board, Item, JsonFileStore, SnapshotStore, StoreError};

fn sample_boards() -> Vec<Board> {
    let mut todo = Board::new("Todo");
    todo.items.push(Item::new("buy milk"));
    todo.items.push(Item::new("call back"));
    let done = Board::new("Done");
    vec![todo, done]
}

#[test]
fn missing_snapshot_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("boards.json"));

    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips_the_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("boards.json"));
    let boards = sample_boards();

    store.save(&boards).unwrap();
    let loaded = store.load().unwrap().expect("snapshot exists");

    assert_eq!(loaded, boards);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested/state/boards.json"));

    store.save(&sample_boards()).unwrap();

    assert!(store.path().exists());
    assert!(store.load().unwrap().is_some());
}

#[test]
fn save_replaces_the_previous_snapshot_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("boards.json"));

    store.save(&sample_boards()).unwrap();
    let smaller = vec![Board::new("Only board")];
    store.save(&smaller).unwrap();

    assert_eq!(store.load().unwrap().expect("snapshot exists"), smaller);
}

#[test]
fn corrupt_snapshot_surfaces_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boards.json");
    std::fs::write(&path, "{ not json ").unwrap();
    let store = JsonFileStore::new(path);

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Serde(_)));
}

#[test]
fn snapshot_document_shape_matches_the_data_model() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("boards.json"));
    let boards = sample_boards();

    store.save(&boards).unwrap();
    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let first = &value[0];
    assert!(first["id"].is_string());
    assert!(first["title"].is_string());
    assert_eq!(first["items"][0]["text"], "buy milk");
}
