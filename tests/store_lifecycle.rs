//! Integration tests driving the task store through its public API
//!
//! These cover the full create/edit/toggle/search/delete lifecycle across
//! store reopens, the way a front end would use it.

use tick::task::{Priority, StoreError, TaskStore};

fn tasks_file(temp: &tempfile::TempDir) -> std::path::PathBuf {
    temp.path().join("tasks.json")
}

#[test]
fn test_full_lifecycle_across_reopens() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = tasks_file(&temp);

    {
        let mut store = TaskStore::open(&path).unwrap();
        store
            .create("Buy milk", "2024-01-15", Some(Priority::High))
            .unwrap();
        store.create("Call mom", "2024-01-16", None).unwrap();
        store.create("Water plants", "2024-01-20", None).unwrap();

        store.toggle(2).unwrap();
        store
            .edit(3, Some("Water the plants"), Some("2024-01-21"), Some("low"))
            .unwrap();
        store.delete(1).unwrap();
    }

    let store = TaskStore::open(&path).unwrap();
    let tasks = store.tasks();

    assert_eq!(tasks.len(), 2);

    assert_eq!(tasks[0].id, 2);
    assert_eq!(tasks[0].title, "Call mom");
    assert!(tasks[0].completed);

    assert_eq!(tasks[1].id, 3);
    assert_eq!(tasks[1].title, "Water the plants");
    assert_eq!(tasks[1].due_date.to_string(), "2024-01-21");
    assert_eq!(tasks[1].priority, Priority::Low);
    assert!(!tasks[1].completed);
}

#[test]
fn test_search_sees_only_current_collection() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut store = TaskStore::open(tasks_file(&temp)).unwrap();

    store.create("Buy milk", "2024-01-15", None).unwrap();
    store.create("Buy bread", "2024-01-16", None).unwrap();
    store.create("Call mom", "2024-01-17", None).unwrap();
    store.delete(1).unwrap();

    let results = store.search("buy").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Buy bread");
}

#[test]
fn test_corrupt_file_is_surfaced_not_recovered() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = tasks_file(&temp);
    std::fs::write(&path, "not json at all").unwrap();

    match TaskStore::open(&path) {
        Err(StoreError::Parse(_)) => {}
        other => panic!("expected parse error, got {:?}", other.map(|_| ())),
    }

    // The corrupt file is left in place for the caller to inspect.
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "not json at all"
    );
}

#[test]
fn test_persisted_format_matches_original_shape() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut store = TaskStore::open(&path).unwrap();
    store
        .create("Buy milk", "2024-01-15", Some(Priority::High))
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(
        parsed,
        serde_json::json!([{
            "id": 1,
            "title": "Buy milk",
            "due_date": "2024-01-15",
            "priority": 1,
            "completed": false
        }])
    );
}

#[test]
fn test_ids_strictly_increase_across_reopens() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = tasks_file(&temp);

    let mut ids = Vec::new();
    for batch in 0..3 {
        let mut store = TaskStore::open(&path).unwrap();
        for i in 0..4 {
            let task = store
                .create(
                    &format!("Task {batch}-{i}"),
                    "2024-06-01",
                    None,
                )
                .unwrap();
            ids.push(task.id);
        }
    }

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, ids, "ids must be unique and strictly increasing");
}
