use bob::models::{Task, TaskList};
use bob::storage::{Storage, StorageError};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use tempfile::TempDir;

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn mixed_tasks() -> TaskList {
    let mut done_todo = Task::todo("buy milk");
    done_todo.mark();
    TaskList::from(vec![
        done_todo,
        Task::deadline("report", dt(2025, 12, 31, 23, 59)),
        Task::event("trip", dt(2025, 3, 5, 10, 0), dt(2025, 3, 6, 0, 0)),
    ])
}

#[test]
fn test_load_creates_missing_file_and_parents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data").join("bob.txt");
    let storage = Storage::new(&path);

    let tasks = storage.load().unwrap();
    assert!(tasks.is_empty());
    assert!(path.exists());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("bob.txt"));

    let tasks = mixed_tasks();
    storage.save(&tasks).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded, tasks);
}

#[test]
fn test_save_load_save_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("bob.txt"));

    let tasks = mixed_tasks();
    storage.save(&tasks).unwrap();
    let first = fs::read_to_string(storage.path()).unwrap();

    let loaded = storage.load().unwrap();
    storage.save(&loaded).unwrap();
    let second = fs::read_to_string(storage.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(storage.load().unwrap(), tasks);
}

#[test]
fn test_file_order_matches_list_order() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("bob.txt"));

    storage.save(&mixed_tasks()).unwrap();
    let contents = fs::read_to_string(storage.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("T1"));
    assert!(lines[1].starts_with("D0"));
    assert!(lines[2].starts_with("E0"));
    assert!(contents.ends_with('\n'));
}

#[test]
fn test_corrupted_line_reports_line_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bob.txt");
    fs::write(&path, "T0buy milk\ngarbage\nT0call home\n").unwrap();

    let storage = Storage::new(&path);
    match storage.load() {
        Err(StorageError::Corrupted { line }) => assert_eq!(line, 2),
        other => panic!("expected Corrupted, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_no_partial_recovery_on_corruption() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bob.txt");
    // First line is already bad; nothing from the file survives.
    fs::write(&path, "D00010abc311220252359\nT0call home\n").unwrap();

    let storage = Storage::new(&path);
    assert!(matches!(
        storage.load(),
        Err(StorageError::Corrupted { line: 1 })
    ));
}

#[test]
fn test_save_overwrites_previous_contents() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("bob.txt"));

    storage.save(&mixed_tasks()).unwrap();
    let shorter = TaskList::from(vec![Task::todo("only one")]);
    storage.save(&shorter).unwrap();

    assert_eq!(
        fs::read_to_string(storage.path()).unwrap(),
        "T0only one\n"
    );
}
