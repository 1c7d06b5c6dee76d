use std::fs;

use calc_core::buttons::resolve;
use calc_core::storage::{FileStore, KeyValueStore};
use calc_core::{Calculator, HistoryEntry, HistoryLedger, HISTORY_KEY, MAX_ENTRIES};
use tempfile::tempdir;

fn press_all(calc: &mut Calculator<FileStore>, keys: &[&str]) {
    for key in keys {
        calc.press(resolve(key).expect("key should exist"));
    }
}

#[test]
fn test_history_persists_across_sessions() {
    let dir = tempdir().expect("tempdir should be created");

    let mut calc = Calculator::new(FileStore::new(dir.path()));
    press_all(&mut calc, &["0", ".", "1", "+", "0", ".", "2", "="]);
    calc.clear_all();
    press_all(&mut calc, &["1", "0", "0", "LOG"]);
    drop(calc);

    let reopened = Calculator::new(FileStore::new(dir.path()));
    assert_eq!(
        reopened.history(),
        &[
            HistoryEntry::new("log(100)", "2"),
            HistoryEntry::new("0.1+0.2", "0.3"),
        ]
    );
}

#[test]
fn test_stored_file_is_json_array() {
    let dir = tempdir().expect("tempdir should be created");
    let mut calc = Calculator::new(FileStore::new(dir.path()));
    press_all(&mut calc, &["2", "+", "2", "="]);

    let path = FileStore::new(dir.path())
        .path_for(HISTORY_KEY)
        .expect("key should be valid");
    let raw = fs::read_to_string(path).expect("history file should exist");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(
        value,
        serde_json::json!([{ "expression": "2+2", "result": "4" }])
    );
}

#[test]
fn test_clear_history_removes_file() {
    let dir = tempdir().expect("tempdir should be created");
    let mut calc = Calculator::new(FileStore::new(dir.path()));
    press_all(&mut calc, &["5", "÷", "0", "="]);
    calc.clear_history();

    let store = FileStore::new(dir.path());
    assert_eq!(store.load(HISTORY_KEY).expect("load should succeed"), None);
    assert!(Calculator::new(store).history().is_empty());
}

#[test]
fn test_corrupt_file_starts_empty_and_recovers() {
    let dir = tempdir().expect("tempdir should be created");
    let mut store = FileStore::new(dir.path());
    store
        .save(HISTORY_KEY, b"\x00\x01 definitely not json")
        .expect("save should succeed");

    let mut ledger = HistoryLedger::load(store);
    assert!(ledger.is_empty());

    ledger.append(HistoryEntry::new("1+1", "2"));
    let reloaded = HistoryLedger::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.entries(), &[HistoryEntry::new("1+1", "2")]);
}

#[test]
fn test_bound_holds_on_disk() {
    let dir = tempdir().expect("tempdir should be created");
    let mut ledger = HistoryLedger::load(FileStore::new(dir.path()));
    for n in 0..(MAX_ENTRIES + 5) {
        ledger.append(HistoryEntry::new(format!("{}", n), format!("{}", n)));
    }

    let reloaded = HistoryLedger::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.len(), MAX_ENTRIES);
    assert_eq!(reloaded.get(0), Some(&HistoryEntry::new("54", "54")));
    assert_eq!(
        reloaded.get(MAX_ENTRIES - 1),
        Some(&HistoryEntry::new("5", "5"))
    );
}
