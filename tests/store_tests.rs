//! Integration tests for the SQLite-backed store.
//!
//! These verify the persisted key layout and the save/load round-trip across
//! store reopens, which is what survives a process restart.

use chrono::{TimeZone, Utc};
use grato::journal_core::Entry;
use grato::store::{SqliteStore, StorageService, StringStore, Theme};
use tempfile::TempDir;

fn entry(id: i64, text: &str, reflection: &str) -> Entry {
    Entry {
        id,
        date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + chrono::Duration::milliseconds(id),
        text: text.to_string(),
        reflection: reflection.to_string(),
    }
}

#[test]
fn test_round_trip_for_various_list_sizes() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let store = SqliteStore::open(&temp_dir.path().join("grato.db")).expect("open store");
    let mut service = StorageService::new(store);

    for size in [0usize, 1, 2, 7] {
        let entries: Vec<Entry> = (0..size as i64)
            .map(|i| entry(1000 + i, &format!("texto {}", i), &format!("reflexão {}", i)))
            .collect();

        service.save_entries("alice", &entries);
        assert_eq!(service.load_entries("alice"), entries, "size {}", size);
    }
}

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db_path = temp_dir.path().join("grato.db");

    {
        let store = SqliteStore::open(&db_path).expect("open store");
        let mut service = StorageService::new(store);
        service.set_current_user("alice");
        service.set_theme(Theme::Dark);
        service.save_entries("alice", &[entry(1, "persistida", "fica")]);
    }

    let store = SqliteStore::open(&db_path).expect("reopen store");
    let service = StorageService::new(store);
    assert_eq!(service.current_user(), Some("alice".to_string()));
    assert_eq!(service.theme(Theme::Light), Theme::Dark);

    let entries = service.load_entries("alice");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "persistida");
    assert_eq!(entries[0].reflection, "fica");
}

#[test]
fn test_save_overwrites_previous_list() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let store = SqliteStore::open(&temp_dir.path().join("grato.db")).expect("open store");
    let mut service = StorageService::new(store);

    service.save_entries("alice", &[entry(1, "velha", "r"), entry(2, "também velha", "r")]);
    service.save_entries("alice", &[entry(3, "nova", "r")]);

    let entries = service.load_entries("alice");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "nova");
}

#[test]
fn test_key_layout_matches_contract() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut store = SqliteStore::open(&temp_dir.path().join("grato.db")).expect("open store");

    {
        let mut service = StorageService::new(&mut store);
        service.set_current_user("alice");
        service.set_theme(Theme::Light);
        service.save_entries("alice", &[entry(5, "texto", "reflexão")]);
    }

    assert_eq!(store.get("currentUser").unwrap(), Some("alice".to_string()));
    assert_eq!(store.get("theme").unwrap(), Some("light".to_string()));

    let raw = store.get("entries:alice").unwrap().expect("entries stored");
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["id"], 5);
    assert_eq!(parsed[0]["text"], "texto");
    assert_eq!(parsed[0]["reflection"], "reflexão");
    assert!(parsed[0]["date"].is_string());
}

#[test]
fn test_corrupt_value_reads_as_no_entries() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut store = SqliteStore::open(&temp_dir.path().join("grato.db")).expect("open store");
    store.set("entries:alice", "{broken json").unwrap();

    let service = StorageService::new(store);
    assert!(service.load_entries("alice").is_empty());
}

#[test]
fn test_data_directory_is_created() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let nested = temp_dir.path().join("deep").join("nested").join("grato.db");

    let _store = SqliteStore::open(&nested).expect("open store in missing dir");
    assert!(nested.parent().unwrap().exists());
}
