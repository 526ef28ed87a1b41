//! Settings persistence through the SQLite store.

use runlog_core::{
    columns::{Column, ColumnVisibility},
    selection::{PersistedSelection, Selection},
    store::SettingsStore,
    types::Platform,
};

fn store() -> SettingsStore {
    let store = SettingsStore::in_memory().unwrap();
    store.migrate().unwrap();
    store
}

#[test]
fn migrate_is_idempotent() {
    let store = store();
    store.migrate().unwrap();
    assert_eq!(store.get("ad-platform").unwrap(), None);
}

#[test]
fn set_overwrites_and_stamps() {
    let store = store();
    store.set("ad-galaxy", "1").unwrap();
    store.set("ad-galaxy", "2").unwrap();
    assert_eq!(store.get("ad-galaxy").unwrap().as_deref(), Some("2"));

    let stamp = store.updated_at("ad-galaxy").unwrap().expect("timestamp");
    assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok(), "bad stamp {stamp}");
}

#[test]
fn selection_round_trip() {
    let store = store();
    let strategies = vec!["Optimized".to_string(), "T12345678".to_string()];
    let mut selection = Selection::restore(&PersistedSelection::default(), &strategies, "Optimized");
    selection.platform = Platform::Mobile;
    selection.galaxy = 1;
    selection.dimboost = 11;
    selection.sacrifice = false;
    selection.strategy = "T12345678".into();

    store.save_selection(&selection).unwrap();
    let persisted = store.load_selection().unwrap();
    assert_eq!(persisted.dimboost.as_deref(), Some("11"));
    assert_eq!(persisted.sacrifice.as_deref(), Some("false"));

    let restored = Selection::restore(&persisted, &strategies, "Optimized");
    assert_eq!(restored, selection);
}

#[test]
fn column_toggles_round_trip() {
    let store = store();
    let mut columns = ColumnVisibility::default();
    columns.toggle(Column::CostAmount);
    columns.toggle(Column::Index);
    store.save_columns(&columns).unwrap();

    assert_eq!(store.get("toggle-cost-amount").unwrap().as_deref(), Some("false"));
    assert_eq!(store.get("toggle-time").unwrap().as_deref(), Some("true"));
    assert_eq!(store.load_columns(), columns);
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.db");
    let path = path.to_str().unwrap();

    {
        let store = SettingsStore::open(path).unwrap();
        store.migrate().unwrap();
        store.set("ad-strategy", "T12345678").unwrap();
    }

    let store = SettingsStore::open(path).unwrap();
    store.migrate().unwrap();
    assert_eq!(store.get("ad-strategy").unwrap().as_deref(), Some("T12345678"));
}
