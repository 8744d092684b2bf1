use rcalendar::errors::AppError;
use rcalendar::models::{Client, Event};
use rcalendar::store::{
    CLIENTS_KEY, EVENTS_KEY, FileStorage, MemoryStorage, Storage, Store,
};
use std::env;
use std::fs;

mod common;
use common::event;

#[test]
fn test_missing_key_loads_empty_array() {
    let store = Store::in_memory();
    let events: Vec<Event> = store.load_or_default(EVENTS_KEY).unwrap();
    let clients: Vec<Client> = store.load_or_default(CLIENTS_KEY).unwrap();
    assert!(events.is_empty());
    assert!(clients.is_empty());
}

#[test]
fn test_null_and_blank_values_load_default() {
    let mut backend = MemoryStorage::new();
    backend.set_item(CLIENTS_KEY, "null").unwrap();
    backend.set_item(EVENTS_KEY, "   ").unwrap();
    let store = Store::new(backend);

    let clients: Vec<Client> = store.load_or_default(CLIENTS_KEY).unwrap();
    let events: Vec<Event> = store.load_or_default(EVENTS_KEY).unwrap();
    assert!(clients.is_empty());
    assert!(events.is_empty());
}

#[test]
fn test_malformed_json_is_reported_with_key() {
    let mut backend = MemoryStorage::new();
    backend.set_item(CLIENTS_KEY, "[{\"name\": ").unwrap();
    let store = Store::new(backend);

    let err = store.load_or_default::<Vec<Client>>(CLIENTS_KEY).unwrap_err();
    match err {
        AppError::Store { key, .. } => assert_eq!(key, CLIENTS_KEY),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_save_then_load_preserves_order_and_duplicates() {
    let mut store = Store::in_memory();
    let events = vec![
        event("2026-10-15", "09:30", "ACME"),
        event("2026-10-15", "09:30", "ACME"),
        event("2026-10-01", "17:00", "Globex"),
    ];
    store.save(EVENTS_KEY, &events).unwrap();

    let loaded: Vec<Event> = store.load_or_default(EVENTS_KEY).unwrap();
    assert_eq!(loaded, events);
}

#[test]
fn test_persisted_layout_uses_widget_field_names() {
    let mut store = Store::in_memory();
    store
        .save(EVENTS_KEY, &vec![event("2026-10-15", "09:30", "ACME")])
        .unwrap();

    let raw: serde_json::Value = store.load_raw(EVENTS_KEY).unwrap();
    let first = &raw[0];
    assert_eq!(first["date"], "2026-10-15");
    assert_eq!(first["time"], "09:30");
    assert_eq!(first["type"], "Visita Técnica");
    assert_eq!(first["client"], "ACME");
    assert_eq!(first["technician"], "Luis");
}

#[test]
fn test_file_storage_reads_browser_payload() {
    let mut dir = env::temp_dir();
    dir.push("rcalendar_test_file_storage");
    fs::remove_dir_all(&dir).ok();

    let storage = FileStorage::new(&dir);
    assert!(storage.get_item(EVENTS_KEY).unwrap().is_none());

    fs::create_dir_all(&dir).unwrap();
    fs::write(
        storage.path_for(EVENTS_KEY),
        r#"[{"date":"2026-03-02","type":"Instalación","time":"08:15","client":"Initech","address":"Av. Sol 4","technician":"Ana","description":"Router"}]"#,
    )
    .unwrap();

    let store = Store::new(storage);
    let events: Vec<Event> = store.load_or_default(EVENTS_KEY).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, "Instalación");
    assert_eq!(events[0].time_str(), "08:15");
    assert_eq!(events[0].description, "Router");
}

#[test]
fn test_file_storage_creates_directory_on_save() {
    let mut dir = env::temp_dir();
    dir.push("rcalendar_test_file_storage_create");
    fs::remove_dir_all(&dir).ok();

    let mut store = Store::open(dir.join("nested"));
    store
        .save(CLIENTS_KEY, &vec![Client::new("ACME", "555")])
        .unwrap();

    let raw = fs::read_to_string(dir.join("nested").join("clients.json")).unwrap();
    assert!(raw.contains("\"name\": \"ACME\""));
    assert!(raw.contains("\"contact\": \"555\""));
}
