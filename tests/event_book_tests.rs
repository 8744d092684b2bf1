use chrono::NaiveDate;
use rcalendar::config::Locale;
use rcalendar::core::events::EventBook;
use rcalendar::errors::AppError;
use rcalendar::models::{Event, EventDraft};
use rcalendar::store::{EVENTS_KEY, Store};
use rcalendar::utils::date::parse_period;

mod common;
use common::{event, roster};

fn draft(date: &str, client: &str) -> EventDraft {
    EventDraft {
        date: date.into(),
        time: "09:30".into(),
        kind: "Visita Técnica".into(),
        client: client.into(),
        address: "Calle Mayor 1".into(),
        technician: "Luis".into(),
        description: String::new(),
    }
}

#[test]
fn test_add_valid_event_persists_and_uses_roster_spelling() {
    let mut store = Store::in_memory();
    let mut book = EventBook::default();
    let roster = roster(&["ACME"]);

    let idx = book.add(&mut store, &roster, &draft("2026-10-15", "acme")).unwrap();
    assert_eq!(idx, 0);
    assert_eq!(book.events()[0].client, "ACME");

    let saved: Vec<Event> = store.load_or_default(EVENTS_KEY).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].date, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
    assert_eq!(saved[0].time_str(), "09:30");
}

#[test]
fn test_missing_fields_are_all_reported() {
    let mut store = Store::in_memory();
    let mut book = EventBook::default();
    let roster = roster(&["ACME"]);

    let mut d = draft("2026-10-15", "ACME");
    d.time = String::new();
    d.address = "  ".into();
    d.technician = String::new();

    match book.add(&mut store, &roster, &d).unwrap_err() {
        AppError::MissingFields(fields) => {
            assert_eq!(fields, vec!["time", "address", "technician"])
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(book.is_empty());
    assert!(
        store
            .load_or_default::<Vec<Event>>(EVENTS_KEY)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_description_is_optional() {
    let mut store = Store::in_memory();
    let mut book = EventBook::default();
    let roster = roster(&["ACME"]);

    book.add(&mut store, &roster, &draft("2026-10-15", "ACME"))
        .unwrap();
    assert_eq!(book.events()[0].description, "");
}

#[test]
fn test_unknown_client_and_bad_inputs_rejected() {
    let mut store = Store::in_memory();
    let mut book = EventBook::default();
    let roster = roster(&["ACME"]);

    assert!(matches!(
        book.add(&mut store, &roster, &draft("2026-10-15", "Globex"))
            .unwrap_err(),
        AppError::UnknownClient(_)
    ));

    assert!(matches!(
        book.add(&mut store, &roster, &draft("2026-13-45", "ACME"))
            .unwrap_err(),
        AppError::InvalidDate(_)
    ));

    let mut bad_time = draft("2026-10-15", "ACME");
    bad_time.time = "25:99".into();
    assert!(matches!(
        book.add(&mut store, &roster, &bad_time).unwrap_err(),
        AppError::InvalidTime(_)
    ));
    assert!(book.is_empty());
}

#[test]
fn test_duplicates_are_permitted() {
    let mut store = Store::in_memory();
    let mut book = EventBook::default();
    let roster = roster(&["ACME"]);

    book.add(&mut store, &roster, &draft("2026-10-15", "ACME"))
        .unwrap();
    book.add(&mut store, &roster, &draft("2026-10-15", "ACME"))
        .unwrap();
    assert_eq!(book.len(), 2);
    assert_eq!(book.events()[0], book.events()[1]);
}

#[test]
fn test_delete_by_index() {
    let mut store = Store::in_memory();
    let mut book = EventBook::from_events(vec![
        event("2026-10-01", "08:00", "A"),
        event("2026-10-02", "08:00", "B"),
        event("2026-10-03", "08:00", "C"),
    ]);

    let removed = book.delete(&mut store, 1).unwrap();
    assert_eq!(removed.client, "B");

    let saved: Vec<Event> = store.load_or_default(EVENTS_KEY).unwrap();
    let clients: Vec<&str> = saved.iter().map(|e| e.client.as_str()).collect();
    assert_eq!(clients, vec!["A", "C"]);

    assert!(matches!(
        book.delete(&mut store, 5).unwrap_err(),
        AppError::InvalidIndex(5)
    ));
}

#[test]
fn test_list_filters_by_period_and_keeps_indexes() {
    let book = EventBook::from_events(vec![
        event("2026-09-30", "08:00", "A"),
        event("2026-10-02", "08:00", "B"),
        event("2026-11-01", "08:00", "C"),
        event("2026-10-31", "08:00", "D"),
    ]);

    let bounds = parse_period("2026-10").unwrap();
    let rows = book.list(bounds);
    let picked: Vec<(usize, &str)> = rows.iter().map(|(i, e)| (*i, e.client.as_str())).collect();
    assert_eq!(picked, vec![(1, "B"), (3, "D")]);

    assert_eq!(book.list(parse_period("all").unwrap()).len(), 4);
    assert_eq!(book.list(parse_period("2026-09:2026-10").unwrap()).len(), 3);

    let table = book.render_list(bounds, Locale::En);
    assert!(table.contains("2026-10-02"));
    assert!(!table.contains("2026-11-01"));

    let empty = parse_period("2027-01").unwrap();
    assert_eq!(book.render_list(empty, Locale::En).trim(), "No events found.");
    assert_eq!(
        book.render_list(empty, Locale::Es).trim(),
        "No se encontraron eventos."
    );
}

#[test]
fn test_period_parsing() {
    let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

    assert_eq!(
        parse_period("2024-02").unwrap(),
        Some((d("2024-02-01"), d("2024-02-29")))
    );
    assert_eq!(
        parse_period("2026").unwrap(),
        Some((d("2026-01-01"), d("2026-12-31")))
    );
    assert_eq!(
        parse_period("2026-10-05:2026-10-09").unwrap(),
        Some((d("2026-10-05"), d("2026-10-09")))
    );
    assert!(parse_period("2026:2026-10").is_err());
    assert!(parse_period("2026-10-09:2026-10-05").is_err());
    assert!(parse_period("yesterday").is_err());
}
