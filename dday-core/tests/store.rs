use chrono::NaiveDate;
use dday_core::collection::{DisplayMode, EventCollection};
use dday_core::format::StorageFormat;
use dday_core::store::EventStore;
use dday_core::{Event, EventDate, EventId};
use pretty_assertions::assert_eq;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample() -> EventCollection {
    EventCollection::from_events(vec![
        Event::new("명절", ymd(2025, 1, 1)),
        Event::new("생일", ymd(2099, 1, 1)),
        Event::new("Tom, \"Jerry\"", ymd(2025, 12, 24)),
    ])
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::at(dir.path().join("nope.json"));
    assert!(store.load().is_empty());
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::at(dir.path().join("a").join("b").join("dday_data.json"));
    store.save(&sample()).unwrap();
    assert_eq!(store.load().len(), 3);
}

#[test]
fn json_save_load_save_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::at(dir.path().join("dday_data.json"));
    assert_eq!(store.format(), StorageFormat::Json);

    store.save(&sample()).unwrap();
    let first = std::fs::read(store.path()).unwrap();

    let loaded = store.load();
    store.save(&loaded).unwrap();
    let second = std::fs::read(store.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(loaded.events()[0].name, "명절");
}

#[test]
fn csv_save_load_save_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::at(dir.path().join("events.csv"));
    assert_eq!(store.format(), StorageFormat::Csv);

    store.save(&sample()).unwrap();
    let first = std::fs::read_to_string(store.path()).unwrap();

    let loaded = store.load();
    store.save(&loaded).unwrap();
    let second = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(loaded.events()[2].name, "Tom, \"Jerry\"");
    assert!(first.starts_with("명절,2025,1,1\n"));
}

#[test]
fn json_round_trip_keeps_broken_dates_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::at(dir.path().join("dday_data.json"));
    std::fs::write(
        store.path(),
        r#"[{"name": "ok", "date": "2025-06-15"}, {"name": "typo", "date": "2025/6/15", "note": "x"}]"#,
    )
    .unwrap();

    let loaded = store.load();
    assert_eq!(loaded.events()[1].date, EventDate::Invalid("2025/6/15".into()));

    store.save(&loaded).unwrap();
    let reloaded = store.load();
    assert_eq!(reloaded, loaded);
}

#[test]
fn corrupt_json_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::at(dir.path().join("dday_data.json"));

    for content in ["{\"name\": \"x\"}", "[1, 2, 3]", "[{\"name\": \"x\", \"date\": \"2025", "\u{0}\u{1}"] {
        std::fs::write(store.path(), content).unwrap();
        assert!(store.load().is_empty(), "content {content:?}");
        assert!(store.read_events().is_err());
    }
}

#[test]
fn csv_skips_unreadable_lines() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::at(dir.path().join("events.csv"));
    std::fs::write(store.path(), "good,2025,6,15\nbad,2025,2,30\nworse\n").unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.events()[0].id, EventId(1));
}

#[test]
fn scenario_current_view_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::at(dir.path().join("dday_data.json"));
    store
        .save(&EventCollection::from_events(vec![
            Event::new("명절", ymd(2025, 1, 1)),
            Event::new("생일", ymd(2099, 1, 1)),
        ]))
        .unwrap();

    let today = ymd(2025, 6, 15);
    let loaded = store.load();
    let current: Vec<&Event> = loaded.visible(DisplayMode::Current, today).collect();

    assert_eq!(current.len(), 1);
    assert_eq!(current[0].name, "생일");
    let days = (ymd(2099, 1, 1) - today).num_days();
    assert_eq!(current[0].countdown(today).unwrap().to_string(), format!("D-{days}"));
}
