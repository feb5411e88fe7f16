mod common;
use common::{approx, date, time};
use habitlog::core::aggregate::summarize;
use habitlog::db::SessionStore;
use habitlog::errors::AppError;

#[test]
fn test_append_then_load_derives_duration() {
    let store = SessionStore::start_in_memory().expect("store");

    let cases = [
        ("14:00", "14:45", 0.75),
        ("09:00", "09:30", 0.5),
        ("08:15", "17:45", 9.5),
        ("12:00", "12:00", 0.0),
        ("10:00", "09:00", -1.0),
    ];

    for (start, end, _) in &cases {
        store
            .append("reading", time(start), time(end), date(2025, 6, 1))
            .expect("append");
    }

    let entries = store.load_all().expect("load_all");
    assert_eq!(entries.len(), cases.len());

    for (entry, (_, _, expected)) in entries.iter().zip(cases.iter()) {
        assert!(
            approx(entry.duration_hours, *expected),
            "{} - {} gave {}",
            entry.start_str(),
            entry.end_str(),
            entry.duration_hours
        );
    }
}

#[test]
fn test_inverted_range_is_not_wrapped_overnight() {
    let store = SessionStore::start_in_memory().expect("store");
    store
        .append("sleep", time("23:00"), time("07:00"), date(2025, 6, 1))
        .expect("append");

    let entries = store.load_all().expect("load_all");
    assert!(approx(entries[0].duration_hours, -16.0));
}

#[test]
fn test_habit_is_trimmed_and_lowercased() {
    let store = SessionStore::start_in_memory().expect("store");
    store
        .append(" Reading ", time("14:00"), time("14:45"), date(2025, 6, 1))
        .expect("append");
    store
        .append("reading", time("09:00"), time("09:30"), date(2025, 6, 2))
        .expect("append");

    let entries = store.load_all().expect("load_all");
    assert!(entries.iter().all(|e| e.habit == "reading"));

    let summary = summarize(&entries);
    assert_eq!(summary.len(), 1);
    assert!(approx(summary["reading"], 1.25));
}

#[test]
fn test_duplicates_accumulate_in_insertion_order() {
    let store = SessionStore::start_in_memory().expect("store");
    for _ in 0..3 {
        store
            .append("walk", time("07:00"), time("07:30"), date(2025, 6, 1))
            .expect("append");
    }
    store
        .append("code", time("10:00"), time("12:00"), date(2025, 5, 1))
        .expect("append");

    let entries = store.load_all().expect("load_all");
    let habits: Vec<&str> = entries.iter().map(|e| e.habit.as_str()).collect();
    assert_eq!(habits, vec!["walk", "walk", "walk", "code"]);
    assert_eq!(store.count().expect("count"), 4);
}

#[test]
fn test_clear_all_empties_the_store() {
    let store = SessionStore::start_in_memory().expect("store");
    store
        .append("reading", time("14:00"), time("14:45"), date(2025, 6, 1))
        .expect("append");
    store
        .append("gym", time("18:00"), time("19:00"), date(2025, 6, 1))
        .expect("append");

    assert_eq!(store.clear_all().expect("clear"), 2);
    assert!(store.load_all().expect("load_all").is_empty());
    assert_eq!(store.date_bounds().expect("bounds"), None);
}

#[test]
fn test_malformed_time_aborts_whole_read() {
    let store = SessionStore::start_in_memory().expect("store");
    store
        .append("reading", time("14:00"), time("14:45"), date(2025, 6, 1))
        .expect("append");
    store
        .conn
        .execute(
            "INSERT INTO habit_log VALUES ('gym', '6pm', '19:00', '2025-06-01')",
            [],
        )
        .expect("raw insert");

    let err = store.load_all().expect_err("malformed row must fail the read");
    assert!(matches!(err, AppError::Db(_)));
    assert!(err.to_string().contains("6pm"));
}

#[test]
fn test_malformed_date_aborts_whole_read() {
    let store = SessionStore::start_in_memory().expect("store");
    store
        .conn
        .execute(
            "INSERT INTO habit_log VALUES ('gym', '18:00', '19:00', '01/06/2025')",
            [],
        )
        .expect("raw insert");

    assert!(store.load_all().is_err());
}

#[test]
fn test_new_session_discards_previous_entries() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("nested").join("habits.sqlite");
    let db = db.to_string_lossy().to_string();

    {
        let store = SessionStore::start(&db).expect("first session");
        store
            .append("reading", time("14:00"), time("14:45"), date(2025, 6, 1))
            .expect("append");
        assert_eq!(store.count().expect("count"), 1);
    }

    let store = SessionStore::start(&db).expect("second session");
    assert_eq!(store.count().expect("count"), 0);
}

#[test]
fn test_habits_and_date_bounds() {
    let store = SessionStore::start_in_memory().expect("store");
    store
        .append("Yoga", time("07:00"), time("07:30"), date(2025, 6, 3))
        .expect("append");
    store
        .append("reading", time("21:00"), time("22:00"), date(2025, 5, 28))
        .expect("append");
    store
        .append("yoga", time("07:00"), time("07:20"), date(2025, 6, 4))
        .expect("append");

    assert_eq!(store.habits().expect("habits"), vec!["reading", "yoga"]);
    assert_eq!(
        store.date_bounds().expect("bounds"),
        Some(("2025-05-28".to_string(), "2025-06-04".to_string()))
    );
}
