//! End-to-end timer behaviour against real stores, driven by a manual clock.

use chrono::NaiveDate;
use std::time::Duration;
use tempfile::tempdir;
use worktimer::core::clock::ManualClock;
use worktimer::core::tracker::Tracker;
use worktimer::models::phase::Phase;
use worktimer::store::{Backend, SessionStore, open_store};

fn clock_at(h: u32, m: u32, s: u32) -> ManualClock {
    ManualClock::new(
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap(),
    )
}

#[test]
fn test_paused_time_is_excluded() {
    for backend in [Backend::Sqlite, Backend::Json] {
        let dir = tempdir().unwrap();
        let c = clock_at(9, 0, 0);
        let mut t = Tracker::new(open_store(backend, dir.path()).unwrap(), &c, None);

        // 09:00:00 start, 09:00:30 pause, 09:05:00 continue, 09:05:20 stop
        t.start();
        c.advance_secs(30);
        t.pause();
        c.advance_secs(270);
        t.resume();
        c.advance_secs(20);
        let r = t.stop().unwrap().unwrap();

        assert_eq!(r.date_str(), "19.10.2026");
        assert_eq!(r.start_str(), "09:00:00");
        assert_eq!(r.end_str(), "09:05:20");
        assert_eq!(r.duration_str(), "00:00:50");

        let stored = t.store().list_all().unwrap();
        assert_eq!(stored, vec![r], "{backend:?}");
        assert_eq!(t.phase(), Phase::Idle);
    }
}

#[test]
fn test_two_sessions_add_up_per_day() {
    let dir = tempdir().unwrap();
    let c = clock_at(9, 0, 0);
    let mut t = Tracker::new(open_store(Backend::Json, dir.path()).unwrap(), &c, None);

    for secs in [600, 1200] {
        t.start();
        c.advance_secs(secs);
        t.stop().unwrap();
        c.advance_secs(60);
    }

    let totals = t.totals().unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].sessions, 2);
    assert_eq!(totals[0].total.to_string(), "00:30:00");

    // Re-opening the document sees the same data.
    let reopened = open_store(Backend::Json, dir.path()).unwrap();
    assert_eq!(reopened.aggregate_by_date().unwrap(), totals);
}

#[test]
fn test_session_across_midnight_is_dated_at_stop() {
    let dir = tempdir().unwrap();
    let c = clock_at(23, 59, 0);
    let mut t = Tracker::new(open_store(Backend::Sqlite, dir.path()).unwrap(), &c, None);

    t.start();
    c.advance_secs(120);
    let r = t.stop().unwrap().unwrap();

    assert_eq!(r.date_str(), "20.10.2026");
    assert_eq!(r.start_str(), "23:59:00");
    assert_eq!(r.end_str(), "00:01:00");
    assert_eq!(r.duration_str(), "00:02:00");
}

#[test]
fn test_reminder_repeats_and_restarts_on_pause() {
    let dir = tempdir().unwrap();
    let c = clock_at(9, 0, 0);
    let mut t = Tracker::new(
        open_store(Backend::Json, dir.path()).unwrap(),
        &c,
        Some(Duration::from_secs(5)),
    );

    t.start();
    let mut fired = 0;
    for _ in 0..12 {
        c.advance_secs(1);
        if t.tick().reminder {
            fired += 1;
        }
    }
    assert_eq!(fired, 2);

    // 4s after pause/continue is not enough for the next one.
    t.pause();
    c.advance_secs(30);
    t.resume();
    c.advance_secs(4);
    assert!(!t.tick().reminder);
    c.advance_secs(1);
    assert!(t.tick().reminder);
}

#[test]
fn test_relocated_sessions_land_in_the_new_folder() {
    let old = tempdir().unwrap();
    let new = tempdir().unwrap();
    let c = clock_at(9, 0, 0);
    let mut t = Tracker::new(open_store(Backend::Sqlite, old.path()).unwrap(), &c, None);

    t.start();
    c.advance_secs(10);
    t.stop().unwrap();

    t.relocate(new.path()).unwrap();
    t.start();
    c.advance_secs(20);
    t.stop().unwrap();

    let old_store = open_store(Backend::Sqlite, old.path()).unwrap();
    assert_eq!(old_store.list_all().unwrap().len(), 1);
    assert_eq!(t.store().list_all().unwrap().len(), 1);
    assert_eq!(t.store().location(), new.path().join("work_time.db"));
}
