// src/tests/debounce_tests.rs

use crate::debounce::{Debouncer, SEARCH_QUIET};
use std::time::{Duration, Instant};

#[test]
fn a_burst_of_keystrokes_commits_once_with_the_final_text() {
    let mut search = Debouncer::default();
    let t0 = Instant::now();

    search.input("e", t0);
    search.input("en", t0 + Duration::from_millis(100));
    search.input("eng", t0 + Duration::from_millis(200));

    // Still inside the quiet window of the last keystroke.
    assert_eq!(search.poll(t0 + Duration::from_millis(400)), None);
    assert!(search.is_pending());

    // Quiet period over: exactly one commit, the final text.
    assert_eq!(
        search.poll(t0 + Duration::from_millis(200) + SEARCH_QUIET),
        Some("eng".to_string())
    );
    assert_eq!(search.poll(t0 + Duration::from_secs(10)), None);
    assert!(!search.is_pending());
}

#[test]
fn commit_lands_exactly_at_the_deadline() {
    let mut search = Debouncer::default();
    let t0 = Instant::now();

    search.input("rust", t0);
    assert_eq!(search.poll(t0 + SEARCH_QUIET - Duration::from_millis(1)), None);
    assert_eq!(search.poll(t0 + SEARCH_QUIET), Some("rust".to_string()));
}

#[test]
fn a_new_keystroke_supersedes_the_pending_commit() {
    let mut search = Debouncer::new(Duration::from_millis(300));
    let t0 = Instant::now();

    search.input("old", t0);
    // One tick before "old" would have committed.
    search.input("new", t0 + Duration::from_millis(299));

    assert_eq!(search.poll(t0 + Duration::from_millis(300)), None);
    assert_eq!(
        search.poll(t0 + Duration::from_millis(599)),
        Some("new".to_string())
    );
}

#[test]
fn idle_debouncer_yields_nothing() {
    let mut search = Debouncer::default();
    assert_eq!(search.poll(Instant::now()), None);
    assert!(!search.is_pending());
}
