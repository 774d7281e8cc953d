// src/tests/session_tests.rs

use super::utils::{job, job_batch, make_store};
use crate::debounce::SEARCH_QUIET;
use crate::domain::{Job, JobType};
use crate::pipeline::FilterState;
use crate::pipeline::SortKey;
use crate::reveal::PAGE_SIZE;
use crate::session::Session;
use std::time::Instant;

fn make_session(jobs: Vec<Job>) -> Session {
    Session::new(jobs, make_store("session"), false).expect("session start failed")
}

#[test]
fn starts_with_one_page_of_the_full_collection() {
    let session = make_session(job_batch(30));

    assert_eq!(session.total_count(), 30);
    assert_eq!(session.visible_count(), PAGE_SIZE);
    assert!(session.has_more());
    assert!(!session.no_results());
}

#[test]
fn small_collections_are_fully_visible_from_the_start() {
    let session = make_session(job_batch(5));
    assert_eq!(session.visible_count(), 5);
    assert!(!session.has_more());
}

#[test]
fn search_commits_only_after_the_quiet_period() {
    let mut session = make_session(job_batch(30));
    let t0 = Instant::now();

    session.set_search("designer", t0);
    assert!(!session.tick(t0 + SEARCH_QUIET / 2));
    assert_eq!(session.query(), "");
    assert_eq!(session.total_count(), 30);

    // Fixture titles are all "Backend Engineer", so this clears the list.
    assert!(session.tick(t0 + SEARCH_QUIET));
    assert_eq!(session.query(), "designer");
    assert!(session.no_results());
}

#[test]
fn committing_an_unchanged_query_does_not_refresh() {
    let mut session = make_session(job_batch(30));
    let t0 = Instant::now();

    session.set_search("", t0);
    assert!(!session.tick(t0 + SEARCH_QUIET));
}

#[test]
fn filter_change_resets_the_reveal_cursor() {
    let mut jobs = job_batch(30);
    for job in jobs.iter_mut().take(20) {
        job.job_type = JobType::Remote;
    }
    let mut session = make_session(jobs);
    session.finish_loading();

    session.sentinel_visible();
    assert_eq!(session.visible_count(), PAGE_SIZE * 2);

    session.set_filters(FilterState {
        job_types: vec![JobType::Remote],
        ..FilterState::default()
    });
    assert_eq!(session.total_count(), 20);
    assert_eq!(session.visible_count(), PAGE_SIZE);
}

#[test]
fn sort_change_resets_the_reveal_cursor() {
    let mut session = make_session(job_batch(30));
    session.finish_loading();

    session.sentinel_visible();
    assert_eq!(session.visible_count(), PAGE_SIZE * 2);

    session.set_sort(SortKey::Date);
    assert_eq!(session.visible_count(), PAGE_SIZE);

    // Re-selecting the active sort is a no-op.
    session.sentinel_visible();
    session.set_sort(SortKey::Date);
    assert_eq!(session.visible_count(), PAGE_SIZE * 2);
}

#[test]
fn sentinel_is_suppressed_until_loading_finishes() {
    let mut session = make_session(job_batch(40));

    session.sentinel_visible();
    assert_eq!(session.visible_count(), PAGE_SIZE);
    assert!(session.is_loading());

    session.finish_loading();
    session.sentinel_visible();
    assert_eq!(session.visible_count(), PAGE_SIZE * 2);
}

#[test]
fn sentinel_advances_to_the_end_and_stops() {
    let mut session = make_session(job_batch(30));
    session.finish_loading();

    session.sentinel_visible();
    session.sentinel_visible();
    assert_eq!(session.visible_count(), 30);
    assert!(!session.has_more());

    session.sentinel_visible();
    assert_eq!(session.visible_count(), 30);
}

#[test]
fn narrowing_to_remote_then_clearing_restores_match_order() {
    let jobs = vec![
        Job {
            match_score: 90,
            job_type: JobType::Remote,
            ..job("a")
        },
        Job {
            match_score: 70,
            job_type: JobType::FullTime,
            ..job("b")
        },
    ];
    let mut session = make_session(jobs);

    session.set_filters(FilterState {
        job_types: vec![JobType::Remote],
        ..FilterState::default()
    });
    assert_eq!(session.visible_jobs().len(), 1);
    assert_eq!(session.visible_jobs()[0].id, "a");

    session.clear_filters();
    let ids: Vec<&str> = session.visible_jobs().iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn no_results_then_clear_filters_recovers() {
    let mut session = make_session(job_batch(10));

    session.set_filters(FilterState {
        locations: vec!["Nowhere, KS".to_string()],
        ..FilterState::default()
    });
    assert!(session.no_results());

    session.clear_filters();
    assert_eq!(session.total_count(), 10);
}

#[test]
fn toggling_a_save_flips_membership_and_count() {
    let mut session = make_session(job_batch(10));

    assert!(!session.is_saved("job-3"));
    assert!(session.toggle_save("job-3").unwrap());
    assert!(session.is_saved("job-3"));
    assert_eq!(session.saved_count(), 1);

    assert!(!session.toggle_save("job-3").unwrap());
    assert!(!session.is_saved("job-3"));
    assert_eq!(session.saved_count(), 0);
}

#[test]
fn saved_jobs_survive_into_a_new_session() {
    let store = make_store("session_restore");
    let mut first = Session::new(job_batch(10), store.clone(), false).unwrap();
    first.toggle_save("job-7").unwrap();

    let second = Session::new(job_batch(10), store, false).unwrap();
    assert!(second.is_saved("job-7"));
}

#[test]
fn apply_returns_the_acknowledgment_for_known_jobs() {
    let session = make_session(vec![Job {
        title: "Tech Lead".to_string(),
        company: "Apex".to_string(),
        ..job("job-1")
    }]);

    assert_eq!(
        session.apply_to("job-1").as_deref(),
        Some("Application submitted for Tech Lead at Apex!")
    );
    assert_eq!(session.apply_to("job-999"), None);
}

#[test]
fn theme_toggle_round_trips_through_the_store() {
    let store = make_store("session_theme");
    let mut session = Session::new(job_batch(5), store.clone(), true).unwrap();
    assert_eq!(session.theme().as_str(), "dark");

    session.toggle_theme().unwrap();
    assert_eq!(session.theme().as_str(), "light");

    let next = Session::new(job_batch(5), store, true).unwrap();
    assert_eq!(next.theme().as_str(), "light");
}
