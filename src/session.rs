// src/session.rs

use std::time::Instant;

use chrono::Utc;

use crate::debounce::Debouncer;
use crate::domain::Job;
use crate::errors::StoreResult;
use crate::pipeline::{self, FilterState, SortKey};
use crate::reveal::RevealController;
use crate::store::{KvStore, SavedJobs, Theme};

/// Browsing state for one user session: the immutable job collection, the
/// committed query plus its debouncer, filters, sort, the saved set, the
/// reveal cursor, and the cached pipeline output.
///
/// This is the rendering boundary. The view layer calls the mutation entry
/// points on user events and reads `visible_jobs`/counts back; there is no
/// other coupling. Everything runs on one event-processing context, so no
/// locking is involved.
pub struct Session {
    jobs: Vec<Job>,
    filtered: Vec<Job>,
    query: String,
    search: Debouncer,
    filters: FilterState,
    sort: SortKey,
    saved: SavedJobs,
    theme: Theme,
    reveal: RevealController,
    loading: bool,
    store: KvStore,
}

impl Session {
    /// Start a session over `jobs`, restoring saved ids and the theme
    /// preference from the store.
    pub fn new(jobs: Vec<Job>, store: KvStore, system_prefers_dark: bool) -> StoreResult<Self> {
        store.init()?;
        let saved = SavedJobs::load(&store)?;
        let theme = Theme::load(&store, system_prefers_dark)?;

        let filters = FilterState::default();
        let sort = SortKey::default();
        let filtered = pipeline::apply(&jobs, "", &filters, sort, Utc::now());

        Ok(Self {
            jobs,
            filtered,
            query: String::new(),
            search: Debouncer::default(),
            filters,
            sort,
            saved,
            theme,
            reveal: RevealController::new(),
            loading: true,
            store,
        })
    }

    // ----- Search -----

    /// Buffer a raw keystroke; nothing recomputes until the quiet period
    /// elapses and `tick` commits it.
    pub fn set_search(&mut self, text: &str, now: Instant) {
        self.search.input(text, now);
    }

    /// Drive the debounce clock. Returns true when a query was committed
    /// (and the pipeline re-ran).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(text) if text != self.query => {
                self.query = text;
                self.refresh();
                true
            }
            Some(_) => false,
            None => false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    // ----- Filters & sort -----

    pub fn set_filters(&mut self, filters: FilterState) {
        if filters != self.filters {
            self.filters = filters;
            self.refresh();
        }
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(FilterState::default());
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if sort != self.sort {
            self.sort = sort;
            self.refresh();
        }
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    // ----- Results -----

    /// The ordered slice currently shown: the filtered sequence up to the
    /// reveal cursor.
    pub fn visible_jobs(&self) -> &[Job] {
        let n = self.reveal.visible_count().min(self.filtered.len());
        &self.filtered[..n]
    }

    pub fn visible_count(&self) -> usize {
        self.visible_jobs().len()
    }

    pub fn total_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_more(&self) -> bool {
        self.reveal.has_more(self.filtered.len())
    }

    /// True when the active constraints match nothing; the view renders the
    /// "no results" affordance with a one-click `clear_filters`.
    pub fn no_results(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn job(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == job_id)
    }

    // ----- Reveal -----

    /// The scroll sentinel entered the viewport. Suppressed while the
    /// initial collection is loading, while a batch is in flight, or when
    /// nothing remains.
    pub fn sentinel_visible(&mut self) {
        if self.loading {
            return;
        }
        let total = self.filtered.len();
        if self.reveal.trigger(total) {
            self.reveal.complete(total);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Initial load finished; reveal triggers are live from here on.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    // ----- Saved jobs -----

    /// Flip the bookmark on `job_id`, persisting the new set. Returns the
    /// new membership.
    pub fn toggle_save(&mut self, job_id: &str) -> StoreResult<bool> {
        self.saved.toggle(&self.store, job_id)
    }

    pub fn is_saved(&self, job_id: &str) -> bool {
        self.saved.is_saved(job_id)
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    // ----- Theme -----

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> StoreResult<()> {
        self.theme.toggle(&self.store)
    }

    // ----- Apply -----

    /// Terminal acknowledgment for an application; no backend call exists.
    pub fn apply_to(&self, job_id: &str) -> Option<String> {
        self.job(job_id).map(Job::application_ack)
    }

    /// Re-run the pipeline and reset the reveal cursor. Invoked on every
    /// committed change to query, filters, or sort.
    fn refresh(&mut self) {
        self.filtered = pipeline::apply(&self.jobs, &self.query, &self.filters, self.sort, Utc::now());
        self.reveal.reset();
    }
}
