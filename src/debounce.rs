// src/debounce.rs

use std::time::{Duration, Instant};

/// Quiet period before raw search input is committed to the pipeline.
pub const SEARCH_QUIET: Duration = Duration::from_millis(300);

/// Buffers raw text edits and releases the latest one only after a quiet
/// period with no further input. A new edit supersedes the pending one and
/// restarts the clock, so a burst of keystrokes commits exactly once, with
/// the final text.
///
/// Time is passed in by the caller, which keeps this pollable from a
/// single-threaded event loop and lets tests run without sleeping.
#[derive(Debug)]
pub struct Debouncer {
    pending: Option<Pending>,
    quiet: Duration,
}

#[derive(Debug)]
struct Pending {
    text: String,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            pending: None,
            quiet,
        }
    }

    /// Record an edit at `now`, replacing any pending commit.
    pub fn input(&mut self, text: &str, now: Instant) {
        self.pending = Some(Pending {
            text: text.to_string(),
            deadline: now + self.quiet,
        });
    }

    /// Release the pending text if its quiet period has elapsed. Returns
    /// at most one commit per burst.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.text),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_QUIET)
    }
}
