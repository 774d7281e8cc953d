// src/reveal.rs

/// Batch size for incremental disclosure.
pub const PAGE_SIZE: usize = 12;

/// Tracks how many of the filtered jobs are currently shown, advancing one
/// page at a time as the scroll sentinel fires.
///
/// Trigger handling is edge-based with an in-flight guard: `trigger` claims
/// the next batch and refuses repeat signals until `complete` lands it, so
/// a burst of sentinel events advances the cursor once.
#[derive(Debug)]
pub struct RevealController {
    visible: usize,
    page: usize,
    in_flight: bool,
}

impl RevealController {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page: usize) -> Self {
        Self {
            visible: page,
            page,
            in_flight: false,
        }
    }

    /// Back to one page; called whenever the pipeline's inputs change.
    pub fn reset(&mut self) {
        self.visible = self.page;
        self.in_flight = false;
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Advance by one page, clamped to `total`. Idempotent once everything
    /// is revealed.
    pub fn reveal_more(&mut self, total: usize) {
        if self.visible < total {
            self.visible = (self.visible + self.page).min(total);
        }
    }

    /// Claim the next batch. Returns false while a batch is already in
    /// flight or nothing remains, in which case the signal is dropped.
    pub fn trigger(&mut self, total: usize) -> bool {
        if self.in_flight || !self.has_more(total) {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Land a claimed batch and release the guard.
    pub fn complete(&mut self, total: usize) {
        if self.in_flight {
            self.reveal_more(total);
            self.in_flight = false;
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}
