//! Where unmatched notes get reported.
//!
//! The merge itself stays silent; callers pick a reporter and feed it the
//! outcome via `MergeOutcome::report_to`.

use mwfill_core::types::Miss;

pub trait Reporter {
    /// Called once per note whose join key has no reference entry.
    fn unmatched(&mut self, miss: &Miss);
}

/// Emits one `tracing` warning per unmatched note.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn unmatched(&mut self, miss: &Miss) {
        tracing::warn!(
            row = miss.row,
            key = %miss.key,
            "note for line {}, character {:?} does not have a measure word mapping; skipping",
            miss.row,
            miss.key
        );
    }
}

/// Keeps every miss in memory. Handy in tests and for building reports.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub misses: Vec<Miss>,
}

impl Reporter for CollectingReporter {
    fn unmatched(&mut self, miss: &Miss) {
        self.misses.push(miss.clone());
    }
}
