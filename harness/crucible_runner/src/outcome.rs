//! Case outcomes and suite summaries.

use std::time::Duration;

use crucible_assert::{CaseError, CaseResult};

/// Outcome of a single case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// A check failed.
    Failed(CaseError),
    /// A precondition did not hold.
    Skipped(CaseError),
    /// The case panicked instead of returning. Counted as a failure.
    Panicked(String),
}

impl CaseOutcome {
    /// Classify what a case function returned.
    pub fn from_result(result: CaseResult) -> Self {
        match result {
            Ok(()) => CaseOutcome::Passed,
            Err(err) if err.is_skipped() => CaseOutcome::Skipped(err),
            Err(err) => CaseOutcome::Failed(err),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }

    /// True for checked failures and panics alike.
    pub fn is_failed(&self) -> bool {
        matches!(self, CaseOutcome::Failed(_) | CaseOutcome::Panicked(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CaseOutcome::Skipped(_))
    }
}

/// Result of running a single case.
#[derive(Clone, Debug)]
pub struct CaseReport {
    pub name: String,
    pub outcome: CaseOutcome,
    pub duration: Duration,
}

impl CaseReport {
    pub fn new(name: impl Into<String>, outcome: CaseOutcome, duration: Duration) -> Self {
        CaseReport {
            name: name.into(),
            outcome,
            duration,
        }
    }
}

/// Summary of one suite run.
#[derive(Clone, Debug, Default)]
pub struct Summary {
    /// Name of the suite.
    pub suite: String,
    /// Per-case reports in registration order.
    pub reports: Vec<CaseReport>,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Cases the filter left out.
    pub filtered_out: usize,
    /// Wall-clock time of the whole run.
    pub duration: Duration,
}

impl Summary {
    pub fn new(suite: impl Into<String>) -> Self {
        Summary {
            suite: suite.into(),
            ..Default::default()
        }
    }

    pub fn add_report(&mut self, report: CaseReport) {
        match &report.outcome {
            CaseOutcome::Passed => self.passed += 1,
            CaseOutcome::Failed(_) | CaseOutcome::Panicked(_) => self.failed += 1,
            CaseOutcome::Skipped(_) => self.skipped += 1,
        }
        self.duration += report.duration;
        self.reports.push(report);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Cases that did not fail, skipped ones included.
    pub fn not_failed(&self) -> usize {
        self.passed + self.skipped
    }

    /// Get exit code: 0 = no failures, 1 = failures, 2 = the suite has no
    /// cases at all.
    ///
    /// A run whose filter left every case out exits 0, as libtest does, so
    /// a filtered `cargo test` is not failed by unrelated suite binaries.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 && self.filtered_out == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}

#[cfg(test)]
mod tests;
