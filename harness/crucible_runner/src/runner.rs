//! Case execution engine.
//!
//! Runs the selected cases of a suite and collects one report per case.

use std::any::Any;
use std::panic;
use std::time::Instant;

use rayon::prelude::*;

use crate::config::RunnerConfig;
use crate::outcome::{CaseOutcome, CaseReport, Summary};
use crate::suite::{Suite, TestCase};

/// Suite runner.
pub struct SuiteRunner {
    config: RunnerConfig,
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteRunner {
    /// Create a runner with default config.
    pub fn new() -> Self {
        SuiteRunner {
            config: RunnerConfig::default(),
        }
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        SuiteRunner { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Cases of `suite` selected by the filter, in registration order.
    pub fn select<'s>(&self, suite: &'s Suite) -> Vec<&'s TestCase> {
        suite
            .cases()
            .iter()
            .filter(|case| self.config.matches(case.name()))
            .collect()
    }

    /// Run every selected case once.
    pub fn run(&self, suite: &Suite) -> Summary {
        let selected = self.select(suite);
        tracing::info!(
            suite = suite.name(),
            selected = selected.len(),
            registered = suite.len(),
            parallel = self.config.parallel,
            "running suite"
        );

        let start = Instant::now();
        let reports = if self.config.parallel && selected.len() > 1 {
            self.run_parallel(&selected)
        } else {
            run_sequential(&selected)
        };

        let mut summary = Summary::new(suite.name());
        summary.filtered_out = suite.len() - selected.len();
        for report in reports {
            summary.add_report(report);
        }
        summary.duration = start.elapsed();

        tracing::info!(
            suite = suite.name(),
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            "suite finished"
        );
        summary
    }

    /// Run cases on a scoped rayon pool.
    ///
    /// `build_scoped` joins every worker before returning, so no pool
    /// threads outlive the run. Indexed `collect` keeps registration order.
    fn run_parallel(&self, cases: &[&TestCase]) -> Vec<CaseReport> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.config.threads {
            builder = builder.num_threads(threads.get());
        }

        builder
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| cases.par_iter().map(|case| run_case(case)).collect::<Vec<_>>())
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                run_sequential(cases)
            })
    }
}

fn run_sequential(cases: &[&TestCase]) -> Vec<CaseReport> {
    cases.iter().map(|case| run_case(case)).collect()
}

/// Run one case, turning a panic into a failed outcome.
pub fn run_case(case: &TestCase) -> CaseReport {
    let start = Instant::now();
    let outcome = match panic::catch_unwind(case.func()) {
        Ok(result) => CaseOutcome::from_result(result),
        Err(payload) => CaseOutcome::Panicked(panic_message(payload.as_ref())),
    };
    let duration = start.elapsed();

    match &outcome {
        CaseOutcome::Passed => tracing::debug!(case = case.name(), ?duration, "passed"),
        CaseOutcome::Failed(err) | CaseOutcome::Skipped(err) => {
            tracing::debug!(case = case.name(), ?duration, %err, "stopped early");
        }
        CaseOutcome::Panicked(message) => {
            tracing::debug!(case = case.name(), ?duration, message = message.as_str(), "panicked");
        }
    }

    CaseReport::new(case.name(), outcome, duration)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
