use super::*;
use crucible_assert::{CaseError, Location};
use pretty_assertions::assert_eq;

fn here() -> Location {
    Location::new("suites/test_suite_cipher.rs", 42)
}

fn report(name: &str, outcome: CaseOutcome) -> CaseReport {
    CaseReport::new(name, outcome, Duration::from_millis(10))
}

#[test]
fn test_outcome_from_result() {
    assert!(CaseOutcome::from_result(Ok(())).is_passed());
    assert!(CaseOutcome::from_result(Err(CaseError::failed("ret == 0", here()))).is_failed());
    assert!(CaseOutcome::from_result(Err(CaseError::skipped("have_aesni", here()))).is_skipped());
}

#[test]
fn test_outcome_panicked_counts_as_failed() {
    let outcome = CaseOutcome::Panicked("index out of bounds".to_string());
    assert!(outcome.is_failed());
    assert!(!outcome.is_passed());
    assert!(!outcome.is_skipped());
}

#[test]
fn test_summary_counts() {
    let mut summary = Summary::new("cipher");
    summary.add_report(report("a", CaseOutcome::Passed));
    summary.add_report(report("b", CaseOutcome::Passed));
    summary.add_report(report(
        "c",
        CaseOutcome::Failed(CaseError::failed("x", here())),
    ));
    summary.add_report(report("d", CaseOutcome::Panicked("boom".to_string())));
    summary.add_report(report(
        "e",
        CaseOutcome::Skipped(CaseError::skipped("y", here())),
    ));

    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.total(), 5);
    assert_eq!(summary.not_failed(), 3);
    assert_eq!(summary.duration, Duration::from_millis(50));
    assert_eq!(summary.reports.len(), 5);
}

#[test]
fn test_summary_exit_codes() {
    let empty = Summary::new("empty");
    assert_eq!(empty.exit_code(), 2);

    let mut clean = Summary::new("clean");
    clean.add_report(report("a", CaseOutcome::Passed));
    clean.add_report(report(
        "b",
        CaseOutcome::Skipped(CaseError::skipped("y", here())),
    ));
    assert!(!clean.has_failures());
    assert_eq!(clean.exit_code(), 0);

    let mut failing = Summary::new("failing");
    failing.add_report(report(
        "a",
        CaseOutcome::Failed(CaseError::failed("x", here())),
    ));
    assert!(failing.has_failures());
    assert_eq!(failing.exit_code(), 1);
}

#[test]
fn test_summary_only_skips_is_not_empty() {
    let mut summary = Summary::new("skips");
    summary.add_report(report(
        "a",
        CaseOutcome::Skipped(CaseError::skipped("y", here())),
    ));
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn test_summary_everything_filtered_out_exits_zero() {
    let summary = Summary {
        filtered_out: 3,
        ..Summary::new("cipher")
    };
    assert_eq!(summary.total(), 0);
    assert_eq!(summary.exit_code(), 0);
}
