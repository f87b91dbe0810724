use std::num::NonZeroUsize;

use super::*;
use crucible_assert::{test_assume, test_equal, CaseResult};
use pretty_assertions::assert_eq;

fn passes() -> CaseResult {
    test_equal!(16u32, 16usize);
    Ok(())
}

fn fails() -> CaseResult {
    test_equal!(5, 6);
    Ok(())
}

fn skips() -> CaseResult {
    let have_aesni = false;
    test_assume!(have_aesni);
    Ok(())
}

fn panics() -> CaseResult {
    let table: Vec<u8> = Vec::new();
    let _ = table.get(3).copied().unwrap();
    Ok(())
}

fn formatted_panic() -> CaseResult {
    let round = 11;
    panic!("round {round} out of range");
}

fn suite() -> Suite {
    Suite::new("cipher")
        .case("aes_passes", passes)
        .case("aes_fails", fails)
        .case("aesni_skips", skips)
        .case("gcm_panics", panics)
        .case("gcm_passes", passes)
}

fn sequential() -> RunnerConfig {
    RunnerConfig {
        parallel: false,
        ..RunnerConfig::default()
    }
}

fn names(summary: &Summary) -> Vec<&str> {
    summary.reports.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_run_sequential_counts() {
    let summary = SuiteRunner::with_config(sequential()).run(&suite());
    assert_eq!(summary.suite, "cipher");
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn test_run_outcomes_by_case() {
    let summary = SuiteRunner::with_config(sequential()).run(&suite());
    let outcomes: Vec<_> = summary.reports.iter().map(|r| &r.outcome).collect();

    assert!(outcomes[0].is_passed());
    match outcomes[1] {
        CaseOutcome::Failed(err) => assert_eq!(err.condition, "5 == 6"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(outcomes[2].is_skipped());
    assert!(matches!(outcomes[3], CaseOutcome::Panicked(_)));
}

#[test]
fn test_parallel_matches_registration_order() {
    let config = RunnerConfig {
        threads: NonZeroUsize::new(4),
        ..RunnerConfig::default()
    };
    let parallel = SuiteRunner::with_config(config).run(&suite());
    let serial = SuiteRunner::with_config(sequential()).run(&suite());

    assert_eq!(names(&parallel), names(&serial));
    assert_eq!(
        names(&parallel),
        vec!["aes_passes", "aes_fails", "aesni_skips", "gcm_panics", "gcm_passes"]
    );
    assert_eq!(parallel.failed, serial.failed);
}

#[test]
fn test_filter_selects_substring() {
    let config = RunnerConfig {
        filter: Some("gcm".to_string()),
        ..sequential()
    };
    let summary = SuiteRunner::with_config(config).run(&suite());
    assert_eq!(names(&summary), vec!["gcm_panics", "gcm_passes"]);
}

#[test]
fn test_filter_matching_nothing_exits_zero() {
    let config = RunnerConfig {
        filter: Some("chacha".to_string()),
        ..RunnerConfig::default()
    };
    let summary = SuiteRunner::with_config(config).run(&suite());
    assert_eq!(summary.total(), 0);
    assert_eq!(summary.filtered_out, 5);
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn test_empty_suite_exits_two() {
    let summary = SuiteRunner::new().run(&Suite::new("empty"));
    assert_eq!(summary.exit_code(), 2);
}

#[test]
fn test_run_case_captures_panic_message() {
    let report = run_case(&TestCase::new("p", formatted_panic));
    assert_eq!(
        report.outcome,
        CaseOutcome::Panicked("round 11 out of range".to_string())
    );
}

#[test]
fn test_panic_message_payloads() {
    assert_eq!(panic_message(&"static"), "static");
    assert_eq!(panic_message(&String::from("owned")), "owned");
    assert_eq!(panic_message(&7u8), "non-string panic payload");
}
