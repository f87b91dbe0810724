use super::*;
use crucible_assert::{test_assert, test_assume};
use pretty_assertions::assert_eq;

fn passes() -> CaseResult {
    test_assert!(2 + 2 == 4);
    Ok(())
}

fn skips() -> CaseResult {
    let have_hw_entropy = false;
    test_assume!(have_hw_entropy);
    Ok(())
}

fn fails() -> CaseResult {
    let seeded = false;
    test_assert!(seeded);
    Ok(())
}

fn run(suite: &Suite, args: &[&str]) -> (Result<i32, ConfigError>, String) {
    let mut out = Vec::new();
    let code = run_with_args(suite, args.iter().copied(), &mut out);
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_run_with_args_clean_suite() {
    let suite = Suite::new("entropy").case("passes", passes).case("skips", skips);
    let (code, text) = run(&suite, &["--no-parallel"]);
    assert_eq!(code, Ok(0));
    assert!(text.ends_with("PASSED (2 / 2 tests (1 skipped))\n"));
}

#[test]
fn test_run_with_args_failure() {
    let suite = Suite::new("entropy").case("passes", passes).case("fails", fails);
    let (code, text) = run(&suite, &[]);
    assert_eq!(code, Ok(1));
    assert!(text.contains("  seeded\n"));
}

#[test]
fn test_run_with_args_nothing_selected() {
    let suite = Suite::new("entropy").case("passes", passes).case("fails", fails);
    let (code, text) = run(&suite, &["xor_round_trip"]);
    assert_eq!(code, Ok(0));
    assert!(text.ends_with("NO TESTS RAN (0 / 0 tests (0 skipped), 2 filtered out)\n"));
}

#[test]
fn test_run_with_args_libtest_arguments() {
    let suite = Suite::new("entropy").case("passes", passes).case("fails", fails);
    let (code, _) = run(&suite, &["--test-threads", "1", "--skip", "fails", "--format", "pretty"]);
    assert_eq!(code, Ok(0));
}

#[test]
fn test_run_with_args_empty_suite() {
    let (code, _) = run(&Suite::new("entropy"), &[]);
    assert_eq!(code, Ok(2));
}

#[test]
fn test_run_with_args_list() {
    let suite = Suite::new("entropy")
        .case("ctr_drbg_seed", passes)
        .case("hmac_drbg_seed", fails)
        .case("ctr_drbg_reseed", passes);
    let (code, text) = run(&suite, &["--list", "ctr"]);
    assert_eq!(code, Ok(0));
    assert_eq!(text, "ctr_drbg_seed\nctr_drbg_reseed\n");
}

#[test]
fn test_run_with_args_bad_flag_value() {
    let suite = Suite::new("entropy").case("passes", passes);
    let (code, text) = run(&suite, &["--threads=zero"]);
    assert!(matches!(code, Err(ConfigError::InvalidThreads { .. })));
    assert!(text.is_empty());
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
