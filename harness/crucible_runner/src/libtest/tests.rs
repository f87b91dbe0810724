use super::*;
use crucible_assert::{test_assume, test_le_u};

fn passes() -> CaseResult {
    test_le_u!(12u32, 16u32);
    Ok(())
}

fn skips() -> CaseResult {
    test_assume!(usize::BITS == 16);
    Ok(())
}

fn fails() -> CaseResult {
    test_le_u!(17u32, 16u32);
    Ok(())
}

#[test]
fn test_passing_case_returns() {
    run("passes", passes);
}

#[test]
fn test_skipped_case_returns() {
    run("skips", skips);
}

#[test]
#[should_panic(expected = "17u32 <= 16u32")]
fn test_failing_case_panics_with_condition() {
    run("fails", fails);
}

#[test]
#[should_panic(expected = "lhs = 0x0000000000000011 = 17")]
fn test_failing_case_panic_carries_operands() {
    run("fails", fails);
}
