use super::*;
use pretty_assertions::assert_eq;

const HERE: Location = Location::new("tests/cipher.rs", 42);

#[test]
fn test_failed_record() {
    let err = CaseError::failed("ret == 0", HERE);
    assert!(err.is_failed());
    assert!(!err.is_skipped());
    assert_eq!(err.step, None);
    assert_eq!(err.detail_lines().count(), 0);
}

#[test]
fn test_skipped_record() {
    let err = CaseError::skipped("have_aesni()", HERE);
    assert!(err.is_skipped());
    assert_eq!(err.verdict.as_str(), "skipped");
}

#[test]
fn test_display_includes_step_and_lines() {
    let err = CaseError::failed("len == 16", HERE)
        .with_lines("lhs = 1".to_string(), "rhs = 2".to_string())
        .at_step(3);
    assert_eq!(
        err.to_string(),
        "failed: `len == 16` at step 3, tests/cipher.rs:42; lhs = 1; rhs = 2"
    );
}

#[test]
fn test_innermost_step_wins() {
    let err = CaseError::failed("ok", HERE).at_step(7).at_step(1);
    assert_eq!(err.step, Some(7));
}

#[test]
fn test_location_display() {
    assert_eq!(HERE.to_string(), "tests/cipher.rs:42");
}
