//! Failure and skip reporters called by the assertion macros.
//!
//! Each function here is called at most once per stopped case: the macro
//! that calls it returns immediately afterwards. The comparison reporters
//! return `Ok(())` when the operands satisfy the relation, so the macro only
//! has to propagate the `Err`.
//!
//! Operand diagnostics print the 64-bit hex pattern followed by the decimal
//! value, so sign-related surprises are visible in the failure output:
//!
//! ```text
//! lhs = 0xffffffffffffffff = -1
//! rhs = 0x0000000000000001 = 1
//! ```

use std::borrow::Cow;

use crate::error::{CaseError, CaseResult, Location};

/// Record a failed condition.
#[cold]
pub fn fail(condition: &'static str, line: u32, file: &'static str) -> CaseError {
    fail_at(condition, Location::new(file, line))
}

/// Record an unmet precondition; the case is skipped, not failed.
#[cold]
pub fn skip(condition: &'static str, line: u32, file: &'static str) -> CaseError {
    skip_at(condition, Location::new(file, line))
}

/// [`fail`] for a condition built at run time.
#[cold]
pub fn fail_at(condition: impl Into<Cow<'static, str>>, location: Location) -> CaseError {
    let condition = condition.into();
    tracing::debug!(condition = &*condition, %location, "check failed");
    CaseError::failed(condition, location)
}

/// [`skip`] for a condition built at run time.
#[cold]
pub fn skip_at(condition: impl Into<Cow<'static, str>>, location: Location) -> CaseError {
    let condition = condition.into();
    tracing::debug!(condition = &*condition, %location, "case skipped");
    CaseError::skipped(condition, location)
}

/// Check `left == right` on operands already widened to `u64`.
#[expect(
    clippy::cast_possible_wrap,
    reason = "decimal diagnostic shows the signed reading of the widened bits"
)]
pub fn equal(
    description: &'static str,
    line: u32,
    file: &'static str,
    left: u64,
    right: u64,
) -> CaseResult {
    if left == right {
        return Ok(());
    }
    Err(fail(description, line, file).with_lines(
        format!("lhs = 0x{left:016x} = {}", left as i64),
        format!("rhs = 0x{right:016x} = {}", right as i64),
    ))
}

/// Check `left <= right` for unsigned operands.
pub fn le_u(
    description: &'static str,
    line: u32,
    file: &'static str,
    left: u64,
    right: u64,
) -> CaseResult {
    if left <= right {
        return Ok(());
    }
    Err(fail(description, line, file).with_lines(
        format!("lhs = 0x{left:016x} = {left}"),
        format!("rhs = 0x{right:016x} = {right}"),
    ))
}

/// Check `left <= right` for signed operands.
pub fn le_s(
    description: &'static str,
    line: u32,
    file: &'static str,
    left: i64,
    right: i64,
) -> CaseResult {
    if left <= right {
        return Ok(());
    }
    // `{:x}` on a signed integer prints its two's-complement bits.
    Err(fail(description, line, file).with_lines(
        format!("lhs = 0x{left:016x} = {left}"),
        format!("rhs = 0x{right:016x} = {right}"),
    ))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap_err to reach the failure record"
)]
