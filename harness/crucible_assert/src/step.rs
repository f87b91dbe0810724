//! Step numbering for cases that loop over vectors or phases.

use crate::error::CaseResult;

/// Run `body` as step `step` of the current case.
///
/// A [`crate::CaseError`] coming out of `body` is tagged with `step`, unless
/// a nested `in_step` already tagged it. Use `?` on the result to keep
/// stopping the case.
///
/// ```text
/// for (i, vector) in VECTORS.iter().enumerate() {
///     in_step(i as u64, || {
///         test_equal!(encrypt(vector), 0);
///         Ok(())
///     })?;
/// }
/// ```
pub fn in_step<T>(step: u64, body: impl FnOnce() -> CaseResult<T>) -> CaseResult<T> {
    body().map_err(|err| err.at_step(step))
}
