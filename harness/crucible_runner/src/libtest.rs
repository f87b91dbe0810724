//! Bridge from case functions to libtest `#[test]` functions.
//!
//! Used by the code `#[case]` generates; call [`run`] directly from a plain
//! `#[test]` to get the same behavior without the attribute.

use crucible_assert::CaseResult;

use crate::render;

/// Run `case` inside a libtest test.
///
/// # Panics
///
/// Panics with the rendered failure when the case FAILS. A SKIPPED case
/// returns normally, since libtest has no runtime skip; the reason is logged
/// and printed to stderr.
pub fn run(name: &str, case: fn() -> CaseResult) {
    crate::init_tracing();

    match case() {
        Ok(()) => {}
        Err(err) if err.is_skipped() => {
            tracing::info!(case = name, %err, "case skipped");
            eprint!(
                "{}\n{}",
                render::status_line(name, "----"),
                render::failure_details(&err)
            );
        }
        Err(err) => {
            tracing::debug!(case = name, %err, "case failed");
            panic!("{}", render::failure_text(name, &err));
        }
    }
}

#[cfg(test)]
mod tests;
