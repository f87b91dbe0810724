//! Assertion primitives for test cases that stop at their first problem.
//!
//! A test case is an ordinary function returning [`CaseResult`]. Every
//! assertion macro in this crate evaluates its operands once, and on a
//! problem calls into [`report`] exactly once and returns early with
//! `Err(CaseError)`. Resources held by the case are released by `Drop`
//! (owned buffers, [`Deferred`] guards) on every exit path, so there is no
//! cleanup label to jump to.
//!
//! # Primitives
//!
//! | Macro | Stops with |
//! |-------|-----------|
//! | [`test_assert!`] | FAILED when the condition is false |
//! | [`test_equal!`] | FAILED when the operands differ after widening to `u64` |
//! | [`test_le_u!`] / [`test_le_s!`] | FAILED when `left > right` (unsigned / signed) |
//! | [`assert_alloc!`] | FAILED when a non-empty zeroed allocation fails |
//! | [`assert_alloc_weak!`] | SKIPPED when a non-empty zeroed allocation fails |
//! | [`assert_compare!`] | FAILED when two buffers differ in length or content |
//! | [`test_assume!`] | SKIPPED when the condition is false |
//!
//! [`helper_assert!`] is for code outside a test case: it terminates the
//! process instead of returning.
//!
//! # Usage
//!
//! ```text
//! fn case_md_output_length() -> CaseResult {
//!     let mut output: Option<Vec<u8>> = None;
//!     assert_alloc!(output, 32);
//!     let output = output.as_deref().unwrap_or_default();
//!     test_equal!(digest(b"abc", output), 0);
//!     assert_compare!(output, EXPECTED);
//!     Ok(())
//! }
//! ```

pub mod alloc;
mod cleanup;
pub mod compare;
mod error;
#[doc(hidden)]
pub mod helper;
mod macros;
pub mod operand;
pub mod report;
mod scalar;
mod step;

pub use alloc::{Allocator, BudgetAllocator, FailingAllocator, SystemAllocator, Zeroed};
pub use cleanup::{defer, Deferred};
pub use error::{CaseError, CaseResult, Location, Verdict};
pub use scalar::{max, min};
pub use step::in_step;
