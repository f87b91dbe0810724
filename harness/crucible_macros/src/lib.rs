//! Procedural macros for crucible test cases.
//!
//! - `#[case]`: run a `fn() -> CaseResult` as a libtest `#[test]`, so the
//!   early-return assertions of `crucible_assert` work under `cargo test`.

use proc_macro::TokenStream;

mod case;
mod utils;

/// Turn a case function into a `#[test]`.
///
/// The function must take no parameters, must not be `async` or generic,
/// and must return `CaseResult`. A FAILED outcome panics with the rendered
/// failure; a SKIPPED outcome passes and logs the skip reason.
///
/// # Arguments
///
/// - `name = "..."`: display name used in failure and skip messages.
///   Defaults to the function name.
///
/// # Example
///
/// ```ignore
/// #[case(name = "AES-128-ECB encrypt, NIST KAT #1")]
/// fn aes_128_ecb_encrypt() -> CaseResult {
///     let mut out: Option<Vec<u8>> = None;
///     assert_alloc!(out, 16);
///     test_equal!(aes_crypt_ecb(&KEY, &PLAIN, out.as_deref_mut()), 0);
///     assert_compare!(out.unwrap_or_default(), CIPHER);
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn case(attr: TokenStream, item: TokenStream) -> TokenStream {
    case::expand_case(attr, item)
}
