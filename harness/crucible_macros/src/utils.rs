//! Shared validation helpers for the case attribute.

use syn::{Attribute, ReturnType, Signature};

/// Attributes that belong on the generated `#[test]` rather than on the
/// inner case function.
const OUTER_ATTRS: &[&str] = &["doc", "ignore", "should_panic", "cfg", "cfg_attr"];

/// Validate that a function can be driven as a test case.
pub fn validate_case_signature(sig: &Signature) -> syn::Result<()> {
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "#[case] functions must be synchronous",
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "#[case] functions must not be generic",
        ));
    }
    if !sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "#[case] functions must not take parameters",
        ));
    }
    if matches!(sig.output, ReturnType::Default) {
        return Err(syn::Error::new_spanned(
            sig,
            "#[case] functions must return `CaseResult`",
        ));
    }
    Ok(())
}

/// Split attributes into those for the generated test and those for the
/// inner function (lint levels and anything else).
pub fn split_test_attrs(attrs: &[Attribute]) -> (Vec<&Attribute>, Vec<&Attribute>) {
    attrs
        .iter()
        .partition(|attr| OUTER_ATTRS.iter().any(|name| attr.path().is_ident(name)))
}
