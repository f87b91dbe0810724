//! `#[case]` attribute implementation.
//!
//! Generates a `#[test]` function with the same name whose body defines the
//! original function as an inner item and hands it to
//! `crucible_runner::libtest::run`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, Ident, ItemFn, LitStr, Token};

use crate::utils::{split_test_attrs, validate_case_signature};

/// Parsed `#[case(...)]` arguments.
struct CaseArgs {
    name: Option<LitStr>,
}

impl Parse for CaseArgs {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(syn::Error::new(key.span(), "duplicate `name` argument"));
                    }
                    name = Some(input.parse::<LitStr>()?);
                }
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown argument `{other}`, expected `name`"),
                    ));
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(CaseArgs { name })
    }
}

/// Main entry point for the `#[case]` attribute.
pub fn expand_case(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as CaseArgs);
    let func = parse_macro_input!(item as ItemFn);

    match expand_case_impl(&args, &func) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_case_impl(args: &CaseArgs, func: &ItemFn) -> syn::Result<TokenStream2> {
    validate_case_signature(&func.sig)?;

    let fn_name = &func.sig.ident;
    let output = &func.sig.output;
    let body = &func.block;
    let vis = &func.vis;
    let (outer_attrs, inner_attrs) = split_test_attrs(&func.attrs);

    let display_name = match &args.name {
        Some(name) => quote! { #name },
        None => quote! { ::core::stringify!(#fn_name) },
    };

    Ok(quote! {
        #(#outer_attrs)*
        #[test]
        #vis fn #fn_name() {
            #(#inner_attrs)*
            fn #fn_name() #output #body

            ::crucible_runner::libtest::run(#display_name, #fn_name);
        }
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
