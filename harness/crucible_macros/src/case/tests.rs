use super::*;
use syn::parse_quote;

fn expand(args: TokenStream2, func: ItemFn) -> syn::Result<String> {
    let args: CaseArgs = syn::parse2(args)?;
    expand_case_impl(&args, &func).map(|tokens| tokens.to_string())
}

#[test]
fn test_args_empty() {
    let args: CaseArgs = syn::parse2(quote! {}).unwrap();
    assert!(args.name.is_none());
}

#[test]
fn test_args_name() {
    let args: CaseArgs = syn::parse2(quote! { name = "CCM* encrypt" }).unwrap();
    assert_eq!(args.name.unwrap().value(), "CCM* encrypt");
}

#[test]
fn test_args_reject_unknown_and_duplicate() {
    assert!(syn::parse2::<CaseArgs>(quote! { stage = "x" }).is_err());
    assert!(syn::parse2::<CaseArgs>(quote! { name = "a", name = "b" }).is_err());
}

#[test]
fn test_expands_to_test_wrapper() {
    let func: ItemFn = parse_quote! {
        /// Checks the key schedule.
        #[ignore]
        #[allow(clippy::identity_op)]
        fn key_schedule() -> CaseResult {
            Ok(())
        }
    };
    let out = expand(quote! {}, func).unwrap();
    assert!(out.contains("# [test]"));
    assert!(out.contains("# [ignore]"));
    assert!(out.contains("crucible_runner :: libtest :: run"));
    assert!(out.contains("stringify ! (key_schedule)"));

    // Lint attributes go on the inner function, after the test header.
    let test_pos = out.find("# [test]").unwrap();
    let allow_pos = out.find("# [allow").unwrap();
    assert!(allow_pos > test_pos);
}

#[test]
fn test_expands_with_display_name() {
    let func: ItemFn = parse_quote! {
        fn ecb_kat_1() -> CaseResult { Ok(()) }
    };
    let out = expand(quote! { name = "AES-128-ECB #1" }, func).unwrap();
    assert!(out.contains("\"AES-128-ECB #1\""));
}

#[test]
fn test_rejects_bad_signatures() {
    let cases: Vec<ItemFn> = vec![
        parse_quote! { async fn a() -> CaseResult { Ok(()) } },
        parse_quote! { fn b<T>() -> CaseResult { Ok(()) } },
        parse_quote! { fn c(x: u8) -> CaseResult { Ok(()) } },
        parse_quote! { fn d() {} },
    ];
    for func in cases {
        assert!(expand(quote! {}, func).is_err());
    }
}
