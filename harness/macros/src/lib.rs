use darling::ast::NestedMeta;
use darling::{Error, FromMeta};
use proc_macro::TokenStream;
use quote::quote;

#[derive(Debug, FromMeta)]
struct BenchMacroArgs {
    #[darling(default)]
    oneshot: bool,
    #[darling(default)]
    name: Option<String>,
}

/// Turns a `fn(&Bencher)` into the `main` of a `harness = false` bench target.
///
/// The function runs once per iteration (`-n`, default 1). Every iteration but
/// the last is a warmup. In each iteration the function should:
/// 1. **Prepare** its input.
/// 2. **Time** exactly one region with `bencher.time(..)` or `bencher.start_timing()`.
/// 3. **Check** the result.
///
/// `#[bench(oneshot)]` always runs a single iteration. `#[bench(name = "..")]`
/// replaces the benchmark name, which otherwise is the file stem.
///
/// ```ignore
/// use harness::{bench, black_box, Bencher};
///
/// #[bench]
/// fn reversed(bencher: &Bencher) {
///     let list = black_box((0..100_000).rev().collect::<Vec<u32>>());
///     let sorted = bencher.time(|| seqsort::sort(&list)).unwrap();
///     assert!(seqsort::is_sorted(&sorted));
/// }
/// ```
#[proc_macro_attribute]
pub fn bench(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    if input.sig.inputs.len() != 1 {
        return syn::Error::new_spanned(
            &input.sig,
            "a benchmark function takes exactly one `&harness::Bencher` argument",
        )
        .to_compile_error()
        .into();
    }
    let attr_args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(Error::from(e).write_errors());
        }
    };
    let args = match BenchMacroArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(e.write_errors());
        }
    };
    let ident = &input.sig.ident;
    let oneshot = args.oneshot;
    let name = match &args.name {
        Some(name) => quote!(::std::option::Option::Some(#name)),
        None => quote!(::std::option::Option::None),
    };
    let result = quote! {
        #input

        fn main() {
            ::harness::run(
                ::harness::BenchTarget {
                    crate_name: env!("CARGO_PKG_NAME"),
                    file: file!(),
                    name: #name,
                    oneshot: #oneshot,
                },
                #ident,
            );
        }
    };
    result.into()
}
