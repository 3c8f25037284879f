use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_quote, ItemFn, Stmt};

/// Register the annotated function's thread as the main thread.
///
/// Put it on `fn main` so the capture happens on the entry thread before
/// anything else can query the registry.
///
/// ```rust,ignore
/// #[spindle::main]
/// fn main() {
///     assert!(spindle::is_main_thread());
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, input: TokenStream) -> TokenStream {
    let stmt: Stmt = parse_quote! {
        ::spindle::spindle_runtime::register_main_thread();
    };
    prepend_statement("main", args, input, stmt)
}

/// Assert (in debug builds) that the annotated function runs on the main thread.
///
/// ```rust,ignore
/// #[spindle::main_thread]
/// fn redraw() {
///     // only ever called from the entry thread
/// }
/// ```
#[proc_macro_attribute]
pub fn main_thread(args: TokenStream, input: TokenStream) -> TokenStream {
    let stmt: Stmt = parse_quote! {
        ::core::debug_assert!(
            ::spindle::spindle_runtime::is_main_thread(),
            "called off the main thread"
        );
    };
    prepend_statement("main_thread", args, input, stmt)
}

fn prepend_statement(
    macro_name: &str,
    args: TokenStream,
    input: TokenStream,
    stmt: Stmt,
) -> TokenStream {
    if !args.is_empty() {
        let args = proc_macro2::TokenStream::from(args);
        return syn::Error::new_spanned(
            args,
            format!("#[{}] does not take arguments", macro_name),
        )
        .to_compile_error()
        .into();
    }

    let mut input_fn = syn::parse_macro_input!(input as ItemFn);
    input_fn.block.stmts.insert(0, stmt);

    let expanded = quote! {
        #input_fn
    };

    TokenStream::from(expanded)
}
