//! Proc macros for the console plugin SDK.
//!
//! Provides the `#[plugin_tap]` attribute macro that turns a plain Rust
//! function into a WASM export speaking JSON over linear memory.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, PatType, parse_macro_input, spanned::Spanned};

/// Size of the static buffer each tap writes its JSON output into.
const OUTPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Marks a function as a tap implementation.
///
/// The function body is kept as `__inner_<name>` (callable from native
/// tests) and a `#[no_mangle] extern "C" fn <name>(ptr, len) -> i64`
/// wrapper is generated that:
/// 1. Reads JSON input from WASM memory (ptr, len), if the tap takes an argument
/// 2. Deserializes it into the argument type
/// 3. Calls the inner function
/// 4. Serializes the result to JSON
/// 5. Returns `ptr << 32 | len` of the output
///
/// # Example
///
/// ```ignore
/// #[plugin_tap]
/// pub fn tap_perm() -> Vec<PermissionDefinition> {
///     vec![PermissionDefinition::new("plugin:example:manage", "Manage example")]
/// }
/// ```
#[proc_macro_attribute]
pub fn plugin_tap(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = parse_macro_input!(item as ItemFn);

    match expand_tap(&input_fn) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_tap(input_fn: &ItemFn) -> syn::Result<TokenStream2> {
    let fn_name = &input_fn.sig.ident;
    let inner_fn_name = format_ident!("__inner_{}", fn_name);

    let fn_vis = &input_fn.vis;
    let fn_block = &input_fn.block;
    let fn_output = &input_fn.sig.output;
    let fn_inputs = &input_fn.sig.inputs;

    if fn_inputs.len() > 1 {
        return Err(syn::Error::new(
            fn_inputs.span(),
            "plugin_tap functions take at most one argument",
        ));
    }

    let (inner_fn, call) = match fn_inputs.first() {
        Some(FnArg::Typed(PatType {
            pat: param_name,
            ty: param_type,
            ..
        })) => {
            let inner = quote! {
                #[inline]
                fn #inner_fn_name(#param_name: #param_type) #fn_output #fn_block
            };
            let call = quote! {
                let input_json = unsafe {
                    let slice = core::slice::from_raw_parts(ptr as *const u8, len as usize);
                    core::str::from_utf8_unchecked(slice)
                };

                let input: #param_type = match console_plugin_sdk::serde_json::from_str(input_json) {
                    Ok(v) => v,
                    Err(e) => {
                        return write_output(&format!("{{\"error\": \"deserialize: {}\"}}", e));
                    }
                };

                let result = #inner_fn_name(input);
            };
            (inner, call)
        }
        Some(FnArg::Receiver(receiver)) => {
            return Err(syn::Error::new(
                receiver.span(),
                "plugin_tap functions cannot have self parameters",
            ));
        }
        None => {
            let inner = quote! {
                #[inline]
                fn #inner_fn_name() #fn_output #fn_block
            };
            let call = quote! {
                let _ = (ptr, len);
                let result = #inner_fn_name();
            };
            (inner, call)
        }
    };

    Ok(quote! {
        #inner_fn

        #[doc(hidden)]
        #[unsafe(no_mangle)]
        #fn_vis extern "C" fn #fn_name(ptr: i32, len: i32) -> i64 {
            fn write_output(s: &str) -> i64 {
                static mut OUTPUT_BUFFER: [u8; #OUTPUT_BUFFER_SIZE] = [0u8; #OUTPUT_BUFFER_SIZE];
                let bytes = s.as_bytes();
                let write_len = bytes.len().min(#OUTPUT_BUFFER_SIZE);
                unsafe {
                    let buf = &raw mut OUTPUT_BUFFER;
                    core::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, write_len);
                    ((buf as i64) << 32) | (write_len as i64)
                }
            }

            #call

            let output = match console_plugin_sdk::serde_json::to_string(&result) {
                Ok(json) => json,
                Err(e) => format!("{{\"error\": \"serialize: {}\"}}", e),
            };

            write_output(&output)
        }
    })
}
