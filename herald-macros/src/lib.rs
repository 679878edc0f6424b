//! Procedural macros for Herald.
//!
//! - `#[derive(Event)]` - Declares an event kind and its ancestry

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod event;

/// Derive macro for implementing `Event` and the matching `Derives` impls.
///
/// # Attributes
///
/// - `#[event(name = "...")]` overrides the kind's name. Defaults to the
///   module path plus the type name.
/// - `#[event(extends(Parent, Grandparent, ...))]` lists every ancestor,
///   direct parent first.
/// - `#[event(parent)]` marks the field holding the direct parent. It is
///   required whenever `extends` is given.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug, Event)]
/// struct Connected { peer: String }
///
/// #[derive(Clone, Debug, Event)]
/// #[event(extends(Connected))]
/// struct Reconnected {
///     #[event(parent)]
///     base: Connected,
///     attempt: u32,
/// }
/// ```
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    event::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
