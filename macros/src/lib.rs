//! Procedural macros for the `tagmap` compile-time tagged map.
//!
//! The single user-facing macro is [`tag!`], the literal-to-type lifting
//! mechanism: it turns a string literal (or bare identifier) written by the
//! caller into the type-level character list that identifies one slot of a
//! tag map.
//!
//! ```ignore
//! type Name = tag!("name");
//! type Age  = tag!(age);       // identifiers work too
//! ```
//!
//! The same literal always expands to the same structural type, so tags
//! written at different call sites unify without any shared declaration.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod inner;

/// Lift a string literal (or identifier) into a type-level tag.
///
/// Usable in type position: `tag!("name")` expands to
/// `TCons<Chr<X6, XE, ...>, ... TNil>`, one `Chr` per Unicode scalar of the
/// input. Full Unicode is supported; each scalar is decomposed into six
/// nibbles (24 bits).
#[proc_macro]
pub fn tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::tag_type::TagInput);
    inner::tag_type::expand_tag(input).into()
}
