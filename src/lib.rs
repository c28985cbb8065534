#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std

//! # tagmap
//!
//! Statically-typed, zero-runtime-overhead heterogeneous associative
//! container: a fixed-size ordered collection of (compile-time key, value)
//! pairs where every value may have a distinct type and keys are string
//! literals lifted into types. Named-field ergonomics, tuple-style generic
//! access, and no runtime key lookup, hashing, or boxing anywhere.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (True/False), Nibble (X0-XF), Chr, Peano indices          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Tags                                                    |
//! |  - TCons/TNil character lists, TagEq, UniqueTagList               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Map Core                                                |
//! |  - Tagged, Nil/Cons, Find/At, Concat/Pluck, Visit/Traverse        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API                                                |
//! |  - tag!, tag_map!, get!, take!, apply!, cut!, Pretty formatting   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Tags are routed to slots structurally: `tag!("name")` decomposes the
//! literal into type-level characters (six nibbles each), so the same
//! literal written anywhere produces the same type, and slot resolution is
//! ordinary trait inference. Tag-uniqueness is a trait bound every
//! construction path must satisfy, which makes a duplicated key a compile
//! error before any instance can exist.
//!
//! ## Quick Start
//!
//! ```
//! use tagmap::{apply, cut, get, tag_map};
//!
//! let person = tag_map! {
//!     "name" => "Alice",
//!     "age" => 30,
//! };
//!
//! // Keyed access, resolved at compile time.
//! assert_eq!(get!(person, "name"), &"Alice");
//!
//! // Multi-key access in requested order.
//! let (age, name) = get!(person, "age", "name");
//! assert_eq!((*age, *name), (30, "Alice"));
//!
//! // Spread selected values into a function.
//! let line = apply!(
//!     |name: &&str, age: &i32| format!("{name} is {age}"),
//!     person, "name", "age"
//! );
//! assert_eq!(line, "Alice is 30");
//!
//! // Diagnostics rendering.
//! assert_eq!(
//!     format!("{}", person.display()),
//!     r#"{ "name": "Alice", "age": "30" }"#,
//! );
//!
//! // Projection into a smaller, independent map.
//! let just_age = cut!(person, "age");
//! assert_eq!(get!(just_age, "age"), &30);
//! ```
//!
//! ## Static rejection
//!
//! There is no runtime error path: duplicate keys, lookups of absent keys,
//! mismatched conversions, and non-printable slot types are all rejected
//! while the map *type* is formed.
//!
//! ```compile_fail
//! use tagmap::tag_map;
//!
//! let bad = tag_map! { "x" => 1, "x" => 2.0 };
//! ```

// Allow `::tagmap` to work inside the crate itself
extern crate self as tagmap;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Tags
// =============================================================================
pub mod tag;

// =============================================================================
// Layer 2: Map Core
// =============================================================================
pub mod map;
mod tagged;

// =============================================================================
// Layer 3: User API
// =============================================================================
pub mod fmt;

// Syntax macros (tag_map!, get!, take!, apply!, cut!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use fmt::Pretty;
pub use map::{Cons, Nil, TagMap};
pub use tag::{Tag, TagName};
pub use tagged::Tagged;

// Re-export proc-macros
pub use macros::tag;

/// Common items for working with tag maps.
pub mod prelude {
    pub use crate::map::{
        AsMuts, AsRefs, At, Cloned, Concat, Find, FromMap, Pluck, TagMap, Traverse,
        TraverseMut, TraverseOwned, Visit, VisitMut, VisitOwned, concat, cons, pluck,
    };
    pub use crate::tag::{Tag, TagName, UniqueTagList};
    pub use crate::tagged::Tagged;
    pub use crate::{apply, cut, get, tag, tag_map, take};
}
