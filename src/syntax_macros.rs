//! Declarative construction and access macros.
//!
//! These are thin sugar over the container's traits: every one of them
//! expands through `$crate` paths and the `tag!` proc-macro, and every map
//! they produce passes through the uniqueness gate [`crate::map::checked`].

// =============================================================================
// tag_map! - Build a map from key/value pairs
// =============================================================================

/// Build a tag map from `"key" => value` pairs.
///
/// Values are auto-wrapped with their declared tags; slot order is the
/// written order. Duplicate keys are rejected at compile time.
///
/// # Example
///
/// ```
/// use tagmap::{get, tag_map};
///
/// let person = tag_map! {
///     "name" => "Alice",
///     "age" => 30,
/// };
/// assert_eq!(get!(person, "age"), &30);
/// ```
#[macro_export]
macro_rules! tag_map {
    () => { $crate::map::Nil };
    ($($key:literal => $value:expr),+ $(,)?) => {
        $crate::map::checked($crate::__tag_map_build!($($key => $value),+))
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __tag_map_build {
    ($key:literal => $value:expr) => {
        $crate::map::cons(
            $crate::Tagged::<$crate::tag!($key), _>::new($value),
            $crate::map::Nil,
        )
    };
    ($key:literal => $value:expr, $($rest_key:literal => $rest_value:expr),+) => {
        $crate::map::cons(
            $crate::Tagged::<$crate::tag!($key), _>::new($value),
            $crate::__tag_map_build!($($rest_key => $rest_value),+),
        )
    };
}

// =============================================================================
// get! - Fetch by tag(s)
// =============================================================================

/// Fetch values by tag.
///
/// One key yields a single reference; several keys yield a tuple of
/// references in the *requested* order, which need not be the map's
/// internal order. Duplicate keys are permitted and alias the same slot.
///
/// ```
/// use tagmap::{get, tag_map};
///
/// let m = tag_map! { "x" => 1, "y" => 2 };
/// assert_eq!(get!(m, "y"), &2);
/// assert_eq!(get!(m, "y", "x", "y"), (&2, &1, &2));
/// ```
///
/// A key absent from the map fails to compile:
///
/// ```compile_fail
/// use tagmap::{get, tag_map};
///
/// let m = tag_map! { "x" => 1 };
/// get!(m, "y");
/// ```
#[macro_export]
macro_rules! get {
    ($map:expr, $key:literal $(,)?) => {
        $map.get::<$crate::tag!($key), _>()
    };
    ($map:expr, $($key:literal),+ $(,)?) => {{
        let __map = &$map;
        ($(__map.get::<$crate::tag!($key), _>()),+)
    }};
}

/// Move the value under one tag out of the map, discarding the rest.
///
/// ```
/// use tagmap::{tag_map, take};
///
/// let m = tag_map! { "greeting" => String::from("hi"), "n" => 3 };
/// let greeting: String = take!(m, "greeting");
/// assert_eq!(greeting, "hi");
/// ```
#[macro_export]
macro_rules! take {
    ($map:expr, $key:literal $(,)?) => {
        $map.take::<$crate::tag!($key), _>()
    };
}

// =============================================================================
// apply! - Spread selected values into a function
// =============================================================================

/// Invoke a function with the values under the given tags spread as
/// individual reference arguments, in requested order.
///
/// ```
/// use tagmap::{apply, tag_map};
///
/// let m = tag_map! { "a" => 2, "b" => 21 };
/// let product = apply!(|a: &i32, b: &i32| a * b, m, "a", "b");
/// assert_eq!(product, 42);
/// ```
#[macro_export]
macro_rules! apply {
    ($f:expr, $map:expr, $($key:literal),+ $(,)?) => {{
        let __map = &$map;
        ($f)($(__map.get::<$crate::tag!($key), _>()),+)
    }};
}

// =============================================================================
// cut! - Project a subset of tags into a new map
// =============================================================================

/// Build a new, independent map from a subset of the source's tags, in the
/// *requested* order. Consumes the source and moves the selected values;
/// for a copying cut that leaves the source intact, project over
/// `as_refs()` and clone the result:
///
/// ```
/// use tagmap::prelude::*;
///
/// let m = tag_map! { "a" => String::from("one"), "b" => String::from("two") };
/// let copied = cut!(m.as_refs(), "b").cloned();
/// assert_eq!(get!(m, "b"), get!(copied, "b"));
/// ```
///
/// ```
/// use tagmap::{cut, get, tag_map};
///
/// let m = tag_map! { "a" => 1, "b" => 2, "c" => 3 };
/// let projected = cut!(m, "c", "a");
/// assert_eq!(projected.index_of::<tagmap::tag!("c"), _>(), 0);
/// assert_eq!(get!(projected, "a"), &1);
/// ```
///
/// Requesting the same tag twice would produce a duplicate key list and is
/// rejected like any other uniqueness violation:
///
/// ```compile_fail
/// use tagmap::{cut, tag_map};
///
/// let m = tag_map! { "a" => 1, "b" => 2 };
/// let twice = cut!(m, "a", "a");
/// ```
#[macro_export]
macro_rules! cut {
    ($map:expr, $($key:literal),+ $(,)?) => {
        $crate::map::checked($crate::__cut_build!($map, $($key),+))
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __cut_build {
    ($map:expr, $key:literal) => {{
        let (__entry, _) = $crate::map::pluck::<$crate::tag!($key), _, _>($map);
        $crate::map::cons(__entry, $crate::map::Nil)
    }};
    ($map:expr, $key:literal, $($rest:literal),+) => {{
        let (__entry, __remainder) = $crate::map::pluck::<$crate::tag!($key), _, _>($map);
        $crate::map::cons(__entry, $crate::__cut_build!(__remainder, $($rest),+))
    }};
}
