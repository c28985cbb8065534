//! # Layer 1: Tags
//!
//! A tag is a compile-time string: a type-level list of [`Chr`]s produced by
//! the `tag!` macro. Tags have no runtime representation; they exist to
//! select a slot of a map at compile time and, optionally, to be printed.
//!
//! - `TNil` / `TCons`: the list structure.
//! - [`TagEq`]: value equality between two tags (same length, same chars).
//! - [`UniqueTagList`]: the pairwise-distinctness check every map
//!   construction path runs through.

use core::fmt;
use core::marker::PhantomData;

use crate::primitives::chr::TagChr;

pub mod eq;
pub mod unique;

pub use eq::TagEq;
pub use unique::{NotIn, UniqueKeys, UniqueTagList};

/// End of a tag's character list.
pub struct TNil;

/// One character of a tag, followed by the rest.
pub struct TCons<C, Rest>(PhantomData<(C, Rest)>);

/// A compile-time string identifier.
///
/// Implemented inductively over the character list; `LEN` counts characters
/// and `write_name` replays them into any [`fmt::Write`] sink.
pub trait Tag: 'static {
    const LEN: usize;

    fn write_name<W: fmt::Write>(w: &mut W) -> fmt::Result;
}

impl Tag for TNil {
    const LEN: usize = 0;

    fn write_name<W: fmt::Write>(_w: &mut W) -> fmt::Result {
        Ok(())
    }
}

impl<C: TagChr, R: Tag> Tag for TCons<C, R> {
    const LEN: usize = 1 + R::LEN;

    fn write_name<W: fmt::Write>(w: &mut W) -> fmt::Result {
        w.write_char(C::CHAR)?;
        R::write_name(w)
    }
}

/// Zero-sized displayable handle for a tag.
///
/// `Display` writes the tag's characters; `Debug` writes them quoted, with
/// `"` and `\` escaped.
pub struct TagName<T>(PhantomData<fn() -> T>);

impl<T> TagName<T> {
    pub const fn new() -> Self {
        TagName(PhantomData)
    }
}

impl<T> Default for TagName<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TagName<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TagName<T> {}

impl<T: Tag> fmt::Display for TagName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::write_name(f)
    }
}

impl<T: Tag> fmt::Debug for TagName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        T::write_name(&mut crate::fmt::Escaped(f))?;
        f.write_str("\"")
    }
}

/// The tag's characters as an owned string.
#[cfg(feature = "alloc")]
pub fn name<T: Tag>() -> alloc::string::String {
    use alloc::string::ToString;

    TagName::<T>::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    type Name = crate::tag!("name");
    type Empty = crate::tag!("");

    #[test]
    fn lengths() {
        assert_eq!(<Name as Tag>::LEN, 4);
        assert_eq!(<Empty as Tag>::LEN, 0);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn rendering() {
        assert_eq!(name::<Name>(), "name");
        assert_eq!(name::<Empty>(), "");
        assert_eq!(name::<crate::tag!("größe")>(), "größe");
    }
}
