//! Key and positional resolution.
//!
//! [`Find`] resolves a tag to its slot. The `I` parameter is the Peano
//! index of the slot; it is never written by callers (`_` infers it) and
//! exists to keep the head impl and the recursive impl from overlapping.
//! Because tags within one map are pairwise distinct, inference always has
//! exactly one solution, or none, which makes lookup of an absent tag a
//! compile-time error rather than a runtime miss.

use super::{Cons, TagMap};
use crate::primitives::index::{Peano, S, Z};
use crate::tag::Tag;
use crate::tagged::Tagged;

/// Resolve the tag `K` to a slot, in all three calling conventions.
#[diagnostic::on_unimplemented(
    message = "tag is not part of this tag map's key set",
    label = "no slot in `{Self}` carries the requested tag",
    note = "tag lookups are resolved at compile time; a missing tag can never \
            be a runtime error"
)]
pub trait Find<K, I> {
    type Value;

    fn find_ref(&self) -> &Self::Value;
    fn find_mut(&mut self) -> &mut Self::Value;
    fn find_take(self) -> Self::Value
    where
        Self: Sized;
}

impl<T: Tag, V, R> Find<T, Z> for Cons<T, V, R> {
    type Value = V;

    fn find_ref(&self) -> &V {
        self.head.value()
    }

    fn find_mut(&mut self) -> &mut V {
        self.head.value_mut()
    }

    fn find_take(self) -> V {
        self.head.into_inner()
    }
}

impl<T: Tag, V, R, K, I> Find<K, S<I>> for Cons<T, V, R>
where
    R: Find<K, I>,
{
    type Value = R::Value;

    fn find_ref(&self) -> &Self::Value {
        self.tail.find_ref()
    }

    fn find_mut(&mut self) -> &mut Self::Value {
        self.tail.find_mut()
    }

    fn find_take(self) -> Self::Value {
        self.tail.find_take()
    }
}

/// Retrieve the whole [`Tagged`] entry at a fixed position.
pub trait At<N> {
    type Entry;

    fn at_ref(&self) -> &Self::Entry;
    fn at_mut(&mut self) -> &mut Self::Entry;
    fn into_entry(self) -> Self::Entry
    where
        Self: Sized;
}

impl<T: Tag, V, R> At<Z> for Cons<T, V, R> {
    type Entry = Tagged<T, V>;

    fn at_ref(&self) -> &Tagged<T, V> {
        &self.head
    }

    fn at_mut(&mut self) -> &mut Tagged<T, V> {
        &mut self.head
    }

    fn into_entry(self) -> Tagged<T, V> {
        self.head
    }
}

impl<T: Tag, V, R, N> At<S<N>> for Cons<T, V, R>
where
    R: At<N>,
{
    type Entry = R::Entry;

    fn at_ref(&self) -> &Self::Entry {
        self.tail.at_ref()
    }

    fn at_mut(&mut self) -> &mut Self::Entry {
        self.tail.at_mut()
    }

    fn into_entry(self) -> Self::Entry {
        self.tail.into_entry()
    }
}

impl<T: Tag, V, R: TagMap> Cons<T, V, R> {
    /// Immutable access to the value under tag `K`.
    pub fn get<K, I>(&self) -> &<Self as Find<K, I>>::Value
    where
        Self: Find<K, I>,
    {
        self.find_ref()
    }

    /// Mutable access to the value under tag `K`.
    pub fn get_mut<K, I>(&mut self) -> &mut <Self as Find<K, I>>::Value
    where
        Self: Find<K, I>,
    {
        self.find_mut()
    }

    /// Move the value under tag `K` out of the map, discarding the rest.
    /// Use [`super::pluck`] to keep the remainder.
    pub fn take<K, I>(self) -> <Self as Find<K, I>>::Value
    where
        Self: Find<K, I>,
    {
        self.find_take()
    }

    /// Zero-based slot position of tag `K`.
    pub fn index_of<K, I>(&self) -> usize
    where
        Self: Find<K, I>,
        I: Peano,
    {
        I::VALUE
    }

    /// The whole entry at position `N` (tag included, for introspection).
    pub fn at<N>(&self) -> &<Self as At<N>>::Entry
    where
        Self: At<N>,
    {
        self.at_ref()
    }

    pub fn at_mut<N>(&mut self) -> &mut <Self as At<N>>::Entry
    where
        Self: At<N>,
    {
        At::at_mut(self)
    }

    pub fn into_at<N>(self) -> <Self as At<N>>::Entry
    where
        Self: At<N>,
    {
        self.into_entry()
    }
}
