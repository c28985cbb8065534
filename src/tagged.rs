//! The tagged value wrapper.
//!
//! [`Tagged<T, V>`] pairs one value with one compile-time tag. The tag is
//! part of the static type, never stored: a `Tagged<T, V>` is exactly the
//! size of `V`.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::tag::{Tag, TagName};

/// A value of type `V` carrying the compile-time tag `T`.
///
/// The wrapped value may be owned, a shared borrow, or a mutable borrow;
/// the variant is chosen by `V` itself (`Tagged<T, &X>` borrows), not by
/// the container holding it.
pub struct Tagged<T, V> {
    value: V,
    _tag: PhantomData<fn() -> T>,
}

impl<T: Tag, V> Tagged<T, V> {
    pub fn new(value: V) -> Self {
        Tagged {
            value,
            _tag: PhantomData,
        }
    }

    pub fn into_inner(self) -> V {
        self.value
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Displayable handle for this entry's tag.
    pub fn tag_name(&self) -> TagName<T> {
        TagName::new()
    }

    /// Borrowing view with the same tag.
    pub fn as_ref(&self) -> Tagged<T, &V> {
        Tagged::new(&self.value)
    }

    /// Mutably borrowing view with the same tag.
    pub fn as_mut(&mut self) -> Tagged<T, &mut V> {
        Tagged::new(&mut self.value)
    }

    /// Re-tag-preserving value transformation.
    pub fn map<W, F: FnOnce(V) -> W>(self, f: F) -> Tagged<T, W> {
        Tagged::new(f(self.value))
    }

    /// Convert the value type under the same tag. This is the building
    /// block for turning a map of borrows into a map of owned values.
    pub fn convert<W>(self) -> Tagged<T, W>
    where
        V: Into<W>,
    {
        Tagged::new(self.value.into())
    }

    /// Two-element structural decomposition.
    pub fn into_parts(self) -> (TagName<T>, V) {
        (TagName::new(), self.value)
    }
}

// Equality and ordering are defined only between values under the *same*
// tag; they delegate to the wrapped values.

impl<T, V: PartialEq<W>, W> PartialEq<Tagged<T, W>> for Tagged<T, V> {
    fn eq(&self, other: &Tagged<T, W>) -> bool {
        self.value == other.value
    }
}

impl<T, V: Eq> Eq for Tagged<T, V> {}

impl<T, V: PartialOrd<W>, W> PartialOrd<Tagged<T, W>> for Tagged<T, V> {
    fn partial_cmp(&self, other: &Tagged<T, W>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T, V: Ord> Ord for Tagged<T, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// Manual impls so no bound leaks onto `T` through the phantom.

impl<T, V: Clone> Clone for Tagged<T, V> {
    fn clone(&self) -> Self {
        Tagged {
            value: self.value.clone(),
            _tag: PhantomData,
        }
    }
}

impl<T, V: Copy> Copy for Tagged<T, V> {}

impl<T: Tag, V: Default> Default for Tagged<T, V> {
    fn default() -> Self {
        Tagged::new(V::default())
    }
}

impl<T, V: Hash> Hash for Tagged<T, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Tag, V: fmt::Debug> fmt::Debug for Tagged<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {:?}", TagName::<T>::new(), self.value)
    }
}
