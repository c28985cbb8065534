//! # Layer 2: Map Core
//!
//! The tag map itself: an ordered, fixed-arity list of tagged values with
//! pairwise-distinct tags.
//!
//! - **Structure**: `Nil` / `Cons` (one slot plus tail).
//! - **Resolution**: `Find` (by tag), `At` (by position).
//! - **Algebra**: `Concat`, `Pluck`, `FromMap`, borrowing views.
//! - **Iteration**: the `Visit`/`Traverse` visitor families.
//!
//! Every construction path is gated on tag uniqueness: [`cons`] and
//! [`Cons::new`] bound the extended key list with
//! [`UniqueTagList`], and the macro entry points additionally re-run the
//! whole-map check through [`checked`]. A map whose key list fails the
//! check can never produce an instance.

use core::hash::{Hash, Hasher};

use crate::tag::{Tag, UniqueTagList};
use crate::tagged::Tagged;

pub mod cmp;
pub mod get;
pub mod ops;
pub mod visit;

pub use get::{At, Find};
pub use ops::{AsMuts, AsRefs, Cloned, Concat, FromMap, Pluck, concat, pluck};
pub use visit::{Traverse, TraverseMut, TraverseOwned, Visit, VisitMut, VisitOwned};

/// The empty tag map. `Debug` lives in [`crate::fmt`] with the rest of the
/// rendering.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nil;

/// One slot (a [`Tagged`] value) followed by the rest of the map.
pub struct Cons<T, V, R> {
    pub(crate) head: Tagged<T, V>,
    pub(crate) tail: R,
}

impl<T: Tag, V, R: TagMap> Cons<T, V, R>
where
    (T, R::Keys): UniqueTagList,
{
    pub fn new(head: Tagged<T, V>, tail: R) -> Self {
        Cons { head, tail }
    }
}

/// Prepend a tagged value to a map.
///
/// The extended key list must stay pairwise distinct; prepending a tag the
/// tail already carries can never produce an instance.
///
/// ```compile_fail
/// use tagmap::map::{Nil, cons};
/// use tagmap::{Tagged, tag};
///
/// // "x" twice: rejected before the outer map exists.
/// let dup = cons(
///     Tagged::<tag!("x"), _>::new(1),
///     cons(Tagged::<tag!("x"), _>::new(2), Nil),
/// );
/// ```
pub fn cons<T: Tag, V, R: TagMap>(head: Tagged<T, V>, tail: R) -> Cons<T, V, R>
where
    (T, R::Keys): UniqueTagList,
{
    Cons { head, tail }
}

/// An ordered, fixed-shape collection of tagged values.
pub trait TagMap: Sized {
    const LEN: usize;

    /// The map's tags, in slot order, as a nested tuple list.
    type Keys;

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl TagMap for Nil {
    const LEN: usize = 0;
    type Keys = ();
}

impl<T: Tag, V, R: TagMap> TagMap for Cons<T, V, R> {
    const LEN: usize = 1 + R::LEN;
    type Keys = (T, R::Keys);
}

/// Identity gate enforcing the tag-uniqueness invariant.
///
/// Construction macros pass their result through this function so that a
/// duplicated tag surfaces as an unsatisfied [`UniqueTagList`] bound at the
/// construction site.
pub fn checked<M: TagMap>(map: M) -> M
where
    M::Keys: UniqueTagList,
{
    map
}

// Shape-preserving std impls, lifted element-wise. Written by hand so that
// no bound is demanded of the tag parameter.

impl<T, V: Clone, R: Clone> Clone for Cons<T, V, R> {
    fn clone(&self) -> Self {
        Cons {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T, V: Copy, R: Copy> Copy for Cons<T, V, R> {}

impl<T: Tag, V: Default, R: Default + TagMap> Default for Cons<T, V, R> {
    fn default() -> Self {
        Cons {
            head: Tagged::default(),
            tail: R::default(),
        }
    }
}

impl<T, V: Hash, R: Hash> Hash for Cons<T, V, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.tail.hash(state);
    }
}
