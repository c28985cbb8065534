//! The projection/concatenation algebra and map-to-map conversion.

use super::{Cons, Nil, TagMap};
use crate::primitives::index::{S, Z};
use crate::tag::{Tag, UniqueTagList};
use crate::tagged::Tagged;

/// Ordered union of two maps' slots, left operand first.
///
/// Joining does not itself re-check tag uniqueness; [`concat`] does, which
/// is why overlapping key sets are rejected at the call site and a bare
/// `Concat` bound stays usable as a building block.
pub trait Concat<Rhs> {
    type Out;

    fn join(self, rhs: Rhs) -> Self::Out;
}

impl<Rhs: TagMap> Concat<Rhs> for Nil {
    type Out = Rhs;

    fn join(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<T: Tag, V, R, Rhs> Concat<Rhs> for Cons<T, V, R>
where
    R: Concat<Rhs>,
{
    type Out = Cons<T, V, R::Out>;

    fn join(self, rhs: Rhs) -> Self::Out {
        Cons {
            head: self.head,
            tail: self.tail.join(rhs),
        }
    }
}

/// Concatenate two maps; any tag occurring in both inputs fails the
/// uniqueness check on the result.
///
/// ```compile_fail
/// use tagmap::{map::concat, tag_map};
///
/// let a = tag_map! { "x" => 1 };
/// let b = tag_map! { "x" => 2.0 };
/// let joined = concat(a, b); // "x" occurs in both inputs
/// ```
pub fn concat<A, B>(a: A, b: B) -> A::Out
where
    A: Concat<B>,
    A::Out: TagMap,
    <A::Out as TagMap>::Keys: UniqueTagList,
{
    a.join(b)
}

/// Remove the slot under tag `K`, returning the entry and the remainder.
pub trait Pluck<K, I>: Sized {
    type Value;
    type Rest;

    fn pluck(self) -> (Tagged<K, Self::Value>, Self::Rest);
}

impl<T: Tag, V, R> Pluck<T, Z> for Cons<T, V, R> {
    type Value = V;
    type Rest = R;

    fn pluck(self) -> (Tagged<T, V>, R) {
        (self.head, self.tail)
    }
}

impl<T: Tag, V, R, K, I> Pluck<K, S<I>> for Cons<T, V, R>
where
    R: Pluck<K, I>,
{
    type Value = R::Value;
    type Rest = Cons<T, V, R::Rest>;

    fn pluck(self) -> (Tagged<K, R::Value>, Self::Rest) {
        let (entry, rest) = self.tail.pluck();
        (
            entry,
            Cons {
                head: self.head,
                tail: rest,
            },
        )
    }
}

/// Free-function form of [`Pluck`], turbofish-friendly for macros:
/// `pluck::<tag!("k"), _, _>(map)`.
pub fn pluck<K, I, M>(map: M) -> (Tagged<K, M::Value>, M::Rest)
where
    M: Pluck<K, I>,
{
    map.pluck()
}

/// Build a map from another map with the same tags, in the same order,
/// converting each slot's value type.
pub trait FromMap<M>: Sized {
    fn from_map(source: M) -> Self;
}

impl FromMap<Nil> for Nil {
    fn from_map(_source: Nil) -> Nil {
        Nil
    }
}

impl<T: Tag, V, W, R, Src> FromMap<Cons<T, W, Src>> for Cons<T, V, R>
where
    W: Into<V>,
    R: FromMap<Src>,
{
    fn from_map(source: Cons<T, W, Src>) -> Self {
        Cons {
            head: source.head.convert(),
            tail: R::from_map(source.tail),
        }
    }
}

/// Borrowing view: a map of `&V` slots over the same tags.
pub trait AsRefs<'a> {
    type Refs;

    fn as_refs(&'a self) -> Self::Refs;
}

impl<'a> AsRefs<'a> for Nil {
    type Refs = Nil;

    fn as_refs(&'a self) -> Nil {
        Nil
    }
}

impl<'a, T: Tag, V: 'a, R> AsRefs<'a> for Cons<T, V, R>
where
    R: AsRefs<'a>,
{
    type Refs = Cons<T, &'a V, R::Refs>;

    fn as_refs(&'a self) -> Self::Refs {
        Cons {
            head: Tagged::new(self.head.value()),
            tail: self.tail.as_refs(),
        }
    }
}

/// Owned map from a map of shared borrows, cloning slot by slot.
///
/// The inverse of [`AsRefs`], and the copying arm of `cut!`: projecting
/// over `as_refs()` and then `cloned()` leaves the source map intact.
pub trait Cloned {
    type Owned;

    fn cloned(self) -> Self::Owned;
}

impl Cloned for Nil {
    type Owned = Nil;

    fn cloned(self) -> Nil {
        Nil
    }
}

impl<'a, T: Tag, V: Clone, R: Cloned> Cloned for Cons<T, &'a V, R> {
    type Owned = Cons<T, V, R::Owned>;

    fn cloned(self) -> Self::Owned {
        Cons {
            head: Tagged::new(self.head.into_inner().clone()),
            tail: self.tail.cloned(),
        }
    }
}

/// Mutably borrowing view: a map of `&mut V` slots over the same tags.
pub trait AsMuts<'a> {
    type Muts;

    fn as_muts(&'a mut self) -> Self::Muts;
}

impl<'a> AsMuts<'a> for Nil {
    type Muts = Nil;

    fn as_muts(&'a mut self) -> Nil {
        Nil
    }
}

impl<'a, T: Tag, V: 'a, R> AsMuts<'a> for Cons<T, V, R>
where
    R: AsMuts<'a>,
{
    type Muts = Cons<T, &'a mut V, R::Muts>;

    fn as_muts(&'a mut self) -> Self::Muts {
        Cons {
            head: Tagged::new(self.head.value_mut()),
            tail: self.tail.as_muts(),
        }
    }
}

impl Nil {
    pub fn concat<Rhs: TagMap>(self, rhs: Rhs) -> Rhs {
        rhs
    }

    pub fn convert<M: FromMap<Nil>>(self) -> M {
        M::from_map(self)
    }
}

impl<T: Tag, V, R: TagMap> Cons<T, V, R> {
    /// See [`concat`].
    pub fn concat<Rhs>(self, rhs: Rhs) -> <Self as Concat<Rhs>>::Out
    where
        Self: Concat<Rhs>,
        <Self as Concat<Rhs>>::Out: TagMap,
        <<Self as Concat<Rhs>>::Out as TagMap>::Keys: UniqueTagList,
    {
        self.join(rhs)
    }

    /// Convert every slot's value type, keeping tags and order.
    pub fn convert<M: FromMap<Self>>(self) -> M {
        M::from_map(self)
    }
}
