//! Structural equality and ordering, lifted slot-by-slot.
//!
//! Defined only between maps with identical tag sequences; a shape mismatch
//! is a type error, not a runtime branch. Equality short-circuits on the
//! first differing slot; ordering composes lexicographically in internal
//! slot order, exactly like tuple comparison.

use core::cmp::Ordering;

use super::Cons;
use crate::tag::Tag;

impl<T, V, W, R, Rhs> PartialEq<Cons<T, W, Rhs>> for Cons<T, V, R>
where
    V: PartialEq<W>,
    R: PartialEq<Rhs>,
{
    fn eq(&self, other: &Cons<T, W, Rhs>) -> bool {
        self.head == other.head && self.tail == other.tail
    }
}

impl<T: Tag, V: Eq, R: Eq> Eq for Cons<T, V, R> {}

impl<T, V, W, R, Rhs> PartialOrd<Cons<T, W, Rhs>> for Cons<T, V, R>
where
    V: PartialEq<W> + PartialOrd<W>,
    R: PartialEq<Rhs> + PartialOrd<Rhs>,
{
    fn partial_cmp(&self, other: &Cons<T, W, Rhs>) -> Option<Ordering> {
        match self.head.partial_cmp(&other.head) {
            Some(Ordering::Equal) => self.tail.partial_cmp(&other.tail),
            ord => ord,
        }
    }
}

impl<T: Tag, V: Ord, R: Ord> Ord for Cons<T, V, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.head
            .cmp(&other.head)
            .then_with(|| self.tail.cmp(&other.tail))
    }
}
