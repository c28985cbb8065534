//! The generic iteration primitive.
//!
//! A visitor implements [`Visit`] (or its mutable/owning sibling) for every
//! slot shape it can consume; [`Traverse`] walks the map in internal slot
//! order and hands each entry over with its original type and reference
//! category intact. All whole-map consumers, the formatter included, are
//! built on this.
//!
//! ```
//! use tagmap::map::{Traverse, Visit};
//! use tagmap::tag::Tag;
//! use tagmap::{Tagged, tag_map};
//!
//! struct CountChars(usize);
//!
//! impl<T: Tag, V: AsRef<str>> Visit<T, V> for CountChars {
//!     fn visit(&mut self, entry: &Tagged<T, V>) {
//!         self.0 += entry.value().as_ref().len();
//!     }
//! }
//!
//! let map = tag_map! { "first" => "Ada", "last" => "Lovelace" };
//! let mut count = CountChars(0);
//! map.traverse(&mut count);
//! assert_eq!(count.0, 11);
//! ```

use super::{Cons, Nil};
use crate::tag::Tag;
use crate::tagged::Tagged;

/// Consume one entry by shared reference.
pub trait Visit<T: Tag, V> {
    fn visit(&mut self, entry: &Tagged<T, V>);
}

/// Consume one entry by mutable reference.
pub trait VisitMut<T: Tag, V> {
    fn visit_mut(&mut self, entry: &mut Tagged<T, V>);
}

/// Consume one entry by value.
pub trait VisitOwned<T: Tag, V> {
    fn visit_owned(&mut self, entry: Tagged<T, V>);
}

/// Walk every slot by shared reference, in internal order.
pub trait Traverse<F> {
    fn traverse(&self, visitor: &mut F);
}

/// Walk every slot by mutable reference, in internal order.
pub trait TraverseMut<F> {
    fn traverse_mut(&mut self, visitor: &mut F);
}

/// Walk every slot by value, in internal order.
pub trait TraverseOwned<F> {
    fn traverse_owned(self, visitor: &mut F);
}

impl<F> Traverse<F> for Nil {
    fn traverse(&self, _visitor: &mut F) {}
}

impl<F> TraverseMut<F> for Nil {
    fn traverse_mut(&mut self, _visitor: &mut F) {}
}

impl<F> TraverseOwned<F> for Nil {
    fn traverse_owned(self, _visitor: &mut F) {}
}

impl<T: Tag, V, R, F> Traverse<F> for Cons<T, V, R>
where
    F: Visit<T, V>,
    R: Traverse<F>,
{
    fn traverse(&self, visitor: &mut F) {
        visitor.visit(&self.head);
        self.tail.traverse(visitor);
    }
}

impl<T: Tag, V, R, F> TraverseMut<F> for Cons<T, V, R>
where
    F: VisitMut<T, V>,
    R: TraverseMut<F>,
{
    fn traverse_mut(&mut self, visitor: &mut F) {
        visitor.visit_mut(&mut self.head);
        self.tail.traverse_mut(visitor);
    }
}

impl<T: Tag, V, R, F> TraverseOwned<F> for Cons<T, V, R>
where
    F: VisitOwned<T, V>,
    R: TraverseOwned<F>,
{
    fn traverse_owned(self, visitor: &mut F) {
        visitor.visit_owned(self.head);
        self.tail.traverse_owned(visitor);
    }
}
