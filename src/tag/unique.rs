//! The pairwise tag-distinctness check.
//!
//! Key lists are nested tuples `(Tag, Rest)` terminated by `()`, built by
//! the map structure itself (`TagMap::Keys`). The check is O(n²) pairwise
//! comparison, run once per map *type*, never per instance.

use super::eq::TagEq;
use crate::primitives::bool::{And, Bool, Not, True};

/// `True` iff the tag `Self` does not occur in the key list `List`.
pub trait NotIn<List> {
    type Out: Bool;
}

impl<T> NotIn<()> for T {
    type Out = True;
}

impl<T, H, R> NotIn<(H, R)> for T
where
    T: TagEq<H> + NotIn<R>,
{
    type Out = And<Not<<T as TagEq<H>>::Out>, <T as NotIn<R>>::Out>;
}

/// `True` iff every pair of tags in the key list is distinct: the head is
/// compared against all others, then the check recurses on the tail.
pub trait UniqueKeys {
    type Out: Bool;
}

impl UniqueKeys for () {
    type Out = True;
}

impl<H, R> UniqueKeys for (H, R)
where
    H: NotIn<R>,
    R: UniqueKeys,
{
    type Out = And<<H as NotIn<R>>::Out, <R as UniqueKeys>::Out>;
}

/// Bound form of [`UniqueKeys`]: satisfied only by key lists whose tags are
/// pairwise distinct. Every map construction path (`cons`, `tag_map!`,
/// `cut!`, `concat`) carries this bound, so a map type with duplicate tags
/// can never produce an instance.
///
/// ```compile_fail
/// use tagmap::tag_map;
///
/// // Two slots under the tag "x": rejected before any instance exists.
/// let bad = tag_map! { "x" => 1, "x" => 2 };
/// ```
#[diagnostic::on_unimplemented(
    message = "tag map key list contains a duplicate tag",
    label = "all tags within one tag map must be pairwise distinct",
    note = "`cut!` and `concat` re-run this check on their result, so overlapping \
            inputs are rejected at the same stage"
)]
pub trait UniqueTagList {}

impl<L> UniqueTagList for L where L: UniqueKeys<Out = True> {}

#[cfg(test)]
mod tests {
    use super::*;

    type A = crate::tag!("a");
    type B = crate::tag!("b");
    type C = crate::tag!("c");

    fn unique<L: UniqueKeys>() -> bool {
        <L as UniqueKeys>::Out::VALUE
    }

    fn accepts_unique<L: UniqueTagList>() {}

    #[test]
    fn distinct_lists() {
        assert!(unique::<()>());
        assert!(unique::<(A, ())>());
        assert!(unique::<(A, (B, (C, ())))>());
        accepts_unique::<(A, (B, ()))>();
    }

    #[test]
    fn duplicate_lists() {
        assert!(!unique::<(A, (A, ()))>());
        assert!(!unique::<(A, (B, (A, ())))>());
        assert!(!unique::<(B, (A, (A, ())))>());
    }
}
