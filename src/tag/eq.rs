//! Type-level tag equality.

use super::{TCons, TNil};
use crate::primitives::bool::{And, Bool, False, True};
use crate::primitives::chr::ChrEq;

/// Two tags are equal iff they have the same length and the same character
/// sequence. Lists of different length bottom out in one of the mixed
/// `TCons`/`TNil` impls and evaluate to `False` without walking the longer
/// list's remaining characters.
pub trait TagEq<Other> {
    type Out: Bool;
}

impl TagEq<TNil> for TNil {
    type Out = True;
}

impl<C, R> TagEq<TCons<C, R>> for TNil {
    type Out = False;
}

impl<C, R> TagEq<TNil> for TCons<C, R> {
    type Out = False;
}

impl<C1, R1, C2, R2> TagEq<TCons<C2, R2>> for TCons<C1, R1>
where
    C1: ChrEq<C2>,
    R1: TagEq<R2>,
{
    type Out = And<<C1 as ChrEq<C2>>::Out, <R1 as TagEq<R2>>::Out>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_eq<A, B>() -> bool
    where
        A: TagEq<B>,
    {
        <A as TagEq<B>>::Out::VALUE
    }

    #[test]
    fn same_literal_same_type() {
        assert!(tag_eq::<crate::tag!("name"), crate::tag!("name")>());
    }

    #[test]
    fn different_content() {
        assert!(!tag_eq::<crate::tag!("name"), crate::tag!("nape")>());
    }

    #[test]
    fn different_length() {
        assert!(!tag_eq::<crate::tag!("name"), crate::tag!("names")>());
        assert!(!tag_eq::<crate::tag!(""), crate::tag!("a")>());
    }

    #[test]
    fn ident_and_literal_forms_unify() {
        assert!(tag_eq::<crate::tag!(age), crate::tag!("age")>());
    }
}
