//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the atoms of tag identity: every character of a tag is
//! decomposed into nibbles so equality can be decided by trait lookup
//! alone, without specialization or negative reasoning.

use super::bool::{Bool, False, True};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 nibbles (X0..XF).
#[macro_export]
#[doc(hidden)]
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0, 0); $mac!(X1, 1); $mac!(X2, 2); $mac!(X3, 3);
        $mac!(X4, 4); $mac!(X5, 5); $mac!(X6, 6); $mac!(X7, 7);
        $mac!(X8, 8); $mac!(X9, 9); $mac!(XA, 10); $mac!(XB, 11);
        $mac!(XC, 12); $mac!(XD, 13); $mac!(XE, 14); $mac!(XF, 15);
    };
}

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
#[macro_export]
#[doc(hidden)]
macro_rules! for_distinct_nibble_pairs {
    ($mac:ident) => {
        $crate::for_distinct_nibble_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        $crate::for_distinct_nibble_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15).
pub trait Nibble: 'static {
    const VALUE: u8;
}

macro_rules! define_nibble {
    ($n:ident, $v:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $n;
        impl Nibble for $n {
            const VALUE: u8 = $v;
        }
    };
}
for_each_nibble!(define_nibble);

// =============================================================================
// Nibble equality
// =============================================================================

/// Type-level nibble equality.
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: Bool;
}

// Self-equality: X == X -> True
macro_rules! impl_eq_self {
    ($n:ident, $v:expr) => {
        impl NibbleEq<$n> for $n { type Out = True; }
    };
}
for_each_nibble!(impl_eq_self);

// Cross-inequality: X != Y -> False
macro_rules! impl_neq {
    ($a:ident, $b:ident) => {
        impl NibbleEq<$b> for $a { type Out = False; }
    };
}
for_distinct_nibble_pairs!(impl_neq);

#[cfg(test)]
mod tests {
    use super::*;

    fn nibble_eq<A, B>() -> bool
    where
        A: NibbleEq<B>,
        B: Nibble,
    {
        <A as NibbleEq<B>>::Out::VALUE
    }

    #[test]
    fn values() {
        assert_eq!(X0::VALUE, 0);
        assert_eq!(XA::VALUE, 10);
        assert_eq!(XF::VALUE, 15);
    }

    #[test]
    fn equality() {
        assert!(nibble_eq::<X7, X7>());
        assert!(!nibble_eq::<X7, X8>());
        assert!(!nibble_eq::<XF, X0>());
    }
}
