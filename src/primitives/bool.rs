//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, the `Bool` trait with combinator GATs.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Logical AND.
    type And<Other: Bool>: Bool;

    /// Logical OR.
    type Or<Other: Bool>: Bool;

    /// Logical NOT.
    type Not: Bool;
}

/// Type-level true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct True;

/// Type-level false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
}

/// `A && B` as a type.
pub type And<A, B> = <A as Bool>::And<B>;

/// `A || B` as a type.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `!A` as a type.
pub type Not<A> = <A as Bool>::Not;

/// Marker for predicates stated as bounds: only `True` satisfies it.
pub trait IsTrue {}

impl IsTrue for True {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_true<B: Bool + IsTrue>() {
        assert!(B::VALUE);
    }

    #[test]
    fn truth_table() {
        assert_true::<And<True, True>>();
        assert!(!<And<True, False>>::VALUE);
        assert!(!<And<False, True>>::VALUE);
        assert_true::<Or<False, True>>();
        assert!(!<Or<False, False>>::VALUE);
        assert_true::<Not<False>>();
        assert!(!<Not<True>>::VALUE);
    }
}
