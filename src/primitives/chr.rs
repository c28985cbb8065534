//! A type-level character decomposed into nibbles.
//!
//! Six nibbles (24 bits) cover the full Unicode scalar range, so tags are
//! not restricted to ASCII. The `tag!` macro is the only producer of these
//! types; user code never spells them out.

use core::marker::PhantomData;

use super::bool::{And, Bool};
use super::nibble::{Nibble, NibbleEq};

/// One Unicode scalar as six type-level nibbles, most significant first.
pub struct Chr<N0, N1, N2, N3, N4, N5>(PhantomData<(N0, N1, N2, N3, N4, N5)>);

/// Recover the runtime character from a type-level one.
pub trait TagChr: 'static {
    const CODE: u32;
    const CHAR: char;
}

impl<N0, N1, N2, N3, N4, N5> TagChr for Chr<N0, N1, N2, N3, N4, N5>
where
    N0: Nibble,
    N1: Nibble,
    N2: Nibble,
    N3: Nibble,
    N4: Nibble,
    N5: Nibble,
{
    const CODE: u32 = ((N0::VALUE as u32) << 20)
        | ((N1::VALUE as u32) << 16)
        | ((N2::VALUE as u32) << 12)
        | ((N3::VALUE as u32) << 8)
        | ((N4::VALUE as u32) << 4)
        | (N5::VALUE as u32);

    // The `tag!` macro only emits codes of real scalars; the fallback is
    // unreachable for macro-produced tags.
    const CHAR: char = match char::from_u32(Self::CODE) {
        Some(c) => c,
        None => '\u{FFFD}',
    };
}

/// Type-level character equality: all six nibbles must match.
pub trait ChrEq<Other> {
    type Out: Bool;
}

impl<A0, A1, A2, A3, A4, A5, B0, B1, B2, B3, B4, B5> ChrEq<Chr<B0, B1, B2, B3, B4, B5>>
    for Chr<A0, A1, A2, A3, A4, A5>
where
    A0: NibbleEq<B0>,
    A1: NibbleEq<B1>,
    A2: NibbleEq<B2>,
    A3: NibbleEq<B3>,
    A4: NibbleEq<B4>,
    A5: NibbleEq<B5>,
    B0: Nibble,
    B1: Nibble,
    B2: Nibble,
    B3: Nibble,
    B4: Nibble,
    B5: Nibble,
{
    type Out = And<
        And<
            And<
                And<
                    And<<A0 as NibbleEq<B0>>::Out, <A1 as NibbleEq<B1>>::Out>,
                    <A2 as NibbleEq<B2>>::Out,
                >,
                <A3 as NibbleEq<B3>>::Out,
            >,
            <A4 as NibbleEq<B4>>::Out,
        >,
        <A5 as NibbleEq<B5>>::Out,
    >;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::nibble::{X0, X6, XE, XF};

    type LowerN = Chr<X0, X0, X0, X0, X6, XE>; // 'n'
    type LowerO = Chr<X0, X0, X0, X0, X6, XF>; // 'o'

    #[test]
    fn char_recovery() {
        assert_eq!(LowerN::CHAR, 'n');
        assert_eq!(LowerO::CHAR, 'o');
    }

    #[test]
    fn equality() {
        assert!(<LowerN as ChrEq<LowerN>>::Out::VALUE);
        assert!(!<LowerN as ChrEq<LowerO>>::Out::VALUE);
    }
}
