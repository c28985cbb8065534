//! Peano naturals for positional access.
//!
//! `Z`/`S<N>` double as the disambiguation parameter of keyed lookup: the
//! compiler infers the unique index at which a tag lives, which is what
//! makes `Find` unambiguous despite its two overlapping-looking impls.

use core::marker::PhantomData;

/// Type-level zero.
pub struct Z;

/// Type-level successor.
pub struct S<N>(PhantomData<fn() -> N>);

/// Type-level natural number.
pub trait Peano: 'static {
    const VALUE: usize;
}

impl Peano for Z {
    const VALUE: usize = 0;
}

impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

pub type I0 = Z;
pub type I1 = S<I0>;
pub type I2 = S<I1>;
pub type I3 = S<I2>;
pub type I4 = S<I3>;
pub type I5 = S<I4>;
pub type I6 = S<I5>;
pub type I7 = S<I6>;
pub type I8 = S<I7>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(I0::VALUE, 0);
        assert_eq!(I1::VALUE, 1);
        assert_eq!(I8::VALUE, 8);
    }
}
