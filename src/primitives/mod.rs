//! # Layer 0: Primitives
//!
//! Type-level atoms everything else is built from, no dependencies:
//!
//! - **Booleans**: `True` / `False` with combinator GATs.
//! - **Nibbles**: `X0`..`XF`, equality by exhaustive trait table.
//! - **Characters**: `Chr` (six nibbles, full Unicode).
//! - **Indices**: Peano `Z` / `S<N>`.

pub mod bool;
pub mod chr;
pub mod index;
pub mod nibble;

pub use bool::{And, Bool, False, IsTrue, Not, Or, True};
pub use chr::{Chr, ChrEq, TagChr};
pub use index::{I0, I1, I2, I3, I4, I5, I6, I7, I8, Peano, S, Z};
pub use nibble::{
    Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF,
};
