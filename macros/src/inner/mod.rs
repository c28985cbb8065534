//! Expansion logic, kept out of the proc-macro entry points.

pub mod tag_type;
