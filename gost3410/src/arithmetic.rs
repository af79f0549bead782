//! Modular arithmetic over moduli known only at runtime.
//!
//! GOST curves are handed to this crate as plain parameter sets rather than
//! compile-time types, so field elements and scalars share one residue type
//! whose Montgomery parameters live in a [`Modulus`] owned by the curve.

mod affine;
mod field;
pub(crate) mod scalar;

pub use self::{
    affine::AffinePoint,
    field::{FieldElement, Modulus},
};
