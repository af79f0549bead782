//! Field elements modulo an odd runtime modulus.

use crate::{Error, Result, Uint};
use bigint::{
    modular::runtime_mod::{DynResidue, DynResidueParams},
    Encoding,
};
use core::{
    fmt,
    ops::{Add, Mul, Sub},
};
use subtle::{Choice, ConstantTimeEq};

const LIMBS: usize = Uint::LIMBS;

/// Odd modulus together with its precomputed Montgomery parameters.
#[derive(Clone, Copy)]
pub struct Modulus {
    value: Uint,
    /// `value - 2`, the Fermat inversion exponent.
    minus_two: Uint,
    params: DynResidueParams<LIMBS>,
}

impl Modulus {
    /// Prepare `value` for modular arithmetic.
    ///
    /// Fails with [`Error::InvalidCurve`] unless `value` is odd and greater
    /// than 2.
    pub fn new(value: Uint) -> Result<Self> {
        let two = Uint::from_u8(2);
        let is_odd = value.to_be_bytes()[Uint::BYTES - 1] & 1 == 1;
        if !is_odd || value <= two {
            return Err(Error::InvalidCurve);
        }

        Ok(Self {
            value,
            minus_two: value.wrapping_sub(&two),
            params: DynResidueParams::new(&value),
        })
    }

    /// The modulus as an integer.
    pub fn value(&self) -> &Uint {
        &self.value
    }

    /// Number of significant bits in the modulus.
    pub fn bits(&self) -> usize {
        self.value.bits_vartime()
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Modulus").field(&self.value).finish()
    }
}

impl PartialEq for Modulus {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Modulus {}

/// Element of the ring of integers modulo a [`Modulus`].
///
/// Used both for curve coordinates (modulo `p`) and for scalars (modulo `q`).
/// The value is kept in Montgomery form; [`FieldElement::to_uint`] always
/// returns the canonical representative in `[0, m)`.
#[derive(Clone, Copy)]
pub struct FieldElement(DynResidue<LIMBS>);

impl FieldElement {
    /// Reduce `value` modulo `modulus`.
    pub fn new(value: &Uint, modulus: &Modulus) -> Self {
        Self(DynResidue::new(value, modulus.params))
    }

    /// Additive identity.
    pub fn zero(modulus: &Modulus) -> Self {
        Self(DynResidue::zero(modulus.params))
    }

    /// Multiplicative identity.
    pub fn one(modulus: &Modulus) -> Self {
        Self(DynResidue::one(modulus.params))
    }

    /// Reduce the big-endian integer in `bytes` modulo `modulus`.
    pub fn from_be_slice(bytes: &[u8], modulus: &Modulus) -> Result<Self> {
        Ok(Self::new(&super::scalar::uint_from_be_slice(bytes)?, modulus))
    }

    /// Canonical representative in `[0, m)`.
    pub fn to_uint(&self) -> Uint {
        self.0.retrieve()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.to_uint().ct_eq(&Uint::ZERO)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `self^exp` by left-to-right square-and-multiply.
    ///
    /// Runs in time dependent on the bit length of `exp`, which is only ever
    /// a public modulus-derived value.
    pub fn pow_vartime(&self, exp: &Uint) -> Self {
        let mut acc = Self(DynResidue::one(*self.0.params()));
        for i in (0..exp.bits_vartime()).rev() {
            acc = acc.square();
            if exp.bit_vartime(i) {
                acc = acc * *self;
            }
        }
        acc
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn invert(&self, modulus: &Modulus) -> Option<Self> {
        if bool::from(self.is_zero()) {
            return None;
        }
        Some(self.pow_vartime(&modulus.minus_two))
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_uint().ct_eq(&other.to_uint())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", self.to_uint())
    }
}
