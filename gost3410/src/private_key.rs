//! Private keys.

use crate::{
    arithmetic::{scalar, FieldElement},
    Curve, Error, Mode, PublicKey, Result, Uint,
};
use alloc::{vec, vec::Vec};
use core::fmt;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Number of draws [`PrivateKey::random`] makes before giving up with
/// [`Error::RetriesExhausted`].
pub const KEYGEN_ATTEMPTS: u32 = 32;

/// Private key: a non-zero scalar bound to a curve and a [`Mode`].
///
/// The scalar is wiped from memory when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey<'c> {
    pub(crate) curve: &'c Curve,
    pub(crate) mode: Mode,
    pub(crate) scalar: Uint,
}

impl<'c> PrivateKey<'c> {
    /// Decode a private key from its little-endian wire form.
    ///
    /// `raw` must be exactly [`Mode::size`] bytes long and must not encode
    /// zero.
    pub fn from_bytes(curve: &'c Curve, mode: Mode, raw: &[u8]) -> Result<Self> {
        curve.check_mode(mode)?;
        if raw.len() != mode.size() {
            return Err(Error::InvalidLength {
                expected: mode.size(),
                actual: raw.len(),
            });
        }

        let mut be = Zeroizing::new([0u8; Uint::BYTES]);
        be[..raw.len()].copy_from_slice(raw);
        be[..raw.len()].reverse();
        let scalar = scalar::uint_from_be_slice(&be[..raw.len()])?;

        Self::from_scalar(curve, mode, scalar)
    }

    /// Generate a random private key.
    ///
    /// Draws [`Mode::size`] bytes from `rng` and reduces them modulo `q`,
    /// drawing again if the result is zero, at most [`KEYGEN_ATTEMPTS`]
    /// times.
    pub fn random(curve: &'c Curve, mode: Mode, rng: &mut impl CryptoRngCore) -> Result<Self> {
        curve.check_mode(mode)?;
        let q = curve.scalar_modulus();
        let mut buf = Zeroizing::new([0u8; Uint::BYTES]);

        for _ in 0..KEYGEN_ATTEMPTS {
            rng.try_fill_bytes(&mut buf[..mode.size()])?;
            let scalar = FieldElement::from_be_slice(&buf[..mode.size()], q)?.to_uint();
            if scalar != Uint::ZERO {
                return Self::from_scalar(curve, mode, scalar);
            }
        }

        Err(Error::RetriesExhausted)
    }

    fn from_scalar(curve: &'c Curve, mode: Mode, scalar: Uint) -> Result<Self> {
        if scalar == Uint::ZERO {
            return Err(Error::ZeroPrivateKey);
        }
        Ok(Self {
            curve,
            mode,
            scalar,
        })
    }

    /// Encode as the little-endian wire form, [`Mode::size`] bytes long.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.mode.size()];
        scalar::write_be_padded(&self.scalar, &mut out);
        out.reverse();
        out
    }

    /// Derive the matching public key by multiplying the generator by the
    /// private scalar.
    ///
    /// Fails only for a scalar which is a non-zero multiple of `q`.
    pub fn public_key(&self) -> Result<PublicKey<'c>> {
        let point = self
            .curve
            .scalar_mul(&self.scalar, &self.curve.generator())?;

        Ok(PublicKey::from_affine(self.curve, self.mode, point))
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Wire size selector of this key.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl fmt::Debug for PrivateKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.name())
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Drop for PrivateKey<'_> {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateKey<'_> {}
