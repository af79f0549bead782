//! Signature generation.

use super::{digest_scalar, Signature, DEFAULT_SIGN_ATTEMPTS};
use crate::{arithmetic::FieldElement, Error, PrivateKey, Result, Uint};
use signature::{hazmat::RandomizedPrehashSigner, rand_core::CryptoRngCore};
use zeroize::Zeroizing;

impl PrivateKey<'_> {
    /// Sign a message digest.
    ///
    /// `digest` is the raw output of an external hash function, read as a
    /// big-endian integer. Randomness comes from `rng`; a draw which leads to
    /// a zero `k`, `r` or `s` is discarded, up to [`DEFAULT_SIGN_ATTEMPTS`]
    /// times.
    pub fn sign_digest(&self, digest: &[u8], rng: &mut impl CryptoRngCore) -> Result<Signature> {
        self.sign_digest_with_attempts(digest, rng, DEFAULT_SIGN_ATTEMPTS)
    }

    /// Sign a message digest, making at most `attempts` random draws.
    ///
    /// Fails with [`Error::RetriesExhausted`] once every draw has been
    /// discarded, and with [`Error::Rng`] as soon as `rng` fails.
    pub fn sign_digest_with_attempts(
        &self,
        digest: &[u8],
        rng: &mut impl CryptoRngCore,
        attempts: u32,
    ) -> Result<Signature> {
        let q = self.curve.scalar_modulus();
        let size = self.mode.size();
        let e = digest_scalar(digest, q)?;
        let d = FieldElement::new(&self.scalar, q);
        let generator = self.curve.generator();
        let mut buf = Zeroizing::new([0u8; Uint::BYTES]);

        for _ in 0..attempts {
            rng.try_fill_bytes(&mut buf[..size])?;
            let k = FieldElement::from_be_slice(&buf[..size], q)?;
            if bool::from(k.is_zero()) {
                continue;
            }

            let point = self.curve.scalar_mul(&k.to_uint(), &generator)?;
            let r = FieldElement::new(&point.x(), q);
            if bool::from(r.is_zero()) {
                continue;
            }

            let s = r * d + k * e;
            if bool::from(s.is_zero()) {
                continue;
            }

            return Ok(Signature {
                mode: self.mode,
                s: s.to_uint(),
                r: r.to_uint(),
            });
        }

        Err(Error::RetriesExhausted)
    }
}

impl RandomizedPrehashSigner<Signature> for PrivateKey<'_> {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        self.sign_digest(prehash, rng)
            .map_err(|_| signature::Error::new())
    }
}
