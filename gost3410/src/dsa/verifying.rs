//! Signature verification.

use super::{digest_scalar, Signature};
use crate::{arithmetic::FieldElement, Error, PublicKey, Result, Uint};
use signature::hazmat::PrehashVerifier;

impl PublicKey<'_> {
    /// Verify `signature` (`s || r`) over a message digest.
    ///
    /// Returns `Ok(false)` for a signature of the wrong length, for
    /// components outside `[1, q-1]` and for a mismatch. Errors are reserved
    /// for failures inside the point arithmetic, such as a public key of
    /// small order.
    pub fn verify_digest(&self, digest: &[u8], signature: &[u8]) -> Result<bool> {
        if signature.len() != 2 * self.mode.size() {
            return Ok(false);
        }
        match Signature::from_slice(signature) {
            Ok(sig) => self.verify_components(digest, &sig.s, &sig.r),
            Err(_) => Ok(false),
        }
    }

    fn verify_components(&self, digest: &[u8], s: &Uint, r: &Uint) -> Result<bool> {
        let q = self.curve.scalar_modulus();
        let in_range = |v: &Uint| v != &Uint::ZERO && v < q.value();
        if !in_range(r) || !in_range(s) {
            return Ok(false);
        }

        let e = digest_scalar(digest, q)?;
        let v = e.invert(q).ok_or(Error::ZeroScalar)?;
        let r_fe = FieldElement::new(r, q);
        let z1 = FieldElement::new(s, q) * v;
        let z2 = FieldElement::zero(q) - r_fe * v;

        let p1 = self
            .curve
            .scalar_mul(&z1.to_uint(), &self.curve.generator())?;
        let p2 = self.curve.scalar_mul(&z2.to_uint(), &self.point)?;
        let sum = match self.curve.add(&p1, &p2) {
            Ok(point) => point,
            Err(Error::PointAtInfinity) => return Ok(false),
            Err(err) => return Err(err),
        };

        Ok(FieldElement::new(&sum.x(), q) == r_fe)
    }
}

impl PrehashVerifier<Signature> for PublicKey<'_> {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        if signature.mode != self.mode {
            return Err(signature::Error::new());
        }

        match self.verify_components(prehash, &signature.s, &signature.r) {
            Ok(true) => Ok(()),
            _ => Err(signature::Error::new()),
        }
    }
}
