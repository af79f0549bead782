//! VKO key agreement (GOST R 34.10-2001 and R 1323565.1.020-2018).

use crate::{arithmetic::scalar, Error, PrivateKey, PublicKey, Result, Uint};
use alloc::vec::Vec;

#[cfg(feature = "streebog")]
use streebog::{Digest, Streebog256, Streebog512};

/// Decode a user keying material (UKM) value from its little-endian wire
/// form.
pub fn ukm_from_bytes(raw: &[u8]) -> Result<Uint> {
    let mut be = raw.to_vec();
    be.reverse();
    scalar::uint_from_be_slice(&be)
}

impl PrivateKey<'_> {
    /// Derive the key encryption key shared with `peer`.
    ///
    /// `peer` must lie on a curve with the same parameters; the curve names
    /// may differ.
    ///
    /// Computes `ukm * d * Q` (the `ukm` step is skipped when it is one) and
    /// returns the point in public key wire form, `2 * mode.size()` bytes.
    /// Both sides arrive at the same bytes with their roles swapped.
    pub fn kek(&self, peer: &PublicKey<'_>, ukm: &Uint) -> Result<Vec<u8>> {
        if !self.curve.same_parameters(peer.curve) {
            return Err(Error::InvalidCurve);
        }

        let mut point = self.curve.scalar_mul(&self.scalar, &peer.point)?;
        if ukm != &Uint::ONE {
            point = self.curve.scalar_mul(ukm, &point)?;
        }

        Ok(PublicKey::from_affine(self.curve, self.mode, point).to_bytes())
    }

    /// 34.10-2012 VKO with a 256-bit result: Streebog-256 of [`Self::kek`].
    #[cfg(feature = "streebog")]
    pub fn kek_2012_256(&self, peer: &PublicKey<'_>, ukm: &Uint) -> Result<[u8; 32]> {
        let kek = self.kek(peer, ukm)?;
        let mut out = [0u8; 32];
        out.copy_from_slice(&Streebog256::digest(&kek));
        Ok(out)
    }

    /// 34.10-2012 VKO with a 512-bit result: Streebog-512 of [`Self::kek`].
    #[cfg(feature = "streebog")]
    pub fn kek_2012_512(&self, peer: &PublicKey<'_>, ukm: &Uint) -> Result<[u8; 64]> {
        let kek = self.kek(peer, ukm)?;
        let mut out = [0u8; 64];
        out.copy_from_slice(&Streebog512::digest(&kek));
        Ok(out)
    }
}
