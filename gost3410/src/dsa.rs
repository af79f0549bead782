//! GOST R 34.10 digital signatures.
//!
//! ## Usage
//!
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use gost3410::{params, Curve, Mode, PrivateKey};
//! use rand_core::OsRng; // requires 'getrandom' feature
//!
//! let curve = Curve::new(params::gost_r3410_2001_cryptopro_a())?;
//! let private_key = PrivateKey::random(&curve, Mode::Bits256, &mut OsRng)?;
//! let public_key = private_key.public_key()?;
//!
//! // The digest comes from an external hash, e.g. Streebog-256
//! let digest = [0x42u8; 32];
//! let signature = private_key.sign_digest(&digest, &mut OsRng)?;
//!
//! assert!(public_key.verify_digest(&digest, &signature.to_bytes())?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Algorithm
//!
//! ```text
//! e = digest mod q, or 1 if that is 0
//!
//! sign:   pick k in [1, q-1]; (x, _) = kG; r = x mod q
//!         s = (rd + ke) mod q
//!         redraw k while r = 0 or s = 0
//!
//! verify: reject unless 0 < r < q and 0 < s < q
//!         v = e^-1; z1 = sv; z2 = -rv (all mod q)
//!         (x, _) = z1 G + z2 Q; accept iff x mod q = r
//! ```

mod signing;
mod verifying;

use crate::{
    arithmetic::{scalar, FieldElement, Modulus},
    Error, Mode, Result, Uint,
};
use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;
use signature::SignatureEncoding;

/// Number of random draws [`PrivateKey::sign_digest`][crate::PrivateKey::sign_digest]
/// makes before giving up with [`Error::RetriesExhausted`].
///
/// A healthy randomness source needs more than one draw with negligible
/// probability.
pub const DEFAULT_SIGN_ATTEMPTS: u32 = 32;

/// GOST R 34.10 signature.
///
/// Encoded as `s || r`, each component big-endian and padded to
/// [`Mode::size`] bytes.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    mode: Mode,
    s: Uint,
    r: Uint,
}

impl Signature {
    /// Parse a signature; the length selects the [`Mode`].
    ///
    /// Only the length is checked here. Range checks against `q` happen
    /// during verification.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mode = Mode::from_pair_len(bytes.len()).ok_or(Error::InvalidLength {
            expected: 2 * Mode::Bits256.size(),
            actual: bytes.len(),
        })?;

        let (s, r) = bytes.split_at(mode.size());
        Ok(Self {
            mode,
            s: scalar::uint_from_be_slice(s)?,
            r: scalar::uint_from_be_slice(r)?,
        })
    }

    /// Serialize as `s || r`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.mode.size();
        let mut out = vec![0u8; 2 * size];
        let (s, r) = out.split_at_mut(size);
        scalar::write_be_padded(&self.s, s);
        scalar::write_be_padded(&self.r, r);
        out
    }

    /// The `r` component.
    pub fn r(&self) -> &Uint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &Uint {
        &self.s
    }

    /// Wire size selector of this signature.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gost3410::Signature(")?;

        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}

impl From<Signature> for Box<[u8]> {
    fn from(signature: Signature) -> Box<[u8]> {
        signature.to_bytes().into_boxed_slice()
    }
}

impl SignatureEncoding for Signature {
    type Repr = Box<[u8]>;

    fn to_bytes(&self) -> Self::Repr {
        Signature::to_bytes(self).into_boxed_slice()
    }

    fn encoded_len(&self) -> usize {
        2 * self.mode.size()
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Signature> {
        Signature::from_slice(bytes).map_err(|_| signature::Error::new())
    }
}

/// Interpret `digest` as a big-endian integer modulo `q`, substituting one
/// for zero.
fn digest_scalar(digest: &[u8], q: &Modulus) -> Result<FieldElement> {
    let e = FieldElement::from_be_slice(digest, q)?;
    if bool::from(e.is_zero()) {
        return Ok(FieldElement::one(q));
    }
    Ok(e)
}

#[cfg(test)]
mod tests {
    use super::{digest_scalar, Signature};
    use crate::{Error, Mode, Modulus, Uint};

    #[test]
    fn length_selects_mode() {
        let sig = Signature::from_slice(&[1u8; 64]).unwrap();
        assert_eq!(sig.mode(), Mode::Bits256);
        let sig = Signature::from_slice(&[1u8; 128]).unwrap();
        assert_eq!(sig.mode(), Mode::Bits512);

        assert!(matches!(
            Signature::from_slice(&[1u8; 96]),
            Err(Error::InvalidLength { actual: 96, .. })
        ));
    }

    #[test]
    fn s_comes_first() {
        let mut bytes = [0u8; 64];
        bytes[31] = 5;
        bytes[63] = 7;
        let sig = Signature::from_slice(&bytes).unwrap();
        assert_eq!(sig.s(), &Uint::from_u8(5));
        assert_eq!(sig.r(), &Uint::from_u8(7));
        assert_eq!(sig.to_bytes(), bytes);
    }

    #[test]
    fn zero_digest_becomes_one() {
        let q = Modulus::new(Uint::from_u8(13)).unwrap();
        assert_eq!(digest_scalar(&[26], &q).unwrap().to_uint(), Uint::ONE);
        assert_eq!(digest_scalar(&[], &q).unwrap().to_uint(), Uint::ONE);
        assert_eq!(digest_scalar(&[15], &q).unwrap().to_uint(), Uint::from_u8(2));
    }
}
