//! Public keys.

use crate::{arithmetic::scalar, AffinePoint, Curve, Error, Mode, Result, Uint};
use alloc::{vec, vec::Vec};

/// Public key: a curve point bound to a curve and a [`Mode`].
///
/// The coordinates are kept exactly as decoded so that encoding gives back
/// the same bytes; arithmetic uses their residues modulo `p`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey<'c> {
    pub(crate) curve: &'c Curve,
    pub(crate) mode: Mode,
    pub(crate) point: AffinePoint,
    x: Uint,
    y: Uint,
}

impl<'c> PublicKey<'c> {
    /// Decode a public key from its wire form.
    ///
    /// `raw` is `2 * mode.size()` bytes. Reversed as a whole it reads
    /// `Y || X`, each coordinate big-endian. Neither the coordinate range nor
    /// the curve equation is checked; use [`PublicKey::from_bytes_checked`]
    /// for keys from untrusted sources.
    pub fn from_bytes(curve: &'c Curve, mode: Mode, raw: &[u8]) -> Result<Self> {
        let (x, y) = split_coordinates(curve, mode, raw)?;
        Ok(Self {
            curve,
            mode,
            point: curve.point_unchecked(&x, &y),
            x,
            y,
        })
    }

    /// Decode a public key like [`PublicKey::from_bytes`], additionally
    /// requiring canonical coordinates of a point on the curve.
    pub fn from_bytes_checked(curve: &'c Curve, mode: Mode, raw: &[u8]) -> Result<Self> {
        let (x, y) = split_coordinates(curve, mode, raw)?;
        Ok(Self {
            curve,
            mode,
            point: curve.point(&x, &y)?,
            x,
            y,
        })
    }

    pub(crate) fn from_affine(curve: &'c Curve, mode: Mode, point: AffinePoint) -> Self {
        Self {
            curve,
            mode,
            point,
            x: point.x(),
            y: point.y(),
        }
    }

    /// Encode as the wire form, `2 * mode.size()` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.mode.size();
        let mut out = vec![0u8; 2 * size];
        let (y, x) = out.split_at_mut(size);
        scalar::write_be_padded(&self.y, y);
        scalar::write_be_padded(&self.x, x);
        out.reverse();
        out
    }

    /// The x-coordinate as decoded.
    pub fn x(&self) -> Uint {
        self.x
    }

    /// The y-coordinate as decoded.
    pub fn y(&self) -> Uint {
        self.y
    }

    /// The key as a curve point, coordinates reduced modulo `p`.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Does the key's point satisfy the curve equation?
    pub fn is_on_curve(&self) -> bool {
        self.curve.is_on_curve(&self.point)
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

fn split_coordinates(curve: &Curve, mode: Mode, raw: &[u8]) -> Result<(Uint, Uint)> {
    curve.check_mode(mode)?;
    let size = mode.size();
    if raw.len() != 2 * size {
        return Err(Error::InvalidLength {
            expected: 2 * size,
            actual: raw.len(),
        });
    }

    let mut be = raw.to_vec();
    be.reverse();
    let (y, x) = be.split_at(size);
    Ok((scalar::uint_from_be_slice(x)?, scalar::uint_from_be_slice(y)?))
}
