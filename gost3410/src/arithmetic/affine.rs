//! Affine curve points.

use super::{FieldElement, Modulus};
use crate::{Error, Result, Uint};
use core::fmt;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// There is no representation of the point at infinity: operations which
/// would produce it return [`Error::PointAtInfinity`] instead.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: FieldElement,

    /// y-coordinate
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// The x-coordinate, in `[0, p)`.
    pub fn x(&self) -> Uint {
        self.x.to_uint()
    }

    /// The y-coordinate, in `[0, p)`.
    pub fn y(&self) -> Uint {
        self.y.to_uint()
    }

    /// Sum of two points, with `a` the curve's linear coefficient.
    ///
    /// Equal points take the tangent, everything else the chord through
    /// both. A vertical line in either case means the sum is the point at
    /// infinity.
    pub(crate) fn add(&self, rhs: &Self, a: &FieldElement, p: &Modulus) -> Result<Self> {
        let lambda = if self == rhs {
            let x_sq = self.x.square();
            let num = x_sq.double() + x_sq + *a;
            let den = self.y.double();
            num * den.invert(p).ok_or(Error::PointAtInfinity)?
        } else {
            let num = rhs.y - self.y;
            let den = rhs.x - self.x;
            num * den.invert(p).ok_or(Error::PointAtInfinity)?
        };

        let x = lambda.square() - self.x - rhs.x;
        let y = lambda * (self.x - x) - self.y;
        Ok(Self { x, y })
    }

    /// Returns `self + self`.
    pub(crate) fn double(&self, a: &FieldElement, p: &Modulus) -> Result<Self> {
        self.add(self, a, p)
    }
}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffinePoint")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}
