//! Runtime-parameterised short Weierstrass curves.

use crate::{
    arithmetic::{scalar, AffinePoint, FieldElement, Modulus},
    Error, Mode, Result, Uint,
};
use alloc::string::String;
use core::ptr;

/// Parameters of a prime-order subgroup of `y² = x³ + ax + b` over `F_p`.
///
/// This is the unvalidated input to [`Curve::new`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Human-readable name, usually the parameter set's ASN.1 identifier.
    pub name: String,

    /// Field characteristic.
    pub p: Uint,

    /// Order of the subgroup generated by `(x, y)`.
    pub q: Uint,

    /// Linear coefficient.
    pub a: Uint,

    /// Constant coefficient.
    pub b: Uint,

    /// Generator x-coordinate.
    pub x: Uint,

    /// Generator y-coordinate.
    pub y: Uint,

    /// Twisted Edwards coefficients `(e, d)` for curves which also have an
    /// Edwards form. Carried along but unused by the arithmetic here.
    pub edwards: Option<(Uint, Uint)>,
}

/// Validated curve, ready for point arithmetic.
///
/// A `Curve` is immutable and holds no scratch state, so a single instance
/// can be shared between any number of keys and threads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    name: String,
    p: Modulus,
    q: Modulus,
    a: FieldElement,
    b: FieldElement,
    generator: AffinePoint,
    edwards: Option<(Uint, Uint)>,
}

impl Curve {
    /// Validate `params` and precompute the Montgomery parameters for both
    /// moduli.
    ///
    /// Fails with [`Error::InvalidCurve`] if either modulus is even, if a
    /// coefficient or coordinate is not reduced modulo `p`, or if the
    /// generator is not on the curve.
    pub fn new(params: CurveParams) -> Result<Self> {
        let p = Modulus::new(params.p)?;
        let q = Modulus::new(params.q)?;

        let reduced = [&params.a, &params.b, &params.x, &params.y];
        if reduced.iter().any(|v| **v >= params.p) {
            return Err(Error::InvalidCurve);
        }

        let curve = Self {
            name: params.name,
            a: FieldElement::new(&params.a, &p),
            b: FieldElement::new(&params.b, &p),
            generator: AffinePoint {
                x: FieldElement::new(&params.x, &p),
                y: FieldElement::new(&params.y, &p),
            },
            edwards: params.edwards,
            p,
            q,
        };

        if !curve.is_on_curve(&curve.generator) {
            return Err(Error::InvalidCurve);
        }

        Ok(curve)
    }

    /// Name the curve was constructed with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field characteristic `p`.
    pub fn p(&self) -> &Uint {
        self.p.value()
    }

    /// Subgroup order `q`.
    pub fn q(&self) -> &Uint {
        self.q.value()
    }

    /// Linear coefficient `a`.
    pub fn a(&self) -> Uint {
        self.a.to_uint()
    }

    /// Constant coefficient `b`.
    pub fn b(&self) -> Uint {
        self.b.to_uint()
    }

    /// Twisted Edwards coefficients `(e, d)`, if known.
    pub fn edwards(&self) -> Option<(Uint, Uint)> {
        self.edwards
    }

    /// Base point of the subgroup.
    pub fn generator(&self) -> AffinePoint {
        self.generator
    }

    /// Build a point from its coordinates, checking it lies on the curve.
    pub fn point(&self, x: &Uint, y: &Uint) -> Result<AffinePoint> {
        if !self.contains(x, y) {
            return Err(Error::NotOnCurve);
        }
        Ok(self.point_unchecked(x, y))
    }

    /// Does `(x, y)` satisfy the curve equation with both coordinates in
    /// `[0, p)`?
    pub fn contains(&self, x: &Uint, y: &Uint) -> bool {
        if x >= self.p() || y >= self.p() {
            return false;
        }
        self.is_on_curve(&self.point_unchecked(x, y))
    }

    /// Sum of two points.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        lhs.add(rhs, &self.a, &self.p)
    }

    /// Multiply `point` by `k`.
    ///
    /// Double-and-add over the bits of `k - 1`, least significant first,
    /// starting from the point itself. Fails with [`Error::ZeroScalar`] for
    /// `k = 0` and with [`Error::PointAtInfinity`] if an intermediate sum
    /// degenerates, which happens for example when `k` is a multiple of the
    /// point's order.
    pub fn scalar_mul(&self, k: &Uint, point: &AffinePoint) -> Result<AffinePoint> {
        if k == &Uint::ZERO {
            return Err(Error::ZeroScalar);
        }

        let degree = k.wrapping_sub(&Uint::ONE);
        let bits = degree.bits_vartime();
        let mut acc = *point;
        let mut addend = *point;

        for i in 0..bits {
            if degree.bit_vartime(i) {
                acc = self.add(&acc, &addend)?;
            }
            if i + 1 < bits {
                addend = addend.double(&self.a, &self.p)?;
            }
        }

        Ok(acc)
    }

    /// Reduce coordinates modulo `p` without checking the curve equation.
    pub(crate) fn point_unchecked(&self, x: &Uint, y: &Uint) -> AffinePoint {
        AffinePoint {
            x: FieldElement::new(x, &self.p),
            y: FieldElement::new(y, &self.p),
        }
    }

    pub(crate) fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let lhs = point.y.square();
        let rhs = (point.x.square() + self.a) * point.x + self.b;
        lhs == rhs
    }

    /// Same field, coefficients, order and generator, whatever the name.
    pub(crate) fn same_parameters(&self, other: &Curve) -> bool {
        ptr::eq(self, other)
            || (self.p == other.p
                && self.q == other.q
                && self.a == other.a
                && self.b == other.b
                && self.generator == other.generator)
    }

    pub(crate) fn scalar_modulus(&self) -> &Modulus {
        &self.q
    }

    /// Ensure `mode` is wide enough to encode coordinates and scalars.
    pub(crate) fn check_mode(&self, mode: Mode) -> Result<()> {
        let width = scalar::byte_len(self.p()).max(scalar::byte_len(self.q()));
        if width > mode.size() {
            return Err(Error::InvalidMode);
        }
        Ok(())
    }
}
