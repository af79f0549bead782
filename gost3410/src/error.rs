//! Error types.

use core::fmt;

/// Error type.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Curve parameters are inconsistent: a modulus is even or too small, or
    /// the base point does not satisfy the curve equation.
    InvalidCurve,

    /// Input has the wrong length.
    InvalidLength {
        /// Length required by the selected mode.
        expected: usize,
        /// Length which was supplied.
        actual: usize,
    },

    /// The selected [`Mode`][`crate::Mode`] is too narrow to encode elements
    /// of the curve's field.
    InvalidMode,

    /// Private key scalar is zero.
    ZeroPrivateKey,

    /// Scalar multiplication was requested with a zero multiplier.
    ZeroScalar,

    /// Point arithmetic reached the point at infinity.
    PointAtInfinity,

    /// Point does not satisfy the curve equation.
    NotOnCurve,

    /// The randomness source failed.
    Rng(rand_core::Error),

    /// Every random draw allowed for signing or key generation produced a
    /// degenerate value.
    RetriesExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCurve => write!(f, "invalid curve parameters"),
            Error::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} bytes, got {actual}")
            }
            Error::InvalidMode => write!(f, "mode is too narrow for the curve"),
            Error::ZeroPrivateKey => write!(f, "zero private key"),
            Error::ZeroScalar => write!(f, "bad degree value"),
            Error::PointAtInfinity => write!(f, "point at infinity"),
            Error::NotOnCurve => write!(f, "point is not on the curve"),
            Error::Rng(err) => write!(f, "randomness source failure: {err}"),
            Error::RetriesExhausted => write!(f, "random draw retries exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Rng(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        Error::Rng(err)
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
