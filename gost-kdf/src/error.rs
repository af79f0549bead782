//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The MAC rejected the key length.
    InvalidKeyLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength => write!(f, "invalid key length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<digest::InvalidLength> for Error {
    fn from(_: digest::InvalidLength) -> Self {
        Error::InvalidKeyLength
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
