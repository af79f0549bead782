#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod dsa;
pub mod params;

mod curve;
mod error;
mod private_key;
mod public_key;
mod vko;

pub use bigint::{self, U512 as Uint};
pub use rand_core;
pub use signature;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, Modulus},
    curve::{Curve, CurveParams},
    dsa::{Signature, DEFAULT_SIGN_ATTEMPTS},
    error::{Error, Result},
    private_key::{PrivateKey, KEYGEN_ATTEMPTS},
    public_key::PublicKey,
    vko::ukm_from_bytes,
};

/// Key size selector.
///
/// Fixes the width of private keys, public key coordinates and signature
/// components on the wire.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Mode {
    /// 256-bit keys (GOST R 34.10-2001, GOST R 34.10-2012 with 256-bit `q`).
    Bits256,

    /// 512-bit keys (GOST R 34.10-2012 with 512-bit `q`).
    Bits512,
}

impl Mode {
    /// Size of a scalar or coordinate in bytes.
    pub const fn size(self) -> usize {
        match self {
            Mode::Bits256 => 32,
            Mode::Bits512 => 64,
        }
    }

    /// Pick the mode whose double-width encoding has the given length.
    ///
    /// Used for public keys and signatures, which both carry two components.
    pub const fn from_pair_len(len: usize) -> Option<Self> {
        match len {
            64 => Some(Mode::Bits256),
            128 => Some(Mode::Bits512),
            _ => None,
        }
    }
}
