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

//! ## Usage
//!
//! ```
//! use gost_cipher::{aead::{Aead, KeyInit}, MgmMagma};
//!
//! let cipher = MgmMagma::new(&[0x42; 32].into());
//! let nonce = [0x12, 0xde, 0xf0, 0x6b, 0x3c, 0x13, 0x0a, 0x59].into();
//! let ciphertext = cipher.encrypt(&nonce, b"plaintext".as_ref()).unwrap();
//! assert_eq!(cipher.decrypt(&nonce, ciphertext.as_ref()).unwrap(), b"plaintext");
//! ```

#[cfg(feature = "std")]
extern crate std;

pub mod cfb;
mod magma;
mod mgm;

pub use aead;
pub use cfb_mode;
pub use cipher;

pub use crate::{
    magma::{Gost89, Magma},
    mgm::{Mgm, MgmBlockSize},
};

/// MGM over [`Magma`]: 8-byte nonces and tags.
pub type MgmMagma = Mgm<Magma>;
