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

mod error;
mod kdf;
mod tlstree;

pub use digest;
#[cfg(feature = "streebog")]
pub use streebog;

pub use crate::{
    error::{Error, Result},
    kdf::Kdf,
    tlstree::{TlsTree, TlsTreeParams},
};

/// `KDF_GOSTR3411_2012_256`: [`Kdf`] over Streebog-256.
#[cfg(feature = "streebog")]
pub type KdfStreebog256 = Kdf<streebog::Streebog256>;

/// TLSTREE over Streebog-256, as used by the GOST TLS 1.2 and 1.3 cipher
/// suites.
#[cfg(feature = "streebog")]
pub type TlsTreeStreebog256 = TlsTree<streebog::Streebog256>;
