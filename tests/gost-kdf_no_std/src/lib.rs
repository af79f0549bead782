//! Builds `gost-kdf` without the standard library.

#![no_std]

pub use gost_kdf;
