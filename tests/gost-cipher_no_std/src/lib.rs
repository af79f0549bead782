//! Builds `gost-cipher` without the standard library.

#![no_std]

pub use gost_cipher;
