//! Builds `gost3410` without the standard library.

#![no_std]

pub use gost3410;
