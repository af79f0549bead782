//! Cipher feedback mode with full-block feedback.
//!
//! Each keystream block is the encryption of the previous ciphertext block,
//! starting from the IV. A short final block uses a prefix of the keystream.
//! The buffered variants accept input of any length across calls.
//!
//! ```
//! use gost_cipher::cfb::{Gost89CfbDec, Gost89CfbEnc};
//! use gost_cipher::cipher::KeyIvInit;
//!
//! let (key, iv) = ([0x11; 32], [0x22; 8]);
//! let mut buf = *b"an arbitrary length message";
//!
//! Gost89CfbEnc::new(&key.into(), &iv.into()).encrypt(&mut buf);
//! Gost89CfbDec::new(&key.into(), &iv.into()).decrypt(&mut buf);
//! assert_eq!(&buf, b"an arbitrary length message");
//! ```

use crate::{Gost89, Magma};

pub use cfb_mode::{BufDecryptor, BufEncryptor, Decryptor, Encryptor};

/// CFB encryptor over [`Gost89`] for input of any length.
pub type Gost89CfbEnc = BufEncryptor<Gost89>;

/// CFB decryptor over [`Gost89`] for input of any length.
pub type Gost89CfbDec = BufDecryptor<Gost89>;

/// CFB encryptor over [`Magma`] for input of any length.
pub type MagmaCfbEnc = BufEncryptor<Magma>;

/// CFB decryptor over [`Magma`] for input of any length.
pub type MagmaCfbDec = BufDecryptor<Magma>;
