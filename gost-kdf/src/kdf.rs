//! HMAC based key derivation of R 50.1.113-2016.

use crate::Result;
use digest::{core_api::BlockSizeUser, Digest, KeyInit, Mac, Output};
use hmac::SimpleHmac;

/// `KDF_256` of R 50.1.113-2016 section 4.4, generic over the hash.
///
/// ```text
/// KDF(K, label, seed) = HMAC(K, 0x01 || label || 0x00 || seed || 0x01 || 0x00)
/// ```
///
/// The trailing length field always encodes 256 bits of output.
#[derive(Clone)]
pub struct Kdf<D>
where
    D: Digest + BlockSizeUser + Clone,
{
    mac: SimpleHmac<D>,
}

impl<D> Kdf<D>
where
    D: Digest + BlockSizeUser + Clone,
{
    /// Key the derivation function with `key`.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            mac: <SimpleHmac<D> as KeyInit>::new_from_slice(key)?,
        })
    }

    /// Derive a key for `label` and `seed`.
    pub fn derive(&self, label: &[u8], seed: &[u8]) -> Output<D> {
        let mut mac = self.mac.clone();
        mac.update(&[0x01]);
        mac.update(label);
        mac.update(&[0x00]);
        mac.update(seed);
        mac.update(&[0x01, 0x00]);
        mac.finalize().into_bytes()
    }
}
