//! TLSTREE key tree of R 1323565.1.029-2019.

use crate::{Kdf, Result};
use alloc::vec::Vec;
use core::fmt;
use digest::{core_api::BlockSizeUser, Digest, Output};
use zeroize::Zeroize;

/// Per-level masks `C1`, `C2`, `C3` applied to the record sequence number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TlsTreeParams([u64; 3]);

impl TlsTreeParams {
    /// `TLS_GOSTR341112_256_WITH_MAGMA_CTR_OMAC`
    pub const MAGMA_CTR_OMAC: Self = Self([
        0xFFFF_FFC0_0000_0000,
        0xFFFF_FFFF_FE00_0000,
        0xFFFF_FFFF_FFFF_F000,
    ]);

    /// `TLS_GOSTR341112_256_WITH_KUZNYECHIK_CTR_OMAC`
    pub const KUZNYECHIK_CTR_OMAC: Self = Self([
        0xFFFF_FFFF_0000_0000,
        0xFFFF_FFFF_FFF8_0000,
        0xFFFF_FFFF_FFFF_FFC0,
    ]);

    /// `TLS_GOSTR341112_256_WITH_KUZNYECHIK_MGM_L`
    pub const KUZNYECHIK_MGM_L: Self = Self([
        0xF800_0000_0000_0000,
        0xFFFF_FFF0_0000_0000,
        0xFFFF_FFFF_FFFF_E000,
    ]);

    /// `TLS_GOSTR341112_256_WITH_MAGMA_MGM_L`
    pub const MAGMA_MGM_L: Self = Self([
        0xFFE0_0000_0000_0000,
        0xFFFF_FFFF_C000_0000,
        0xFFFF_FFFF_FFFF_FF80,
    ]);

    /// `TLS_GOSTR341112_256_WITH_KUZNYECHIK_MGM_S`
    pub const KUZNYECHIK_MGM_S: Self = Self([
        0xFFFF_FFFF_E000_0000,
        0xFFFF_FFFF_FFFF_0000,
        0xFFFF_FFFF_FFFF_FFF8,
    ]);

    /// `TLS_GOSTR341112_256_WITH_MAGMA_MGM_S`
    pub const MAGMA_MGM_S: Self = Self([
        0xFFFF_FFFF_FC00_0000,
        0xFFFF_FFFF_FFFF_E000,
        0xFFFF_FFFF_FFFF_FFFF,
    ]);

    /// Custom masks.
    pub const fn new(masks: [u64; 3]) -> Self {
        Self(masks)
    }

    /// The three masks, outermost level first.
    pub const fn masks(&self) -> [u64; 3] {
        self.0
    }

    fn same_subtree(&self, a: u64, b: u64) -> bool {
        self.0.iter().all(|c| a & c == b & c)
    }
}

/// Derives per-record keys from a root key and the record sequence number.
///
/// ```text
/// K1 = KDF(root, "level1", seq & C1)
/// K2 = KDF(K1,   "level2", seq & C2)
/// K3 = KDF(K2,   "level3", seq & C3)
/// ```
///
/// All values are big-endian. The last derived key is cached and reused
/// while the masked sequence number stays the same.
pub struct TlsTree<D>
where
    D: Digest + BlockSizeUser + Clone,
{
    params: TlsTreeParams,
    root: Vec<u8>,
    prev: Option<u64>,
    key: Output<D>,
}

impl<D> TlsTree<D>
where
    D: Digest + BlockSizeUser + Clone,
{
    /// Create a tree over a copy of `root`.
    pub fn new(params: TlsTreeParams, root: &[u8]) -> Self {
        Self {
            params,
            root: root.to_vec(),
            prev: None,
            key: Output::<D>::default(),
        }
    }

    /// Key for record `seq`, borrowed from the cache.
    ///
    /// The flag is `true` when the key of the previous call was reused
    /// without any hashing. The first call always derives.
    pub fn derive_cached(&mut self, seq: u64) -> Result<(&Output<D>, bool)> {
        if let Some(prev) = self.prev {
            if self.params.same_subtree(seq, prev) {
                return Ok((&self.key, true));
            }
        }

        let [c1, c2, c3] = self.params.0;
        let mut k1 = Kdf::<D>::new(&self.root)?.derive(b"level1", &(seq & c1).to_be_bytes());
        let mut k2 = Kdf::<D>::new(&k1)?.derive(b"level2", &(seq & c2).to_be_bytes());
        self.key = Kdf::<D>::new(&k2)?.derive(b"level3", &(seq & c3).to_be_bytes());
        k1.as_mut_slice().zeroize();
        k2.as_mut_slice().zeroize();
        self.prev = Some(seq);

        Ok((&self.key, false))
    }

    /// Owned key for record `seq`.
    pub fn derive(&mut self, seq: u64) -> Result<Output<D>> {
        let (key, _) = self.derive_cached(seq)?;
        Ok(key.clone())
    }

    /// Masks in use.
    pub fn params(&self) -> TlsTreeParams {
        self.params
    }
}

impl<D> fmt::Debug for TlsTree<D>
where
    D: Digest + BlockSizeUser + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsTree")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl<D> Drop for TlsTree<D>
where
    D: Digest + BlockSizeUser + Clone,
{
    fn drop(&mut self) {
        self.root.as_mut_slice().zeroize();
        self.key.as_mut_slice().zeroize();
    }
}
