//! 64-bit block cipher of GOST 28147-89 and GOST R 34.12-2015.

use cipher::{
    consts::{U32, U8},
    AlgorithmName, BlockCipher, Key, KeyInit, KeySizeUser,
};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// `id-tc26-gost-28147-param-Z`, one row per nibble, least significant first.
const SBOX_Z: [[u8; 16]; 8] = [
    [12, 4, 6, 2, 10, 5, 11, 9, 14, 8, 13, 7, 0, 3, 15, 1],
    [6, 8, 2, 3, 9, 10, 5, 12, 1, 14, 4, 7, 11, 13, 0, 15],
    [11, 3, 5, 8, 2, 15, 10, 13, 14, 1, 7, 4, 12, 9, 6, 0],
    [12, 8, 2, 1, 13, 4, 15, 6, 7, 0, 10, 5, 3, 14, 9, 11],
    [7, 15, 5, 10, 8, 1, 6, 13, 0, 9, 3, 14, 11, 4, 2, 12],
    [5, 13, 15, 6, 9, 2, 12, 10, 11, 7, 8, 1, 4, 3, 14, 0],
    [8, 14, 2, 5, 6, 9, 1, 12, 15, 4, 11, 0, 13, 10, 3, 7],
    [1, 7, 14, 13, 0, 5, 8, 3, 4, 15, 10, 6, 9, 12, 11, 2],
];

/// Round function `g[k]`.
fn g(k: u32, a: u32) -> u32 {
    let x = a.wrapping_add(k);
    let mut y = 0u32;
    for (i, row) in SBOX_Z.iter().enumerate() {
        let nibble = (x >> (4 * i)) & 0xF;
        y |= u32::from(row[nibble as usize]) << (4 * i);
    }
    y.rotate_left(11)
}

/// The eight 32-bit subkeys, independent of byte order.
#[derive(Clone)]
struct RoundKeys([u32; 8]);

impl RoundKeys {
    fn load(key: &[u8], word: fn([u8; 4]) -> u32) -> Self {
        let mut keys = [0u32; 8];
        for (k, chunk) in keys.iter_mut().zip(key.chunks_exact(4)) {
            *k = word([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(keys)
    }

    /// 32 Feistel rounds over the halves `(n1, n2)`.
    ///
    /// Encryption takes `K1..K8` three times and then `K8..K1`; decryption
    /// runs the same schedule backwards. The returned pair has the final swap
    /// undone.
    fn rounds(&self, mut n1: u32, mut n2: u32, decrypt: bool) -> (u32, u32) {
        for round in 0..32 {
            let forward = if decrypt { round < 8 } else { round < 24 };
            let index = if forward { round % 8 } else { 7 - round % 8 };
            (n1, n2) = (g(self.0[index], n1) ^ n2, n1);
        }
        (n1, n2)
    }
}

impl Drop for RoundKeys {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

fn be32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}

fn le32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

/// Magma, the 64-bit block cipher of GOST R 34.12-2015.
///
/// Keys and blocks are big-endian.
#[derive(Clone)]
pub struct Magma {
    keys: RoundKeys,
}

impl KeySizeUser for Magma {
    type KeySize = U32;
}

impl KeyInit for Magma {
    fn new(key: &Key<Self>) -> Self {
        Self {
            keys: RoundKeys::load(key, u32::from_be_bytes),
        }
    }
}

impl BlockCipher for Magma {}

impl AlgorithmName for Magma {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magma")
    }
}

impl fmt::Debug for Magma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magma { ... }")
    }
}

impl ZeroizeOnDrop for Magma {}

cipher::impl_simple_block_encdec!(
    Magma, U8, cipher, block,
    encrypt: {
        let input = block.get_in();
        let (hi, lo) = cipher.keys.rounds(be32(&input[4..]), be32(&input[..4]), false);
        let out = block.get_out();
        out[..4].copy_from_slice(&hi.to_be_bytes());
        out[4..].copy_from_slice(&lo.to_be_bytes());
    }
    decrypt: {
        let input = block.get_in();
        let (hi, lo) = cipher.keys.rounds(be32(&input[4..]), be32(&input[..4]), true);
        let out = block.get_out();
        out[..4].copy_from_slice(&hi.to_be_bytes());
        out[4..].copy_from_slice(&lo.to_be_bytes());
    }
);

/// The GOST 28147-89 block cipher with the `id-tc26-gost-28147-param-Z`
/// S-box.
///
/// The same permutation as [`Magma`] with little-endian keys and blocks:
/// every key word has its bytes reversed and every block is reversed as a
/// whole.
#[derive(Clone)]
pub struct Gost89 {
    keys: RoundKeys,
}

impl KeySizeUser for Gost89 {
    type KeySize = U32;
}

impl KeyInit for Gost89 {
    fn new(key: &Key<Self>) -> Self {
        Self {
            keys: RoundKeys::load(key, u32::from_le_bytes),
        }
    }
}

impl BlockCipher for Gost89 {}

impl AlgorithmName for Gost89 {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GOST 28147-89")
    }
}

impl fmt::Debug for Gost89 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Gost89 { ... }")
    }
}

impl ZeroizeOnDrop for Gost89 {}

cipher::impl_simple_block_encdec!(
    Gost89, U8, cipher, block,
    encrypt: {
        let input = block.get_in();
        let (n1, n2) = cipher.keys.rounds(le32(&input[..4]), le32(&input[4..]), false);
        let out = block.get_out();
        out[..4].copy_from_slice(&n2.to_le_bytes());
        out[4..].copy_from_slice(&n1.to_le_bytes());
    }
    decrypt: {
        let input = block.get_in();
        let (n1, n2) = cipher.keys.rounds(le32(&input[..4]), le32(&input[4..]), true);
        let out = block.get_out();
        out[..4].copy_from_slice(&n2.to_le_bytes());
        out[4..].copy_from_slice(&n1.to_le_bytes());
    }
);
