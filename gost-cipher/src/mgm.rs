//! Multilinear Galois Mode of R 1323565.1.026-2019.

use aead::{
    consts::{U0, U16, U8},
    generic_array::ArrayLength,
    AeadCore, AeadInPlace, Error, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use cipher::{Block, BlockCipher, BlockEncrypt};
use subtle::ConstantTimeEq;

mod sealed {
    pub trait Sealed {}
}

/// Block sizes MGM is defined for, with their field reduction polynomial.
pub trait MgmBlockSize: ArrayLength<u8> + sealed::Sealed {
    /// Low terms of the irreducible polynomial of `GF(2^n)`.
    const POLY: u128;
}

impl sealed::Sealed for U8 {}
impl sealed::Sealed for U16 {}

impl MgmBlockSize for U8 {
    // x^64 + x^4 + x^3 + x + 1
    const POLY: u128 = 0x1b;
}

impl MgmBlockSize for U16 {
    // x^128 + x^7 + x^2 + x + 1
    const POLY: u128 = 0x87;
}

/// MGM authenticated encryption over a 64 or 128-bit block cipher.
///
/// Nonces are one block long with the top bit clear. Tags are one block
/// long. A message must carry plaintext or associated data (or both), and
/// their combined length is limited to `2^(n/2) - 1` bytes for an `n`-bit
/// block.
#[derive(Clone, Debug)]
pub struct Mgm<C>
where
    C: BlockCipher + BlockEncrypt,
    C::BlockSize: MgmBlockSize,
{
    cipher: C,
}

impl<C> Mgm<C>
where
    C: BlockCipher + BlockEncrypt,
    C::BlockSize: MgmBlockSize,
{
    fn check(nonce: &Block<C>, text: &[u8], associated_data: &[u8]) -> aead::Result<()> {
        let max = (1u128 << (4 * nonce.len())) - 1;
        let ad_len = associated_data.len() as u128;
        let total = ad_len + text.len() as u128;
        if nonce[0] & 0x80 != 0 || total == 0 || ad_len > max || total > max {
            return Err(Error);
        }
        Ok(())
    }

    /// XOR `data` with the keystream `E(Y_1), E(Y_2), ...` where
    /// `Y_1 = E(0 || nonce)` and each step increments the right half.
    fn crypt(&self, nonce: &Block<C>, data: &mut [u8]) {
        let mut counter = nonce.clone();
        counter[0] &= 0x7F;
        self.cipher.encrypt_block(&mut counter);

        let half = counter.len() / 2;
        let mut pad = Block::<C>::default();
        for chunk in data.chunks_mut(counter.len()) {
            self.cipher.encrypt_block_b2b(&counter, &mut pad);
            chunk.iter_mut().zip(pad.iter()).for_each(|(c, k)| *c ^= k);
            increment(&mut counter[half..]);
        }
    }

    /// Tag over the associated data and the ciphertext.
    ///
    /// Block `i` of `A || C`, zero padded, is multiplied by `H_i = E(Z_i)`
    /// where `Z_1 = E(1 || nonce)` and each step increments the left half.
    /// One more `H` multiplies the bit lengths `len(A) || len(C)`, and the
    /// tag is the encryption of the sum.
    fn authenticate(&self, nonce: &Block<C>, associated_data: &[u8], text: &[u8]) -> Tag<Self> {
        let size = nonce.len();
        let half = size / 2;
        let mut counter = nonce.clone();
        counter[0] |= 0x80;
        self.cipher.encrypt_block(&mut counter);

        let mut h = Block::<C>::default();
        let mut sum = 0u128;
        for chunk in associated_data.chunks(size).chain(text.chunks(size)) {
            self.cipher.encrypt_block_b2b(&counter, &mut h);
            let padded = from_be(chunk) << (8 * (size - chunk.len()));
            sum ^= gf_mul::<C::BlockSize>(from_be(&h), padded);
            increment(&mut counter[..half]);
        }

        self.cipher.encrypt_block_b2b(&counter, &mut h);
        let half_mask = (1u128 << (8 * half)) - 1;
        let bits = |len: usize| (len as u128 * 8) & half_mask;
        let lengths = (bits(associated_data.len()) << (8 * half)) | bits(text.len());
        sum ^= gf_mul::<C::BlockSize>(from_be(&h), lengths);

        let mut tag = Tag::<Self>::default();
        tag.copy_from_slice(&sum.to_be_bytes()[16 - size..]);
        self.cipher.encrypt_block(&mut tag);
        tag
    }
}

impl<C> From<C> for Mgm<C>
where
    C: BlockCipher + BlockEncrypt,
    C::BlockSize: MgmBlockSize,
{
    fn from(cipher: C) -> Self {
        Self { cipher }
    }
}

impl<C> KeySizeUser for Mgm<C>
where
    C: BlockCipher + BlockEncrypt + KeySizeUser,
    C::BlockSize: MgmBlockSize,
{
    type KeySize = C::KeySize;
}

impl<C> KeyInit for Mgm<C>
where
    C: BlockCipher + BlockEncrypt + KeyInit,
    C::BlockSize: MgmBlockSize,
{
    fn new(key: &Key<Self>) -> Self {
        Self { cipher: C::new(key) }
    }
}

impl<C> AeadCore for Mgm<C>
where
    C: BlockCipher + BlockEncrypt,
    C::BlockSize: MgmBlockSize,
{
    type NonceSize = C::BlockSize;
    type TagSize = C::BlockSize;
    type CiphertextOverhead = U0;
}

impl<C> AeadInPlace for Mgm<C>
where
    C: BlockCipher + BlockEncrypt,
    C::BlockSize: MgmBlockSize,
{
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        Self::check(nonce, buffer, associated_data)?;
        self.crypt(nonce, buffer);
        Ok(self.authenticate(nonce, associated_data, buffer))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        Self::check(nonce, buffer, associated_data)?;
        let expected = self.authenticate(nonce, associated_data, buffer);
        if !bool::from(expected.as_slice().ct_eq(tag.as_slice())) {
            return Err(Error);
        }
        self.crypt(nonce, buffer);
        Ok(())
    }
}

/// Big-endian increment modulo `2^(8 * len)`.
fn increment(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            return;
        }
    }
}

fn from_be(bytes: &[u8]) -> u128 {
    bytes.iter().fold(0, |acc, &b| (acc << 8) | u128::from(b))
}

/// Multiplication in `GF(2^n)` for the block size `B`, without branching on
/// either operand.
fn gf_mul<B: MgmBlockSize>(mut x: u128, y: u128) -> u128 {
    let bits = B::USIZE * 8;
    let top = 1u128 << (bits - 1);
    let mut z = 0u128;
    for i in 0..bits {
        z ^= x & 0u128.wrapping_sub((y >> i) & 1);
        let carry = (x & top) >> (bits - 1);
        x = ((x & !top) << 1) ^ (B::POLY & 0u128.wrapping_sub(carry));
    }
    z
}

#[cfg(test)]
mod tests {
    use super::{gf_mul, increment};
    use aead::consts::{U16, U8};

    #[test]
    fn multiplication_64() {
        assert_eq!(gf_mul::<U8>(1 << 63, 2), 0x1b);
        assert_eq!(
            gf_mul::<U8>(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210),
            0x4882_7ab5_5d97_6fa0
        );
    }

    #[test]
    fn multiplication_128() {
        assert_eq!(gf_mul::<U16>(1 << 127, 2), 0x87);
        assert_eq!(
            gf_mul::<U16>(
                0x0123_4567_89ab_cdef_fedc_ba98_7654_3210,
                0x8000_0000_0000_0001_c0ff_ee00_0000_0001
            ),
            0x9f01_b9c3_c6cd_7a64_6674_994e_fe85_d7cc
        );
    }

    #[test]
    fn increment_wraps() {
        let mut counter = [0x00, 0xff, 0xff];
        increment(&mut counter);
        assert_eq!(counter, [0x01, 0x00, 0x00]);

        let mut counter = [0xff, 0xff];
        increment(&mut counter);
        assert_eq!(counter, [0x00, 0x00]);
    }
}
