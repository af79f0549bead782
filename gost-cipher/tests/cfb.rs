//! CFB mode tests.

use gost_cipher::{
    cfb::{Gost89CfbDec, Gost89CfbEnc, MagmaCfbDec, MagmaCfbEnc},
    cipher::KeyIvInit,
};
use hex_literal::hex;
use proptest::prelude::*;

const KEY: [u8; 32] = hex!("ffeeddccbbaa99887766554433221100f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");
const KEY_28147: [u8; 32] =
    hex!("ccddeeff8899aabb4455667700112233f3f2f1f0f7f6f5f4fbfaf9f8fffefdfc");
const IV: [u8; 8] = hex!("0102030405060708");

/// `00 01 .. 13`: two full blocks and a four byte tail.
fn message() -> [u8; 20] {
    core::array::from_fn(|i| i as u8)
}

#[test]
fn gost89_cfb() {
    let mut buf = message();
    Gost89CfbEnc::new_from_slices(&KEY_28147, &IV)
        .unwrap()
        .encrypt(&mut buf);
    assert_eq!(buf, hex!("21943894d0f03e37b1bd163324096f941d20755e"));

    Gost89CfbDec::new_from_slices(&KEY_28147, &IV)
        .unwrap()
        .decrypt(&mut buf);
    assert_eq!(buf, message());
}

#[test]
fn magma_cfb() {
    let mut buf = message();
    MagmaCfbEnc::new_from_slices(&KEY, &IV)
        .unwrap()
        .encrypt(&mut buf);
    assert_eq!(buf, hex!("50b72fb0e284e75a680a8f364b6cd3d8022f54c8"));
}

#[test]
fn rejects_wrong_iv_length() {
    assert!(Gost89CfbEnc::new_from_slices(&KEY_28147, &IV[..4]).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn split_calls_match_one_call(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        split in 0usize..64,
    ) {
        let split = split.min(data.len());

        let mut whole = data.clone();
        Gost89CfbEnc::new_from_slices(&KEY_28147, &IV).unwrap().encrypt(&mut whole);

        let mut parts = data.clone();
        let mut enc = Gost89CfbEnc::new_from_slices(&KEY_28147, &IV).unwrap();
        let (head, tail) = parts.split_at_mut(split);
        enc.encrypt(head);
        enc.encrypt(tail);
        prop_assert_eq!(&whole, &parts);

        let mut dec = Gost89CfbDec::new_from_slices(&KEY_28147, &IV).unwrap();
        dec.decrypt(&mut whole);
        prop_assert_eq!(whole, data);
    }
}
