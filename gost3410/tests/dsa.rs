//! Signature tests.

use core::num::NonZeroU32;
use gost3410::{
    params,
    signature::{
        hazmat::{PrehashVerifier, RandomizedPrehashSigner},
        SignatureEncoding,
    },
    Curve, Error, Mode, PrivateKey, Signature, Uint,
};
use hex_literal::hex;
use proptest::prelude::*;
use rand_core::{CryptoRng, OsRng, RngCore};

// GOST R 34.10-2001 appendix A.
const D: [u8; 32] = hex!("7A929ADE789BB9BE10ED359DD39A72C11B60961F49397EEE1D19CE9891EC3B28");
const E: [u8; 32] = hex!("2DFBC1B372D89A1188C09C52E0EEC61FCE52032AB1022E8E67ECE6672B043EE5");
const K: [u8; 32] = hex!("77105C9B20BCD3122823C8CF6FCC7B956DE33814E95B7FE64FED924594DCEAB3");
const SIG: [u8; 64] = hex!(
    "01456C64BA4642A1653C235A98A60249BCD6D3F746B631DF928014F6C5BF9C40" // s
    "41AA28D2F1AB148280CD9ED56FEDA41974053554A42767B83AD043FD39DC0493" // r
);
const Q: [u8; 32] = hex!("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3");

/// Replays a fixed byte string, then fails.
struct FixedRng<'a>(&'a [u8]);

impl RngCore for FixedRng<'_> {
    fn next_u32(&mut self) -> u32 {
        unimplemented!()
    }

    fn next_u64(&mut self) -> u64 {
        unimplemented!()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).unwrap()
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        if dest.len() > self.0.len() {
            let code = NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
            return Err(code.into());
        }
        let (head, tail) = self.0.split_at(dest.len());
        dest.copy_from_slice(head);
        self.0 = tail;
        Ok(())
    }
}

impl CryptoRng for FixedRng<'_> {}

fn curve() -> Curve {
    Curve::new(params::gost_r3410_2001_test()).unwrap()
}

fn private_key(curve: &Curve) -> PrivateKey<'_> {
    let mut raw = D;
    raw.reverse();
    PrivateKey::from_bytes(curve, Mode::Bits256, &raw).unwrap()
}

#[test]
fn sign_test_vector() {
    let curve = curve();
    let key = private_key(&curve);
    let sig = key.sign_digest(&E, &mut FixedRng(&K)).unwrap();
    assert_eq!(sig.to_bytes(), SIG);
}

#[test]
fn verify_test_vector() {
    let curve = curve();
    let public_key = private_key(&curve).public_key().unwrap();
    assert!(public_key.verify_digest(&E, &SIG).unwrap());
}

#[test]
fn degenerate_nonce_is_redrawn() {
    let curve = curve();
    let key = private_key(&curve);

    // k = q reduces to zero and must be discarded
    let mut rng_bytes = Q.to_vec();
    rng_bytes.extend_from_slice(&K);
    let sig = key.sign_digest(&E, &mut FixedRng(&rng_bytes)).unwrap();
    assert_eq!(sig.to_bytes(), SIG);
}

#[test]
fn zero_digest_signs_as_one() {
    let curve = curve();
    let key = private_key(&curve);
    let public_key = key.public_key().unwrap();

    let mut one = [0u8; 32];
    one[31] = 1;

    let with_q = key.sign_digest(&Q, &mut FixedRng(&K)).unwrap();
    let with_zero = key.sign_digest(&[0u8; 32], &mut FixedRng(&K)).unwrap();
    let with_one = key.sign_digest(&one, &mut FixedRng(&K)).unwrap();
    assert_eq!(with_q, with_one);
    assert_eq!(with_zero, with_one);

    assert!(public_key.verify_digest(&one, &with_q.to_bytes()).unwrap());
    assert!(public_key.verify_digest(&Q, &with_one.to_bytes()).unwrap());
}

#[test]
fn out_of_range_components_are_rejected() {
    let curve = curve();
    let public_key = private_key(&curve).public_key().unwrap();
    let (s, r) = SIG.split_at(32);

    let cases: [(&[u8], &[u8]); 4] = [
        (s, &[0u8; 32]),
        (s, &Q),
        (&[0u8; 32], r),
        (&Q, r),
    ];
    for (s, r) in cases {
        let sig = [s, r].concat();
        assert!(!public_key.verify_digest(&E, &sig).unwrap());
    }
}

#[test]
fn wrong_length_is_rejected() {
    let curve = curve();
    let public_key = private_key(&curve).public_key().unwrap();

    assert!(!public_key.verify_digest(&E, &SIG[..63]).unwrap());
    assert!(!public_key.verify_digest(&E, &[SIG.as_slice(), &[0]].concat()).unwrap());
    assert!(!public_key.verify_digest(&E, &[SIG, SIG].concat()).unwrap());
    assert!(!public_key.verify_digest(&E, &[]).unwrap());
}

#[test]
fn rng_failure_is_propagated() {
    let curve = curve();
    let key = private_key(&curve);
    assert!(matches!(
        key.sign_digest(&E, &mut FixedRng(&K[..16])),
        Err(Error::Rng(_))
    ));
}

#[test]
fn retries_are_bounded() {
    let curve = curve();
    let key = private_key(&curve);

    let zeros = [0u8; 96];
    assert!(matches!(
        key.sign_digest_with_attempts(&E, &mut FixedRng(&zeros), 3),
        Err(Error::RetriesExhausted)
    ));
    assert!(matches!(
        key.sign_digest_with_attempts(&E, &mut FixedRng(&K), 0),
        Err(Error::RetriesExhausted)
    ));
}

#[test]
fn signature_trait_api() {
    let curve = curve();
    let key = private_key(&curve);
    let public_key = key.public_key().unwrap();

    let sig: Signature = key.sign_prehash_with_rng(&mut FixedRng(&K), &E).unwrap();
    assert_eq!(SignatureEncoding::to_bytes(&sig).as_ref(), SIG.as_slice());
    assert_eq!(sig.encoded_len(), 64);
    assert!(public_key.verify_prehash(&E, &sig).is_ok());

    let parsed = Signature::try_from(SIG.as_slice()).unwrap();
    assert_eq!(parsed, sig);

    let mut tampered = SIG;
    tampered[0] ^= 1;
    let tampered = Signature::try_from(tampered.as_slice()).unwrap();
    assert!(public_key.verify_prehash(&E, &tampered).is_err());

    let wide = Signature::try_from([SIG, SIG].concat().as_slice()).unwrap();
    assert!(public_key.verify_prehash(&E, &wide).is_err());
}

#[test]
fn sign_test_vector_512() {
    // GOST R 34.10-2012 appendix A.2
    const D: [u8; 64] = hex!(
        "0BA6048AADAE241BA40936D47756D7C93091A0E8514669700EE7508E508B1020"
        "72E8123B2200A0563322DAD2827E2714A2636B7BFD18AADFC62967821FA18DD4"
    );
    const E: [u8; 64] = hex!(
        "3754F3CFACC9E0615C4F4A7C4D8DAB531B09B6F9C170C533A71D147035B0C591"
        "7184EE536593F4414339976C647C5D5A407ADEDB1D560C4FC6777D2972075B8C"
    );
    const K: [u8; 64] = hex!(
        "0359E7F4B1410FEACC570456C6801496946312120B39D019D455986E364F3658"
        "86748ED7A44B3E794434006011842286212273A6D14CF70EA3AF71BB1AE679F1"
    );
    const SIG: [u8; 128] = hex!(
        "1081B394696FFE8E6585E7A9362D26B6325F56778AADBC081C0BFBE933D52FF5" // s
        "823CE288E8C4F362526080DF7F70CE406A6EEB1F56919CB92A9853BDE73E5B4A"
        "2F86FA60A081091A23DD795E1E3C689EE512A3C82EE0DCC2643C78EEA8FCACD3" // r
        "5492558486B20F1C9EC197C90699850260C93BCBCD9C5C3317E19344E173AE36"
    );
    const QX: [u8; 64] = hex!(
        "115DC5BC96760C7B48598D8AB9E740D4C4A85A65BE33C1815B5C320C854621DD"
        "5A515856D13314AF69BC5B924C8B4DDFF75C45415C1D9DD9DD33612CD530EFE1"
    );
    const QY: [u8; 64] = hex!(
        "37C7C90CD40B0F5621DC3AC1B751CFA0E2634FA0503B3D52639F5D7FB72AFD61"
        "EA199441D943FFE7F0C70A2759A3CDB84C114E1F9339FDF27F35ECA93677BEEC"
    );

    let curve = Curve::new(params::gost_r3410_2012_512_test()).unwrap();
    let mut raw = D;
    raw.reverse();
    let key = PrivateKey::from_bytes(&curve, Mode::Bits512, &raw).unwrap();
    let public_key = key.public_key().unwrap();
    assert_eq!(public_key.x(), Uint::from_be_slice(&QX));
    assert_eq!(public_key.y(), Uint::from_be_slice(&QY));

    let mut wire = [QY, QX].concat();
    wire.reverse();
    assert_eq!(public_key.to_bytes(), wire);

    let sig = key.sign_digest(&E, &mut FixedRng(&K)).unwrap();
    assert_eq!(sig.to_bytes(), SIG);
    assert!(public_key.verify_digest(&E, &SIG).unwrap());
}

#[test]
fn sign_and_verify_512() {
    let curve = Curve::new(params::gost_r3410_2012_512_test()).unwrap();
    let key = PrivateKey::random(&curve, Mode::Bits512, &mut OsRng).unwrap();
    let public_key = key.public_key().unwrap();
    let digest = [0x5Au8; 64];

    let sig = key.sign_digest(&digest, &mut OsRng).unwrap();
    assert_eq!(sig.mode(), Mode::Bits512);
    assert_eq!(sig.to_bytes().len(), 128);
    assert!(public_key.verify_digest(&digest, &sig.to_bytes()).unwrap());
    assert!(!public_key.verify_digest(&[0x5Bu8; 64], &sig.to_bytes()).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_and_verify(raw in any::<[u8; 32]>(), digest in any::<[u8; 32]>()) {
        let curve = Curve::new(params::gost_r3410_2001_cryptopro_a()).unwrap();
        prop_assume!(raw != [0u8; 32]);
        let key = PrivateKey::from_bytes(&curve, Mode::Bits256, &raw).unwrap();
        let public_key = key.public_key().unwrap();

        let sig = key.sign_digest(&digest, &mut OsRng).unwrap();
        prop_assert!(public_key.verify_digest(&digest, &sig.to_bytes()).unwrap());
    }

    #[test]
    fn reject_tampered_signature(byte in 0usize..64, bit in 0usize..8) {
        let curve = curve();
        let public_key = private_key(&curve).public_key().unwrap();

        let mut sig = SIG;
        sig[byte] ^= 1 << bit;
        prop_assert!(!public_key.verify_digest(&E, &sig).unwrap());
    }

    #[test]
    fn reject_tampered_digest(byte in 0usize..32, bit in 0usize..8) {
        let curve = curve();
        let public_key = private_key(&curve).public_key().unwrap();

        let mut digest = E;
        digest[byte] ^= 1 << bit;
        prop_assert!(!public_key.verify_digest(&digest, &SIG).unwrap());
    }
}
