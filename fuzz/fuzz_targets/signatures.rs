#![no_main]
// Targets: gost3410 signature parsing and verification
use gost3410::{params, Curve, Mode, PrivateKey, PublicKey, Signature};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());
    let curve = Curve::new(params::gost_r3410_2001_cryptopro_a()).unwrap();
    let digest = &data[32..64];
    let sig_bytes = &data[64..];

    // Any bytes parse or fail cleanly
    if let Ok(sig) = Signature::from_slice(sig_bytes) {
        assert_eq!(sig.to_bytes(), sig_bytes);
    }

    // Verification against a genuine key reports a mismatch, never a panic
    let key = PrivateKey::random(&curve, Mode::Bits256, &mut rng).unwrap();
    let public_key = key.public_key().unwrap();
    let _ = public_key.verify_digest(digest, sig_bytes);

    // A fresh signature always verifies
    let sig = key.sign_digest(digest, &mut rng).unwrap();
    assert!(public_key.verify_digest(digest, &sig.to_bytes()).unwrap());

    // Verification against an arbitrary, possibly off-curve key
    if let Ok(other) = PublicKey::from_bytes(&curve, Mode::Bits256, &data[..64]) {
        let _ = other.verify_digest(digest, &sig.to_bytes());
    }
});
