#![no_main]
// Targets: gost3410 over the 2001 test and CryptoPro-A parameter sets
use gost3410::{params, Curve, Mode, PrivateKey, PublicKey, Uint};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

fn test_curve(curve: &Curve, data: &[u8], rng: &mut ChaChaRng) {
    // Arbitrary public key bytes must decode without panicking
    let permissive = PublicKey::from_bytes(curve, Mode::Bits256, &data[32..96]);
    if let Ok(key) = &permissive {
        assert_eq!(key.to_bytes(), &data[32..96]);
    }
    let checked = PublicKey::from_bytes_checked(curve, Mode::Bits256, &data[32..96]);
    if let Ok(key) = checked {
        assert!(key.is_on_curve());
        assert_eq!(permissive.unwrap(), key);
    }

    // Private keys round-trip exactly, whether decoded or generated
    let key = PrivateKey::from_bytes(curve, Mode::Bits256, &data[96..128]).unwrap();
    assert_eq!(key.to_bytes(), &data[96..128]);
    let random = PrivateKey::random(curve, Mode::Bits256, rng).unwrap();
    let again = PrivateKey::from_bytes(curve, Mode::Bits256, &random.to_bytes()).unwrap();
    assert_eq!(again.to_bytes(), random.to_bytes());

    let Ok(public_key) = key.public_key() else {
        return;
    };
    assert!(public_key.is_on_curve());
    let decoded = PublicKey::from_bytes_checked(curve, Mode::Bits256, &public_key.to_bytes());
    assert_eq!(decoded.unwrap(), public_key);

    // Test that addition and doubling are consistent
    let point = public_key.as_affine();
    if let (Ok(doubled), Ok(twice)) = (
        curve.add(point, point),
        curve.scalar_mul(&Uint::from_u8(2), point),
    ) {
        assert_eq!(doubled, twice);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 || data[96..128] == [0u8; 32] {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    for params in [
        params::gost_r3410_2001_test(),
        params::gost_r3410_2001_cryptopro_a(),
    ] {
        let curve = Curve::new(params).unwrap();
        test_curve(&curve, data, &mut rng);
    }
});
