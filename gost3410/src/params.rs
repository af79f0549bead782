//! Published parameter sets.
//!
//! Each function returns the raw [`CurveParams`]; pass them to
//! [`Curve::new`][crate::Curve::new] to obtain a usable curve.

use crate::{CurveParams, Uint};
use alloc::string::String;

/// `id-GostR3410-2001-TestParamSet` (1.2.643.2.2.35.0), the example curve
/// of GOST R 34.10-2001 appendix A.
pub fn gost_r3410_2001_test() -> CurveParams {
    CurveParams {
        name: String::from("id-GostR3410-2001-TestParamSet"),
        p: Uint::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000\
             8000000000000000000000000000000000000000000000000000000000000431",
        ),
        q: Uint::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000\
             8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3",
        ),
        a: Uint::from_u8(7),
        b: Uint::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000\
             5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E",
        ),
        x: Uint::from_u8(2),
        y: Uint::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000\
             08E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8",
        ),
        edwards: None,
    }
}

/// `id-GostR3410-2001-CryptoPro-A-ParamSet` (1.2.643.2.2.35.1).
pub fn gost_r3410_2001_cryptopro_a() -> CurveParams {
    CurveParams {
        name: String::from("id-GostR3410-2001-CryptoPro-A-ParamSet"),
        p: Uint::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000\
             FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97",
        ),
        q: Uint::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000\
             FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893",
        ),
        a: Uint::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000\
             FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94",
        ),
        b: Uint::from_u8(0xA6),
        x: Uint::from_u8(1),
        y: Uint::from_be_hex(
            "0000000000000000000000000000000000000000000000000000000000000000\
             8D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14",
        ),
        edwards: None,
    }
}

/// `id-tc26-gost-3410-12-512-paramSetTest` (1.2.643.7.1.2.1.2.0), the
/// 512-bit example curve of GOST R 34.10-2012 appendix A.
pub fn gost_r3410_2012_512_test() -> CurveParams {
    CurveParams {
        name: String::from("id-tc26-gost-3410-12-512-paramSetTest"),
        p: Uint::from_be_hex(
            "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15D\
             F1D852741AF4704A0458047E80E4546D35B8336FAC224DD81664BBF528BE6373",
        ),
        q: Uint::from_be_hex(
            "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15D\
             A82F2D7ECB1DBAC719905C5EECC423F1D86E25EDBE23C595D644AAF187E6E6DF",
        ),
        a: Uint::from_u8(7),
        b: Uint::from_be_hex(
            "1CFF0806A31116DA29D8CFA54E57EB748BC5F377E49400FDD788B649ECA1AC43\
             61834013B2AD7322480A89CA58E0CF74BC9E540C2ADD6897FAD0A3084F302ADC",
        ),
        x: Uint::from_be_hex(
            "24D19CC64572EE30F396BF6EBBFD7A6C5213B3B3D7057CC825F91093A68CD762\
             FD60611262CD838DC6B60AA7EEE804E28BC849977FAC33B4B530F1B120248A9A",
        ),
        y: Uint::from_be_hex(
            "2BB312A43BD2CE6E0D020613C857ACDDCFBF061E91E5F2C3F32447C259F39B2C\
             83AB156D77F1496BF7EB3351E1EE4E43DC1A18B91B24640B6DBB92CB1ADD371E",
        ),
        edwards: None,
    }
}
