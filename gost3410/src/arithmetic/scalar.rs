//! Helpers for moving integers between byte strings and [`Uint`].

use crate::{Error, Result, Uint};
use bigint::Encoding;

/// Parse a big-endian integer of at most [`Uint::BYTES`] bytes.
pub(crate) fn uint_from_be_slice(bytes: &[u8]) -> Result<Uint> {
    if bytes.len() > Uint::BYTES {
        return Err(Error::InvalidLength {
            expected: Uint::BYTES,
            actual: bytes.len(),
        });
    }

    let mut buf = [0u8; Uint::BYTES];
    buf[Uint::BYTES - bytes.len()..].copy_from_slice(bytes);
    Ok(Uint::from_be_slice(&buf))
}

/// Write `value` big-endian, left-padded with zeros, into all of `out`.
///
/// `out` must be wide enough for `value`; callers guarantee this through the
/// mode/curve width check.
pub(crate) fn write_be_padded(value: &Uint, out: &mut [u8]) {
    let bytes = value.to_be_bytes();
    let width = out.len().min(Uint::BYTES);
    let offset = out.len() - width;
    out[..offset].fill(0);
    out[offset..].copy_from_slice(&bytes[Uint::BYTES - width..]);
}

/// Number of bytes needed to hold `value`.
pub(crate) fn byte_len(value: &Uint) -> usize {
    (value.bits_vartime() + 7) / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_lengths() {
        assert_eq!(byte_len(&Uint::ZERO), 0);
        assert_eq!(byte_len(&Uint::ONE), 1);
        assert_eq!(byte_len(&Uint::from_u64(0xff)), 1);
        assert_eq!(byte_len(&Uint::from_u64(0x100)), 2);
        assert_eq!(byte_len(&Uint::MAX), 64);
    }

    #[test]
    fn be_slice_round_trip_with_padding() {
        let v = uint_from_be_slice(&[0x12, 0x34]).unwrap();
        assert_eq!(v, Uint::from_u64(0x1234));
        assert_eq!(byte_len(&v), 2);

        let mut out = [0xffu8; 4];
        write_be_padded(&v, &mut out);
        assert_eq!(out, [0x00, 0x00, 0x12, 0x34]);
    }

    #[test]
    fn rejects_oversized_input() {
        assert!(matches!(
            uint_from_be_slice(&[1u8; 65]),
            Err(Error::InvalidLength {
                expected: 64,
                actual: 65
            })
        ));
    }
}
