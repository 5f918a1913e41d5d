//! Codecs for basic wire types: booleans, unsigned integers, and the
//! length-prefixed string primitive.
//!
//! Integers are little-endian at their natural width. Strings carry a
//! 4-byte little-endian byte-length prefix followed by raw UTF-8.

use crate::error::{CodecError, CodecResult};
use crate::traits::{read_length_prefix, take, write_length_prefix, Codec, TypeKind};

impl Codec for bool {
    const KIND: TypeKind = TypeKind::Basic;
    const FIXED_SIZE: Option<usize> = Some(1);

    fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.push(*self as u8);
    }

    fn decode_at(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let raw = take(bytes, offset, 1)?;
        match raw[0] {
            0x00 => Ok((false, offset + 1)),
            0x01 => Ok((true, offset + 1)),
            other => Err(CodecError::InvalidBool(other)),
        }
    }
}

macro_rules! impl_uint_codec {
    ($($ty:ty => $size:expr),+ $(,)?) => {$(
        impl Codec for $ty {
            const KIND: TypeKind = TypeKind::Basic;
            const FIXED_SIZE: Option<usize> = Some($size);

            fn encode_into(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.to_le_bytes());
            }

            fn decode_at(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
                let raw = take(bytes, offset, $size)?;
                let mut arr = [0u8; $size];
                arr.copy_from_slice(raw);
                Ok((<$ty>::from_le_bytes(arr), offset + $size))
            }
        }
    )+};
}

impl_uint_codec!(u8 => 1, u16 => 2, u32 => 4, u64 => 8);

impl Codec for String {
    // A string is a list of bytes on the wire; its size is never fixed.
    const KIND: TypeKind = TypeKind::List;
    const FIXED_SIZE: Option<usize> = None;

    fn encode_into(&self, buf: &mut Vec<u8>) {
        write_length_prefix(buf, self.len());
        buf.extend_from_slice(self.as_bytes());
    }

    fn decode_at(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let (len, offset) = read_length_prefix(bytes, offset)?;
        let raw = take(bytes, offset, len)?;
        let s = std::str::from_utf8(raw)
            .map_err(|e| CodecError::InvalidUtf8(e.to_string()))?
            .to_owned();
        Ok((s, offset + len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_layout() {
        assert_eq!(true.encode(), vec![0x01]);
        assert_eq!(false.encode(), vec![0x00]);
    }

    #[test]
    fn bool_rejects_other_bytes() {
        let err = bool::decode(&[0x02]).unwrap_err();
        assert_eq!(err, CodecError::InvalidBool(0x02));
    }

    #[test]
    fn u32_max_layout() {
        assert_eq!(4294967295u32.encode(), vec![0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(u32::decode(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap(), 4294967295);
    }

    #[test]
    fn u16_little_endian() {
        assert_eq!(0x0102u16.encode(), vec![0x02, 0x01]);
    }

    #[test]
    fn u64_little_endian_halves() {
        // The low 32-bit half precedes the high half on the wire.
        let value = 0x0000000100000002u64;
        let bytes = value.encode();
        assert_eq!(&bytes[..4], &[0x02, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[4..], &[0x01, 0x00, 0x00, 0x00]);
        assert_eq!(u64::decode(&bytes).unwrap(), value);
    }

    #[test]
    fn uint_truncated_buffer_is_eof() {
        let err = u32::decode(&[1, 2]).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedEof { .. }));
    }

    #[test]
    fn empty_string_is_four_zero_bytes() {
        assert_eq!(String::new().encode(), vec![0, 0, 0, 0]);
        assert_eq!(String::decode(&[0, 0, 0, 0]).unwrap(), "");
    }

    #[test]
    fn string_roundtrip() {
        let s = "alice".to_string();
        let bytes = s.encode();
        assert_eq!(bytes, vec![5, 0, 0, 0, b'a', b'l', b'i', b'c', b'e']);
        assert_eq!(String::decode(&bytes).unwrap(), s);
    }

    #[test]
    fn string_shorter_than_declared_is_eof() {
        // Prefix claims 10 bytes, payload holds 2.
        let err = String::decode(&[10, 0, 0, 0, b'h', b'i']).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedEof { .. }));
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let err = String::decode(&[2, 0, 0, 0, 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8(_)));
    }

    #[test]
    fn whole_buffer_decode_rejects_trailing_bytes() {
        let err = u8::decode(&[1, 2]).unwrap_err();
        assert_eq!(
            err,
            CodecError::TrailingBytes {
                consumed: 1,
                total: 2
            }
        );
    }

    #[test]
    fn fixed_sizes() {
        assert_eq!(bool::FIXED_SIZE, Some(1));
        assert_eq!(u8::FIXED_SIZE, Some(1));
        assert_eq!(u16::FIXED_SIZE, Some(2));
        assert_eq!(u32::FIXED_SIZE, Some(4));
        assert_eq!(u64::FIXED_SIZE, Some(8));
        assert_eq!(String::FIXED_SIZE, None);
    }
}
