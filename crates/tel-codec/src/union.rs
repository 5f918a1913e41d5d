//! Union codec: a 1-byte variant tag followed by the selected payload.
//!
//! `Option<T>` is the canonical two-variant union: tag `0x00` for none
//! (no payload), tag `0x01` for some followed by `T`'s encoding.

use crate::error::{CodecError, CodecResult};
use crate::traits::{take, Codec, TypeKind};

impl<T: Codec> Codec for Option<T> {
    const KIND: TypeKind = TypeKind::Union;
    const FIXED_SIZE: Option<usize> = None;

    fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            None => buf.push(0x00),
            Some(value) => {
                buf.push(0x01);
                value.encode_into(buf);
            }
        }
    }

    fn decode_at(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let raw = take(bytes, offset, 1)?;
        match raw[0] {
            0x00 => Ok((None, offset + 1)),
            0x01 => {
                let (value, next) = T::decode_at(bytes, offset + 1)?;
                Ok((Some(value), next))
            }
            other => Err(CodecError::InvalidUnionTag(other)),
        }
    }
}
