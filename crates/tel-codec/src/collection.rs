//! Codecs for homogeneous sequences.
//!
//! A **list** (`Vec<T>`) writes a 4-byte little-endian element count
//! followed by the concatenated element encodings. A **vector** (`[T; N]`)
//! writes the element encodings only; its length is part of the type and
//! never appears on the wire.
//!
//! Elements are self-describing on decode: each element decoder reports
//! its consumed length and parsing advances by exactly that much. A
//! corrupted element length therefore desynchronizes everything after it,
//! which surfaces as a hard [`CodecError`](crate::CodecError) when a later
//! read runs out of bounds.

use crate::error::CodecResult;
use crate::traits::{read_length_prefix, write_length_prefix, Codec, TypeKind};

impl<T: Codec> Codec for Vec<T> {
    const KIND: TypeKind = TypeKind::List;
    const FIXED_SIZE: Option<usize> = None;

    fn encode_into(&self, buf: &mut Vec<u8>) {
        write_length_prefix(buf, self.len());
        for item in self {
            item.encode_into(buf);
        }
    }

    fn decode_at(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let (count, mut offset) = read_length_prefix(bytes, offset)?;
        // The wire count is untrusted; cap the preallocation and let the
        // element decoders hit the buffer bounds instead.
        let mut items = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            let (item, next) = T::decode_at(bytes, offset)?;
            items.push(item);
            offset = next;
        }
        Ok((items, offset))
    }
}

impl<T: Codec, const N: usize> Codec for [T; N] {
    const KIND: TypeKind = TypeKind::Vector;
    const FIXED_SIZE: Option<usize> = match T::FIXED_SIZE {
        Some(size) => Some(size * N),
        None => None,
    };

    fn encode_into(&self, buf: &mut Vec<u8>) {
        for item in self {
            item.encode_into(buf);
        }
    }

    fn decode_at(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let mut items = Vec::with_capacity(N);
        let mut offset = offset;
        for _ in 0..N {
            let (item, next) = T::decode_at(bytes, offset)?;
            items.push(item);
            offset = next;
        }
        match items.try_into() {
            Ok(arr) => Ok((arr, offset)),
            // items holds exactly N elements by construction
            Err(_) => unreachable!(),
        }
    }
}
