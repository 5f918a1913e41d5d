use crate::error::{CodecError, CodecResult};

/// Structural classification of a wire type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Fixed-size primitive: booleans and unsigned integers.
    Basic,
    /// Fixed-length homogeneous sequence; length implied by the type.
    Vector,
    /// Variable-length homogeneous sequence with a count prefix. Strings
    /// and byte blobs are lists of bytes on the wire.
    List,
    /// Ordered composition of named, heterogeneously-typed fields.
    Container,
    /// Tagged choice between variants.
    Union,
}

/// Type specification for a concrete wire type.
///
/// A `Codec` impl is the single source of truth for a type's byte layout:
/// its structural [`TypeKind`], whether its size is statically known, and
/// the encode/decode pair. Implementations are versioned schema — changing
/// field order, widths, or element types changes the wire format and every
/// content address derived from it.
///
/// # Contract
///
/// - `decode_at(encode(v), 0)` returns `(v, encoding_length)` for every
///   value `v` (round-trip law).
/// - Encoding the same value twice yields byte-identical output.
/// - Decoders consume exactly the bytes their layout describes and report
///   the new offset; a buffer shorter than the layout requires is a
///   [`CodecError`], never a panic or an out-of-bounds read.
pub trait Codec: Sized {
    /// Structural kind of this type.
    const KIND: TypeKind;

    /// Encoded size in bytes, if the same for every value of the type.
    ///
    /// `Some` exactly when the type is a basic or a vector/container built
    /// entirely from fixed-size members. Lists, strings, byte blobs, and
    /// unions are always `None`.
    const FIXED_SIZE: Option<usize>;

    /// Append this value's canonical encoding to `buf`.
    fn encode_into(&self, buf: &mut Vec<u8>);

    /// Decode one value starting at `offset`, returning it with the new
    /// offset just past the consumed bytes.
    fn decode_at(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)>;

    /// This value's canonical encoding as a fresh buffer.
    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::FIXED_SIZE.unwrap_or(0));
        self.encode_into(&mut buf);
        buf
    }

    /// Decode a value from an entire buffer, rejecting trailing bytes.
    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let (value, consumed) = Self::decode_at(bytes, 0)?;
        if consumed != bytes.len() {
            return Err(CodecError::TrailingBytes {
                consumed,
                total: bytes.len(),
            });
        }
        Ok(value)
    }
}

/// Borrow `needed` bytes at `offset`, or fail with a bounds error.
pub(crate) fn take(bytes: &[u8], offset: usize, needed: usize) -> CodecResult<&[u8]> {
    let end = offset
        .checked_add(needed)
        .ok_or(CodecError::LengthOverflow)?;
    if end > bytes.len() {
        return Err(CodecError::UnexpectedEof {
            needed,
            remaining: bytes.len().saturating_sub(offset),
        });
    }
    Ok(&bytes[offset..end])
}

/// Read a 4-byte little-endian length prefix at `offset`.
pub(crate) fn read_length_prefix(bytes: &[u8], offset: usize) -> CodecResult<(usize, usize)> {
    let raw = take(bytes, offset, 4)?;
    let len = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize;
    Ok((len, offset + 4))
}

/// Append a 4-byte little-endian length prefix.
pub(crate) fn write_length_prefix(buf: &mut Vec<u8>, len: usize) {
    buf.extend_from_slice(&(len as u32).to_le_bytes());
}
