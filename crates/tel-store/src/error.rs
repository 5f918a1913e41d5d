use tel_codec::CodecError;
use thiserror::Error;

use crate::header::ObjectType;

/// Errors from typed object store operations.
///
/// The taxonomy keeps failure families apart: I/O, malformed headers,
/// malformed payload framing, payload decode failures, and semantic
/// validator rejections each surface as their own variant so callers can
/// retry, reject, or report appropriately.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure from the underlying read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the `TELG` magic.
    #[error("invalid file magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// The header names a format version this implementation cannot read.
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u8),

    /// A type tag byte does not name a known object type.
    #[error("unknown object type tag: {0:#04x}")]
    UnknownObjectType(u8),

    /// The header's object type differs from what the caller expects.
    /// Never silently reinterpreted.
    #[error("object type mismatch: expected {expected}, found {actual}")]
    ObjectTypeMismatch {
        expected: ObjectType,
        actual: ObjectType,
    },

    /// The payload holds a different number of objects than the header
    /// declares.
    #[error("object count mismatch: header declares {declared}, payload holds {actual}")]
    CountMismatch { declared: u32, actual: u32 },

    /// The payload framing is malformed (truncated entry, trailing bytes).
    #[error("corrupt payload at offset {offset}: {reason}")]
    Corrupt { offset: usize, reason: String },

    /// An object's encoded bytes failed to decode.
    #[error("decode error: {0}")]
    Decode(#[from] CodecError),

    /// A decoded object was rejected by the caller-supplied validator.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The `Graph` tag marks a heterogeneous container; it cannot tag an
    /// individual object, nor nest inside a graph batch.
    #[error("the graph object type is reserved for heterogeneous batches")]
    ReservedGraphTag,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
