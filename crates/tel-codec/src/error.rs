use thiserror::Error;

/// Errors produced while decoding wire bytes.
///
/// Encoding is infallible; every variant here is a decode failure. A failed
/// decode never yields a partial value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended before the type's layout was satisfied.
    #[error("unexpected end of buffer: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A boolean byte was neither `0x00` nor `0x01`.
    #[error("invalid boolean byte: {0:#04x}")]
    InvalidBool(u8),

    /// A union tag byte did not name a known variant.
    #[error("invalid union tag: {0:#04x}")]
    InvalidUnionTag(u8),

    /// A string payload was not valid UTF-8.
    #[error("invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(String),

    /// A whole-buffer decode left bytes unconsumed.
    #[error("decoded {consumed} bytes but buffer holds {total}")]
    TrailingBytes { consumed: usize, total: usize },

    /// A declared length does not fit in the addressable range.
    #[error("declared length overflows the addressable range")]
    LengthOverflow,
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
