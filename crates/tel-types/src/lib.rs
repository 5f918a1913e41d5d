//! Foundation types for the TEL wire core.
//!
//! This crate provides the digest type shared by every other crate in the
//! workspace:
//!
//! - [`ContentId`] — a 32-byte digest. It is both the node type of the
//!   Merkle accumulator and the content address of an encoded value.
//!
//! A `ContentId` is only ever produced by hashing; two values with
//! identical canonical encodings always share one, and it is the sole
//! notion of identity for the types the wire core governs.

pub mod content_id;
pub mod error;

pub use content_id::ContentId;
pub use error::TypeError;
