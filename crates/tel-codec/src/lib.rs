//! Deterministic binary codec for the TEL wire format.
//!
//! Every structured value the framework manipulates — resources, effects,
//! capabilities, handlers — is reduced to bytes by exactly one canonical
//! layout, so that equal values always have equal encodings and every
//! derived content address is stable across processes and implementations.
//!
//! # Wire format
//!
//! - boolean → 1 byte, `0x00`/`0x01`
//! - u8/u16/u32/u64 → little-endian at natural width
//! - string / byte blob → u32-LE byte length + raw bytes
//! - list (`Vec<T>`) → u32-LE element count + concatenated encodings
//! - vector (`[T; N]`) → concatenated encodings, length implied by type
//! - container → field encodings in declared order, no names on the wire
//! - union (`Option<T>`) → 1-byte tag + payload
//!
//! The [`Codec`] trait is the type specification: structural [`TypeKind`],
//! static size metadata, and the encode/decode pair. Containers are
//! declared with the [`container!`] macro. Decoding is total: malformed
//! input yields a [`CodecError`], never a panic or a partial value.

pub mod basic;
pub mod collection;
pub mod container;
pub mod error;
pub mod traits;
pub mod union;

pub use error::{CodecError, CodecResult};
pub use traits::{Codec, TypeKind};
