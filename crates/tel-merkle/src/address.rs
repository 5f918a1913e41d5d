//! Content-address derivation for encoded values.
//!
//! Schema v1 policy: the whole canonical encoding is treated as one flat
//! leaf sequence — container fields and collection elements are not
//! merkleized individually. Variable-size types additionally mix the byte
//! length of the encoding into the root. Every content address in the
//! system is defined relative to this policy; changing it (for example to
//! recursive per-field roots) is a schema version bump for every consumer.

use tel_codec::Codec;
use tel_types::ContentId;

use crate::tree::{hash_leaf, mix_in_length};

/// Root digest of an encoded buffer under the flat-buffer policy.
pub fn hash_tree_root(bytes: &[u8]) -> ContentId {
    hash_leaf(bytes)
}

/// Content address of a value: the Merkle root of its canonical encoding.
///
/// Two values with identical encodings always share an address; this is
/// the system's sole notion of identity for the types it governs. For
/// variable-size types the encoding's byte length is mixed into the root,
/// so different-length values with a shared encoded prefix cannot collide.
pub fn content_id<T: Codec>(value: &T) -> ContentId {
    let bytes = value.encode();
    let root = hash_tree_root(&bytes);
    match T::FIXED_SIZE {
        Some(_) => root,
        None => mix_in_length(&root, bytes.len() as u64),
    }
}
