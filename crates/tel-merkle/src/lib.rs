//! Merkle accumulator and content addressing for TEL encodings.
//!
//! Folds canonical encodings (see `tel-codec`) into 32-byte root digests
//! and proves leaf inclusion against those roots:
//!
//! - [`chunkify`] / [`pad_chunk`] — 32-byte chunking with canonical
//!   zero-padding
//! - [`merkleize`] / [`MerkleTree`] — pairwise SHA-256 folding over a
//!   power-of-two-padded leaf level
//! - [`mix_in_length`] — length mixing for variable-size values
//! - [`compute_proof`] / [`InclusionProof`] — sibling-path inclusion
//!   proofs with boolean verification
//! - [`content_id`] — the content address of an encodable value
//!   (flat-buffer policy, schema v1)
//!
//! Everything here is a pure function over immutable buffers: no shared
//! state, no I/O, safe to call concurrently without coordination.

pub mod address;
pub mod chunk;
pub mod proof;
pub mod tree;

pub use address::{content_id, hash_tree_root};
pub use chunk::{chunkify, pad_chunk, BYTES_PER_CHUNK};
pub use proof::{compute_proof, InclusionProof};
pub use tree::{hash_leaf, hash_nodes, merkleize, mix_in_length, zero_hash, MerkleTree};
