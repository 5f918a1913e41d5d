//! Merkle inclusion proofs.
//!
//! A proof is the ordered sibling path from a leaf to a root, paired with
//! the leaf's index. It is meaningful only against the exact root it was
//! produced from and must be treated as untrusted once the underlying
//! chunk sequence changes. Verification is a pure boolean — absence of
//! membership is an expected outcome, never an error.

use serde::{Deserialize, Serialize};
use tel_types::ContentId;

use crate::chunk::BYTES_PER_CHUNK;
use crate::tree::{hash_leaf, hash_nodes, MerkleTree};

/// Sibling path proving that one leaf chunk belongs under a root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    /// Index of the proven leaf in the chunk sequence.
    pub leaf_index: u64,
    /// Sibling digests ordered from leaf level to root level.
    pub siblings: Vec<ContentId>,
}

impl InclusionProof {
    /// Recompute the root from `leaf` and the sibling path and compare.
    ///
    /// At each step the accumulator takes the left slot when the running
    /// index is even and the right slot when odd.
    pub fn verify(&self, root: &ContentId, leaf: &[u8]) -> bool {
        let mut acc = hash_leaf(leaf);
        let mut index = self.leaf_index;
        for sibling in &self.siblings {
            acc = if index % 2 == 0 {
                hash_nodes(&acc, sibling)
            } else {
                hash_nodes(sibling, &acc)
            };
            index /= 2;
        }
        acc == *root
    }
}

/// Generate an inclusion proof for `chunks[index]`.
///
/// Returns `None` when `index` lies outside the chunk sequence.
pub fn compute_proof(
    chunks: &[[u8; BYTES_PER_CHUNK]],
    index: usize,
) -> Option<InclusionProof> {
    MerkleTree::from_chunks(chunks).proof(index)
}
