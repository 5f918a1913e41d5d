//! Pairwise SHA-256 Merkle accumulation over padded chunk sequences.
//!
//! Leaf nodes are the hash of each zero-padded 32-byte chunk. The leaf
//! level is padded on the right with the zero-chunk hash to the next power
//! of two, then folded pairwise until a single root remains: O(n) hash
//! calls, O(log n) depth. The empty chunk list maps deterministically to
//! the zero-chunk hash itself.

use sha2::{Digest, Sha256};
use tel_types::ContentId;

use crate::chunk::{chunkify, pad_chunk, BYTES_PER_CHUNK};
use crate::proof::InclusionProof;

/// Hash one padded chunk into a leaf node.
fn hash_chunk(chunk: &[u8; BYTES_PER_CHUNK]) -> ContentId {
    let digest = Sha256::digest(chunk);
    ContentId::from_digest(digest.into())
}

/// Hash two 32-byte nodes into their parent: `H(left ++ right)`.
pub fn hash_nodes(left: &ContentId, right: &ContentId) -> ContentId {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    ContentId::from_digest(hasher.finalize().into())
}

/// The hash of an all-zero chunk: the filler node for padded subtrees and
/// the root of an empty chunk sequence.
pub fn zero_hash() -> ContentId {
    hash_chunk(&[0u8; BYTES_PER_CHUNK])
}

/// Hash a byte buffer of any length into a single digest.
///
/// Up to one chunk of data is padded and hashed once; longer buffers are
/// chunked and folded through [`merkleize`].
pub fn hash_leaf(data: &[u8]) -> ContentId {
    if data.len() <= BYTES_PER_CHUNK {
        hash_chunk(&pad_chunk(data))
    } else {
        merkleize(&chunkify(data))
    }
}

/// Fold a chunk sequence to a single root digest.
pub fn merkleize(chunks: &[[u8; BYTES_PER_CHUNK]]) -> ContentId {
    MerkleTree::from_chunks(chunks).root()
}

/// Mix a sequence length into a root: `H(root ++ pad_32(u64_le(length)))`.
///
/// Applied to every variable-length value so that two different-length
/// sequences sharing an encoded prefix can never collide on a root.
pub fn mix_in_length(root: &ContentId, length: u64) -> ContentId {
    let length_chunk = ContentId::from_digest(pad_chunk(&length.to_le_bytes()));
    hash_nodes(root, &length_chunk)
}

/// Binary Merkle tree over a chunk sequence, with all levels cached.
///
/// Backs both [`merkleize`] and inclusion-proof generation. Construction
/// pads the leaf level to a power of two, so every level pairs evenly.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// Number of real (unpadded) leaf chunks.
    leaf_count: usize,
    /// Level 0 = padded leaf hashes, last level = single root.
    levels: Vec<Vec<ContentId>>,
}

impl MerkleTree {
    /// Build a tree from a chunk sequence. The empty sequence produces a
    /// one-node tree whose root is the zero-chunk hash.
    pub fn from_chunks(chunks: &[[u8; BYTES_PER_CHUNK]]) -> Self {
        let width = chunks.len().next_power_of_two().max(1);
        let mut level: Vec<ContentId> = chunks.iter().map(hash_chunk).collect();
        level.resize(width, zero_hash());

        let mut levels = vec![level.clone()];
        let mut current = level;
        while current.len() > 1 {
            let next: Vec<ContentId> = current
                .chunks(2)
                .map(|pair| hash_nodes(&pair[0], &pair[1]))
                .collect();
            levels.push(next.clone());
            current = next;
        }

        Self {
            leaf_count: chunks.len(),
            levels,
        }
    }

    /// The root digest.
    pub fn root(&self) -> ContentId {
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of real leaf chunks (padding excluded).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Generate an inclusion proof for the real leaf at `index`.
    ///
    /// Returns `None` if `index` lies outside the real data; padding
    /// leaves cannot be proven.
    pub fn proof(&self, index: usize) -> Option<InclusionProof> {
        if index >= self.leaf_count {
            return None;
        }

        let mut siblings = Vec::with_capacity(self.levels.len() - 1);
        let mut idx = index;
        for level in &self.levels[..self.levels.len() - 1] {
            siblings.push(level[idx ^ 1]);
            idx /= 2;
        }

        Some(InclusionProof {
            leaf_index: index as u64,
            siblings,
        })
    }
}
