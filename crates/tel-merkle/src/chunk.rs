//! Chunking and canonical zero-padding.
//!
//! The Merkle engine consumes data in 32-byte chunks. A buffer that is not
//! a multiple of 32 bytes is padded with zeros on the right; the padding is
//! part of the canonical layout, so two buffers that differ only in
//! trailing zeros within the final chunk hash identically at the chunk
//! level (length mixing at the root disambiguates them, see
//! [`mix_in_length`](crate::mix_in_length)).

/// Leaf granularity of the Merkle engine, in bytes.
pub const BYTES_PER_CHUNK: usize = 32;

/// Zero-pad up to one chunk of data to exactly 32 bytes.
///
/// `data` must not exceed one chunk; longer inputs belong in [`chunkify`].
pub fn pad_chunk(data: &[u8]) -> [u8; BYTES_PER_CHUNK] {
    debug_assert!(data.len() <= BYTES_PER_CHUNK);
    let mut chunk = [0u8; BYTES_PER_CHUNK];
    let len = data.len().min(BYTES_PER_CHUNK);
    chunk[..len].copy_from_slice(&data[..len]);
    chunk
}

/// Split a buffer into 32-byte chunks, zero-padding the last.
///
/// An empty buffer yields no chunks; the engine maps an empty chunk list
/// to a defined root (see [`merkleize`](crate::merkleize)).
pub fn chunkify(data: &[u8]) -> Vec<[u8; BYTES_PER_CHUNK]> {
    data.chunks(BYTES_PER_CHUNK).map(pad_chunk).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_short_data() {
        let chunk = pad_chunk(&[1, 2, 3]);
        assert_eq!(&chunk[..3], &[1, 2, 3]);
        assert_eq!(&chunk[3..], &[0u8; 29]);
    }

    #[test]
    fn pad_full_chunk_is_identity() {
        let data = [0xAB; 32];
        assert_eq!(pad_chunk(&data), data);
    }

    #[test]
    fn pad_empty_is_zero_chunk() {
        assert_eq!(pad_chunk(&[]), [0u8; 32]);
    }

    #[test]
    fn chunkify_empty_yields_no_chunks() {
        assert!(chunkify(&[]).is_empty());
    }

    #[test]
    fn chunkify_exact_multiple() {
        let data = [7u8; 64];
        let chunks = chunkify(&data);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], [7u8; 32]);
        assert_eq!(chunks[1], [7u8; 32]);
    }

    #[test]
    fn chunkify_pads_final_chunk() {
        let data = [9u8; 33];
        let chunks = chunkify(&data);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1][0], 9);
        assert_eq!(&chunks[1][1..], &[0u8; 31]);
    }
}
