//! Typed object storage for TEL encodings.
//!
//! Two stores built on the canonical codec (`tel-codec`) and content
//! addressing (`tel-merkle`):
//!
//! - [`ObjectFile`]: the `TELG` on-disk container. A 10-byte header
//!   (magic, format version, object type, count) followed by a single
//!   object, a homogeneous batch, or a heterogeneous graph batch. Writes
//!   are staged in a temp file and renamed into place; reads check
//!   framing exactly and pass every object through a [`Validator`].
//! - [`MemoryContentStore`]: an in-memory map keyed by content address,
//!   deduplicating identical values.
//!
//! [`ObjectType`] tags are part of the file format: `Resource`, `Effect`,
//! `Capability` and `Handler` name homogeneous payloads, while `Graph`
//! marks a batch whose entries carry their own per-entry tags.

pub mod error;
pub mod file;
pub mod header;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::{AcceptAll, GraphDecoder, GraphEntry, ObjectFile, Validator};
pub use header::{FileHeader, ObjectType, FORMAT_VERSION, HEADER_LEN, MAGIC};
pub use memory::MemoryContentStore;

#[cfg(test)]
mod tests {
    use tel_codec::{container, Codec};
    use tel_merkle::content_id;
    use tempfile::tempdir;

    use super::*;

    container! {
        struct Handler {
            priority: u16,
            effect_kinds: Vec<u8>,
            name: String,
        }
    }

    fn handler(priority: u16) -> Handler {
        Handler {
            priority,
            effect_kinds: vec![1, 2, 3],
            name: format!("handler-{priority}"),
        }
    }

    #[test]
    fn disk_container_preserves_canonical_encoding() {
        // The payload of a single-object container is byte-identical to
        // the object's canonical encoding, so content addresses derived
        // before writing and after reading agree.
        let dir = tempdir().unwrap();
        let file = ObjectFile::new(dir.path().join("handler.telg"));
        let value = handler(5);
        let id_before = content_id(&value);

        file.write_one(ObjectType::Handler, &value).unwrap();
        let read: Handler = file.read_one(ObjectType::Handler, &AcceptAll).unwrap();
        assert_eq!(content_id(&read), id_before);

        let raw = std::fs::read(file.path()).unwrap();
        assert_eq!(&raw[HEADER_LEN..], value.encode().as_slice());
    }

    #[test]
    fn disk_batch_feeds_memory_store() {
        let dir = tempdir().unwrap();
        let file = ObjectFile::new(dir.path().join("handlers.telg"));
        let values: Vec<Handler> = (0..4).map(handler).collect();
        file.write_batch(ObjectType::Handler, &values).unwrap();

        let store = MemoryContentStore::new();
        let read: Vec<Handler> = file.read_batch(ObjectType::Handler, &AcceptAll).unwrap();
        let ids: Vec<_> = read.iter().map(|h| store.insert(h)).collect();

        assert_eq!(store.len(), 4);
        for (id, value) in ids.iter().zip(&values) {
            let fetched: Handler = store.get_decoded(id).unwrap().expect("should exist");
            assert_eq!(&fetched, value);
        }
    }

    #[test]
    fn header_constants_match_wire_layout() {
        assert_eq!(&MAGIC, b"TELG");
        assert_eq!(FORMAT_VERSION, 1);
        assert_eq!(HEADER_LEN, 10);
    }
}
