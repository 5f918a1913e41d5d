use std::collections::HashMap;
use std::sync::RwLock;

use tel_codec::Codec;
use tel_merkle::content_id;
use tel_types::ContentId;

use crate::error::StoreResult;

/// In-memory, HashMap-based content-addressed store.
///
/// Intended for tests and embedding. Encoded objects are held in memory
/// behind a `RwLock` for safe concurrent access and keyed by their
/// content address, so identical values deduplicate to one entry.
pub struct MemoryContentStore {
    objects: RwLock<HashMap<ContentId, Vec<u8>>>,
}

impl MemoryContentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a value, returning its content address.
    ///
    /// Idempotent: the address is a pure function of the encoding, so
    /// re-inserting an equal value maps to the existing entry.
    pub fn insert<T: Codec>(&self, value: &T) -> ContentId {
        let id = content_id(value);
        let mut map = self.objects.write().expect("lock poisoned");
        map.entry(id).or_insert_with(|| value.encode());
        id
    }

    /// Fetch the encoded bytes stored at an address.
    pub fn get(&self, id: &ContentId) -> Option<Vec<u8>> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(id).cloned()
    }

    /// Fetch and decode the object stored at an address.
    ///
    /// Returns `Ok(None)` for an absent address; a decode failure means
    /// the store's bytes were corrupted and surfaces as an error.
    pub fn get_decoded<T: Codec>(&self, id: &ContentId) -> StoreResult<Option<T>> {
        let map = self.objects.read().expect("lock poisoned");
        match map.get(id) {
            Some(bytes) => Ok(Some(T::decode(bytes)?)),
            None => Ok(None),
        }
    }

    /// Whether an address is present.
    pub fn contains(&self, id: &ContentId) -> bool {
        self.objects
            .read()
            .expect("lock poisoned")
            .contains_key(id)
    }

    /// Number of distinct objects stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Remove all objects.
    pub fn clear(&self) {
        self.objects.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all stored addresses.
    pub fn ids(&self) -> Vec<ContentId> {
        let map = self.objects.read().expect("lock poisoned");
        let mut ids: Vec<ContentId> = map.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryContentStore")
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use tel_codec::container;

    use super::*;

    container! {
        struct Capability {
            owner: u32,
            scope: String,
        }
    }

    fn capability(owner: u32, scope: &str) -> Capability {
        Capability {
            owner,
            scope: scope.to_string(),
        }
    }

    #[test]
    fn insert_and_get_decoded() {
        let store = MemoryContentStore::new();
        let value = capability(1, "read");
        let id = store.insert(&value);

        let read: Capability = store.get_decoded(&id).unwrap().expect("should exist");
        assert_eq!(read, value);
    }

    #[test]
    fn get_returns_canonical_encoding() {
        let store = MemoryContentStore::new();
        let value = capability(1, "read");
        let id = store.insert(&value);
        assert_eq!(store.get(&id), Some(value.encode()));
    }

    #[test]
    fn insert_is_idempotent() {
        let store = MemoryContentStore::new();
        let id1 = store.insert(&capability(1, "read"));
        let id2 = store.insert(&capability(1, "read"));
        assert_eq!(id1, id2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_values_get_different_addresses() {
        let store = MemoryContentStore::new();
        let id1 = store.insert(&capability(1, "read"));
        let id2 = store.insert(&capability(1, "write"));
        assert_ne!(id1, id2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_address_returns_none() {
        let store = MemoryContentStore::new();
        let absent = ContentId::from_digest([0x42; 32]);
        assert!(store.get(&absent).is_none());
        assert!(store
            .get_decoded::<Capability>(&absent)
            .unwrap()
            .is_none());
        assert!(!store.contains(&absent));
    }

    #[test]
    fn len_is_empty_and_clear() {
        let store = MemoryContentStore::new();
        assert!(store.is_empty());

        store.insert(&capability(1, "a"));
        store.insert(&capability(2, "b"));
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_sorted() {
        let store = MemoryContentStore::new();
        for i in 0..5 {
            store.insert(&capability(i, "scope"));
        }
        let ids = store.ids();
        assert_eq!(ids.len(), 5);
        for pair in ids.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn cross_type_addresses_do_not_collide_in_map() {
        let store = MemoryContentStore::new();
        let id1 = store.insert(&7u32);
        let id2 = store.insert(&capability(7, ""));
        assert_ne!(id1, id2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryContentStore::new());
        let id = store.insert(&capability(9, "shared"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let value: Capability = store
                        .get_decoded(&id)
                        .unwrap()
                        .expect("should exist");
                    assert_eq!(value.owner, 9);
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread should not panic");
        }
    }

    #[test]
    fn default_creates_empty_store() {
        let store = MemoryContentStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = MemoryContentStore::new();
        store.insert(&capability(1, "x"));
        let debug = format!("{store:?}");
        assert!(debug.contains("MemoryContentStore"));
        assert!(debug.contains("object_count"));
    }
}
