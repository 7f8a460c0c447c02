use std::sync::Arc;

use dashmap::DashMap;
use requery_core::QueryKey;

/// Shared map of previously resolved results.
///
/// A cheaply cloneable handle over a concurrent map: clones share the same
/// entries, so the longest-living holder defines the cache's lifetime.
/// Sharing is explicit — a handle is injected into each consumer rather than
/// looked up ambiently.
///
/// There is no eviction, expiry, or capacity bound; every inserted key is
/// retained for the life of the owning scope. Keys are unique and the last
/// write for a key wins. Inserts for different keys land in independent map
/// slots and do not interfere.
#[derive(Debug)]
pub struct QueryCache<T> {
    entries: Arc<DashMap<QueryKey, T>>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        QueryCache {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueryCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        QueryCache {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Pure read: returns a clone of the stored value, if any.
    pub fn lookup(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone,
    {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Idempotent upsert: overwrites any existing entry for `key`.
    pub fn insert(&self, key: QueryKey, data: T) {
        self.entries.insert(key, data);
    }

    /// Whether a result is stored for `key`.
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no results.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys with previously resolved results, in no particular order.
    pub fn keys(&self) -> Vec<QueryKey> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_on_empty_cache() {
        let cache: QueryCache<u32> = QueryCache::new();
        assert_eq!(cache.lookup(&QueryKey::new("pikachu")), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn insert_is_idempotent_and_last_write_wins() {
        let cache = QueryCache::new();
        let key = QueryKey::new("pikachu");

        cache.insert(key.clone(), 25);
        cache.insert(key.clone(), 25);
        assert_eq!(cache.lookup(&key), Some(25));
        assert_eq!(cache.len(), 1);

        cache.insert(key.clone(), 26);
        assert_eq!(cache.lookup(&key), Some(26));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clones_share_entries() {
        let cache = QueryCache::new();
        let shared = cache.clone();

        cache.insert(QueryKey::new("pikachu"), 25);
        assert_eq!(shared.lookup(&QueryKey::new("pikachu")), Some(25));
        assert!(shared.contains(&QueryKey::new("pikachu")));
    }

    #[test]
    fn keys_reflect_inserted_set() {
        let cache = QueryCache::new();
        cache.insert(QueryKey::new("pikachu"), 25);
        cache.insert(QueryKey::new("ditto"), 132);

        let mut keys = cache.keys();
        keys.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(keys, vec![QueryKey::new("ditto"), QueryKey::new("pikachu")]);
    }
}
