//! Append-or-create map-to-list aggregation
//!
//! A thin wrapper over a hash map whose values are small lists. Inserting
//! under an existing key appends; inserting under a fresh key creates the
//! list. Used for the parent → children, answer → terms and question →
//! roots indexes.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A map from keys to lists of values with append-or-create insertion
#[derive(Debug, Clone)]
pub struct MultiMap<K, V> {
    inner: FxHashMap<K, SmallVec<[V; 4]>>,
}

impl<K: Eq + Hash, V> MultiMap<K, V> {
    /// Create an empty multimap
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    /// Append a value to the list under `key`, creating the list if absent
    pub fn insert(&mut self, key: K, value: V) {
        self.inner.entry(key).or_default().push(value);
    }

    /// Get the values stored under `key`, if any
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.inner.get(key).map(SmallVec::as_slice)
    }

    /// Get the values stored under `key`, or an empty slice
    #[must_use]
    pub fn get_or_empty(&self, key: &K) -> &[V] {
        self.get(key).unwrap_or(&[])
    }

    /// Take the whole list stored under `key` out of the map
    pub fn remove(&mut self, key: &K) -> Option<Vec<V>> {
        self.inner.remove(key).map(SmallVec::into_vec)
    }

    /// Whether any values are stored under `key`
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of keys with at least one value
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the map holds no keys at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over keys and their value lists
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.inner.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Iterate over the keys
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.inner.keys()
    }
}

impl<K: Eq + Hash, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for MultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
