//! A hash table resolving collisions by chaining: every bucket is a [`LinkedList`] of entries.
//!
//! The number of buckets is fixed when the table is created. There is no resizing, so lookups
//! degrade towards `O(n / buckets)` as the table fills up.
//!
//! # Examples
//!
//! ```
//! use bst_kit::hash_table::HashTable;
//!
//! let mut table = HashTable::with_buckets(4);
//!
//! assert_eq!(table.add("one", 1), None);
//! assert_eq!(table.add("two", 2), None);
//! assert_eq!(table.add("one", 11), Some(1));
//!
//! assert_eq!(table.get(&"one"), Some(&11));
//! assert_eq!(table.len(), 2);
//!
//! assert_eq!(table.remove(&"two"), Some(2));
//! assert_eq!(table.get(&"two"), None);
//! ```

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;

use crate::linked_list::LinkedList;

/// How many buckets [`HashTable::new`] allocates.
pub const DEFAULT_BUCKETS: usize = 16;

/// A hash table with a fixed number of chained buckets. Keys are unique.
pub struct HashTable<K, V, S = RandomState> {
    buckets: Vec<LinkedList<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for HashTable<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> HashTable<K, V> {
    /// Creates an empty table with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Creates an empty table with `buckets` buckets. A table always has at least one bucket.
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_buckets_and_hasher(buckets, RandomState::new())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Creates an empty table with `buckets` buckets hashing keys with `hasher`.
    pub fn with_buckets_and_hasher(buckets: usize, hasher: S) -> Self {
        Self {
            buckets: (0..buckets.max(1)).map(|_| LinkedList::new()).collect(),
            len: 0,
            hasher,
        }
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of buckets entries are spread over.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates over all entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(LinkedList::iter)
            .map(|(key, value)| (key, value))
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Stores `value` under `key`. If the key was already present its old value is replaced and
    /// returned.
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        match bucket.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(mem::replace(slot, value)),
            None => {
                log::trace!("HashTable::add new entry in bucket {}", index);
                bucket.append((key, value));
                self.len += 1;
                None
            }
        }
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// A mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        let position = bucket.find_index(|(k, _)| k == key)?;
        let (_, value) = bucket.remove(position).ok()?;
        log::trace!("HashTable::remove entry from bucket {}", index);
        self.len -= 1;
        Some(value)
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = self.hasher.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }
}
