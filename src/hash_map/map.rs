//! Unique-key facade over the chaining [`HashTable`]

use super::table::{HashTable, Iter};
use crate::error::{Result, TesseraError};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Hash map with unique keys
///
/// Thin facade over [`HashTable`] restricted to one entry per key;
/// [`insert`](Self::insert) replaces and returns the previous value.
///
/// # Examples
///
/// ```rust
/// use tessera::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::new()?;
/// map.insert("answer", 42)?;
/// assert_eq!(map.get(&"answer"), Some(&42));
/// *map.entry_or_default("tally")? += 1;
/// assert_eq!(map.get(&"tally"), Some(&1));
/// # Ok::<(), tessera::TesseraError>(())
/// ```
pub struct HashMap<K, V, S = ahash::RandomState> {
    table: HashTable<K, V, S>,
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> HashMap<K, V, S> {
    /// Create an empty map
    pub fn new() -> Result<Self> {
        Ok(Self { table: HashTable::new()? })
    }

    /// Create an empty map with at least `bucket_count` buckets
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        Ok(Self { table: HashTable::with_buckets(bucket_count)? })
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashMap<K, V, S> {
    /// Create an empty map with an explicit hasher
    pub fn with_hasher(hasher: S) -> Result<Self> {
        Ok(Self { table: HashTable::with_buckets_and_hasher(11, hasher)? })
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the map is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Insert a key-value pair, returning the value it replaced
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        if let Some(slot) = self.table.get_mut(&key) {
            return Ok(Some(std::mem::replace(slot, value)));
        }
        self.table.insert_unique(key, value)?;
        Ok(None)
    }

    /// Reference to the value stored under `key`
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key)
    }

    /// Mutable reference to the value stored under `key`
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.get_mut(key)
    }

    /// Access that reports a missing key as an error
    pub fn at(&self, key: &K) -> Result<&V> {
        self.table.get(key).ok_or_else(TesseraError::key_not_found)
    }

    /// Mutable access that reports a missing key as an error
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        self.table.get_mut(key).ok_or_else(TesseraError::key_not_found)
    }

    /// Mutable reference to the value under `key`, inserting a default on
    /// miss
    pub fn entry_or_default(&mut self, key: K) -> Result<&mut V>
    where
        V: Default,
    {
        let (node, _) = self.table.insert_unique_raw(key, V::default())?;
        Ok(unsafe { super::table::node_value_mut(node) })
    }

    /// Whether any entry is stored under `key`
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Remove the entry under `key`, returning its value
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.table.remove_entry(key).map(|(_, v)| v)
    }

    /// Keep only the entries for which `pred` holds
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, pred: F) {
        self.table.retain(pred);
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterate over all entries in bucket order
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.table.iter()
    }

    /// Current number of buckets
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Chain length of bucket `n`
    #[inline]
    pub fn bucket_size(&self, n: usize) -> usize {
        self.table.bucket_size(n)
    }

    /// Bucket a key currently hashes into
    #[inline]
    pub fn bucket_of(&self, key: &K) -> usize {
        self.table.bucket_of(key)
    }

    /// Threshold ratio of entries to buckets that triggers rehashing
    #[inline]
    pub fn max_load_factor(&self) -> f32 {
        self.table.max_load_factor()
    }

    /// Adjust the load-factor threshold
    pub fn set_max_load_factor(&mut self, factor: f32) {
        self.table.set_max_load_factor(factor);
    }

    /// Rehash to at least the next table prime >= `count` buckets
    pub fn rehash(&mut self, count: usize) -> Result<()> {
        self.table.rehash(count)
    }

    /// Prepare for `count` entries without exceeding the load threshold
    pub fn reserve(&mut self, count: usize) -> Result<()> {
        self.table.reserve(count)
    }
}

impl<K, V, S> fmt::Debug for HashMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Clone for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    fn clone(&self) -> Self {
        Self { table: self.table.clone() }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for HashMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v).expect("allocation for extend");
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new().expect("allocation for collect");
        map.extend(iter);
        map
    }
}
