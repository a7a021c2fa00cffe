//! Fixed-capacity map with least-recently-used eviction
//!
//! Entries live in a slab of slots linked into a recency list through
//! `u32` prev/next indices (`NIL` sentinel), with a [`HashMap`] from key
//! to slot index. Touching an entry relinks it to the front; inserting
//! past capacity evicts from the back. Vacated slots go onto a free list
//! and are reused before the slab grows.

use crate::containers::Vector;
use crate::error::{Result, TesseraError};
use crate::hash_map::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

const NIL: u32 = u32::MAX;

struct Slot<K, V> {
    key: K,
    value: V,
    prev: u32,
    next: u32,
}

/// Least-recently-used cache map
///
/// # Examples
///
/// ```rust
/// use tessera::LruCache;
///
/// let mut cache: LruCache<&str, i32> = LruCache::with_capacity(2)?;
/// cache.put("a", 1)?;
/// cache.put("b", 2)?;
/// cache.get(&"a");
/// cache.put("c", 3)?; // evicts "b", the least recently used
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// # Ok::<(), tessera::TesseraError>(())
/// ```
pub struct LruCache<K, V, S = ahash::RandomState>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    slots: Vector<Option<Slot<K, V>>>,
    index: HashMap<K, u32, S>,
    free: Vector<u32>,
    head: u32,
    tail: u32,
    capacity: usize,
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    /// Create a cache that holds at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TesseraError::configuration("LRU capacity must be nonzero"));
        }
        Ok(Self {
            slots: Vector::new(),
            index: HashMap::new()?,
            free: Vector::new(),
            head: NIL,
            tail: NIL,
            capacity,
        })
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Number of cached entries
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries held before eviction
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn slot(&self, i: u32) -> &Slot<K, V> {
        self.slots[i as usize].as_ref().expect("linked slot is occupied")
    }

    fn slot_mut(&mut self, i: u32) -> &mut Slot<K, V> {
        self.slots[i as usize].as_mut().expect("linked slot is occupied")
    }

    /// Detach slot `i` from the recency list
    fn unlink(&mut self, i: u32) {
        let (prev, next) = {
            let slot = self.slot(i);
            (slot.prev, slot.next)
        };
        if prev == NIL {
            self.head = next;
        } else {
            self.slot_mut(prev).next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slot_mut(next).prev = prev;
        }
    }

    /// Link slot `i` at the most-recently-used end
    fn link_front(&mut self, i: u32) {
        let old_head = self.head;
        {
            let slot = self.slot_mut(i);
            slot.prev = NIL;
            slot.next = old_head;
        }
        if old_head != NIL {
            self.slot_mut(old_head).prev = i;
        }
        self.head = i;
        if self.tail == NIL {
            self.tail = i;
        }
    }

    fn touch(&mut self, i: u32) {
        if self.head != i {
            self.unlink(i);
            self.link_front(i);
        }
    }

    /// Drop the least recently used entry
    fn evict_back(&mut self) {
        let victim = self.tail;
        debug_assert!(victim != NIL);
        self.unlink(victim);
        let slot = self.slots[victim as usize].take().expect("tail slot is occupied");
        log::trace!("lru eviction at capacity {}", self.capacity);
        self.index.remove(&slot.key);
        self.free.push(victim).expect("free list push after take");
    }

    /// Insert or refresh an entry, returning a replaced value.
    ///
    /// The touched entry becomes most recently used; at capacity the
    /// least recently used entry is evicted first.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        if let Some(&i) = self.index.get(&key) {
            self.touch(i);
            let old = std::mem::replace(&mut self.slot_mut(i).value, value);
            return Ok(Some(old));
        }
        if self.len() == self.capacity {
            self.evict_back();
        }
        let slot = Slot { key: key.clone(), value, prev: NIL, next: NIL };
        let i = match self.free.pop() {
            Some(i) => {
                self.slots[i as usize] = Some(slot);
                i
            }
            None => {
                let i = self.slots.len() as u32;
                self.slots.push(Some(slot))?;
                i
            }
        };
        self.index.insert(key, i)?;
        self.link_front(i);
        Ok(None)
    }

    /// Reference to the value under `key`, promoting it to most recent
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let i = *self.index.get(key)?;
        self.touch(i);
        Some(&self.slot(i).value)
    }

    /// Reference to the value under `key` without touching recency
    pub fn peek(&self, key: &K) -> Option<&V> {
        let i = *self.index.get(key)?;
        Some(&self.slot(i).value)
    }

    /// The value under `key`, or `default` on a miss; promotes on a hit
    pub fn get_or(&mut self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        match self.get(key) {
            Some(v) => v.clone(),
            None => default,
        }
    }

    /// Remove the entry under `key`, returning its value
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.index.remove(key)?;
        self.unlink(i);
        let slot = self.slots[i as usize].take().expect("indexed slot is occupied");
        self.free.push(i).expect("free list push after take");
        Some(slot.value)
    }

    /// Whether an entry is cached under `key`
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove every entry, keeping the slab
    pub fn clear(&mut self) {
        self.index.clear();
        self.free.clear();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.take().is_some() {
                self.free.push(i as u32).expect("free list rebuild");
            }
        }
        self.head = NIL;
        self.tail = NIL;
    }

    /// Shrink or grow the capacity, evicting immediately when shrinking
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity == 0 {
            return Err(TesseraError::configuration("LRU capacity must be nonzero"));
        }
        self.capacity = capacity;
        while self.len() > capacity {
            self.evict_back();
        }
        Ok(())
    }

    /// Iterate entries from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter { cache: self, cur: self.head }
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S>
where
    K: Hash + Eq + Clone + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over an [`LruCache`] in recency order
pub struct Iter<'a, K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    cache: &'a LruCache<K, V, S>,
    cur: u32,
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.cur == NIL {
            return None;
        }
        let slot = self.cache.slot(self.cur);
        self.cur = slot.next;
        Some((&slot.key, &slot.value))
    }
}
