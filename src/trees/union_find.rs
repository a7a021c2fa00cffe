//! Disjoint-set forest over arbitrary hashable keys
//!
//! Keys are interned to dense integer identities on first sight; the
//! parent forest lives in a flat [`Vector`]. Lookups compress paths by
//! halving, so chains flatten as they are walked.

use crate::containers::Vector;
use crate::error::Result;
use crate::hash_map::HashMap;
use std::hash::{BuildHasher, Hash};

/// Union-find with lazy key interning
///
/// # Examples
///
/// ```rust
/// use tessera::UnionFind;
///
/// let mut sets: UnionFind<&str> = UnionFind::new()?;
/// sets.union("a", "b")?;
/// sets.union("b", "c")?;
/// assert!(sets.connected("a", "c")?);
/// assert!(!sets.connected("a", "d")?);
/// # Ok::<(), tessera::TesseraError>(())
/// ```
pub struct UnionFind<T, S = ahash::RandomState>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    ids: HashMap<T, usize, S>,
    parent: Vector<usize>,
}

impl<T: Hash + Eq, S: BuildHasher + Default> UnionFind<T, S> {
    /// Create an empty structure
    pub fn new() -> Result<Self> {
        Ok(Self { ids: HashMap::new()?, parent: Vector::new() })
    }
}

impl<T: Hash + Eq, S: BuildHasher> UnionFind<T, S> {
    /// Number of distinct keys seen so far
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check whether no key has been seen
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Identity of `key`, interning it on first sight
    pub fn id(&mut self, key: T) -> Result<usize> {
        if let Some(&id) = self.ids.get(&key) {
            return Ok(id);
        }
        let id = self.parent.len();
        self.parent.push(id)?;
        self.ids.insert(key, id)?;
        Ok(id)
    }

    /// Root of the set containing identity `x`, compressing the path
    pub fn find(&mut self, mut x: usize) -> usize {
        debug_assert!(x < self.parent.len());
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets holding identities `a` and `b`
    pub fn link(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb;
        }
    }

    /// Merge the sets of two keys; `true` when they were separate
    pub fn union(&mut self, a: T, b: T) -> Result<bool> {
        let ia = self.id(a)?;
        let ib = self.id(b)?;
        let ra = self.find(ia);
        let rb = self.find(ib);
        if ra == rb {
            return Ok(false);
        }
        self.parent[ra] = rb;
        Ok(true)
    }

    /// Whether two keys share a set (interning either on first sight)
    pub fn connected(&mut self, a: T, b: T) -> Result<bool> {
        let ia = self.id(a)?;
        let ib = self.id(b)?;
        Ok(self.find(ia) == self.find(ib))
    }

    /// Whether two identities share a set
    pub fn connected_ids(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Prepare the parent forest for about `n` keys
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        self.parent.reserve(n.saturating_sub(self.parent.len()))?;
        self.ids.reserve(n)
    }
}
