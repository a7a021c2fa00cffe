//! # Tessera: From-Scratch Container Toolkit
//!
//! This crate builds a family of containers from first principles on two
//! small foundations: typed raw-memory primitives and a cursor framework
//! with compile-time capability categories.
//!
//! ## Layers
//!
//! - **Memory primitives**: typed raw allocation plus uninitialized-range
//!   construction with rollback when an element constructor panics partway
//! - **Cursor framework**: the input/forward/bidirectional/random-access
//!   capability lattice, O(1)-vs-O(n) dispatch for `distance`/`advance_by`,
//!   a pointer-wrapping cursor, and a reverse adaptor
//! - **Containers**: growable [`Vector`], segmented [`Deque`], sentinel
//!   [`LinkedList`], chaining [`HashTable`]/[`HashMap`], binary-heap
//!   [`PriorityQueue`], fixed-width [`BitSet`]
//! - **Trees & caching**: lazy-propagation [`SegmentTree`], interning
//!   [`UnionFind`], slab-linked [`LruCache`]
//!
//! Everything is single-threaded by design: no container is safe for
//! concurrent mutation without external synchronization, and none
//! provides any internally.
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera::{Deque, HashMap, PriorityQueue, Vector};
//!
//! let mut vec = Vector::new();
//! vec.push(42)?;
//! assert_eq!(vec[0], 42);
//!
//! let mut deque = Deque::new()?;
//! deque.push_front(1)?;
//! deque.push_back(2)?;
//! assert_eq!(deque.len(), 2);
//!
//! let mut map: HashMap<&str, i32> = HashMap::new()?;
//! map.insert("key", 7)?;
//! assert_eq!(map.get(&"key"), Some(&7));
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(3)?;
//! queue.push(9)?;
//! assert_eq!(queue.pop(), Some(9));
//! # Ok::<(), tessera::TesseraError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod cache;
pub mod containers;
pub mod error;
pub mod hash_map;
pub mod iter;
pub mod memory;
pub mod trees;

pub use cache::LruCache;
pub use containers::{BitSet, Compare, Deque, LinkedList, MaxFirst, MinFirst, PriorityQueue, Vector};
pub use error::{Result, TesseraError};
pub use hash_map::{HashMap, HashTable};
pub use iter::{Category, Cursor};
pub use trees::{LazyAlgebra, SegmentTree, SumAlgebra, UnionFind};
