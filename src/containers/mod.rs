//! Container types built on the raw-memory and cursor layers
//!
//! - [`Vector`]: contiguous growable array, the reference allocation
//!   pattern for the rest of the crate
//! - [`Deque`]: segmented double-ended array with a two-level index
//! - [`LinkedList`]: sentinel doubly linked list with pointer-surgery
//!   algorithms
//! - [`BitSet`]: fixed-width packed bit vector
//! - [`PriorityQueue`]: binary-heap adapter over [`Vector`]

mod bitset;
mod deque;
mod list;
mod priority_queue;
mod vector;

pub use bitset::BitSet;
pub use deque::Deque;
pub use list::LinkedList;
pub use priority_queue::{Compare, FnCompare, MaxFirst, MinFirst, PriorityQueue};
pub use vector::Vector;
