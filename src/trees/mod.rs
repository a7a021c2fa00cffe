//! Tree-shaped structures: range aggregation and disjoint sets

mod segment_tree;
mod union_find;

pub use segment_tree::{LazyAlgebra, SegmentTree, SumAlgebra};
pub use union_find::UnionFind;
