//! Segment tree with lazy propagation
//!
//! A complete binary tree in a flat array of `4n` nodes; node `i` owns a
//! subrange, caches its aggregate, and may carry one pending update not
//! yet applied to its children. Updates covering a node's whole range
//! are absorbed into the aggregate and tag without recursing; partial
//! coverage pushes the tag down first, recurses, then recombines.
//!
//! The pending state is one tagged value, not separate fields, so a
//! range-assign structurally discards any buffered add/multiply and
//! later arithmetic folds into the assigned value.

use crate::containers::Vector;
use crate::error::{check_range, Result};
use std::ops::Range;

/// Element algebra for [`SegmentTree`]
///
/// `combine` must be associative and commutative with `identity` as its
/// unit; `scale(v, k)` is `v` combined with itself `k` times, which also
/// serves as the range-multiply operator.
pub trait LazyAlgebra {
    /// Element type stored and aggregated
    type Value: Clone;

    /// The combine unit
    fn identity(&self) -> Self::Value;

    /// Merge two aggregates
    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

    /// `v` combined `k` times
    fn scale(&self, v: &Self::Value, k: i64) -> Self::Value;
}

/// Integer sum algebra: combine is `+`, scale is `*`
#[derive(Debug, Default, Clone, Copy)]
pub struct SumAlgebra;

impl LazyAlgebra for SumAlgebra {
    type Value = i64;

    fn identity(&self) -> i64 {
        0
    }

    fn combine(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn scale(&self, v: &i64, k: i64) -> i64 {
        v * k
    }
}

/// One buffered update, composed until the next push-down
#[derive(Clone)]
enum Pending<V> {
    /// Nothing buffered
    Identity,
    /// `x -> scale(x, mul) + add`, the fold of buffered adds/multiplies
    Affine {
        mul: i64,
        add: V,
    },
    /// Every element of the subrange becomes this value
    Assign(V),
}

/// Range-query/range-update tree over a [`LazyAlgebra`]
///
/// # Examples
///
/// ```rust
/// use tessera::{SegmentTree, SumAlgebra};
///
/// let mut tree = SegmentTree::from_slice(&[1, 2, 3, 4], SumAlgebra)?;
/// assert_eq!(tree.query(0..4)?, 10);
/// tree.add(1..3, 10)?;
/// assert_eq!(tree.query(0..4)?, 30);
/// tree.assign(0..2, 0)?;
/// assert_eq!(tree.query(0..4)?, 17);
/// # Ok::<(), tessera::TesseraError>(())
/// ```
pub struct SegmentTree<A: LazyAlgebra> {
    algebra: A,
    agg: Vector<A::Value>,
    pending: Vector<Pending<A::Value>>,
    len: usize,
}

impl<A: LazyAlgebra> SegmentTree<A> {
    /// Build a tree over the given leaf values
    pub fn from_slice(values: &[A::Value], algebra: A) -> Result<Self> {
        let len = values.len();
        let nodes = if len == 0 { 0 } else { 4 * len };
        let mut tree = Self {
            agg: Vector::with_size(nodes, algebra.identity())?,
            pending: Vector::with_size(nodes, Pending::Identity)?,
            algebra,
            len,
        };
        if len > 0 {
            tree.build(0, 0, len - 1, values);
        }
        Ok(tree)
    }

    /// Number of leaf elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Aggregate of the elements in `range`
    pub fn query(&mut self, range: Range<usize>) -> Result<A::Value> {
        check_range(range.start, range.end, self.len)?;
        if range.is_empty() {
            return Ok(self.algebra.identity());
        }
        Ok(self.query_rec(0, 0, self.len - 1, range.start, range.end - 1))
    }

    /// The element at `index`
    pub fn get(&mut self, index: usize) -> Result<A::Value> {
        self.query(index..index + 1)
    }

    /// Combine `value` into every element of `range`
    pub fn add(&mut self, range: Range<usize>, value: A::Value) -> Result<()> {
        check_range(range.start, range.end, self.len)?;
        if !range.is_empty() {
            let update = Pending::Affine { mul: 1, add: value };
            self.update_rec(0, 0, self.len - 1, range.start, range.end - 1, &update);
        }
        Ok(())
    }

    /// Scale every element of `range` by `k`
    pub fn multiply(&mut self, range: Range<usize>, k: i64) -> Result<()> {
        check_range(range.start, range.end, self.len)?;
        if !range.is_empty() {
            let update = Pending::Affine { mul: k, add: self.algebra.identity() };
            self.update_rec(0, 0, self.len - 1, range.start, range.end - 1, &update);
        }
        Ok(())
    }

    /// Overwrite every element of `range` with `value`
    pub fn assign(&mut self, range: Range<usize>, value: A::Value) -> Result<()> {
        check_range(range.start, range.end, self.len)?;
        if !range.is_empty() {
            let update = Pending::Assign(value);
            self.update_rec(0, 0, self.len - 1, range.start, range.end - 1, &update);
        }
        Ok(())
    }

    fn build(&mut self, idx: usize, l: usize, r: usize, values: &[A::Value]) {
        if l == r {
            self.agg[idx] = values[l].clone();
            return;
        }
        let mid = l + (r - l) / 2;
        self.build(2 * idx + 1, l, mid, values);
        self.build(2 * idx + 2, mid + 1, r, values);
        self.recombine(idx);
    }

    /// Recompute a node's aggregate from its two children
    fn recombine(&mut self, idx: usize) {
        let merged = self.algebra.combine(&self.agg[2 * idx + 1], &self.agg[2 * idx + 2]);
        self.agg[idx] = merged;
    }

    /// Fold `update` into a node covering `width` elements
    fn absorb(&mut self, idx: usize, width: i64, update: &Pending<A::Value>) {
        match update {
            Pending::Identity => {}
            Pending::Affine { mul, add } => {
                let scaled = self.algebra.scale(&self.agg[idx], *mul);
                self.agg[idx] = self.algebra.combine(&scaled, &self.algebra.scale(add, width));
                let composed = Self::compose(&self.algebra, &self.pending[idx], update);
                self.pending[idx] = composed;
            }
            Pending::Assign(v) => {
                self.agg[idx] = self.algebra.scale(v, width);
                self.pending[idx] = Pending::Assign(v.clone());
            }
        }
    }

    /// Sequence `first` then `next` into one buffered update
    fn compose(
        algebra: &A,
        first: &Pending<A::Value>,
        next: &Pending<A::Value>,
    ) -> Pending<A::Value> {
        match (first, next) {
            (_, Pending::Assign(v)) => Pending::Assign(v.clone()),
            (existing, Pending::Identity) => existing.clone(),
            (Pending::Identity, affine) => affine.clone(),
            (Pending::Affine { mul: m1, add: a1 }, Pending::Affine { mul: m2, add: a2 }) => {
                Pending::Affine {
                    mul: m1 * m2,
                    add: algebra.combine(&algebra.scale(a1, *m2), a2),
                }
            }
            (Pending::Assign(v), Pending::Affine { mul, add }) => {
                Pending::Assign(algebra.combine(&algebra.scale(v, *mul), add))
            }
        }
    }

    /// Hand a node's buffered update to its children
    fn push_down(&mut self, idx: usize, l: usize, r: usize) {
        let tag = std::mem::replace(&mut self.pending[idx], Pending::Identity);
        if matches!(tag, Pending::Identity) {
            return;
        }
        let mid = l + (r - l) / 2;
        self.absorb(2 * idx + 1, (mid - l + 1) as i64, &tag);
        self.absorb(2 * idx + 2, (r - mid) as i64, &tag);
    }

    fn query_rec(&mut self, idx: usize, l: usize, r: usize, s: usize, t: usize) -> A::Value {
        if s <= l && r <= t {
            return self.agg[idx].clone();
        }
        self.push_down(idx, l, r);
        let mid = l + (r - l) / 2;
        let mut result = self.algebra.identity();
        if s <= mid {
            let left = self.query_rec(2 * idx + 1, l, mid, s, t);
            result = self.algebra.combine(&result, &left);
        }
        if t > mid {
            let right = self.query_rec(2 * idx + 2, mid + 1, r, s, t);
            result = self.algebra.combine(&result, &right);
        }
        result
    }

    fn update_rec(
        &mut self,
        idx: usize,
        l: usize,
        r: usize,
        s: usize,
        t: usize,
        update: &Pending<A::Value>,
    ) {
        if s <= l && r <= t {
            self.absorb(idx, (r - l + 1) as i64, update);
            return;
        }
        self.push_down(idx, l, r);
        let mid = l + (r - l) / 2;
        if s <= mid {
            self.update_rec(2 * idx + 1, l, mid, s, t, update);
        }
        if t > mid {
            self.update_rec(2 * idx + 2, mid + 1, r, s, t, update);
        }
        self.recombine(idx);
    }
}
