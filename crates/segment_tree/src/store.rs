use std::ops::{Bound, RangeBounds};

use tracing::{debug, trace};

use crate::error::RangeError;
use crate::monoid::Monoid;

#[inline(always)]
fn midpoint(start: usize, end: usize) -> usize {
    start + (end - start) / 2
}

#[inline(always)]
fn left_child(node: usize) -> usize {
    2 * node + 1
}

#[inline(always)]
fn right_child(node: usize) -> usize {
    2 * node + 2
}

/// Recursive segment tree over a fixed-length sequence.
///
/// - Node `i` owns children `2i + 1` and `2i + 2`; the root is node `0`.
/// - A node covering `[start, end]` splits at `start + (end - start) / 2`.
/// - Every internal aggregate equals `M::combine(left, right)`.
#[derive(Clone, Debug)]
pub struct RangeQueryStore<M: Monoid> {
    len: usize,
    tree: Vec<M::Value>,
}

impl<M: Monoid> RangeQueryStore<M> {
    pub fn new(values: &[M::Value]) -> Result<Self, RangeError> {
        let len = values.len();
        if len == 0 {
            return Err(RangeError::Empty);
        }

        let mut store = Self {
            len,
            tree: vec![M::identity(); 4 * len],
        };
        store.build(values, 0, len - 1, 0);
        debug!(len, "built range query store");
        Ok(store)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Aggregate over the whole sequence.
    #[inline]
    pub fn all(&self) -> M::Value {
        self.tree[0]
    }

    pub fn get(&self, index: usize) -> Result<M::Value, RangeError> {
        if index >= self.len {
            return Err(RangeError::InvalidIndex {
                index,
                len: self.len,
            });
        }

        let (mut start, mut end, mut node) = (0, self.len - 1, 0);
        while start != end {
            let mid = midpoint(start, end);
            if index <= mid {
                end = mid;
                node = left_child(node);
            } else {
                start = mid + 1;
                node = right_child(node);
            }
        }
        Ok(self.tree[node])
    }

    /// Combine over the inclusive index range `[lo, hi]`.
    pub fn query(&self, lo: usize, hi: usize) -> Result<M::Value, RangeError> {
        if lo > hi || hi >= self.len {
            return Err(RangeError::InvalidRange {
                lo,
                hi,
                len: self.len,
            });
        }
        Ok(self.query_segment(0, self.len - 1, 0, lo, hi))
    }

    /// Combine over a Rust range; an empty range yields the identity.
    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<M::Value, RangeError> {
        let start = match range.start_bound() {
            Bound::Included(&l) => Some(l),
            Bound::Excluded(&l) => l.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&r) => r.checked_add(1),
            Bound::Excluded(&r) => Some(r),
            Bound::Unbounded => Some(self.len),
        };
        let (Some(start), Some(end)) = (start, end) else {
            return Err(RangeError::InvalidBounds {
                start: usize::MAX,
                end: usize::MAX,
                len: self.len,
            });
        };
        if start > end || end > self.len {
            return Err(RangeError::InvalidBounds {
                start,
                end,
                len: self.len,
            });
        }
        if start == end {
            return Ok(M::identity());
        }
        self.query(start, end - 1)
    }

    /// Overwrite the value at `index` and recompute its ancestors.
    pub fn update(&mut self, index: usize, value: M::Value) -> Result<(), RangeError> {
        if index >= self.len {
            return Err(RangeError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        trace!(index, "point update");
        self.update_segment(0, self.len - 1, 0, index, value);
        Ok(())
    }

    fn build(&mut self, values: &[M::Value], start: usize, end: usize, node: usize) {
        if start == end {
            self.tree[node] = values[start];
            return;
        }
        let mid = midpoint(start, end);
        self.build(values, start, mid, left_child(node));
        self.build(values, mid + 1, end, right_child(node));
        self.pull(node);
    }

    fn query_segment(
        &self,
        start: usize,
        end: usize,
        node: usize,
        lo: usize,
        hi: usize,
    ) -> M::Value {
        if lo <= start && end <= hi {
            return self.tree[node];
        }
        if end < lo || hi < start {
            return M::identity();
        }
        let mid = midpoint(start, end);
        let left = self.query_segment(start, mid, left_child(node), lo, hi);
        let right = self.query_segment(mid + 1, end, right_child(node), lo, hi);
        M::combine(&left, &right)
    }

    fn update_segment(
        &mut self,
        start: usize,
        end: usize,
        node: usize,
        index: usize,
        value: M::Value,
    ) {
        if start == end {
            self.tree[node] = value;
            return;
        }
        let mid = midpoint(start, end);
        if index <= mid {
            self.update_segment(start, mid, left_child(node), index, value);
        } else {
            self.update_segment(mid + 1, end, right_child(node), index, value);
        }
        self.pull(node);
    }

    #[inline(always)]
    fn pull(&mut self, node: usize) {
        self.tree[node] = M::combine(
            &self.tree[left_child(node)],
            &self.tree[right_child(node)],
        );
    }
}
