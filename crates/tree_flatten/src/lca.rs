use segment_tree::{Monoid, RangeQueryStore};

use crate::error::{QueryError, TreeError};
use crate::euler::EulerTour;
use crate::flatten::Flattening;
use crate::tree::{NodeId, Tree, slot};

/// Minimum over `(depth, node)` pairs, shallowest first.
#[derive(Clone, Copy, Debug)]
pub enum DepthMin {}

impl Monoid for DepthMin {
    type Value = (u32, NodeId);

    #[inline(always)]
    fn identity() -> Self::Value {
        (u32::MAX, 0)
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        *left.min(right)
    }
}

/// Lowest common ancestor as a range minimum over the Euler tour.
#[derive(Clone, Debug)]
pub struct EulerTourLca {
    euler: EulerTour,
    store: RangeQueryStore<DepthMin>,
}

impl EulerTourLca {
    pub fn new(tree: &Tree, root: NodeId) -> Result<Self, QueryError> {
        let euler = EulerTour::new(tree, root)?;
        let store = RangeQueryStore::<DepthMin>::new(&euler.depth_sequence())?;
        Ok(Self { euler, store })
    }

    #[inline]
    pub fn euler_tour(&self) -> &EulerTour {
        &self.euler
    }

    pub fn lca(&self, u: NodeId, v: NodeId) -> Result<NodeId, QueryError> {
        let a = self.euler.first(u)?;
        let b = self.euler.first(v)?;
        let (_, node) = self.store.query(a.min(b), a.max(b))?;
        Ok(node)
    }
}

/// Ancestor tables: `up[j][v - 1]` is the `2^j`-th ancestor of `v`, `0` past the root.
#[derive(Clone, Debug)]
pub struct BinaryLifting {
    up: Vec<Vec<NodeId>>,
    depth: Vec<u32>,
}

impl BinaryLifting {
    pub fn new(tree: &Tree, root: NodeId) -> Result<Self, TreeError> {
        let flattening = Flattening::new(tree, root)?;
        Ok(Self::from_flattening(&flattening))
    }

    pub fn from_flattening(flattening: &Flattening) -> Self {
        let n = flattening.len();
        let levels = (usize::BITS - n.leading_zeros()).max(1) as usize;

        let mut up = Vec::with_capacity(levels);
        up.push(flattening.parents().to_vec());
        for j in 1..levels {
            let prev: &Vec<NodeId> = &up[j - 1];
            let next = prev
                .iter()
                .map(|&mid| if mid == 0 { 0 } else { prev[mid - 1] })
                .collect();
            up.push(next);
        }

        Self {
            up,
            depth: flattening.depths().to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    pub fn depth(&self, v: NodeId) -> Result<u32, TreeError> {
        Ok(self.depth[slot(self.len(), v)?])
    }

    /// The ancestor `k` levels above `v`, or `None` when that is above the root.
    pub fn kth_ancestor(&self, v: NodeId, k: usize) -> Result<Option<NodeId>, TreeError> {
        let depth = self.depth(v)? as usize;
        if k > depth {
            return Ok(None);
        }
        Ok(Some(self.lift(v, k)))
    }

    pub fn lca(&self, u: NodeId, v: NodeId) -> Result<NodeId, TreeError> {
        let (du, dv) = (self.depth(u)?, self.depth(v)?);
        let (mut u, mut v) = if du >= dv { (u, v) } else { (v, u) };
        u = self.lift(u, du.abs_diff(dv) as usize);
        if u == v {
            return Ok(u);
        }
        for level in self.up.iter().rev() {
            let (pu, pv) = (level[u - 1], level[v - 1]);
            if pu != pv {
                u = pu;
                v = pv;
            }
        }
        Ok(self.up[0][u - 1])
    }

    /// Number of edges on the path between `u` and `v`.
    pub fn distance(&self, u: NodeId, v: NodeId) -> Result<usize, TreeError> {
        let w = self.lca(u, v)?;
        let (du, dv, dw) = (self.depth(u)?, self.depth(v)?, self.depth(w)?);
        Ok((du + dv - 2 * dw) as usize)
    }

    fn lift(&self, mut v: NodeId, k: usize) -> NodeId {
        debug_assert!(k <= self.depth[v - 1] as usize);
        for (j, level) in self.up.iter().enumerate() {
            if (k >> j) & 1 == 1 {
                v = level[v - 1];
            }
        }
        v
    }
}
