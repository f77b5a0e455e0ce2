use std::ops::RangeInclusive;

use tracing::debug;

use crate::dfs::{Event, NO_PARENT, depth_first};
use crate::error::TreeError;
use crate::tree::{NodeId, Tree, slot};

/// Entry/exit timestamps of a single-entry depth-first traversal.
///
/// Every node gets exactly one index in `[0, n)`. The entry indices of the
/// subtree of `v` are exactly `entry(v)..=exit(v)`, so any subtree maps to a
/// single contiguous range of [`Flattening::arrange`]'s output.
#[derive(Clone, Debug)]
pub struct Flattening {
    root: NodeId,
    entry: Vec<usize>,
    exit: Vec<usize>,
    order: Vec<NodeId>,
    parent: Vec<NodeId>,
    depth: Vec<u32>,
}

impl Flattening {
    pub fn new(tree: &Tree, root: NodeId) -> Result<Self, TreeError> {
        let n = tree.len();
        let mut entry = vec![0_usize; n];
        let mut exit = vec![0_usize; n];
        let mut order = Vec::with_capacity(n);
        let mut parent = vec![NO_PARENT; n];
        let mut depth = vec![0_u32; n];

        depth_first(tree, root, |event| match event {
            Event::Enter { node, parent: p } => {
                let v = node - 1;
                entry[v] = order.len();
                order.push(node);
                parent[v] = p;
                if p != NO_PARENT {
                    depth[v] = depth[p - 1] + 1;
                }
            }
            Event::Exit { node, .. } => {
                exit[node - 1] = order.len() - 1;
            }
        })?;

        debug!(n, root, "flattened tree");
        Ok(Self {
            root,
            entry,
            exit,
            order,
            parent,
            depth,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn entry(&self, v: NodeId) -> Result<usize, TreeError> {
        Ok(self.entry[self.slot(v)?])
    }

    /// Entry index of the last node visited inside the subtree of `v`.
    pub fn exit(&self, v: NodeId) -> Result<usize, TreeError> {
        Ok(self.exit[self.slot(v)?])
    }

    pub fn subtree_range(&self, v: NodeId) -> Result<RangeInclusive<usize>, TreeError> {
        let s = self.slot(v)?;
        Ok(self.entry[s]..=self.exit[s])
    }

    pub fn subtree_size(&self, v: NodeId) -> Result<usize, TreeError> {
        let s = self.slot(v)?;
        Ok(self.exit[s] - self.entry[s] + 1)
    }

    /// Node ids ordered by entry index.
    #[inline]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    pub fn parent(&self, v: NodeId) -> Result<Option<NodeId>, TreeError> {
        let p = self.parent[self.slot(v)?];
        Ok((p != NO_PARENT).then_some(p))
    }

    /// Number of edges between `v` and the root.
    pub fn depth(&self, v: NodeId) -> Result<u32, TreeError> {
        Ok(self.depth[self.slot(v)?])
    }

    /// Whether `u` lies in the subtree of `v` (a node is its own ancestor).
    pub fn is_ancestor(&self, v: NodeId, u: NodeId) -> Result<bool, TreeError> {
        let range = self.subtree_range(v)?;
        Ok(range.contains(&self.entry(u)?))
    }

    /// Reorder per-node values (`values[i]` belongs to node `i + 1`) by entry index.
    pub fn arrange<T: Copy>(&self, values: &[T]) -> Result<Vec<T>, TreeError> {
        if values.len() != self.len() {
            return Err(TreeError::ValueCount {
                expected: self.len(),
                found: values.len(),
            });
        }
        Ok(self.order.iter().map(|&v| values[v - 1]).collect())
    }

    pub(crate) fn parents(&self) -> &[NodeId] {
        &self.parent
    }

    pub(crate) fn depths(&self) -> &[u32] {
        &self.depth
    }

    #[inline]
    fn slot(&self, v: NodeId) -> Result<usize, TreeError> {
        slot(self.len(), v)
    }
}
