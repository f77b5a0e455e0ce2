use std::collections::BinaryHeap;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::dfs::NO_PARENT;
use crate::error::QueryError;
use crate::flatten::Flattening;
use crate::tree::{NodeId, Tree, slot};

/// Subtree sums kept directly per node, with writes buffered until the next read.
///
/// A flush turns each buffered write into a delta on its node and carries the
/// deltas up the parent chains deepest-first. Where chains meet, the deltas
/// are merged, so every affected ancestor is adjusted exactly once per flush.
#[derive(Clone, Debug)]
pub struct DeferredSubtreeSums {
    parent: Vec<NodeId>,
    depth: Vec<u32>,
    own: Vec<i64>,
    sums: Vec<i64>,
    pending: FxHashMap<NodeId, i64>,
}

impl DeferredSubtreeSums {
    /// `values[i]` is the value of node `i + 1`.
    pub fn new(tree: &Tree, root: NodeId, values: &[i64]) -> Result<Self, QueryError> {
        let flattening = Flattening::new(tree, root)?;
        // Only checks the length; the arranged copy is not needed.
        flattening.arrange(values)?;

        let parent = flattening.parents().to_vec();
        let own = values.to_vec();
        let mut sums = own.clone();
        // Reverse entry order visits children before their parents.
        for &v in flattening.order().iter().rev() {
            let p = parent[v - 1];
            if p != NO_PARENT {
                sums[p - 1] = sums[p - 1].wrapping_add(sums[v - 1]);
            }
        }

        Ok(Self {
            parent,
            depth: flattening.depths().to_vec(),
            own,
            sums,
            pending: FxHashMap::default(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.own.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.own.is_empty()
    }

    /// Number of buffered writes not yet applied.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Buffer `v := value`; a later write to the same node replaces it.
    pub fn set_value(&mut self, v: NodeId, value: i64) -> Result<(), QueryError> {
        slot(self.len(), v)?;
        self.pending.insert(v, value);
        Ok(())
    }

    /// Current value of `v`, including buffered writes.
    pub fn value(&self, v: NodeId) -> Result<i64, QueryError> {
        let s = slot(self.len(), v)?;
        Ok(self.pending.get(&v).copied().unwrap_or(self.own[s]))
    }

    pub fn subtree_sum(&mut self, v: NodeId) -> Result<i64, QueryError> {
        let s = slot(self.len(), v)?;
        self.flush();
        Ok(self.sums[s])
    }

    /// Apply every buffered write.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let writes = self.pending.len();
        let mut carry: FxHashMap<NodeId, i64> = FxHashMap::default();
        let mut queue: BinaryHeap<(u32, NodeId)> = BinaryHeap::with_capacity(writes);

        for (v, value) in self.pending.drain() {
            let s = v - 1;
            let delta = value.wrapping_sub(self.own[s]);
            self.own[s] = value;
            if delta != 0 {
                carry.insert(v, delta);
                queue.push((self.depth[s], v));
            }
        }

        // Parents are strictly shallower than anything already queued, so a
        // node is popped only after all of its children's carries arrived.
        let mut touched = 0_usize;
        while let Some((_, v)) = queue.pop() {
            let Some(delta) = carry.remove(&v) else {
                continue;
            };
            touched += 1;
            self.sums[v - 1] = self.sums[v - 1].wrapping_add(delta);

            let p = self.parent[v - 1];
            if p == NO_PARENT {
                continue;
            }
            match carry.entry(p) {
                Entry::Occupied(mut e) => {
                    let merged = e.get_mut();
                    *merged = merged.wrapping_add(delta);
                }
                Entry::Vacant(e) => {
                    e.insert(delta);
                    queue.push((self.depth[p - 1], p));
                }
            }
        }

        debug!(writes, touched, "flushed deferred subtree updates");
    }
}
