use segment_tree::{Monoid, RangeQueryStore};
use tracing::trace;

use crate::error::QueryError;
use crate::flatten::Flattening;
use crate::tree::{NodeId, Tree};

/// Subtree aggregates under point updates.
///
/// Node `v` lives at index `entry(v)` of the store and its subtree is the
/// range `entry(v)..=exit(v)`.
#[derive(Clone, Debug)]
pub struct SubtreeQuery<M: Monoid> {
    flattening: Flattening,
    store: RangeQueryStore<M>,
}

impl<M: Monoid> SubtreeQuery<M> {
    /// `values[i]` is the value of node `i + 1`.
    pub fn new(tree: &Tree, root: NodeId, values: &[M::Value]) -> Result<Self, QueryError> {
        let flattening = Flattening::new(tree, root)?;
        let arranged = flattening.arrange(values)?;
        let store = RangeQueryStore::<M>::new(&arranged)?;
        Ok(Self { flattening, store })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.flattening.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flattening.is_empty()
    }

    #[inline]
    pub fn flattening(&self) -> &Flattening {
        &self.flattening
    }

    pub fn node_value(&self, v: NodeId) -> Result<M::Value, QueryError> {
        Ok(self.store.get(self.flattening.entry(v)?)?)
    }

    pub fn update_node(&mut self, v: NodeId, value: M::Value) -> Result<(), QueryError> {
        let index = self.flattening.entry(v)?;
        trace!(node = v, index, "update node");
        Ok(self.store.update(index, value)?)
    }

    pub fn subtree_aggregate(&self, v: NodeId) -> Result<M::Value, QueryError> {
        let range = self.flattening.subtree_range(v)?;
        Ok(self.store.query(*range.start(), *range.end())?)
    }
}
