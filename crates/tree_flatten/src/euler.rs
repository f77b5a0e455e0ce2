use tracing::debug;

use crate::dfs::{Event, NO_PARENT, depth_first};
use crate::error::TreeError;
use crate::tree::{NodeId, Tree, slot};

/// Double-entry Euler tour.
///
/// A node is recorded on arrival and again each time one of its children
/// returns, so the tour has `2n - 1` entries and starts and ends at the root.
/// Between the first occurrences of `u` and `v`, the shallowest node is their
/// lowest common ancestor.
#[derive(Clone, Debug)]
pub struct EulerTour {
    tour: Vec<NodeId>,
    first: Vec<usize>,
    depth: Vec<u32>,
}

impl EulerTour {
    pub fn new(tree: &Tree, root: NodeId) -> Result<Self, TreeError> {
        let n = tree.len();
        let mut tour = Vec::with_capacity(2 * n - 1);
        let mut first = vec![0_usize; n];
        let mut depth = vec![0_u32; n];

        depth_first(tree, root, |event| match event {
            Event::Enter { node, parent } => {
                first[node - 1] = tour.len();
                tour.push(node);
                if parent != NO_PARENT {
                    depth[node - 1] = depth[parent - 1] + 1;
                }
            }
            Event::Exit { parent, .. } => {
                if parent != NO_PARENT {
                    tour.push(parent);
                }
            }
        })?;

        debug!(n, root, tour_len = tour.len(), "built euler tour");
        Ok(Self { tour, first, depth })
    }

    #[inline]
    pub fn tour(&self) -> &[NodeId] {
        &self.tour
    }

    /// Number of nodes in the toured tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.first.len()
    }

    pub fn first(&self, v: NodeId) -> Result<usize, TreeError> {
        Ok(self.first[slot(self.node_count(), v)?])
    }

    pub fn depth(&self, v: NodeId) -> Result<u32, TreeError> {
        Ok(self.depth[slot(self.node_count(), v)?])
    }

    /// `(depth, node)` for every tour position.
    pub fn depth_sequence(&self) -> Vec<(u32, NodeId)> {
        self.tour
            .iter()
            .map(|&v| (self.depth[v - 1], v))
            .collect()
    }
}
