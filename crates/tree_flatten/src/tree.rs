use crate::error::TreeError;

/// Node ids run over `1..=n`; `0` never names a node.
pub type NodeId = usize;

/// Undirected tree in compressed adjacency form.
///
/// Each node's neighbours are kept in the order their edges were given, so
/// every traversal over the same input visits children in the same order.
#[derive(Clone, Debug)]
pub struct Tree {
    n: usize,
    offsets: Vec<usize>,
    to: Vec<NodeId>,
}

impl Tree {
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId)]) -> Result<Self, TreeError> {
        if n == 0 {
            return Err(TreeError::Empty);
        }
        if edges.len() != n - 1 {
            return Err(TreeError::EdgeCount {
                n,
                expected: n - 1,
                found: edges.len(),
            });
        }

        let mut degree = vec![0_usize; n];
        for &(u, v) in edges {
            let su = slot(n, u)?;
            let sv = slot(n, v)?;
            if u == v {
                return Err(TreeError::SelfLoop { node: u });
            }
            degree[su] += 1;
            degree[sv] += 1;
        }

        let mut offsets = vec![0_usize; n + 1];
        for v in 0..n {
            offsets[v + 1] = offsets[v] + degree[v];
        }

        let mut to = vec![0; 2 * edges.len()];
        let mut cursor = offsets[..n].to_vec();
        for &(u, v) in edges {
            to[cursor[u - 1]] = v;
            cursor[u - 1] += 1;
            to[cursor[v - 1]] = u;
            cursor[v - 1] += 1;
        }

        Ok(Self { n, offsets, to })
    }

    /// Tree given as `parents[i]` = parent of node `i + 2`, rooted at node 1.
    pub fn from_parents(parents: &[NodeId]) -> Result<Self, TreeError> {
        let edges: Vec<_> = parents
            .iter()
            .enumerate()
            .map(|(i, &p)| (i + 2, p))
            .collect();
        Self::from_edges(parents.len() + 1, &edges)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// A built tree always has at least one node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn contains(&self, v: NodeId) -> bool {
        (1..=self.n).contains(&v)
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.to.len() / 2
    }

    /// Neighbours of `v` in input order.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a node of this tree.
    #[inline]
    pub fn neighbors(&self, v: NodeId) -> &[NodeId] {
        assert!(self.contains(v), "node out of range");
        &self.to[self.offsets[v - 1]..self.offsets[v]]
    }

    #[inline]
    pub fn degree(&self, v: NodeId) -> usize {
        self.neighbors(v).len()
    }

    pub(crate) fn slot(&self, v: NodeId) -> Result<usize, TreeError> {
        slot(self.n, v)
    }
}

#[inline]
pub(crate) fn slot(n: usize, v: NodeId) -> Result<usize, TreeError> {
    if (1..=n).contains(&v) {
        Ok(v - 1)
    } else {
        Err(TreeError::UnknownNode { node: v, n })
    }
}
