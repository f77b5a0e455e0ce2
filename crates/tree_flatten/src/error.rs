use segment_tree::RangeError;
use thiserror::Error;

use crate::tree::NodeId;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("A tree needs at least one node")]
    Empty,

    #[error("Expected {expected} edges for a tree on {n} nodes, found {found}")]
    EdgeCount {
        n: usize,
        expected: usize,
        found: usize,
    },

    #[error("Node {node} is not in 1..={n}")]
    UnknownNode { node: NodeId, n: usize },

    #[error("Edge ({node}, {node}) is a self loop")]
    SelfLoop { node: NodeId },

    #[error("Node {node} is reachable from the root along two different paths")]
    Cycle { node: NodeId },

    #[error("Only {visited} of {n} nodes are reachable from the root")]
    Disconnected { visited: usize, n: usize },

    #[error("Expected {expected} node values, found {found}")]
    ValueCount { expected: usize, found: usize },
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Range(#[from] RangeError),
}
