//! Tree flattening for subtree range queries.
//!
//! A depth-first traversal assigns every node an entry index so that each
//! subtree occupies one contiguous index range. A [`segment_tree::RangeQueryStore`]
//! built over the values in entry order then answers subtree aggregates.

mod deferred;
mod dfs;
mod error;
mod euler;
mod flatten;
mod lca;
mod subtree;
mod tree;

pub use deferred::DeferredSubtreeSums;
pub use error::{QueryError, TreeError};
pub use euler::EulerTour;
pub use flatten::Flattening;
pub use lca::{BinaryLifting, DepthMin, EulerTourLca};
pub use subtree::SubtreeQuery;
pub use tree::{NodeId, Tree};
