use crate::error::TreeError;
use crate::tree::{NodeId, Tree};

/// Parent of the root.
pub(crate) const NO_PARENT: NodeId = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Enter { node: NodeId, parent: NodeId },
    Exit { node: NodeId, parent: NodeId },
}

/// Iterative depth-first walk from `root`, children in adjacency order.
///
/// The edge back to the parent is skipped, and reaching an already entered
/// node reports a cycle instead of looping. Every node must be reached.
pub(crate) fn depth_first<F>(tree: &Tree, root: NodeId, mut visit: F) -> Result<(), TreeError>
where
    F: FnMut(Event),
{
    let n = tree.len();
    tree.slot(root)?;

    let mut entered = vec![false; n];
    let mut visited = 1_usize;
    // (node, parent, next neighbour cursor)
    let mut stack: Vec<(NodeId, NodeId, usize)> = Vec::with_capacity(n);

    entered[root - 1] = true;
    visit(Event::Enter {
        node: root,
        parent: NO_PARENT,
    });
    stack.push((root, NO_PARENT, 0));

    while let Some(frame) = stack.last_mut() {
        let (node, parent) = (frame.0, frame.1);
        let Some(&child) = tree.neighbors(node).get(frame.2) else {
            stack.pop();
            visit(Event::Exit { node, parent });
            continue;
        };
        frame.2 += 1;

        if child == parent {
            continue;
        }
        if entered[child - 1] {
            return Err(TreeError::Cycle { node: child });
        }

        entered[child - 1] = true;
        visited += 1;
        visit(Event::Enter {
            node: child,
            parent: node,
        });
        stack.push((child, node, 0));
    }

    if visited != n {
        return Err(TreeError::Disconnected { visited, n });
    }
    Ok(())
}
