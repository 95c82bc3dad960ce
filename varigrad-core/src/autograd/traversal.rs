use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Orders the non-leaf nodes reachable from `root` so that every node comes after
/// all the nodes it was built from.
///
/// Depth-first post-order over parent links. A node is appended once, however many
/// consumers it has; leaves are never appended since they have no backward step.
/// The graph is acyclic by construction (operands always exist before their result).
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, AutogradError> {
    graph.node(root)?;
    let mut visited = vec![false; graph.len()];
    let mut sorted = Vec::new();
    build_topo(graph, root, &mut visited, &mut sorted)?;
    Ok(sorted)
}

fn build_topo(
    graph: &Graph,
    id: NodeId,
    visited: &mut [bool],
    sorted: &mut Vec<NodeId>,
) -> Result<(), AutogradError> {
    let node = graph.node(id)?;
    if visited[id.index()] || node.is_leaf() {
        return Ok(());
    }
    visited[id.index()] = true;
    for parent in node.parents() {
        build_topo(graph, parent, visited, sorted)?;
    }
    sorted.push(id);
    Ok(())
}

/// Computes the gradient of `root` with respect to every node it depends on.
///
/// `root.grad` is overwritten with ones (the objective is the sum of `root`'s
/// elements), then each non-leaf node's backward rule runs in reverse topological
/// order. By the time a node runs, all of its consumers have already run, so its
/// `grad` holds every contribution. Gradients accumulate; call `zero_grad` between
/// passes.
///
/// # Errors
/// `InvalidArgument` if `root` is not a node of `graph`; any failure raised by a
/// backward rule aborts the pass, leaving gradients partially accumulated.
pub fn backward_graph(graph: &mut Graph, root: NodeId) -> Result<(), AutogradError> {
    let sorted = topological_sort(graph, root)?;
    log::debug!(
        "backward_graph: root {} with {} non-leaf nodes to visit",
        root,
        sorted.len()
    );

    graph.node_mut(root)?.seed_grad();
    for &id in sorted.iter().rev() {
        graph.backward(id)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod tests;
