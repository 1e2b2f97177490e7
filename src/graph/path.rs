use super::{FlowGraph, NodeId, NodeRole};
use crate::error::FlowError;
use std::collections::HashSet;
use tracing::debug;

/// Collects every node reachable from a trigger by following outgoing edges.
///
/// The result is in depth-first, first-visit order and starts with the
/// trigger itself. A node reached a second time is not descended into again,
/// so cycles downstream of the trigger truncate the walk instead of failing it.
///
/// Asking for the path of a node that is not a trigger is a caller bug and
/// returns [`FlowError::InvalidTrigger`].
pub fn resolve_path(graph: &FlowGraph, trigger_id: &str) -> Result<Vec<NodeId>, FlowError> {
    let start = graph
        .index_of(trigger_id)
        .ok_or_else(|| FlowError::NodeNotFound(trigger_id.to_string()))?;

    let node = graph.node_at(start);
    if !node.is(NodeRole::Trigger) {
        return Err(FlowError::InvalidTrigger {
            node_id: node.id.clone(),
            type_name: node.type_name.clone(),
        });
    }

    let mut visited = HashSet::new();
    let path = walk(graph, start, &mut visited);
    debug!(trigger_id, steps = path.len(), "Resolved execution path");
    Ok(path)
}

fn walk(graph: &FlowGraph, start: usize, visited: &mut HashSet<usize>) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut stack = vec![start];

    while let Some(i) = stack.pop() {
        if !visited.insert(i) {
            continue;
        }
        path.push(graph.node_at(i).id.clone());

        // Reversed so the first outgoing edge is explored first.
        for &j in graph.outgoing_of(i).iter().rev() {
            if !visited.contains(&j) {
                stack.push(j);
            }
        }
    }
    path
}
