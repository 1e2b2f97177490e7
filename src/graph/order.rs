use super::{FlowGraph, NodeId};
use crate::error::ValidationError;
use std::collections::VecDeque;
use tracing::debug;

/// Orders the graph with Kahn's algorithm.
///
/// Ready nodes are released in FIFO order, seeded in creation order, so the
/// result is stable for a given graph. Nodes caught in a cycle never reach an
/// in-degree of zero and are missing from the result; the returned list is
/// then shorter than the node count.
pub fn topological_order(graph: &FlowGraph) -> Vec<NodeId> {
    let mut in_degree = vec![0usize; graph.len()];
    for i in 0..graph.len() {
        for &j in graph.outgoing_of(i) {
            in_degree[j] += 1;
        }
    }

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|&(_, degree)| *degree == 0)
        .map(|(i, _)| i)
        .collect();

    let mut sorted = Vec::with_capacity(graph.len());
    while let Some(i) = queue.pop_front() {
        sorted.push(graph.node_at(i).id.clone());
        for &j in graph.outgoing_of(i) {
            in_degree[j] -= 1;
            if in_degree[j] == 0 {
                queue.push_back(j);
            }
        }
    }

    debug!(
        ordered = sorted.len(),
        total = graph.len(),
        "Computed topological order"
    );
    sorted
}

/// Like [`topological_order`], but reports an incomplete order as an error.
pub fn checked_order(graph: &FlowGraph) -> Result<Vec<NodeId>, ValidationError> {
    let order = topological_order(graph);
    if order.len() < graph.len() {
        Err(ValidationError::CycleOrDisconnected)
    } else {
        Ok(order)
    }
}
