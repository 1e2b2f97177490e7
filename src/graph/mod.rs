use crate::flow::FlowDefinition;
use ahash::AHashMap;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use tracing::{debug, warn};

pub mod display;
pub mod order;
pub mod path;
mod role;

pub use display::DisplayPath;
pub use order::{checked_order, topological_order};
pub use path::resolve_path;
pub use role::{NodeRole, RoleClassifier};

pub type NodeId = String;

/// A decoded node with its role already classified.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    id: NodeId,
    type_name: String,
    role: Option<NodeRole>,
    data: Map<String, Value>,
}

impl FlowNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn role(&self) -> Option<NodeRole> {
        self.role
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn is(&self, role: NodeRole) -> bool {
        self.role == Some(role)
    }

    pub fn is_sentinel(&self) -> bool {
        self.role.is_some_and(|r| r.is_sentinel())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub source: NodeId,
    pub target: NodeId,
}

/// An immutable, in-memory flow graph.
///
/// Nodes keep the order they were authored in, which is what makes ordering
/// and traversal deterministic. Adjacency is stored by node index alongside
/// the edge list and is computed once, at decode time.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    index: AHashMap<NodeId, usize>,
    edges: Vec<FlowEdge>,
    outgoing: Vec<Vec<usize>>,
}

impl FlowGraph {
    /// Decodes a flow description using the default role classification.
    pub fn decode(flow: &FlowDefinition) -> Option<FlowGraph> {
        Self::decode_with(flow, &RoleClassifier::default())
    }

    /// Decodes a flow description into a graph.
    ///
    /// Returns `None` when either the node list or the edge list is absent.
    /// Nodes with an id that was already seen are dropped, and so are edges
    /// that reference an unknown node: a graph in the middle of being edited
    /// is expected to contain both.
    pub fn decode_with(flow: &FlowDefinition, classifier: &RoleClassifier) -> Option<FlowGraph> {
        let (node_defs, edge_defs) = match (&flow.nodes, &flow.edges) {
            (Some(nodes), Some(edges)) => (nodes, edges),
            _ => return None,
        };

        let mut nodes = Vec::with_capacity(node_defs.len());
        let mut index = AHashMap::with_capacity(node_defs.len());
        for def in node_defs {
            if index.contains_key(&def.id) {
                warn!(node_id = %def.id, "Dropping node with duplicate id");
                continue;
            }
            index.insert(def.id.clone(), nodes.len());
            nodes.push(FlowNode {
                id: def.id.clone(),
                type_name: def.node_type.clone(),
                role: classifier.classify(&def.node_type),
                data: def.data.clone(),
            });
        }

        let mut edges = Vec::with_capacity(edge_defs.len());
        let mut outgoing = vec![Vec::new(); nodes.len()];
        for def in edge_defs {
            match (index.get(&def.source), index.get(&def.target)) {
                (Some(&from), Some(&to)) => {
                    outgoing[from].push(to);
                    edges.push(FlowEdge {
                        source: def.source.clone(),
                        target: def.target.clone(),
                    });
                }
                _ => {
                    warn!(
                        source = %def.source,
                        target = %def.target,
                        "Dropping edge that references an unknown node"
                    );
                }
            }
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "Decoded flow graph"
        );

        Some(FlowGraph {
            nodes,
            index,
            edges,
            outgoing,
        })
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct successors of a node, in edge-list order.
    pub fn successors(&self, id: &str) -> impl Iterator<Item = &FlowNode> {
        self.index
            .get(id)
            .into_iter()
            .flat_map(move |&i| self.outgoing[i].iter().map(move |&j| &self.nodes[j]))
    }

    /// Trigger nodes in creation order.
    pub fn triggers(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(|n| n.is(NodeRole::Trigger))
    }

    pub fn trigger_ids(&self) -> Vec<&str> {
        self.triggers().map(FlowNode::id).collect()
    }

    /// Nodes that no trigger can reach, excluding triggers and sentinels.
    ///
    /// Purely diagnostic: such nodes never execute, but they do not make the
    /// graph invalid.
    pub fn unreachable_from_triggers(&self) -> Vec<&FlowNode> {
        let mut seen = vec![false; self.nodes.len()];
        let mut queue: VecDeque<usize> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is(NodeRole::Trigger))
            .map(|(i, _)| i)
            .collect();

        while let Some(i) = queue.pop_front() {
            if !seen[i] {
                seen[i] = true;
                queue.extend(self.outgoing[i].iter().copied());
            }
        }

        self.nodes
            .iter()
            .zip(seen)
            .filter(|(n, reached)| !reached && !n.is(NodeRole::Trigger) && !n.is_sentinel())
            .map(|(n, _)| n)
            .collect()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, i: usize) -> &FlowNode {
        &self.nodes[i]
    }

    pub(crate) fn outgoing_of(&self, i: usize) -> &[usize] {
        &self.outgoing[i]
    }
}
