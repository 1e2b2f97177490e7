use crate::condition::{ConditionOutcome, StateSource, check_conditions};
use crate::entity::{Action, Condition, EntityCollections, Trigger};
use crate::error::FlowError;
use crate::graph::{FlowGraph, NodeId, NodeRole, resolve_path};
use serde::Serialize;
use tracing::warn;

/// Everything the action dispatcher needs to run one trigger's path.
///
/// `conditions` and `actions` hold the resolved records in path order. Nodes
/// without a backing record contribute nothing; `path_valid` only tells
/// whether the trigger itself resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathBundle<'a> {
    pub trigger_node_id: NodeId,
    pub trigger: Option<&'a Trigger>,
    pub conditions: Vec<&'a Condition>,
    pub actions: Vec<&'a Action>,
    pub execution_path: Vec<NodeId>,
    pub path_valid: bool,
}

impl<'a> PathBundle<'a> {
    /// Checks this bundle's conditions against live state.
    pub fn check_conditions(&self, source: &dyn StateSource) -> Vec<ConditionOutcome> {
        check_conditions(self.conditions.iter().copied(), source)
    }

    /// True if every condition is met. A bundle without conditions passes.
    pub fn conditions_met(&self, source: &dyn StateSource) -> bool {
        self.check_conditions(source).iter().all(|o| o.met)
    }
}

/// Resolves the path of one trigger node and the records along it.
pub fn resolve_bundle<'a>(
    graph: &FlowGraph,
    trigger_node_id: &str,
    collections: &'a EntityCollections,
) -> Result<PathBundle<'a>, FlowError> {
    let execution_path = resolve_path(graph, trigger_node_id)?;
    let resolver = collections.resolver();

    let mut trigger = None;
    let mut conditions = Vec::new();
    let mut actions = Vec::new();

    for node in execution_path.iter().filter_map(|id| graph.node(id)) {
        let resolved = match node.role() {
            Some(NodeRole::Trigger) if node.id() == trigger_node_id => {
                trigger = resolver.trigger(node);
                trigger.is_some()
            }
            Some(NodeRole::Condition) => match resolver.condition(node) {
                Some(condition) => {
                    conditions.push(condition);
                    true
                }
                None => false,
            },
            Some(NodeRole::Action) => match resolver.action(node) {
                Some(action) => {
                    actions.push(action);
                    true
                }
                None => false,
            },
            _ => true,
        };
        if !resolved {
            warn!(
                trigger_node_id,
                node_id = node.id(),
                node_type = node.type_name(),
                "Node has no backing record"
            );
        }
    }

    Ok(PathBundle {
        trigger_node_id: trigger_node_id.to_string(),
        path_valid: trigger.is_some(),
        trigger,
        conditions,
        actions,
        execution_path,
    })
}

/// Resolves a bundle for every trigger node, in creation order.
pub fn resolve_all_bundles<'a>(
    graph: &FlowGraph,
    collections: &'a EntityCollections,
) -> Vec<PathBundle<'a>> {
    graph
        .triggers()
        .filter_map(|node| resolve_bundle(graph, node.id(), collections).ok())
        .collect()
}
