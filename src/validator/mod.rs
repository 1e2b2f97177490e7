//! Save-time validation of flow graphs.

use crate::error::ValidationError;
use crate::flow::FlowDefinition;
use crate::graph::{FlowGraph, FlowNode, NodeRole, RoleClassifier, checked_order, resolve_path};
use tracing::{debug, warn};

mod limits;

pub use limits::ValidationLimits;

/// Validator for flow graphs.
///
/// Problems are accumulated rather than returned one at a time, so the editor
/// can show all of them at once. An empty list means the flow can be enabled.
pub struct FlowValidator {
    errors: Vec<ValidationError>,
    limits: ValidationLimits,
    classifier: RoleClassifier,
}

impl Default for FlowValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowValidator {
    /// Create a new validator with default limits and role classification.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            limits: ValidationLimits::default(),
            classifier: RoleClassifier::default(),
        }
    }

    pub fn with_limits(mut self, limits: ValidationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_classifier(mut self, classifier: RoleClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Validate a flow description.
    ///
    /// Structural, limit and topological problems end validation early,
    /// since nothing after them would be meaningful. Ordering problems are
    /// collected for every trigger.
    pub fn validate(mut self, flow: &FlowDefinition) -> Vec<ValidationError> {
        let Some(graph) = FlowGraph::decode_with(flow, &self.classifier) else {
            return vec![ValidationError::MissingGraph];
        };
        if graph.is_empty() {
            return vec![ValidationError::NoNodes];
        }

        self.validate_limits(&graph);
        if !self.errors.is_empty() {
            return self.errors;
        }

        if let Err(e) = checked_order(&graph) {
            return vec![e];
        }

        let triggers: Vec<&FlowNode> = graph.triggers().collect();
        if triggers.is_empty() {
            return vec![ValidationError::NoTriggers];
        }

        for node in graph.unreachable_from_triggers() {
            warn!(
                node_id = node.id(),
                node_type = node.type_name(),
                "Node is unreachable from every trigger"
            );
        }

        for trigger in triggers {
            self.validate_path_ordering(&graph, trigger);
        }

        debug!(errors = self.errors.len(), "Validated flow graph");
        self.errors
    }

    /// Validate and render every problem as a display message.
    pub fn messages(self, flow: &FlowDefinition) -> Vec<String> {
        self.validate(flow).iter().map(ToString::to_string).collect()
    }

    fn validate_limits(&mut self, graph: &FlowGraph) {
        let checks = [
            ("node", graph.len(), self.limits.max_node_count),
            ("edge", graph.edges().len(), self.limits.max_edge_count),
            ("trigger", graph.triggers().count(), self.limits.max_trigger_count),
        ];
        for (what, actual, limit) in checks {
            if actual > limit {
                self.errors
                    .push(ValidationError::LimitExceeded { what, actual, limit });
            }
        }
    }

    /// Walks one trigger's path and flags steps that are out of order.
    fn validate_path_ordering(&mut self, graph: &FlowGraph, root: &FlowNode) {
        let Ok(path) = resolve_path(graph, root.id()) else {
            return;
        };

        let mut last_step: Option<&FlowNode> = None;
        let mut last_action: Option<&FlowNode> = None;

        for node in path
            .iter()
            .filter_map(|id| graph.node(id))
            .filter(|n| !n.is_sentinel())
        {
            match node.role() {
                Some(NodeRole::Trigger) => {
                    if let Some(step) = last_step {
                        self.errors.push(ValidationError::TriggerAfterStep {
                            root_id: root.id().to_string(),
                            node_id: node.id().to_string(),
                            preceding_id: step.id().to_string(),
                            preceding_role: step.role().map_or("unknown", |r| r.as_str()),
                        });
                    }
                }
                Some(NodeRole::Condition) => {
                    if let Some(action) = last_action {
                        self.errors.push(ValidationError::ConditionAfterAction {
                            root_id: root.id().to_string(),
                            node_id: node.id().to_string(),
                            action_id: action.id().to_string(),
                        });
                    }
                    last_step = Some(node);
                }
                Some(NodeRole::Action) => {
                    last_action = Some(node);
                    last_step = Some(node);
                }
                _ => {}
            }
        }
    }
}
