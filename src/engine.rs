use crate::bundle::{PathBundle, resolve_all_bundles, resolve_bundle};
use crate::entity::EntityCollections;
use crate::error::{ConfigError, FlowError, PlanError, ValidationError};
use crate::flow::FlowDefinition;
use crate::graph::{self, FlowGraph, NodeId, NodeRole, RoleClassifier};
use crate::plan::{FlowPlan, TriggerPath};
use crate::validator::{FlowValidator, ValidationLimits};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

/// Engine settings that a host can keep in a file.
///
/// ```json
/// { "type_mappings": { "geofenceEnter": "trigger" }, "limits": { "max_node_count": 200 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub type_mappings: AHashMap<String, NodeRole>,
    pub limits: ValidationLimits,
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an engine config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

/// The entry point for hosts: decode, validate, resolve and plan flows.
///
/// A `FlowEngine` holds only configuration, so one instance can be shared
/// across threads and used for any number of automations.
#[derive(Debug, Clone, Default)]
pub struct FlowEngine {
    classifier: RoleClassifier,
    limits: ValidationLimits,
}

pub struct FlowEngineBuilder {
    classifier: RoleClassifier,
    limits: ValidationLimits,
}

impl FlowEngineBuilder {
    pub fn new() -> Self {
        Self {
            classifier: RoleClassifier::default(),
            limits: ValidationLimits::default(),
        }
    }

    /// Gives an editor node type a fixed role, overriding keyword classification.
    pub fn with_type_mapping(mut self, type_name: &str, role: NodeRole) -> Self {
        self.classifier.insert(type_name, role);
        self
    }

    pub fn with_limits(mut self, limits: ValidationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        for (type_name, role) in &config.type_mappings {
            self.classifier.insert(type_name, *role);
        }
        self.limits = config.limits;
        self
    }

    pub fn build(self) -> FlowEngine {
        FlowEngine {
            classifier: self.classifier,
            limits: self.limits,
        }
    }
}

impl Default for FlowEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> FlowEngineBuilder {
        FlowEngineBuilder::new()
    }

    pub fn classifier(&self) -> &RoleClassifier {
        &self.classifier
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    pub fn decode(&self, flow: &FlowDefinition) -> Option<FlowGraph> {
        FlowGraph::decode_with(flow, &self.classifier)
    }

    pub fn validate(&self, flow: &FlowDefinition) -> Vec<ValidationError> {
        self.validator().validate(flow)
    }

    pub fn validation_messages(&self, flow: &FlowDefinition) -> Vec<String> {
        self.validator().messages(flow)
    }

    pub fn order(&self, graph: &FlowGraph) -> Result<Vec<NodeId>, ValidationError> {
        graph::checked_order(graph)
    }

    pub fn resolve_path(&self, graph: &FlowGraph, trigger_id: &str) -> Result<Vec<NodeId>, FlowError> {
        graph::resolve_path(graph, trigger_id)
    }

    pub fn resolve_bundle<'a>(
        &self,
        graph: &FlowGraph,
        trigger_id: &str,
        collections: &'a EntityCollections,
    ) -> Result<PathBundle<'a>, FlowError> {
        resolve_bundle(graph, trigger_id, collections)
    }

    pub fn resolve_bundles<'a>(
        &self,
        graph: &FlowGraph,
        collections: &'a EntityCollections,
    ) -> Vec<PathBundle<'a>> {
        resolve_all_bundles(graph, collections)
    }

    /// Validates a flow and, if it is valid, captures its order and paths.
    pub fn plan(&self, flow: &FlowDefinition) -> Result<FlowPlan, PlanError> {
        let errors = self.validate(flow);
        if !errors.is_empty() {
            return Err(PlanError::Invalid(errors));
        }

        let graph = self
            .decode(flow)
            .ok_or_else(|| PlanError::Invalid(vec![ValidationError::MissingGraph]))?;
        let order = graph::checked_order(&graph).map_err(|e| PlanError::Invalid(vec![e]))?;

        let paths: Vec<TriggerPath> = graph
            .triggers()
            .filter_map(|trigger| {
                let execution_path = graph::resolve_path(&graph, trigger.id()).ok()?;
                Some(TriggerPath {
                    trigger_node_id: trigger.id().to_string(),
                    execution_path,
                })
            })
            .collect();

        info!(
            nodes = order.len(),
            triggers = paths.len(),
            "Planned flow"
        );
        Ok(FlowPlan { order, paths })
    }

    fn validator(&self) -> FlowValidator {
        FlowValidator::new()
            .with_limits(self.limits.clone())
            .with_classifier(self.classifier.clone())
    }
}
