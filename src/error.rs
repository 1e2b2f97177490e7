use crate::graph::NodeId;
use itertools::Itertools;
use thiserror::Error;

/// Errors caused by the calling code rather than by the user's graph.
///
/// These are returned from APIs that take a caller-chosen node id. A host that
/// passes an id it did not obtain from the graph gets one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Failed to parse flow description: {0}")]
    Parse(String),

    #[error("Node '{0}' does not exist in the flow graph")]
    NodeNotFound(NodeId),

    #[error("Node '{node_id}' of type '{type_name}' is not a trigger node")]
    InvalidTrigger { node_id: NodeId, type_name: String },
}

/// Coarse category of a validation problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Missing or empty graph description.
    Structural,
    /// Cycle or disconnected fragment.
    Topological,
    /// Trigger/condition/action order violated on a path.
    Ordering,
    /// A configured size limit was exceeded.
    Limit,
}

/// A user-correctable problem found while validating a flow.
///
/// Validation never stops at the first ordering problem, so these are
/// collected into a list and handed back to the host for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Flow graph is missing: no nodes or edges were provided")]
    MissingGraph,

    #[error("Flow graph has no nodes")]
    NoNodes,

    #[error("Flow graph contains cycles or disconnected components")]
    CycleOrDisconnected,

    #[error("Flow graph has no trigger nodes")]
    NoTriggers,

    #[error(
        "Trigger node '{node_id}' appears after {preceding_role} node '{preceding_id}' in the path from trigger '{root_id}'"
    )]
    TriggerAfterStep {
        root_id: NodeId,
        node_id: NodeId,
        preceding_id: NodeId,
        preceding_role: &'static str,
    },

    #[error(
        "Condition node '{node_id}' appears after action node '{action_id}' in the path from trigger '{root_id}'"
    )]
    ConditionAfterAction {
        root_id: NodeId,
        node_id: NodeId,
        action_id: NodeId,
    },

    #[error("Flow graph {what} count ({actual}) exceeds maximum allowed ({limit})")]
    LimitExceeded {
        what: &'static str,
        actual: usize,
        limit: usize,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingGraph | ValidationError::NoNodes | ValidationError::NoTriggers => {
                ValidationErrorKind::Structural
            }
            ValidationError::CycleOrDisconnected => ValidationErrorKind::Topological,
            ValidationError::TriggerAfterStep { .. }
            | ValidationError::ConditionAfterAction { .. } => ValidationErrorKind::Ordering,
            ValidationError::LimitExceeded { .. } => ValidationErrorKind::Limit,
        }
    }
}

/// Errors that can occur while building or loading a `FlowPlan`.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Flow is not valid for execution: {}", .0.iter().join("; "))]
    Invalid(Vec<ValidationError>),

    #[error("Plan serialization failed: {0}")]
    Encode(String),

    #[error("Plan deserialization failed: {0}")]
    Decode(String),

    #[error("Plan file '{path}' could not be accessed: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when loading an `EngineConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid engine config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when converting a host-specific format into a `FlowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
