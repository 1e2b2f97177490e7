//! Prelude module for convenient imports
//!
//! Re-exports the types a host touches when validating and resolving flows.
//!
//! ```rust
//! use jidou::prelude::*;
//!
//! let flow = FlowDefinition::new(
//!     vec![FlowNodeDefinition::new("a", "start"), FlowNodeDefinition::new("b", "end")],
//!     vec![FlowEdgeDefinition::new("a", "b"), FlowEdgeDefinition::new("b", "a")],
//! );
//! let errors = FlowEngine::new().validate(&flow);
//! assert_eq!(errors, vec![ValidationError::CycleOrDisconnected]);
//! ```

// Engine and configuration
pub use crate::engine::{EngineConfig, FlowEngine, FlowEngineBuilder};
pub use crate::validator::{FlowValidator, ValidationLimits};

// Flow description and graph
pub use crate::flow::{FlowDefinition, FlowEdgeDefinition, FlowNodeDefinition, IntoFlow};
pub use crate::graph::{DisplayPath, FlowGraph, FlowNode, NodeId, NodeRole, RoleClassifier};

// Records and resolution
pub use crate::bundle::PathBundle;
pub use crate::entity::{
    Action, ActionKind, Condition, EntityCollections, EntityId, RecordSet, Trigger, TriggerKind,
};

// Conditions and runtime
pub use crate::condition::{ConditionOutcome, DeviceState, Operator, StateSource, Value};
pub use crate::execution::ExecutionStatus;
pub use crate::plan::FlowPlan;

// Error types
pub use crate::error::{FlowError, PlanError, ValidationError, ValidationErrorKind};
