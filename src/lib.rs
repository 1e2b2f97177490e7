//! # Jidou - Automation Flow Engine
//!
//! **Jidou** turns the node graphs users draw in an automation editor into
//! something a device-management backend can execute: it validates the graph
//! on save, and at trigger time resolves the ordered trigger → conditions →
//! actions bundle for the trigger that fired.
//!
//! The engine is a pure, synchronous computation. It does not schedule
//! triggers, talk to devices, perform actions or write run logs; the host
//! supplies already-loaded data and acts on what the engine returns.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Graph**: Parse the stored `{nodes, edges}` description into a
//!     [`flow::FlowDefinition`] (or implement [`flow::IntoFlow`] for your own shape).
//! 2.  **Validate on Save**: [`FlowEngine::validate`] returns every problem at
//!     once: missing graph, cycles, missing triggers, and steps out of order.
//! 3.  **Resolve on Trigger**: decode the graph and call
//!     [`FlowEngine::resolve_bundle`] with the automation's trigger, condition
//!     and action records to get the [`bundle::PathBundle`] for the trigger.
//! 4.  **Check Conditions**: evaluate the bundle's conditions against live
//!     readings through a [`condition::StateSource`], run the actions, and
//!     classify the run with [`execution::ExecutionStatus`].
//!
//! ## Quick Start
//!
//! ```rust
//! use jidou::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let flow = FlowDefinition::from_value(json!({
//!     "nodes": [
//!         { "id": "trigger-1", "type": "stateChangeTrigger", "data": {} },
//!         { "id": "n2", "type": "valueCondition", "data": { "entityId": 5 } },
//!         { "id": "action-9", "type": "deviceAction", "data": {} }
//!     ],
//!     "edges": [
//!         { "source": "trigger-1", "target": "n2" },
//!         { "source": "n2", "target": "action-9" }
//!     ]
//! }))?;
//!
//! let engine = FlowEngine::new();
//! assert!(engine.validate(&flow).is_empty());
//!
//! let records = EntityCollections::new(
//!     vec![Trigger {
//!         id: 1,
//!         kind: TriggerKind::StateChange { device_id: 7, field: "temperature".into() },
//!     }],
//!     vec![Condition {
//!         id: 5,
//!         device_id: Some(7),
//!         field: "temperature".into(),
//!         operator: ">".into(),
//!         value: Value::from("25"),
//!     }],
//!     vec![Action { id: 9, kind: ActionKind::Log { message: "too hot".into() } }],
//! );
//!
//! let graph = engine.decode(&flow).ok_or("no graph")?;
//! let bundle = engine.resolve_bundle(&graph, "trigger-1", &records)?;
//! assert!(bundle.path_valid);
//! assert_eq!(bundle.execution_path, ["trigger-1", "n2", "action-9"]);
//!
//! let mut state = DeviceState::default();
//! state.set(7, "temperature", 30.0);
//! let outcomes = bundle.check_conditions(&state);
//! assert!(outcomes[0].met);
//! assert_eq!(outcomes[0].reason, "temperature (was 30) > \"25\"");
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod condition;
pub mod engine;
pub mod entity;
pub mod error;
pub mod execution;
pub mod flow;
pub mod graph;
pub mod plan;
pub mod prelude;
pub mod trace;
pub mod validator;

pub use engine::{EngineConfig, FlowEngine, FlowEngineBuilder};
