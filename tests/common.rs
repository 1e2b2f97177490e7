//! Common test utilities for building flows and records.
use jidou::prelude::*;

/// Builds a flow from `(id, type)` pairs and `(source, target)` pairs.
#[allow(dead_code)]
pub fn flow(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> FlowDefinition {
    FlowDefinition::new(
        nodes
            .iter()
            .map(|(id, ty)| FlowNodeDefinition::new(*id, *ty))
            .collect(),
        edges
            .iter()
            .map(|(s, t)| FlowEdgeDefinition::new(*s, *t))
            .collect(),
    )
}

/// Decodes a flow that is known to have both lists.
#[allow(dead_code)]
pub fn graph(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> FlowGraph {
    FlowGraph::decode(&flow(nodes, edges)).expect("flow has nodes and edges")
}

/// `trigger-1 -> condition-2 -> action-3`
#[allow(dead_code)]
pub fn create_linear_flow() -> FlowDefinition {
    flow(
        &[
            ("trigger-1", "stateChangeTrigger"),
            ("condition-2", "valueCondition"),
            ("action-3", "deviceAction"),
        ],
        &[("trigger-1", "condition-2"), ("condition-2", "action-3")],
    )
}

/// A start/end framed flow with a branch after the condition:
///
/// `start -> trigger-1 -> condition-1 -> {action-1, action-2} -> end`
#[allow(dead_code)]
pub fn create_branching_flow() -> FlowDefinition {
    flow(
        &[
            ("start", "start"),
            ("trigger-1", "stateChangeTrigger"),
            ("condition-1", "valueCondition"),
            ("action-1", "deviceAction"),
            ("action-2", "notificationAction"),
            ("end", "end"),
        ],
        &[
            ("start", "trigger-1"),
            ("trigger-1", "condition-1"),
            ("condition-1", "action-1"),
            ("condition-1", "action-2"),
            ("action-1", "end"),
            ("action-2", "end"),
        ],
    )
}

/// Records matching `create_linear_flow` and `create_branching_flow`.
#[allow(dead_code)]
pub fn create_records() -> EntityCollections {
    EntityCollections::new(
        vec![
            Trigger {
                id: 1,
                kind: TriggerKind::StateChange {
                    device_id: 7,
                    field: "temperature".to_string(),
                },
            },
            Trigger {
                id: 42,
                kind: TriggerKind::Manual,
            },
        ],
        vec![
            Condition {
                id: 1,
                device_id: Some(7),
                field: "temperature".to_string(),
                operator: ">".to_string(),
                value: Value::from("25"),
            },
            Condition {
                id: 2,
                device_id: Some(7),
                field: "humidity".to_string(),
                operator: "<".to_string(),
                value: Value::Number(60.0),
            },
        ],
        vec![
            Action {
                id: 1,
                kind: ActionKind::DeviceCommand {
                    device_id: 3,
                    command: "fan_on".to_string(),
                    payload: serde_json::Value::Null,
                },
            },
            Action {
                id: 2,
                kind: ActionKind::Notification {
                    message: "It is hot".to_string(),
                    recipients: vec!["ops".to_string()],
                },
            },
            Action {
                id: 3,
                kind: ActionKind::Log {
                    message: "temperature handled".to_string(),
                },
            },
        ],
    )
}
