//! Tests for resolving graph nodes to their backing records.
mod common;
use common::*;
use jidou::entity::resolve_entity;
use jidou::prelude::*;
use serde_json::json;

fn single_node_graph(node: FlowNodeDefinition) -> FlowGraph {
    FlowGraph::decode(&FlowDefinition::new(vec![node], vec![])).unwrap()
}

#[test]
fn test_node_id_pattern_resolves_trigger() {
    let graph = single_node_graph(FlowNodeDefinition::new("trigger-42", "stateChangeTrigger"));
    let records = create_records();

    let trigger = resolve_entity(graph.node("trigger-42").unwrap(), &records.triggers).unwrap();
    assert_eq!(trigger.id, 42);
    assert_eq!(trigger.kind, TriggerKind::Manual);
}

#[test]
fn test_entity_id_beats_node_id_pattern() {
    let graph = single_node_graph(
        FlowNodeDefinition::new("trigger-42", "stateChangeTrigger").with_data("entityId", 1),
    );
    let records = create_records();

    let trigger = records.resolver().trigger(graph.node("trigger-42").unwrap()).unwrap();
    assert_eq!(trigger.id, 1);
}

#[test]
fn test_legacy_field_is_second_tier() {
    let graph = single_node_graph(
        FlowNodeDefinition::new("action-1", "deviceAction")
            .with_data("actionId", "2")
            .with_data("entityId", 999),
    );
    let records = create_records();

    // entityId points nowhere, so the legacy field decides.
    let action = records.resolver().action(graph.node("action-1").unwrap()).unwrap();
    assert_eq!(action.id, 2);
}

#[test]
fn test_unmatched_nodes_resolve_to_nothing() {
    let records = create_records();
    let resolver = records.resolver();

    for (id, ty) in [
        ("condition-99", "valueCondition"),
        ("condition-abc", "valueCondition"),
        ("condition--1", "valueCondition"),
        ("my-condition-1", "valueCondition"),
        ("condition_1", "valueCondition"),
    ] {
        let graph = single_node_graph(FlowNodeDefinition::new(id, ty));
        assert!(resolver.condition(graph.node(id).unwrap()).is_none(), "{} resolved", id);
    }
}

#[test]
fn test_role_mismatch_never_resolves() {
    let graph = single_node_graph(
        FlowNodeDefinition::new("trigger-1", "valueCondition").with_data("entityId", 1),
    );
    let records = create_records();
    let node = graph.node("trigger-1").unwrap();

    assert!(records.resolver().trigger(node).is_none());
    assert_eq!(records.resolver().condition(node).unwrap().id, 1);
}

#[test]
fn test_records_deserialize_with_type_tags() {
    let records: RecordSet = serde_json::from_value(json!({
        "triggers": [
            {"id": 1, "type": "state_change", "device_id": 7, "field": "temperature"},
            {"id": 2, "type": "schedule", "cron": "0 7 * * *"},
            {"id": 3, "type": "interval", "seconds": 60},
            {"id": 4, "type": "manual"}
        ],
        "conditions": [
            {"id": 1, "device_id": 7, "field": "temperature", "operator": ">=", "value": "21.5"},
            {"id": 2, "field": "mode", "operator": "=", "value": "away"}
        ],
        "actions": [
            {"id": 1, "type": "device_command", "device_id": 3, "command": "on", "payload": {"level": 80}},
            {"id": 2, "type": "notification", "message": "hello"},
            {"id": 3, "type": "log", "message": "ran"}
        ]
    }))
    .unwrap();

    assert_eq!(
        records.triggers[1].kind,
        TriggerKind::Schedule {
            cron: "0 7 * * *".to_string()
        }
    );
    assert_eq!(records.conditions[0].value, Value::Text("21.5".to_string()));
    assert_eq!(records.conditions[1].device_id, None);
    assert_eq!(
        records.actions[1].kind,
        ActionKind::Notification {
            message: "hello".to_string(),
            recipients: vec![]
        }
    );

    let collections = EntityCollections::from(records);
    assert_eq!(collections.triggers.len(), 4);
    assert_eq!(collections.actions[&1].id, 1);
}

#[test]
fn test_integral_float_references_resolve() {
    let graph = single_node_graph(
        FlowNodeDefinition::new("n1", "stateChangeTrigger").with_data("entityId", 42.0),
    );
    let records = create_records();

    let trigger = records.resolver().trigger(graph.node("n1").unwrap()).unwrap();
    assert_eq!(trigger.id, 42);

    let fractional = single_node_graph(
        FlowNodeDefinition::new("n1", "stateChangeTrigger").with_data("entityId", 42.5),
    );
    assert!(records.resolver().trigger(fractional.node("n1").unwrap()).is_none());
}
