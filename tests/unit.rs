//! Unit tests for core Jidou functionality.
use jidou::error::PlanError;
use jidou::prelude::*;
use jidou::trace::{ConditionTrace, TraceFormatter};

#[test]
fn test_keyword_classification() {
    let classifier = RoleClassifier::new();
    assert_eq!(classifier.classify("stateChangeTrigger"), Some(NodeRole::Trigger));
    assert_eq!(classifier.classify("valueCondition"), Some(NodeRole::Condition));
    assert_eq!(classifier.classify("sendNotificationAction"), Some(NodeRole::Action));
    assert_eq!(classifier.classify("TRIGGER"), Some(NodeRole::Trigger));
    assert_eq!(classifier.classify("start"), Some(NodeRole::Start));
    assert_eq!(classifier.classify("End"), Some(NodeRole::End));
    assert_eq!(classifier.classify("startMarker"), None);
    assert_eq!(classifier.classify("stickyNote"), None);
}

#[test]
fn test_explicit_mappings_win_over_keywords() {
    let classifier = RoleClassifier::new()
        .with_mapping("conditionalTrigger", NodeRole::Condition)
        .with_mapping("Geofence", NodeRole::Trigger);

    assert_eq!(classifier.classify("conditionalTrigger"), Some(NodeRole::Condition));
    assert_eq!(classifier.classify("geofence"), Some(NodeRole::Trigger));
    // Unmapped names still fall back to keywords.
    assert_eq!(classifier.classify("otherTrigger"), Some(NodeRole::Trigger));
}

#[test]
fn test_node_role_helpers() {
    assert!(NodeRole::Start.is_sentinel());
    assert!(NodeRole::End.is_sentinel());
    assert!(!NodeRole::Action.is_sentinel());
    assert_eq!(NodeRole::Condition.legacy_reference_field(), Some("conditionId"));
    assert_eq!(NodeRole::End.legacy_reference_field(), None);
    assert_eq!(NodeRole::Trigger.to_string(), "trigger");
    assert_eq!(serde_json::to_string(&NodeRole::Action).unwrap(), "\"action\"");
}

#[test]
fn test_trace_formatter() {
    let compared = ConditionTrace::Compared {
        field: "mode".to_string(),
        actual: Value::from("home"),
        operator: Operator::Equal,
        expected: Value::from("away"),
        outcome: false,
    };
    assert!(!compared.outcome());
    assert_eq!(
        TraceFormatter::format_trace(&compared),
        "NOT mode (was \"home\") = \"away\""
    );

    let unavailable = ConditionTrace::Unavailable {
        field: "humidity".to_string(),
    };
    assert_eq!(TraceFormatter::format_trace(&unavailable), "humidity unavailable");
}

#[test]
fn test_error_messages_and_kinds() {
    let err = FlowError::InvalidTrigger {
        node_id: "c".to_string(),
        type_name: "valueCondition".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Node 'c' of type 'valueCondition' is not a trigger node"
    );

    let limit = ValidationError::LimitExceeded {
        what: "trigger",
        actual: 101,
        limit: 100,
    };
    assert_eq!(limit.kind(), ValidationErrorKind::Limit);
    assert!(limit.to_string().contains("trigger count (101)"));

    let invalid = PlanError::Invalid(vec![ValidationError::NoNodes, ValidationError::NoTriggers]);
    assert_eq!(
        invalid.to_string(),
        "Flow is not valid for execution: Flow graph has no nodes; Flow graph has no trigger nodes"
    );
}

#[test]
fn test_validation_limits_defaults() {
    let limits = ValidationLimits::default();
    assert_eq!(limits.max_node_count, 1000);
    assert_eq!(limits.max_edge_count, 5000);
    assert_eq!(limits.max_trigger_count, 100);
    assert_eq!(ValidationLimits::new().with_max_trigger_count(3).max_trigger_count, 3);
}

#[test]
fn test_mappings_ignore_surrounding_whitespace() {
    let classifier = RoleClassifier::new().with_mapping(" geofence ", NodeRole::Trigger);
    assert_eq!(classifier.classify(" geofence "), Some(NodeRole::Trigger));
    assert_eq!(classifier.classify("Geofence"), Some(NodeRole::Trigger));
}
