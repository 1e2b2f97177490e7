//! Tests for condition evaluation and runtime checks against device state.
use jidou::condition::{check_condition, evaluate};
use jidou::prelude::*;

fn condition(operator: &str, value: impl Into<Value>) -> Condition {
    Condition {
        id: 10,
        device_id: Some(7),
        field: "temperature".to_string(),
        operator: operator.to_string(),
        value: value.into(),
    }
}

#[test]
fn test_numeric_coercion_applies_to_text() {
    assert!(evaluate("<", &Value::from(5.0), &Value::from("10")));
    assert!(evaluate(">=", &Value::from(" 10 "), &Value::from(10.0)));
    assert!(evaluate("=", &Value::from("5.0"), &Value::from(5i64)));
    assert!(!evaluate("!=", &Value::from("5.0"), &Value::from(5i64)));
}

#[test]
fn test_all_operators_on_numbers() {
    let (three, four) = (Value::from(3.0), Value::from(4.0));
    assert!(evaluate("<", &three, &four));
    assert!(evaluate("<=", &three, &three));
    assert!(evaluate("=", &four, &four));
    assert!(evaluate(">=", &four, &three));
    assert!(evaluate(">", &four, &three));
    assert!(evaluate("!=", &three, &four));
    assert!(!evaluate(">", &three, &four));
}

#[test]
fn test_text_supports_only_equality() {
    assert!(evaluate("!=", &Value::from("a"), &Value::from("b")));
    assert!(evaluate("=", &Value::from("on"), &Value::from("on")));
    assert!(evaluate("=", &Value::from(true), &Value::from("true")));
    assert!(!evaluate("<", &Value::from("a"), &Value::from("b")));
    assert!(!evaluate(">=", &Value::from("b"), &Value::from("a")));
    assert!(!evaluate(">", &Value::from("NaN"), &Value::from(1.0)));
}

#[test]
fn test_unknown_operator_is_false() {
    assert!(!evaluate("bogus", &Value::from(1.0), &Value::from(1.0)));
    assert!(!evaluate("==", &Value::from(1.0), &Value::from(1.0)));
    assert!(!condition("~", 1.0).evaluate(&Value::from(1.0)));
}

#[test]
fn test_operator_symbols_round_trip() {
    for symbol in ["<", "<=", "=", ">=", ">", "!="] {
        assert_eq!(Operator::parse(symbol).unwrap().symbol(), symbol);
    }
    assert_eq!(Operator::parse(" >= "), Some(Operator::GreaterThanOrEqual));
}

#[test]
fn test_check_condition_against_device_state() {
    let mut state = DeviceState::default();
    state.set(7, "temperature", 30.0);

    let hot = check_condition(&condition(">", 25.0), &state);
    assert!(hot.met);
    assert_eq!(hot.condition_id, 10);
    assert_eq!(hot.reason, "temperature (was 30) > 25");

    let cold = check_condition(&condition("<", 25.0), &state);
    assert!(!cold.met);
    assert_eq!(cold.reason, "NOT temperature (was 30) < 25");
}

#[test]
fn test_missing_reading_and_bad_operator_are_not_met() {
    let state = DeviceState::default();
    let missing = check_condition(&condition(">", 25.0), &state);
    assert!(!missing.met);
    assert_eq!(missing.reason, "temperature unavailable");

    let mut state = DeviceState::default();
    state.set(7, "temperature", 30.0);
    let bogus = check_condition(&condition("bogus", 25.0), &state);
    assert!(!bogus.met);
    assert!(bogus.reason.contains("unknown operator 'bogus'"));
}

#[test]
fn test_closures_act_as_state_sources() {
    let source = |device_id: Option<EntityId>, field: &str| -> Option<Value> {
        match (device_id, field) {
            (None, "mode") => Some(Value::from("away")),
            _ => None,
        }
    };
    let mut away = condition("=", "away");
    away.device_id = None;
    away.field = "mode".to_string();

    let outcome = check_condition(&away, &source);
    assert!(outcome.met);
    assert_eq!(outcome.reason, "mode (was \"away\") = \"away\"");
}

#[test]
fn test_device_state_from_json() {
    let state: DeviceState = serde_json::from_str(
        r#"{"devices": {"7": {"temperature": 19.5, "online": true}}, "globals": {"mode": "home"}}"#,
    )
    .unwrap();

    assert_eq!(state.current_value(Some(7), "temperature"), Some(Value::Number(19.5)));
    assert_eq!(state.current_value(Some(7), "online"), Some(Value::Bool(true)));
    assert_eq!(state.current_value(None, "mode"), Some(Value::from("home")));
    assert_eq!(state.current_value(Some(8), "temperature"), None);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Number(42.0).to_string(), "42");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from(serde_json::json!([1, 2])), Value::Text("[1,2]".to_string()));
}

#[test]
fn test_nested_readings_load_as_text() {
    let state: DeviceState = serde_json::from_str(
        r#"{"devices": {"7": {"temperature": 30, "location": {"lat": 1.0}}}}"#,
    )
    .unwrap();
    assert_eq!(state.current_value(Some(7), "temperature"), Some(Value::Number(30.0)));
    assert_eq!(
        state.current_value(Some(7), "location"),
        Some(Value::Text(r#"{"lat":1.0}"#.to_string()))
    );

    let records: RecordSet = serde_json::from_str(
        r#"{"conditions": [{"id": 1, "field": "tags", "operator": "=", "value": ["a"]}]}"#,
    )
    .unwrap();
    assert_eq!(records.conditions[0].value, Value::Text(r#"["a"]"#.to_string()));
}
