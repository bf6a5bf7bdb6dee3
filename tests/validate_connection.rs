//! Integration tests for the per-edge validation pipeline.

mod helpers;

use helpers::*;
use wirecheck::error::ErrorKind;
use wirecheck::model::{ConnectionType, DataType};

#[test]
fn exact_string_match_scores_high() {
    let engine = engine();
    let view = snapshot(
        vec![node("vault", "secureVault"), node("parse", "jsonParse")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "vault",
            "secret",
            "parse",
            "input",
            ConnectionType::DataFlow,
            DataType::String,
        ),
        &view,
    );
    assert!(result.valid, "expected valid, got: {:?}", result.error);
    assert!(result.compatibility_score >= 0.7);
    assert!(result.compatibility_score <= 1.0);
    assert!(result.error.is_none());
}

#[test]
fn lossy_conversion_warns_and_suggests_fix() {
    let engine = engine();
    let view = snapshot(
        vec![node("count", "counter"), node("parse", "jsonParse")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "count",
            "count",
            "parse",
            "input",
            ConnectionType::DataFlow,
            DataType::Number,
        ),
        &view,
    );
    assert!(result.valid, "number -> string is convertible: {:?}", result.error);
    let warning = result.warning.expect("conversion should warn");
    assert!(warning.contains("number"), "warning was: {}", warning);
    assert!(warning.contains("string"), "warning was: {}", warning);
    assert!(result.auto_fix_suggestion.is_some());
}

#[test]
fn self_connection_is_always_rejected() {
    let engine = engine();
    let view = snapshot(vec![node("r1", "relay")], vec![]);
    let result = engine.validate_connection(
        &candidate("r1", "pass", "r1", "in", ConnectionType::DataFlow, DataType::Any),
        &view,
    );
    assert!(!result.valid);
    assert_eq!(
        result.error,
        Some(ErrorKind::SelfConnection { node_id: "r1".into() })
    );
}

#[test]
fn unknown_node_is_template_not_found() {
    let engine = engine();
    let view = snapshot(vec![node("parse", "jsonParse")], vec![]);
    let result = engine.validate_connection(
        &candidate(
            "ghost",
            "out",
            "parse",
            "input",
            ConnectionType::DataFlow,
            DataType::String,
        ),
        &view,
    );
    assert_eq!(
        result.error,
        Some(ErrorKind::TemplateNotFound { node_id: "ghost".into() })
    );
}

#[test]
fn unknown_port_is_port_not_found() {
    let engine = engine();
    let view = snapshot(
        vec![node("vault", "secureVault"), node("parse", "jsonParse")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "vault",
            "secret",
            "parse",
            "nope",
            ConnectionType::DataFlow,
            DataType::String,
        ),
        &view,
    );
    assert_eq!(
        result.error,
        Some(ErrorKind::PortNotFound {
            node_id: "parse".into(),
            port_id: "nope".into()
        })
    );
}

#[test]
fn incompatible_types_are_rejected_with_convert_fix() {
    let engine = engine();
    let view = snapshot(
        vec![node("cron", "cronTrigger"), node("parse", "jsonParse")],
        vec![],
    );
    // trigger -> string has no conversion edge; the input auto-converts,
    // so the rejection carries a fix suggestion.
    let result = engine.validate_connection(
        &candidate(
            "cron",
            "fire",
            "parse",
            "input",
            ConnectionType::DataFlow,
            DataType::Trigger,
        ),
        &view,
    );
    assert!(!result.valid);
    assert_eq!(
        result.error,
        Some(ErrorKind::DataTypeMismatch {
            source_type: DataType::Trigger,
            target: DataType::String
        })
    );
    assert!(result.auto_fix_suggestion.is_some());
}

#[test]
fn disjoint_channels_are_rejected() {
    let engine = engine();
    let view = snapshot(
        vec![node("http", "httpRequest"), node("parse", "jsonParse")],
        vec![],
    );
    // error port only speaks errorHandling; the parse input only dataFlow.
    let result = engine.validate_connection(
        &candidate(
            "http",
            "error",
            "parse",
            "input",
            ConnectionType::ErrorHandling,
            DataType::String,
        ),
        &view,
    );
    assert!(!result.valid);
    assert_eq!(result.error, Some(ErrorKind::ConnectionTypeMismatch));
    assert!(result.auto_fix_suggestion.is_none());
}

#[test]
fn channel_outside_intersection_is_fixable() {
    let engine = engine();
    let view = snapshot(
        vec![node("vault", "secureVault"), node("parse", "jsonParse")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "vault",
            "secret",
            "parse",
            "input",
            ConnectionType::Stream,
            DataType::String,
        ),
        &view,
    );
    assert!(!result.valid);
    assert_eq!(result.error, Some(ErrorKind::ConnectionTypeMismatch));
    let fix = result.auto_fix_suggestion.expect("should suggest a channel");
    assert!(fix.contains("dataFlow"), "fix was: {}", fix);
}

#[test]
fn policy_forbids_connection_in_either_direction() {
    let engine = engine();
    let view = snapshot(
        vec![node("vault", "secureVault"), node("log", "logOutput")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "vault",
            "secret",
            "log",
            "message",
            ConnectionType::DataFlow,
            DataType::String,
        ),
        &view,
    );
    assert!(!result.valid);
    assert_eq!(
        result.error,
        Some(ErrorKind::ForbiddenByRule {
            node_type: "secureVault".into(),
            forbidden_type: "logOutput".into()
        })
    );
}

#[test]
fn occupied_single_input_exceeds_capacity() {
    let engine = engine();
    let view = snapshot(
        vec![
            node("count", "counter"),
            node("vault", "secureVault"),
            node("parse", "jsonParse"),
        ],
        vec![accepted(
            "count",
            "count",
            "parse",
            "input",
            ConnectionType::DataFlow,
        )],
    );
    let result = engine.validate_connection(
        &candidate(
            "vault",
            "secret",
            "parse",
            "input",
            ConnectionType::DataFlow,
            DataType::String,
        ),
        &view,
    );
    assert!(!result.valid);
    assert_eq!(
        result.error,
        Some(ErrorKind::CapacityExceeded {
            node_id: "parse".into(),
            limit: 1
        })
    );
}

#[test]
fn policy_max_inputs_is_enforced() {
    let engine = engine();
    let view = snapshot(
        vec![
            node("r1", "relay"),
            node("r2", "relay"),
            node("vault", "secureVault"),
            node("g", "gate"),
        ],
        vec![
            accepted("r1", "pass", "g", "in", ConnectionType::DataFlow),
            accepted("r2", "pass", "g", "in", ConnectionType::DataFlow),
        ],
    );
    let result = engine.validate_connection(
        &candidate(
            "vault",
            "secret",
            "g",
            "in",
            ConnectionType::DataFlow,
            DataType::String,
        ),
        &view,
    );
    assert_eq!(
        result.error,
        Some(ErrorKind::CapacityExceeded {
            node_id: "g".into(),
            limit: 2
        })
    );
}

#[test]
fn policy_max_outputs_is_enforced() {
    let engine = engine();
    let view = snapshot(
        vec![
            node("count", "counter"),
            node("log", "logOutput"),
            node("parse", "jsonParse"),
        ],
        vec![accepted(
            "count",
            "count",
            "log",
            "message",
            ConnectionType::DataFlow,
        )],
    );
    let result = engine.validate_connection(
        &candidate(
            "count",
            "count",
            "parse",
            "input",
            ConnectionType::DataFlow,
            DataType::Number,
        ),
        &view,
    );
    assert_eq!(
        result.error,
        Some(ErrorKind::CapacityExceeded {
            node_id: "count".into(),
            limit: 1
        })
    );
}

#[test]
fn trigger_flow_requires_a_triggering_source() {
    let engine = engine();
    let view = snapshot(
        vec![node("r1", "relay"), node("http", "httpRequest")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "r1",
            "pass",
            "http",
            "trigger",
            ConnectionType::TriggerFlow,
            DataType::Any,
        ),
        &view,
    );
    assert!(!result.valid);
    assert_eq!(
        result.error,
        Some(ErrorKind::TriggerNotSupported { port_id: "pass".into() })
    );
    let warning = result.warning.expect("should suggest dataFlow");
    assert!(warning.contains("dataFlow"), "warning was: {}", warning);
}

#[test]
fn triggering_source_may_carry_trigger_flow() {
    let engine = engine();
    let view = snapshot(
        vec![node("cron", "cronTrigger"), node("http", "httpRequest")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "cron",
            "fire",
            "http",
            "trigger",
            ConnectionType::TriggerFlow,
            DataType::Trigger,
        ),
        &view,
    );
    assert!(result.valid, "expected valid, got: {:?}", result.error);
    assert!(result.compatibility_score > 0.5);
}

#[test]
fn stream_into_multi_input_collects_bonuses() {
    let engine = engine();
    let view = snapshot(
        vec![node("http", "httpRequest"), node("log", "logOutput")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "http",
            "response",
            "log",
            "message",
            ConnectionType::DataFlow,
            DataType::Object,
        ),
        &view,
    );
    assert!(result.valid, "expected valid, got: {:?}", result.error);
    // wildcard match (0.3) + one shared of two channels (0.15) + stream
    // into multi-input (0.1)
    assert!((result.compatibility_score - 0.55).abs() < 1e-5);
}

#[test]
fn declared_payload_mismatch_degrades_to_warning() {
    let engine = engine();
    let view = snapshot(
        vec![node("vault", "secureVault"), node("parse", "jsonParse")],
        vec![],
    );
    let result = engine.validate_connection(
        &candidate(
            "vault",
            "secret",
            "parse",
            "input",
            ConnectionType::DataFlow,
            DataType::Number,
        ),
        &view,
    );
    assert!(result.valid);
    let warning = result.warning.expect("declared type mismatch should warn");
    assert!(warning.contains("emits"), "warning was: {}", warning);
}
