//! Tests for the editor-facing JSON shape of the template catalog.

use wirecheck::model::{ConnectionType, DataType, NodeTemplate};

fn fixture_templates() -> Vec<NodeTemplate> {
    serde_json::from_str(include_str!("fixtures/catalog.json")).expect("fixture should parse")
}

#[test]
fn catalog_fixture_parses_with_flattened_ports() {
    let templates = fixture_templates();
    assert_eq!(templates.len(), 8);

    let http = templates
        .iter()
        .find(|t| t.id == "httpRequest")
        .expect("httpRequest template");
    let url = http.find_input("url").expect("url input");
    assert_eq!(url.base.data_type, DataType::String);
    assert!(url.base.required);
    assert!(url.auto_convert);
    assert_eq!(url.priority, Some(1));
    assert_eq!(url.base.connection_types, vec![ConnectionType::DataFlow]);

    let response = http.find_output("response").expect("response output");
    assert!(response.is_primary);
    assert!(response.stream_capable);
    assert!(!response.triggers_execution);
}

#[test]
fn omitted_flags_default_to_false() {
    let templates = fixture_templates();
    let parse = templates.iter().find(|t| t.id == "jsonParse").unwrap();
    let input = parse.find_input("input").unwrap();
    assert!(!input.accepts_multiple);

    let vault = templates.iter().find(|t| t.id == "secureVault").unwrap();
    assert!(vault.inputs.is_empty());
    let policy = vault.policy.as_ref().expect("vault policy");
    assert!(policy.forbids("logOutput"));
    assert!(policy.requires("jsonParse"));
    assert_eq!(policy.max_inputs, None);
}

#[test]
fn templates_round_trip_through_json() {
    let templates = fixture_templates();
    let json = serde_json::to_string(&templates).unwrap();
    let reparsed: Vec<NodeTemplate> = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed.len(), templates.len());
    for (a, b) in templates.iter().zip(&reparsed) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.inputs.len(), b.inputs.len());
        assert_eq!(a.outputs.len(), b.outputs.len());
    }
}
