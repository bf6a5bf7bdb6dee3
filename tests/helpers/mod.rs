use wirecheck::engine::ConnectionEngine;
use wirecheck::model::*;

// =============================================================================
// Engine and snapshot builders
// =============================================================================

/// Engine loaded with the shared template catalog fixture.
pub fn engine() -> ConnectionEngine {
    let templates: Vec<NodeTemplate> =
        serde_json::from_str(include_str!("../fixtures/catalog.json"))
            .expect("catalog fixture should parse");
    let mut engine = ConnectionEngine::new();
    for template in templates {
        engine.register_node_template(template);
    }
    engine
}

pub fn node(id: &str, node_type: &str) -> NodeInstance {
    NodeInstance {
        id: id.into(),
        node_type: node_type.into(),
    }
}

pub fn snapshot(nodes: Vec<NodeInstance>, edges: Vec<AcceptedEdge>) -> GraphSnapshot {
    GraphSnapshot { nodes, edges }
}

// =============================================================================
// Edge builders
// =============================================================================

pub fn accepted(
    source_node: &str,
    source_port: &str,
    target_node: &str,
    target_port: &str,
    channel: ConnectionType,
) -> AcceptedEdge {
    AcceptedEdge {
        source_node: source_node.into(),
        source_port: source_port.into(),
        target_node: target_node.into(),
        target_port: target_port.into(),
        connection_type: channel,
    }
}

pub fn candidate(
    source_node: &str,
    source_port: &str,
    target_node: &str,
    target_port: &str,
    channel: ConnectionType,
    data_type: DataType,
) -> EdgeCandidate {
    EdgeCandidate {
        source_node: source_node.into(),
        source_port: source_port.into(),
        target_node: target_node.into(),
        target_port: target_port.into(),
        connection_type: channel,
        data_type,
    }
}
