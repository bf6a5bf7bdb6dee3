//! Node templates and per-node connection policy.

use serde::{Deserialize, Serialize};

use super::port::{InputPort, OutputPort};

/// Per-node connection rules, scoped to the node type that declares them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPolicy {
    #[serde(default)]
    pub max_inputs: Option<usize>,
    #[serde(default)]
    pub max_outputs: Option<usize>,
    /// Node types this node expects to be connected with.
    #[serde(default)]
    pub required_connections: Vec<String>,
    /// Node types this node must never connect to, in either direction.
    #[serde(default)]
    pub forbidden_connections: Vec<String>,
}

impl ConnectionPolicy {
    pub fn forbids(&self, node_type: &str) -> bool {
        self.forbidden_connections.iter().any(|t| t == node_type)
    }

    pub fn requires(&self, node_type: &str) -> bool {
        self.required_connections.iter().any(|t| t == node_type)
    }
}

/// The immutable schema of a node type: its ports and connection policy.
/// Registered once at editor start (or on custom-node registration) and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTemplate {
    /// Node-type identifier, e.g. `httpRequest`.
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub inputs: Vec<InputPort>,
    #[serde(default)]
    pub outputs: Vec<OutputPort>,
    #[serde(default)]
    pub policy: Option<ConnectionPolicy>,
}

impl NodeTemplate {
    pub fn find_input(&self, port_id: &str) -> Option<&InputPort> {
        self.inputs.iter().find(|p| p.base.id == port_id)
    }

    pub fn find_output(&self, port_id: &str) -> Option<&OutputPort> {
        self.outputs.iter().find(|p| p.base.id == port_id)
    }

    pub fn has_ports(&self) -> bool {
        !self.inputs.is_empty() || !self.outputs.is_empty()
    }
}
