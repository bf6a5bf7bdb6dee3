//! The caller-supplied view of the canvas: placed nodes, accepted edges,
//! and the transient edge candidate built per connect gesture.
//!
//! The engine never mutates a snapshot; the canvas owns edge lifecycle.

use serde::{Deserialize, Serialize};

use super::types::{ConnectionType, DataType};

/// A node placed on the canvas, resolving an id to its template type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInstance {
    pub id: String,
    pub node_type: String,
}

/// An edge the canvas has already accepted and owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedEdge {
    pub source_node: String,
    pub source_port: String,
    pub target_node: String,
    pub target_port: String,
    pub connection_type: ConnectionType,
}

/// A proposed edge, constructed per validation call and discarded
/// immediately whether accepted or rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCandidate {
    pub source_node: String,
    pub source_port: String,
    pub target_node: String,
    pub target_port: String,
    pub connection_type: ConnectionType,
    pub data_type: DataType,
}

impl EdgeCandidate {
    /// Deterministic edge identifier used for batch diagnostics.
    pub fn edge_id(&self) -> String {
        format!(
            "{}:{}->{}:{}",
            self.source_node, self.source_port, self.target_node, self.target_port
        )
    }

    /// Whether the accepted edge occupies the same endpoints as this
    /// candidate on the same channel.
    pub fn matches(&self, edge: &AcceptedEdge) -> bool {
        self.source_node == edge.source_node
            && self.source_port == edge.source_port
            && self.target_node == edge.target_node
            && self.target_port == edge.target_port
            && self.connection_type == edge.connection_type
    }
}

/// Momentarily-immutable view of the accepted graph, passed by the caller
/// into every validation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeInstance>,
    #[serde(default)]
    pub edges: Vec<AcceptedEdge>,
}

impl GraphSnapshot {
    pub fn node_type_of(&self, node_id: &str) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.id == node_id)
            .map(|n| n.node_type.as_str())
    }

    /// Number of accepted edges arriving at the node, over all its ports.
    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.edges.iter().filter(|e| e.target_node == node_id).count()
    }

    /// Number of accepted edges leaving the node, over all its ports.
    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.edges.iter().filter(|e| e.source_node == node_id).count()
    }

    /// Whether some accepted edge already terminates at this input port.
    pub fn input_occupied(&self, node_id: &str, port_id: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.target_node == node_id && e.target_port == port_id)
    }

    /// A copy of this snapshot with the first edge matching the candidate
    /// removed, so an already-accepted edge does not count against its own
    /// capacity when re-validated in a batch.
    pub fn without(&self, candidate: &EdgeCandidate) -> GraphSnapshot {
        let mut snapshot = self.clone();
        if let Some(pos) = snapshot.edges.iter().position(|e| candidate.matches(e)) {
            snapshot.edges.remove(pos);
        }
        snapshot
    }
}
