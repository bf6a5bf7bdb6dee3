//! petgraph-based directed graph wrapper over the accepted-edge snapshot.

pub mod cycle;

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::{AcceptedEdge, ConnectionType, EdgeCandidate, NodeInstance};

/// Directed node-id graph built from accepted edges. Feedback edges are
/// excluded by construction: they declare intentional loops and are exempt
/// from the acyclicity invariant.
pub struct ConnectionGraph {
    pub graph: DiGraph<String, ConnectionType>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl ConnectionGraph {
    pub fn build(nodes: &[NodeInstance], edges: &[AcceptedEdge]) -> Self {
        let mut graph = ConnectionGraph {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        };

        for node in nodes {
            graph.index_for(&node.id);
        }

        // Edge endpoints not listed in `nodes` still become graph nodes;
        // the snapshot already accepted these edges.
        for edge in edges {
            if edge.connection_type == ConnectionType::Feedback {
                continue;
            }
            let source = graph.index_for(&edge.source_node);
            let target = graph.index_for(&edge.target_node);
            graph.graph.add_edge(source, target, edge.connection_type);
        }

        graph
    }

    /// Add the proposed edge on top of the accepted set.
    pub fn add_candidate(&mut self, candidate: &EdgeCandidate) {
        let source = self.index_for(&candidate.source_node);
        let target = self.index_for(&candidate.target_node);
        self.graph
            .add_edge(source, target, candidate.connection_type);
    }

    fn index_for(&mut self, node_id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(node_id) {
            return idx;
        }
        let idx = self.graph.add_node(node_id.to_string());
        self.node_indices.insert(node_id.to_string(), idx);
        idx
    }
}
