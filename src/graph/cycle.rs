//! Whole-graph cycle detection over the accepted-edge set.

use petgraph::algo::{is_cyclic_directed, tarjan_scc};

use super::ConnectionGraph;
use crate::model::{AcceptedEdge, ConnectionType, EdgeCandidate, GraphSnapshot, NodeInstance};

/// Whether accepting the candidate would close a cycle through
/// non-feedback edges. Feedback candidates bypass the check entirely.
/// Runs in O(V+E) over the snapshot.
pub fn would_create_cycle(snapshot: &GraphSnapshot, candidate: &EdgeCandidate) -> bool {
    if candidate.connection_type == ConnectionType::Feedback {
        return false;
    }
    let mut graph = ConnectionGraph::build(&snapshot.nodes, &snapshot.edges);
    graph.add_candidate(candidate);
    is_cyclic_directed(&graph.graph)
}

/// All cycles in the non-feedback edge set, reported as node-id sequences.
/// Each strongly connected component with more than one node is a cycle;
/// a single-node component counts only when it carries a self-loop.
pub fn find_cycles(nodes: &[NodeInstance], edges: &[AcceptedEdge]) -> Vec<Vec<String>> {
    let graph = ConnectionGraph::build(nodes, edges);
    let mut cycles = Vec::new();

    for component in tarjan_scc(&graph.graph) {
        let is_cycle = component.len() > 1
            || graph.graph.find_edge(component[0], component[0]).is_some();
        if is_cycle {
            cycles.push(
                component
                    .iter()
                    .map(|&idx| graph.graph[idx].clone())
                    .collect(),
            );
        }
    }

    cycles
}
