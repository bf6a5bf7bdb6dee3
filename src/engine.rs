//! The explicit engine context object.
//!
//! Replaces a hidden module-level singleton: callers construct one engine
//! per document, register templates into it, and pass a graph snapshot
//! into every validation call. Registration is the only mutator
//! (`&mut self`); all validation paths borrow immutably.

use serde::{Deserialize, Serialize};

use crate::batch::{self, BatchReport};
use crate::catalog::NodeTemplateCatalog;
use crate::graph::cycle;
use crate::model::{AcceptedEdge, EdgeCandidate, GraphSnapshot, NodeInstance, NodeTemplate};
use crate::suggest::{self, AutoFix, Suggestion};
use crate::validate::{self, ValidationResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    pub has_cycle: bool,
    pub cycles: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionEngine {
    catalog: NodeTemplateCatalog,
}

impl ConnectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &NodeTemplateCatalog {
        &self.catalog
    }

    /// Register (or replace) a node template. Must not be interleaved with
    /// an in-flight batch validation; the borrow checker enforces this for
    /// single-threaded callers.
    pub fn register_node_template(&mut self, template: NodeTemplate) {
        self.catalog.register(template);
    }

    /// Validate one proposed edge against the current accepted graph.
    pub fn validate_connection(
        &self,
        candidate: &EdgeCandidate,
        snapshot: &GraphSnapshot,
    ) -> ValidationResult {
        validate::validate_connection(candidate, &self.catalog, snapshot)
    }

    /// Validate a whole loaded workflow; reports every edge.
    pub fn validate_workflow_connections(
        &self,
        edges: &[EdgeCandidate],
        snapshot: &GraphSnapshot,
    ) -> BatchReport {
        batch::validate_all(edges, &self.catalog, snapshot)
    }

    /// Rank candidate target ports for a source port.
    pub fn get_suggested_connections(
        &self,
        source_node_id: &str,
        source_port_id: &str,
        candidate_nodes: &[NodeInstance],
        snapshot: &GraphSnapshot,
    ) -> Vec<Suggestion> {
        suggest::suggest_targets(
            source_node_id,
            source_port_id,
            candidate_nodes,
            &self.catalog,
            snapshot,
        )
    }

    /// Attempt to repair a rejected edge candidate.
    pub fn auto_fix_connection(
        &self,
        candidate: &EdgeCandidate,
        snapshot: &GraphSnapshot,
    ) -> AutoFix {
        suggest::auto_fix(candidate, &self.catalog, snapshot)
    }

    /// Enumerate all cycles in the non-feedback edge set.
    pub fn detect_circular_dependencies(
        &self,
        nodes: &[NodeInstance],
        edges: &[AcceptedEdge],
    ) -> CycleReport {
        let cycles = cycle::find_cycles(nodes, edges);
        CycleReport {
            has_cycle: !cycles.is_empty(),
            cycles,
        }
    }
}
