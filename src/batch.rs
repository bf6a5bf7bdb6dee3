//! Whole-workflow validation after a bulk import.
//!
//! Unlike the per-gesture path, batch validation never short-circuits:
//! every edge is evaluated and reported so the editor can highlight all
//! broken edges at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::NodeTemplateCatalog;
use crate::model::{EdgeCandidate, GraphSnapshot};
use crate::validate::{validate_connection, ValidationResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// True iff every edge validated true.
    pub valid: bool,
    pub per_edge: BTreeMap<String, ValidationResult>,
    pub summary: BatchSummary,
}

/// Validate an entire edge set. Each edge is checked against the supplied
/// snapshot minus itself, so an already-accepted edge does not count
/// against its own capacity.
pub fn validate_all(
    edges: &[EdgeCandidate],
    catalog: &NodeTemplateCatalog,
    snapshot: &GraphSnapshot,
) -> BatchReport {
    let mut per_edge = BTreeMap::new();
    let mut summary = BatchSummary {
        total: edges.len(),
        ..BatchSummary::default()
    };

    for edge in edges {
        let scoped = snapshot.without(edge);
        let result = validate_connection(edge, catalog, &scoped);

        if result.valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        if result.warning.is_some() {
            summary.warnings += 1;
        }
        per_edge.insert(edge.edge_id(), result);
    }

    BatchReport {
        valid: summary.invalid == 0,
        per_edge,
        summary,
    }
}
