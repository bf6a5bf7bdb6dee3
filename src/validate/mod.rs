//! Connection validation: the per-gesture decision pipeline.
//!
//! `validate_connection` runs an ordered sequence of gates; the first
//! failing gate returns immediately with its error. Edges that pass every
//! gate are scored for suggestion ranking.

pub mod checks;
pub mod score;

use serde::{Deserialize, Serialize};

use crate::catalog::NodeTemplateCatalog;
use crate::compat::channel::shared_channels;
use crate::error::ErrorKind;
use crate::graph::cycle::would_create_cycle;
use crate::model::{EdgeCandidate, GraphSnapshot};

/// Outcome of validating one edge candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<ErrorKind>,
    pub warning: Option<String>,
    pub compatibility_score: f32,
    pub auto_fix_suggestion: Option<String>,
}

impl ValidationResult {
    pub fn rejected(error: ErrorKind) -> Self {
        ValidationResult {
            valid: false,
            error: Some(error),
            warning: None,
            compatibility_score: 0.0,
            auto_fix_suggestion: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_fix(mut self, suggestion: impl Into<String>) -> Self {
        self.auto_fix_suggestion = Some(suggestion.into());
        self
    }
}

/// Validate a proposed edge against the catalog and the current accepted
/// graph. Synchronous and pure; the snapshot is read, never mutated.
pub fn validate_connection(
    candidate: &EdgeCandidate,
    catalog: &NodeTemplateCatalog,
    snapshot: &GraphSnapshot,
) -> ValidationResult {
    if candidate.source_node == candidate.target_node {
        return ValidationResult::rejected(ErrorKind::SelfConnection {
            node_id: candidate.source_node.clone(),
        });
    }

    let resolved = match checks::resolve(candidate, catalog, snapshot) {
        Ok(r) => r,
        Err(error) => return ValidationResult::rejected(error),
    };

    if let Some(rejection) = checks::check_data_types(&resolved) {
        return rejection;
    }

    let shared = shared_channels(
        &resolved.source.base.connection_types,
        &resolved.target.base.connection_types,
    );
    if let Some(rejection) = checks::check_channels(candidate, &shared) {
        return rejection;
    }

    if let Some(rejection) = checks::check_policy(candidate, &resolved, snapshot) {
        return rejection;
    }

    if let Some(rejection) = checks::check_trigger(candidate, &resolved) {
        return rejection;
    }

    if would_create_cycle(snapshot, candidate) {
        return ValidationResult::rejected(ErrorKind::CycleDetected);
    }

    score::accept(candidate, &resolved, &shared)
}
