//! Suggestion ranking and auto-fix for rejected edges.

use serde::{Deserialize, Serialize};

use crate::catalog::NodeTemplateCatalog;
use crate::compat::channel::{best_channel, shared_channels};
use crate::error::ErrorKind;
use crate::model::{EdgeCandidate, GraphSnapshot, InputPort, NodeInstance};
use crate::validate::{score, validate_connection};

pub const MAX_SUGGESTIONS: usize = 10;
pub const MIN_SUGGESTION_SCORE: f32 = 0.5;

/// A ranked candidate target for a given source port.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub target_node: String,
    pub target_port: String,
    pub score: f32,
    pub reason: String,
}

/// Outcome of an auto-fix attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFix {
    pub fixed: bool,
    pub candidate: Option<EdgeCandidate>,
    pub changes: Vec<String>,
}

impl AutoFix {
    fn not_fixable() -> Self {
        AutoFix {
            fixed: false,
            candidate: None,
            changes: Vec::new(),
        }
    }
}

/// Rank every input port on the candidate nodes as a target for the given
/// source port. Keeps only valid connections scoring above
/// `MIN_SUGGESTION_SCORE`, sorted descending, truncated to
/// `MAX_SUGGESTIONS`.
pub fn suggest_targets(
    source_node_id: &str,
    source_port_id: &str,
    candidate_nodes: &[NodeInstance],
    catalog: &NodeTemplateCatalog,
    snapshot: &GraphSnapshot,
) -> Vec<Suggestion> {
    // Candidate nodes may not be in the snapshot yet; resolution needs
    // them, so validate against an extended view.
    let mut view = snapshot.clone();
    for node in candidate_nodes {
        if view.node_type_of(&node.id).is_none() {
            view.nodes.push(node.clone());
        }
    }

    let Some(source_type) = view.node_type_of(source_node_id).map(str::to_string) else {
        return Vec::new();
    };
    let Some(source_template) = catalog.lookup(&source_type) else {
        return Vec::new();
    };
    let Some(source_port) = source_template.find_output(source_port_id) else {
        return Vec::new();
    };

    let mut suggestions = Vec::new();
    for node in candidate_nodes {
        if node.id == source_node_id {
            continue;
        }
        let Some(template) = catalog.lookup(&node.node_type) else {
            continue;
        };
        for input in &template.inputs {
            let shared =
                shared_channels(&source_port.base.connection_types, &input.base.connection_types);
            let Some(&channel) = shared.first() else {
                continue;
            };
            let candidate = EdgeCandidate {
                source_node: source_node_id.to_string(),
                source_port: source_port_id.to_string(),
                target_node: node.id.clone(),
                target_port: input.base.id.clone(),
                connection_type: channel,
                data_type: source_port.base.data_type,
            };
            let result = validate_connection(&candidate, catalog, &view);
            if !result.valid || result.compatibility_score <= MIN_SUGGESTION_SCORE {
                continue;
            }

            let mut reasons = score::reasons(source_port, input, &shared);
            if let Some(policy) = &source_template.policy {
                if policy.requires(&node.node_type) {
                    reasons.push("required by node policy".to_string());
                }
            }
            suggestions.push(Suggestion {
                target_node: node.id.clone(),
                target_port: input.base.id.clone(),
                score: result.compatibility_score,
                reason: reasons.join(", "),
            });
        }
    }

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Attempt to repair a rejected candidate. Data-type mismatches are
/// fixable when the target port auto-converts; channel mismatches are
/// fixable by substituting the best shared channel. Anything else is not
/// fixable.
pub fn auto_fix(
    candidate: &EdgeCandidate,
    catalog: &NodeTemplateCatalog,
    snapshot: &GraphSnapshot,
) -> AutoFix {
    let result = validate_connection(candidate, catalog, snapshot);
    if result.valid {
        return AutoFix::not_fixable();
    }

    match result.error {
        Some(ErrorKind::DataTypeMismatch { source_type, target }) => {
            let auto_converts = lookup_input(candidate, catalog, snapshot)
                .is_some_and(|port| port.auto_convert);
            if !auto_converts {
                return AutoFix::not_fixable();
            }
            AutoFix {
                fixed: true,
                candidate: Some(candidate.clone()),
                changes: vec![format!(
                    "apply automatic conversion from {} to {} at input '{}'",
                    source_type, target, candidate.target_port
                )],
            }
        }
        Some(ErrorKind::ConnectionTypeMismatch) => {
            let Some(best) = best_shared_channel(candidate, catalog, snapshot) else {
                return AutoFix::not_fixable();
            };
            let mut fixed = candidate.clone();
            fixed.connection_type = best;
            let revalidated = validate_connection(&fixed, catalog, snapshot);
            if !revalidated.valid {
                return AutoFix::not_fixable();
            }
            AutoFix {
                fixed: true,
                changes: vec![format!(
                    "switched channel from {} to {}",
                    candidate.connection_type, best
                )],
                candidate: Some(fixed),
            }
        }
        _ => AutoFix::not_fixable(),
    }
}

fn lookup_input<'a>(
    candidate: &EdgeCandidate,
    catalog: &'a NodeTemplateCatalog,
    snapshot: &GraphSnapshot,
) -> Option<&'a InputPort> {
    let node_type = snapshot.node_type_of(&candidate.target_node)?;
    catalog.lookup(node_type)?.find_input(&candidate.target_port)
}

fn best_shared_channel(
    candidate: &EdgeCandidate,
    catalog: &NodeTemplateCatalog,
    snapshot: &GraphSnapshot,
) -> Option<crate::model::ConnectionType> {
    let source_type = snapshot.node_type_of(&candidate.source_node)?;
    let source = catalog
        .lookup(source_type)?
        .find_output(&candidate.source_port)?;
    let target = lookup_input(candidate, catalog, snapshot)?;
    best_channel(&source.base.connection_types, &target.base.connection_types)
}
