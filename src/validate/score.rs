//! Compatibility scoring for accepted candidates.
//!
//! The score is a weighted sum in [0,1] used to rank suggestions:
//! data-type fit (0.4 exact / 0.3 wildcard / 0.2 auto-convertible),
//! channel overlap (up to 0.3), primary-to-priority-1 pairing (0.2),
//! and stream-into-multi pairing (0.1).

use crate::compat::data_type::needs_conversion;
use crate::model::{ConnectionType, DataType, EdgeCandidate, InputPort, OutputPort};

use super::checks::Resolved;
use super::ValidationResult;

pub(crate) fn accept(
    candidate: &EdgeCandidate,
    resolved: &Resolved<'_>,
    shared: &[ConnectionType],
) -> ValidationResult {
    let source = resolved.source;
    let target = resolved.target;
    let score = compatibility_score(source, target, shared);

    let mut warnings = Vec::new();
    let mut fixes = Vec::new();

    if needs_conversion(source.base.data_type, target.base.data_type) {
        warnings.push(format!(
            "values are converted from {} to {}",
            source.base.data_type, target.base.data_type
        ));
        if target.auto_convert {
            fixes.push(format!(
                "auto-convert {} to {} at input '{}'",
                source.base.data_type, target.base.data_type, target.base.id
            ));
        }
    }

    if candidate.data_type != source.base.data_type
        && candidate.data_type != DataType::Any
        && source.base.data_type != DataType::Any
    {
        warnings.push(format!(
            "edge declares {} but source port '{}' emits {}",
            candidate.data_type, source.base.id, source.base.data_type
        ));
    }

    // A strictly better channel exists but was not the one chosen.
    if let Some(&best) = shared.first() {
        if best != candidate.connection_type {
            fixes.push(format!("switch to the {} channel", best));
        }
    }

    ValidationResult {
        valid: true,
        error: None,
        warning: if warnings.is_empty() {
            None
        } else {
            Some(warnings.join("; "))
        },
        compatibility_score: score,
        auto_fix_suggestion: if fixes.is_empty() {
            None
        } else {
            Some(fixes.join("; "))
        },
    }
}

fn compatibility_score(source: &OutputPort, target: &InputPort, shared: &[ConnectionType]) -> f32 {
    let mut score = 0.0f32;

    if source.base.data_type == target.base.data_type {
        score += 0.4;
    } else if source.base.data_type == DataType::Any || target.base.data_type == DataType::Any {
        score += 0.3;
    } else if target.auto_convert {
        score += 0.2;
    }

    let denominator = source
        .base
        .connection_types
        .len()
        .max(target.base.connection_types.len())
        .max(1) as f32;
    score += 0.3 * (shared.len() as f32 / denominator);

    if source.is_primary && target.priority == Some(1) {
        score += 0.2;
    }
    if source.stream_capable && target.accepts_multiple {
        score += 0.1;
    }

    score.min(1.0)
}

/// Human-readable scoring components for suggestion reasons; mirrors the
/// weights above.
pub(crate) fn reasons(
    source: &OutputPort,
    target: &InputPort,
    shared: &[ConnectionType],
) -> Vec<String> {
    let mut reasons = Vec::new();

    if source.base.data_type == target.base.data_type {
        reasons.push(format!("exact {} match", source.base.data_type));
    } else if source.base.data_type == DataType::Any || target.base.data_type == DataType::Any {
        reasons.push("wildcard match".to_string());
    } else if target.auto_convert {
        reasons.push(format!(
            "auto-convert {} to {}",
            source.base.data_type, target.base.data_type
        ));
    }

    if !shared.is_empty() {
        reasons.push(format!(
            "{} shared channel{}",
            shared.len(),
            if shared.len() == 1 { "" } else { "s" }
        ));
    }
    if source.is_primary && target.priority == Some(1) {
        reasons.push("primary port pairing".to_string());
    }
    if source.stream_capable && target.accepts_multiple {
        reasons.push("stream into multi-input".to_string());
    }

    reasons
}
