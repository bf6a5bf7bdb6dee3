//! Individual validation gates, in pipeline order.

use crate::catalog::NodeTemplateCatalog;
use crate::compat::data_type::compatible;
use crate::error::ErrorKind;
use crate::model::{
    ConnectionType, EdgeCandidate, GraphSnapshot, InputPort, NodeTemplate, OutputPort,
};

use super::ValidationResult;

/// Both endpoints resolved through the snapshot and catalog.
pub(crate) struct Resolved<'a> {
    pub source_template: &'a NodeTemplate,
    pub target_template: &'a NodeTemplate,
    pub source: &'a OutputPort,
    pub target: &'a InputPort,
}

pub(crate) fn resolve<'a>(
    candidate: &EdgeCandidate,
    catalog: &'a NodeTemplateCatalog,
    snapshot: &GraphSnapshot,
) -> Result<Resolved<'a>, ErrorKind> {
    let source_template = resolve_template(&candidate.source_node, catalog, snapshot)?;
    let target_template = resolve_template(&candidate.target_node, catalog, snapshot)?;

    let source = source_template
        .find_output(&candidate.source_port)
        .ok_or_else(|| ErrorKind::PortNotFound {
            node_id: candidate.source_node.clone(),
            port_id: candidate.source_port.clone(),
        })?;
    let target = target_template
        .find_input(&candidate.target_port)
        .ok_or_else(|| ErrorKind::PortNotFound {
            node_id: candidate.target_node.clone(),
            port_id: candidate.target_port.clone(),
        })?;

    for (template, port_channels) in [
        (source_template, &source.base.connection_types),
        (target_template, &target.base.connection_types),
    ] {
        if port_channels.is_empty() {
            return Err(ErrorKind::Internal {
                detail: format!(
                    "template '{}' declares a port with an empty connection type set",
                    template.id
                ),
            });
        }
    }

    Ok(Resolved {
        source_template,
        target_template,
        source,
        target,
    })
}

fn resolve_template<'a>(
    node_id: &str,
    catalog: &'a NodeTemplateCatalog,
    snapshot: &GraphSnapshot,
) -> Result<&'a NodeTemplate, ErrorKind> {
    let node_type = snapshot
        .node_type_of(node_id)
        .ok_or_else(|| ErrorKind::TemplateNotFound {
            node_id: node_id.to_string(),
        })?;
    let template = catalog
        .lookup(node_type)
        .ok_or_else(|| ErrorKind::TemplateNotFound {
            node_id: node_id.to_string(),
        })?;
    if !template.has_ports() {
        return Err(ErrorKind::Internal {
            detail: format!("template '{}' was registered with zero ports", template.id),
        });
    }
    Ok(template)
}

pub(crate) fn check_data_types(resolved: &Resolved<'_>) -> Option<ValidationResult> {
    let source = resolved.source.base.data_type;
    let target = resolved.target.base.data_type;
    if compatible(source, target) {
        return None;
    }

    let mut rejection = ValidationResult::rejected(ErrorKind::DataTypeMismatch {
        source_type: source,
        target,
    });
    if resolved.target.auto_convert {
        rejection = rejection.with_fix(format!(
            "apply automatic conversion from {} to {} at input '{}'",
            source, target, resolved.target.base.id
        ));
    }
    Some(rejection)
}

pub(crate) fn check_channels(
    candidate: &EdgeCandidate,
    shared: &[ConnectionType],
) -> Option<ValidationResult> {
    let Some(&best) = shared.first() else {
        return Some(ValidationResult::rejected(ErrorKind::ConnectionTypeMismatch));
    };
    if shared.contains(&candidate.connection_type) {
        return None;
    }
    // The ports share channels but the candidate picked outside the
    // intersection; fixable by switching to the best shared channel.
    Some(
        ValidationResult::rejected(ErrorKind::ConnectionTypeMismatch)
            .with_fix(format!("switch to the {} channel", best)),
    )
}

pub(crate) fn check_policy(
    candidate: &EdgeCandidate,
    resolved: &Resolved<'_>,
    snapshot: &GraphSnapshot,
) -> Option<ValidationResult> {
    let source_type = &resolved.source_template.id;
    let target_type = &resolved.target_template.id;

    if let Some(policy) = &resolved.source_template.policy {
        if policy.forbids(target_type) {
            return Some(ValidationResult::rejected(ErrorKind::ForbiddenByRule {
                node_type: source_type.clone(),
                forbidden_type: target_type.clone(),
            }));
        }
    }
    if let Some(policy) = &resolved.target_template.policy {
        if policy.forbids(source_type) {
            return Some(ValidationResult::rejected(ErrorKind::ForbiddenByRule {
                node_type: target_type.clone(),
                forbidden_type: source_type.clone(),
            }));
        }
    }

    // Capacity, resolved against the snapshot's existing edge counts.
    if !resolved.target.accepts_multiple
        && snapshot.input_occupied(&candidate.target_node, &candidate.target_port)
    {
        return Some(ValidationResult::rejected(ErrorKind::CapacityExceeded {
            node_id: candidate.target_node.clone(),
            limit: 1,
        }));
    }
    if let Some(max_inputs) = resolved.target_template.policy.as_ref().and_then(|p| p.max_inputs) {
        if snapshot.incoming_count(&candidate.target_node) >= max_inputs {
            return Some(ValidationResult::rejected(ErrorKind::CapacityExceeded {
                node_id: candidate.target_node.clone(),
                limit: max_inputs,
            }));
        }
    }
    if let Some(max_outputs) = resolved.source_template.policy.as_ref().and_then(|p| p.max_outputs)
    {
        if snapshot.outgoing_count(&candidate.source_node) >= max_outputs {
            return Some(ValidationResult::rejected(ErrorKind::CapacityExceeded {
                node_id: candidate.source_node.clone(),
                limit: max_outputs,
            }));
        }
    }

    None
}

pub(crate) fn check_trigger(
    candidate: &EdgeCandidate,
    resolved: &Resolved<'_>,
) -> Option<ValidationResult> {
    if candidate.connection_type != ConnectionType::TriggerFlow
        || resolved.source.triggers_execution
    {
        return None;
    }
    Some(
        ValidationResult::rejected(ErrorKind::TriggerNotSupported {
            port_id: candidate.source_port.clone(),
        })
        .with_warning(format!(
            "output '{}' does not trigger execution; use the {} channel instead",
            candidate.source_port,
            ConnectionType::DataFlow
        ))
        .with_fix(format!("switch to the {} channel", ConnectionType::DataFlow)),
    )
}
