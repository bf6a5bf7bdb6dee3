//! Validation error taxonomy.
//!
//! Errors are values carried inside `ValidationResult`; nothing here is
//! ever thrown across the module boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::DataType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ErrorKind {
    #[error("cannot resolve a node template for node '{node_id}'")]
    TemplateNotFound { node_id: String },

    #[error("port '{port_id}' not found on node '{node_id}'")]
    PortNotFound { node_id: String, port_id: String },

    #[error("node '{node_id}' cannot connect to itself")]
    SelfConnection { node_id: String },

    /// The field cannot be called `source`: thiserror reserves that name
    /// for the error-source chain.
    #[error("data type {source_type} cannot flow into {target}")]
    DataTypeMismatch {
        #[serde(rename = "source")]
        source_type: DataType,
        target: DataType,
    },

    #[error("no usable connection channel for this edge")]
    ConnectionTypeMismatch,

    #[error("connection policy on '{node_type}' forbids connecting to '{forbidden_type}'")]
    ForbiddenByRule {
        node_type: String,
        forbidden_type: String,
    },

    #[error("node '{node_id}' is at its connection limit ({limit})")]
    CapacityExceeded { node_id: String, limit: usize },

    #[error("connection would create a cycle in the workflow graph")]
    CycleDetected,

    #[error("output port '{port_id}' does not trigger execution")]
    TriggerNotSupported { port_id: String },

    /// Programmer-error conditions that should never occur in correct
    /// usage, e.g. a registered template with zero ports. Carries a
    /// diagnostic string but never alters control flow via unwinding.
    #[error("internal validation error: {detail}")]
    Internal { detail: String },
}
