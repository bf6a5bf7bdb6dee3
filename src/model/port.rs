//! Port definitions on node templates.

use serde::{Deserialize, Serialize};

use super::types::{ConnectionType, DataType};

/// Fields shared by input and output ports.
///
/// `connection_types` must be non-empty for a well-formed template; the
/// validator reports a port with an empty set as an internal error rather
/// than rejecting registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortBase {
    pub id: String,
    pub name: String,
    pub data_type: DataType,
    #[serde(default)]
    pub required: bool,
    pub connection_types: Vec<ConnectionType>,
}

/// An input connection point on a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputPort {
    #[serde(flatten)]
    pub base: PortBase,
    /// When false, a second edge into this port exceeds its capacity.
    #[serde(default)]
    pub accepts_multiple: bool,
    /// Accept lossy conversions into this port's data type.
    #[serde(default)]
    pub auto_convert: bool,
    #[serde(default)]
    pub priority: Option<u32>,
}

/// An output connection point on a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPort {
    #[serde(flatten)]
    pub base: PortBase,
    #[serde(default)]
    pub is_primary: bool,
    /// Only ports that trigger execution may carry a triggerFlow edge.
    #[serde(default)]
    pub triggers_execution: bool,
    #[serde(default)]
    pub stream_capable: bool,
}
