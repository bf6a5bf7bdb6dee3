//! Payload and channel classification enums.
//!
//! These types are the serde target for the editor's workflow JSON.
//! SYNC NOTE: Keep variant names aligned with the frontend port model;
//! serde renames everything to camelCase on the wire.

use serde::{Deserialize, Serialize};

/// The payload type carried by a connection. `Any` is a universal
/// wildcard on both sides of a compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Image,
    File,
    Trigger,
    Coordinates,
    Region,
    Event,
    Any,
}

impl DataType {
    /// All variants, for exhaustive property checks.
    pub const ALL: [DataType; 12] = [
        DataType::String,
        DataType::Number,
        DataType::Boolean,
        DataType::Object,
        DataType::Array,
        DataType::Image,
        DataType::File,
        DataType::Trigger,
        DataType::Coordinates,
        DataType::Region,
        DataType::Event,
        DataType::Any,
    ];
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Object => "object",
            DataType::Array => "array",
            DataType::Image => "image",
            DataType::File => "file",
            DataType::Trigger => "trigger",
            DataType::Coordinates => "coordinates",
            DataType::Region => "region",
            DataType::Event => "event",
            DataType::Any => "any",
        };
        write!(f, "{}", name)
    }
}

/// The categorical kind of flow an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionType {
    DataFlow,
    TriggerFlow,
    EventFlow,
    Sequential,
    Conditional,
    Parallel,
    Stream,
    Feedback,
    ErrorHandling,
}

impl ConnectionType {
    /// Position in the fixed channel priority order. Lower wins all
    /// tie-breaks, so repeated calls over the same port sets always pick
    /// the same channel.
    pub fn priority(self) -> usize {
        match self {
            ConnectionType::TriggerFlow => 0,
            ConnectionType::DataFlow => 1,
            ConnectionType::Sequential => 2,
            ConnectionType::EventFlow => 3,
            ConnectionType::Conditional => 4,
            ConnectionType::Parallel => 5,
            ConnectionType::Stream => 6,
            ConnectionType::Feedback => 7,
            ConnectionType::ErrorHandling => 8,
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConnectionType::DataFlow => "dataFlow",
            ConnectionType::TriggerFlow => "triggerFlow",
            ConnectionType::EventFlow => "eventFlow",
            ConnectionType::Sequential => "sequential",
            ConnectionType::Conditional => "conditional",
            ConnectionType::Parallel => "parallel",
            ConnectionType::Stream => "stream",
            ConnectionType::Feedback => "feedback",
            ConnectionType::ErrorHandling => "errorHandling",
        };
        write!(f, "{}", name)
    }
}
