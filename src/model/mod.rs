//! Data model shared across the engine: classification enums, ports,
//! templates, and the caller-supplied graph snapshot.

pub mod port;
pub mod snapshot;
pub mod template;
pub mod types;

pub use port::{InputPort, OutputPort, PortBase};
pub use snapshot::{AcceptedEdge, EdgeCandidate, GraphSnapshot, NodeInstance};
pub use template::{ConnectionPolicy, NodeTemplate};
pub use types::{ConnectionType, DataType};
