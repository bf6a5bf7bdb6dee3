//! Static compatibility knowledge: the data-type adjacency table and the
//! channel priority set.

pub mod channel;
pub mod data_type;

pub use channel::{best_channel, shared_channels};
pub use data_type::{compatible, needs_conversion};
