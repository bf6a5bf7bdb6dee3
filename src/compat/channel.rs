//! Connection-channel intersection and tie-breaking.

use crate::model::ConnectionType;

/// Channels available on both ports, sorted by the fixed priority order
/// and deduplicated. Deterministic for repeated calls on the same inputs.
pub fn shared_channels(
    source: &[ConnectionType],
    target: &[ConnectionType],
) -> Vec<ConnectionType> {
    let mut shared: Vec<ConnectionType> = source
        .iter()
        .copied()
        .filter(|c| target.contains(c))
        .collect();
    shared.sort_by_key(|c| c.priority());
    shared.dedup();
    shared
}

/// The highest-priority channel both ports support, if any.
pub fn best_channel(
    source: &[ConnectionType],
    target: &[ConnectionType],
) -> Option<ConnectionType> {
    shared_channels(source, target).first().copied()
}
