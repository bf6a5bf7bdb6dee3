//! Data-type compatibility: which payload types may flow into which.
//!
//! Compatibility is directional. Every type reaches itself and `Any`,
//! `Any` reaches everything, and a static table permits a handful of
//! lossy conversions (number -> string is legal, string -> number is not).
//! This is the single authoritative table; no other module keeps its own.

use crate::model::DataType;

/// The lossy-conversion adjacency for a source type, excluding the
/// implicit self and `Any` entries.
fn conversions(source: DataType) -> &'static [DataType] {
    use DataType::*;
    match source {
        Number => &[String],
        Boolean => &[String],
        Object => &[String],
        Array => &[String],
        Coordinates => &[Object],
        Region => &[Object],
        Event => &[Object],
        Image => &[File],
        String | File | Trigger | Any => &[],
    }
}

/// Whether a value of `source` may flow into a port of `target`.
pub fn compatible(source: DataType, target: DataType) -> bool {
    if source == target || source == DataType::Any || target == DataType::Any {
        return true;
    }
    conversions(source).contains(&target)
}

/// Whether a compatible pair crosses a lossy-conversion edge rather than
/// matching exactly or through the wildcard.
pub fn needs_conversion(source: DataType, target: DataType) -> bool {
    source != target
        && source != DataType::Any
        && target != DataType::Any
        && conversions(source).contains(&target)
}
