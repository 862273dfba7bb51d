//! Frame resolution: classify, derive a key, look it up.

use crate::classify::{classify, lookup_key};
use crate::codes::LogicalCode;
use crate::table;

/// Resolve a decoded frame to a logical command.
///
/// Pure function: same bytes in, same code out, no state anywhere. Every
/// non-match - unsupported length, unknown header, frame too short to
/// index, key absent from the tables - collapses to
/// [`LogicalCode::Unknown`]; nothing here panics.
#[must_use]
pub fn resolve(frame: &[u8]) -> LogicalCode {
    match lookup_key(classify(frame), frame) {
        Some(key) => table::lookup(key).unwrap_or(LogicalCode::Unknown),
        None => LogicalCode::Unknown,
    }
}
