//! Materialization at pipeline boundaries.

use crate::stream::SortedStream;

/// Drains `stream` and returns the values in emitted order.
///
/// Pass `&mut stream` to drain a stream you still want to own afterwards.
pub fn to_vec<S: SortedStream>(mut stream: S) -> Vec<S::Item> {
    let mut out = Vec::new();
    while let Some(item) = stream.pull() {
        out.push(item);
    }
    out
}
