#![forbid(unsafe_code)]
//! sortstream-operators: the merge-join engine and the set operations built on it.
//!
//! Design intent:
//! - Pure and synchronous: every operation is a lazy `SortedStream` that pulls
//!   from its two inputs only when its own consumer pulls.
//! - One generic loop (`join::merge::MergeJoin`); operations differ only in
//!   their `SetPolicy` (what to emit, when to stop early).
//! - O(1) memory: at most one buffered head per input.

pub mod join;
pub mod setops;
pub mod traits;

pub use join::merge::{iterate, MergeJoin};
pub use setops::{diff, intersect, union, Diff, DiffPolicy, Intersect, IntersectPolicy, Union, UnionPolicy};
pub use traits::{FnPolicy, Presence, SetPolicy};
