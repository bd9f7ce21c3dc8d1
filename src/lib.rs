#![forbid(unsafe_code)]
//! sortstream: set operations over sorted streams, evaluated lazily.
//!
//! Built for query evaluation over inverted indexes, where posting lists are
//! already sorted and `A AND B`, `A OR B`, `A AND NOT B` must be combined
//! without loading whole lists into memory.
//!
//! ```
//! use sortstream::prelude::*;
//!
//! let a = VecStream::new(vec![1, 2, 3]);
//! let b = VecStream::new(vec![2, 3]);
//! let c = VecStream::new(vec![3]);
//!
//! // (A AND B) AND NOT C
//! let hits = diff(intersect(a, b, Direction::Ascending), c, Direction::Ascending);
//! assert_eq!(to_vec(hits), vec![2]);
//! ```
//!
//! Inputs must be sorted in the declared direction; this is never checked.
//! Use `sortstream::exec` to run stages on background threads.

pub use sortstream_core as stream;
pub use sortstream_exec as exec;
pub use sortstream_operators as operators;

pub mod prelude {
    pub use sortstream_core::prelude::*;
    pub use sortstream_exec::{diff_stage, handoff, intersect_stage, union_stage, HandoffStream, Stage};
    pub use sortstream_operators::{diff, intersect, iterate, union, Presence, SetPolicy};
}
