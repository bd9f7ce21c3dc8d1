#![forbid(unsafe_code)]
//! sortstream-core: the sorted stream capability and everything that does not
//! need the merge engine.
//!
//! - `SortedStream`: pull-based "next value or exhausted" over a declared order.
//! - `VecStream` / `IterStream`: reference adapters for fixed data and for any
//!   sorted iterator (e.g. a posting-list reader).
//! - `to_vec`: materialization at pipeline boundaries.
//!
//! No threads or channels live here; see `sortstream-exec`.

pub mod config;
pub mod direction;
pub mod error;
pub mod materialize;
pub mod prelude;
pub mod stream;

pub use config::StageConfig;
pub use direction::Direction;
pub use error::{Error, Result};
pub use materialize::to_vec;
pub use stream::{IterStream, Pulled, SortedStream, VecStream};
