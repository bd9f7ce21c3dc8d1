//! Convenient re-exports for downstream crates.

pub use crate::config::StageConfig;
pub use crate::direction::Direction;
pub use crate::error::{Error, Result};
pub use crate::materialize::to_vec;
pub use crate::stream::{IterStream, SortedStream, VecStream};
