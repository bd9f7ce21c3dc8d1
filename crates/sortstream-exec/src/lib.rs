#![forbid(unsafe_code)]
//! sortstream-exec: run set operations as background pipeline stages.
//!
//! Each stage runs one merge join on its own thread and publishes into a
//! single-slot handoff stream, so a downstream stage can never run more than
//! one value ahead of its upstream. Stages own their inputs: when a stage
//! stops (early or not) or its consumer goes away, the inputs are dropped and
//! any upstream stage blocked on `push` is released.

pub mod handoff;
pub mod pipeline;

pub use handoff::{handoff, HandoffSender, HandoffStream};
pub use pipeline::{diff_stage, intersect_stage, union_stage, Stage};
