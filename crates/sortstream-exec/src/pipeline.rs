//! Background pipeline stages.
//!
//! A stage owns one source stream (usually a merge join over two inputs),
//! drives it on a dedicated thread and publishes every value into a fresh
//! handoff stream. The stage ends when:
//! - the source is exhausted or its stop policy fired, or
//! - the consumer dropped the output stream (the next `push` fails).
//!
//! Either way the source, and with it both inputs, is dropped before the
//! output is closed. If an input is itself a stage output, its producer is
//! disconnected and exits instead of blocking forever on `push`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use sortstream_core::config::StageConfig;
use sortstream_core::direction::Direction;
use sortstream_core::error::{Error, Result};
use sortstream_core::stream::SortedStream;
use sortstream_operators::setops::{diff, intersect, union};
use sortstream_operators::traits::SetPolicy;
use sortstream_operators::MergeJoin;

use crate::handoff::{handoff, HandoffSender, HandoffStream};

static NEXT_STAGE_ID: AtomicU64 = AtomicU64::new(0);

/// Spawns pipeline stages with a shared configuration.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    cfg: StageConfig,
}

impl Stage {
    pub fn new(cfg: StageConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &StageConfig {
        &self.cfg
    }

    pub fn union<L, R>(&self, left: L, right: R, direction: Direction) -> Result<HandoffStream<L::Item>>
    where
        L: SortedStream + Send + 'static,
        R: SortedStream<Item = L::Item> + Send + 'static,
        L::Item: Send + 'static,
    {
        self.spawn_join(union(left, right, direction))
    }

    pub fn intersect<L, R>(&self, left: L, right: R, direction: Direction) -> Result<HandoffStream<L::Item>>
    where
        L: SortedStream + Send + 'static,
        R: SortedStream<Item = L::Item> + Send + 'static,
        L::Item: Send + 'static,
    {
        self.spawn_join(intersect(left, right, direction))
    }

    pub fn diff<L, R>(&self, left: L, right: R, direction: Direction) -> Result<HandoffStream<L::Item>>
    where
        L: SortedStream + Send + 'static,
        R: SortedStream<Item = L::Item> + Send + 'static,
        L::Item: Send + 'static,
    {
        self.spawn_join(diff(left, right, direction))
    }

    /// Run any merge join (including custom policies) as a stage.
    pub fn spawn_join<L, R, P>(&self, join: MergeJoin<L, R, P>) -> Result<HandoffStream<L::Item>>
    where
        L: SortedStream + Send + 'static,
        R: SortedStream<Item = L::Item> + Send + 'static,
        P: SetPolicy<L::Item> + Send + 'static,
        L::Item: Send + 'static,
    {
        let op = join.policy().name();
        self.launch(op, join)
    }

    /// Run an arbitrary sorted stream on its own thread, e.g. a slow reader.
    pub fn spawn<S>(&self, source: S) -> Result<HandoffStream<S::Item>>
    where
        S: SortedStream + Send + 'static,
        S::Item: Send + 'static,
    {
        self.launch("source", source)
    }

    fn launch<S>(&self, op: &'static str, source: S) -> Result<HandoffStream<S::Item>>
    where
        S: SortedStream + Send + 'static,
        S::Item: Send + 'static,
    {
        let id = NEXT_STAGE_ID.fetch_add(1, Ordering::Relaxed);
        let name = self.cfg.thread_name(id);
        let (tx, rx) = handoff();

        let mut builder = thread::Builder::new().name(name.clone());
        if let Some(bytes) = self.cfg.stack_size_bytes {
            builder = builder.stack_size(bytes);
        }
        builder
            .spawn(move || {
                run_stage(id, op, source, tx);
            })
            .map_err(|source| Error::Spawn { name, source })?;

        Ok(rx)
    }
}

/// Drives `source` into `tx`; returns how many values were handed over and
/// whether the consumer went away first.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn run_stage<S: SortedStream>(
    id: u64,
    op: &'static str,
    mut source: S,
    tx: HandoffSender<S::Item>,
) -> (u64, bool) {
    #[cfg(feature = "tracing")]
    tracing::debug!(stage = id, op, "stage started");
    let mut emitted = 0u64;
    let mut cancelled = false;

    while let Some(item) = source.pull() {
        if tx.push(item).is_err() {
            #[cfg(feature = "tracing")]
            tracing::trace!(stage = id, op, emitted, "consumer dropped; cancelling stage");
            cancelled = true;
            break;
        }
        emitted += 1;
    }

    // release upstream producers before signalling exhaustion downstream
    drop(source);
    tx.close();
    #[cfg(feature = "tracing")]
    tracing::debug!(stage = id, op, emitted, cancelled, "stage finished");
    (emitted, cancelled)
}

/// `Stage::union` with the default configuration.
pub fn union_stage<L, R>(left: L, right: R, direction: Direction) -> Result<HandoffStream<L::Item>>
where
    L: SortedStream + Send + 'static,
    R: SortedStream<Item = L::Item> + Send + 'static,
    L::Item: Send + 'static,
{
    Stage::default().union(left, right, direction)
}

/// `Stage::intersect` with the default configuration.
pub fn intersect_stage<L, R>(left: L, right: R, direction: Direction) -> Result<HandoffStream<L::Item>>
where
    L: SortedStream + Send + 'static,
    R: SortedStream<Item = L::Item> + Send + 'static,
    L::Item: Send + 'static,
{
    Stage::default().intersect(left, right, direction)
}

/// `Stage::diff` with the default configuration.
pub fn diff_stage<L, R>(left: L, right: R, direction: Direction) -> Result<HandoffStream<L::Item>>
where
    L: SortedStream + Send + 'static,
    R: SortedStream<Item = L::Item> + Send + 'static,
    L::Item: Send + 'static,
{
    Stage::default().diff(left, right, direction)
}
