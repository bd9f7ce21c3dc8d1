//! Merge join over two sorted streams.
//!
//! Precondition: both inputs are sorted in the declared `Direction`. This is
//! never checked; unsorted input yields unspecified output.
//!
//! The loop keeps at most one buffered head per side:
//! 1. pull a missing left head; if left is dry, ask the policy whether to stop,
//!    otherwise drain right (buffered head first) as `Right`;
//! 2. same for the right side, draining left as `Left`;
//! 3. compare heads: equal -> `Both` and both advance; otherwise the side that
//!    is behind in stream order is reported alone and only it advances.
//!
//! Duplicates inside one input are not collapsed: a repeated value is just
//! another head for the next comparison. Pre-deduplicate inputs if the
//! operation must behave as a set operation.

use std::iter::FusedIterator;

use sortstream_core::direction::Direction;
use sortstream_core::stream::SortedStream;

use crate::traits::{FnPolicy, Presence, SetPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Merge,
    DrainLeft,
    DrainRight,
    Done,
}

/// Lazy merge join: pulls from its inputs only when its own consumer pulls.
#[must_use = "a merge join does nothing until pulled"]
pub struct MergeJoin<L: SortedStream, R, P> {
    left: L,
    right: R,
    direction: Direction,
    policy: P,
    left_head: Option<L::Item>,
    right_head: Option<L::Item>,
    phase: Phase,
}

impl<L, R, P> MergeJoin<L, R, P>
where
    L: SortedStream,
    R: SortedStream<Item = L::Item>,
    P: SetPolicy<L::Item>,
{
    pub fn new(left: L, right: R, direction: Direction, policy: P) -> Self {
        Self {
            left,
            right,
            direction,
            policy,
            left_head: None,
            right_head: None,
            phase: Phase::Merge,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// `true` once the merge returned; no input is pulled after that.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Give the inputs back. Buffered heads are dropped, not returned.
    pub fn into_inputs(self) -> (L, R) {
        (self.left, self.right)
    }

    /// Advance the merge by one step and report what it found.
    fn step(&mut self) -> Option<Presence<L::Item>> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::DrainRight => {
                    let item = self.right_head.take().or_else(|| self.right.pull());
                    if item.is_none() {
                        self.phase = Phase::Done;
                    }
                    return item.map(Presence::Right);
                }
                Phase::DrainLeft => {
                    let item = self.left_head.take().or_else(|| self.left.pull());
                    if item.is_none() {
                        self.phase = Phase::Done;
                    }
                    return item.map(Presence::Left);
                }
                Phase::Merge => {}
            }

            let l = match self.left_head.take().or_else(|| self.left.pull()) {
                Some(item) => item,
                None => {
                    self.phase = self.after_exhausted(true, false);
                    continue;
                }
            };

            let r = match self.right_head.take().or_else(|| self.right.pull()) {
                Some(item) => item,
                None => {
                    self.left_head = Some(l);
                    self.phase = self.after_exhausted(false, true);
                    continue;
                }
            };

            return Some(match self.direction.compare(&l, &r) {
                std::cmp::Ordering::Equal => Presence::Both(l),
                std::cmp::Ordering::Less => {
                    self.right_head = Some(r);
                    Presence::Left(l)
                }
                std::cmp::Ordering::Greater => {
                    self.left_head = Some(l);
                    Presence::Right(r)
                }
            });
        }
    }

    fn after_exhausted(&mut self, left_exhausted: bool, right_exhausted: bool) -> Phase {
        if self.policy.should_stop(left_exhausted, right_exhausted) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                op = self.policy.name(),
                left_exhausted,
                abandoned_head = self.left_head.is_some() || self.right_head.is_some(),
                "merge stopped early"
            );
            self.left_head = None;
            self.right_head = None;
            return Phase::Done;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(op = self.policy.name(), left_exhausted, "merge draining remaining side");
        if left_exhausted {
            Phase::DrainRight
        } else {
            Phase::DrainLeft
        }
    }
}

impl<L, R, P> SortedStream for MergeJoin<L, R, P>
where
    L: SortedStream,
    R: SortedStream<Item = L::Item>,
    P: SetPolicy<L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Option<L::Item> {
        while let Some(presence) = self.step() {
            if let Some(item) = self.policy.combine(presence) {
                return Some(item);
            }
        }
        None
    }
}

impl<L, R, P> Iterator for MergeJoin<L, R, P>
where
    L: SortedStream,
    R: SortedStream<Item = L::Item>,
    P: SetPolicy<L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<L::Item> {
        self.pull()
    }
}

impl<L, R, P> FusedIterator for MergeJoin<L, R, P>
where
    L: SortedStream,
    R: SortedStream<Item = L::Item>,
    P: SetPolicy<L::Item>,
{
}

/// Callback-driven merge: runs the whole loop, calling `combine` on every step
/// and `stop` whenever an input is exhausted.
pub fn iterate<L, R, C, S>(left: L, right: R, direction: Direction, mut combine: C, stop: S)
where
    L: SortedStream,
    R: SortedStream<Item = L::Item>,
    C: FnMut(Presence<L::Item>),
    S: Fn(bool, bool) -> bool,
{
    let policy = FnPolicy::new(
        |presence: Presence<L::Item>| -> Option<L::Item> {
            combine(presence);
            None
        },
        stop,
    );
    let mut join = MergeJoin::new(left, right, direction, policy);
    // combine never emits, so pulling runs the merge to completion
    while join.pull().is_some() {}
}
