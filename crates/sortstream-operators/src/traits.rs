//! Presence signal + the policy trait every set operation implements.
//!
//! The merge loop reports one `Presence` per step and asks the policy what to
//! emit. After an input runs dry it asks the policy whether continuing can
//! still produce output.

/// Which side(s) hold the value at the current merge step.
///
/// Exactly one case holds per step. `Both` carries the left value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    Left(T),
    Right(T),
    Both(T),
}

impl<T> Presence<T> {
    pub fn value(&self) -> &T {
        match self {
            Presence::Left(v) | Presence::Right(v) | Presence::Both(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Presence::Left(v) | Presence::Right(v) | Presence::Both(v) => v,
        }
    }

    pub fn in_left(&self) -> bool {
        matches!(self, Presence::Left(_) | Presence::Both(_))
    }

    pub fn in_right(&self) -> bool {
        matches!(self, Presence::Right(_) | Presence::Both(_))
    }
}

/// Combine + stop policy of a set operation.
///
/// Invariants:
/// - `combine` is called once per merge step, in stream order.
/// - `should_stop` is consulted exactly when one input reports exhaustion.
///   Returning `true` ends the merge immediately: nothing is drained and any
///   head already pulled from the other side is dropped.
pub trait SetPolicy<T> {
    /// Human-readable operation name (stable).
    fn name(&self) -> &'static str;

    /// Decide what (if anything) to emit for this step.
    fn combine(&mut self, presence: Presence<T>) -> Option<T>;

    /// `true` if no further output is possible given which side ran dry.
    fn should_stop(&self, left_exhausted: bool, right_exhausted: bool) -> bool;
}

/// Policy assembled from closures, for ad hoc operations.
pub struct FnPolicy<C, S> {
    combine: C,
    stop: S,
}

impl<C, S> FnPolicy<C, S> {
    pub fn new(combine: C, stop: S) -> Self {
        Self { combine, stop }
    }
}

impl<T, C, S> SetPolicy<T> for FnPolicy<C, S>
where
    C: FnMut(Presence<T>) -> Option<T>,
    S: Fn(bool, bool) -> bool,
{
    fn name(&self) -> &'static str {
        "custom"
    }

    fn combine(&mut self, presence: Presence<T>) -> Option<T> {
        (self.combine)(presence)
    }

    fn should_stop(&self, left_exhausted: bool, right_exhausted: bool) -> bool {
        (self.stop)(left_exhausted, right_exhausted)
    }
}
