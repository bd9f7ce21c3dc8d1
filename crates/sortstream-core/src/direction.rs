//! Declared sort direction of a pair of input streams.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Order in which the inputs of an operation are sorted.
///
/// The direction is a promise made by the caller; it is never checked against
/// the data. Inputs that violate it produce unspecified output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Maps the classic `asc: bool` flag onto a direction.
    pub fn from_ascending(asc: bool) -> Self {
        if asc {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, Direction::Ascending)
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Compares two heads in stream order.
    ///
    /// `Less` means `a` comes first, i.e. `a` is "behind" and must be emitted
    /// (and advanced) before `b`.
    pub fn compare<T: Ord + ?Sized>(self, a: &T, b: &T) -> Ordering {
        match self {
            Direction::Ascending => a.cmp(b),
            Direction::Descending => b.cmp(a),
        }
    }
}
