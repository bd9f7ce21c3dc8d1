//! Union, intersection and difference as lazy streams.
//!
//! | op        | emits on        | stops early when   |
//! |-----------|-----------------|--------------------|
//! | union     | both/left/right | never              |
//! | intersect | both            | either side is dry |
//! | diff      | left only       | left side is dry   |
//!
//! Early stop leaves the other input wherever the merge left it: a head that
//! was already pulled from it is dropped, not handed back. Lend inputs with
//! `&mut` to drain their remainder afterwards.

use sortstream_core::direction::Direction;
use sortstream_core::stream::SortedStream;

use crate::join::merge::MergeJoin;
use crate::traits::{Presence, SetPolicy};

#[derive(Debug, Default, Clone, Copy)]
pub struct UnionPolicy;

impl<T> SetPolicy<T> for UnionPolicy {
    fn name(&self) -> &'static str {
        "union"
    }

    fn combine(&mut self, presence: Presence<T>) -> Option<T> {
        Some(presence.into_value())
    }

    fn should_stop(&self, _left_exhausted: bool, _right_exhausted: bool) -> bool {
        false
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IntersectPolicy;

impl<T> SetPolicy<T> for IntersectPolicy {
    fn name(&self) -> &'static str {
        "intersect"
    }

    fn combine(&mut self, presence: Presence<T>) -> Option<T> {
        match presence {
            Presence::Both(v) => Some(v),
            Presence::Left(_) | Presence::Right(_) => None,
        }
    }

    fn should_stop(&self, left_exhausted: bool, right_exhausted: bool) -> bool {
        left_exhausted || right_exhausted
    }
}

/// Left minus right.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiffPolicy;

impl<T> SetPolicy<T> for DiffPolicy {
    fn name(&self) -> &'static str {
        "diff"
    }

    fn combine(&mut self, presence: Presence<T>) -> Option<T> {
        match presence {
            Presence::Left(v) => Some(v),
            Presence::Both(_) | Presence::Right(_) => None,
        }
    }

    fn should_stop(&self, left_exhausted: bool, _right_exhausted: bool) -> bool {
        left_exhausted
    }
}

pub type Union<L, R> = MergeJoin<L, R, UnionPolicy>;
pub type Intersect<L, R> = MergeJoin<L, R, IntersectPolicy>;
pub type Diff<L, R> = MergeJoin<L, R, DiffPolicy>;

/// Values present in `left` or `right`, each shared value emitted once.
pub fn union<L, R>(left: L, right: R, direction: Direction) -> Union<L, R>
where
    L: SortedStream,
    R: SortedStream<Item = L::Item>,
{
    MergeJoin::new(left, right, direction, UnionPolicy)
}

/// Values present in both `left` and `right`.
pub fn intersect<L, R>(left: L, right: R, direction: Direction) -> Intersect<L, R>
where
    L: SortedStream,
    R: SortedStream<Item = L::Item>,
{
    MergeJoin::new(left, right, direction, IntersectPolicy)
}

/// Values present in `left` but not in `right`.
pub fn diff<L, R>(left: L, right: R, direction: Direction) -> Diff<L, R>
where
    L: SortedStream,
    R: SortedStream<Item = L::Item>,
{
    MergeJoin::new(left, right, direction, DiffPolicy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortstream_core::materialize::to_vec;
    use sortstream_core::stream::VecStream;

    const ASC: Direction = Direction::Ascending;
    const DESC: Direction = Direction::Descending;

    fn s(items: &[i32]) -> VecStream<i32> {
        VecStream::new(items.to_vec())
    }

    #[test]
    fn union_cases() {
        let cases: &[(&[i32], &[i32], &[i32], Direction)] = &[
            (&[], &[], &[], ASC),
            (&[], &[1], &[1], ASC),
            (&[1], &[1], &[1], ASC),
            (&[1], &[2], &[1, 2], ASC),
            (&[1], &[0, 2], &[0, 1, 2], ASC),
            (&[1, 2, 3], &[0], &[0, 1, 2, 3], ASC),
            (&[1], &[0, 1, 2, 3], &[0, 1, 2, 3], ASC),
            (&[1], &[2, 3], &[1, 2, 3], ASC),
            (&[], &[], &[], DESC),
            (&[], &[1], &[1], DESC),
            (&[1], &[1], &[1], DESC),
            (&[1], &[2], &[2, 1], DESC),
            (&[1], &[2, 0], &[2, 1, 0], DESC),
        ];
        for (a, b, want, dir) in cases {
            assert_eq!(to_vec(union(s(a), s(b), *dir)), want.to_vec(), "union({a:?}, {b:?}, {dir:?})");
        }
    }

    #[test]
    fn intersect_cases() {
        let cases: &[(&[i32], &[i32], &[i32], Direction)] = &[
            (&[], &[], &[], ASC),
            (&[], &[1], &[], ASC),
            (&[1, 2, 3], &[1, 2, 3], &[1, 2, 3], ASC),
            (&[1, 3, 5, 7], &[2, 3, 4, 7], &[3, 7], ASC),
            (&[1, 2], &[3, 4], &[], ASC),
            (&[7, 5, 3, 1], &[7, 4, 3, 2], &[7, 3], DESC),
        ];
        for (a, b, want, dir) in cases {
            assert_eq!(to_vec(intersect(s(a), s(b), *dir)), want.to_vec(), "intersect({a:?}, {b:?}, {dir:?})");
        }
    }

    #[test]
    fn diff_cases() {
        let cases: &[(&[i32], &[i32], &[i32], Direction)] = &[
            (&[], &[1], &[], ASC),
            (&[1], &[], &[1], ASC),
            (&[1, 2, 3], &[1], &[2, 3], ASC),
            (&[1, 2, 3, 4], &[0, 2, 4, 6], &[1, 3], ASC),
            (&[4, 3, 2, 1], &[3], &[4, 2, 1], DESC),
        ];
        for (a, b, want, dir) in cases {
            assert_eq!(to_vec(diff(s(a), s(b), *dir)), want.to_vec(), "diff({a:?}, {b:?}, {dir:?})");
        }
    }

    #[test]
    fn intersect_wastes_the_pulled_head() {
        let mut a = s(&[1, 2, 3]);
        let mut b = s(&[1]);
        assert_eq!(to_vec(intersect(&mut a, &mut b, ASC)), vec![1]);
        // 2 was pulled before b reported exhaustion, then dropped
        assert_eq!(to_vec(&mut a), vec![3]);
        assert_eq!(to_vec(&mut b), Vec::<i32>::new());
    }

    #[test]
    fn diff_stops_when_left_is_dry() {
        let mut a = s(&[1]);
        let mut b = s(&[1, 2, 3]);
        assert_eq!(to_vec(diff(&mut a, &mut b, ASC)), Vec::<i32>::new());
        assert_eq!(b.remaining(), &[2, 3]);
    }

    #[test]
    fn union_never_stops_early() {
        let mut a = s(&[1]);
        let mut b = s(&[1, 2, 3]);
        assert_eq!(to_vec(union(&mut a, &mut b, ASC)), vec![1, 2, 3]);
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn lazy_operations_compose() {
        let inner = intersect(s(&[1, 2, 3]), s(&[2, 3]), ASC);
        assert_eq!(to_vec(diff(inner, s(&[3]), ASC)), vec![2]);
    }

    #[test]
    fn works_as_iterator() {
        let evens: Vec<u64> = union(s_u64(&[2, 6]), s_u64(&[4]), ASC).filter(|v| v % 4 != 0).collect();
        assert_eq!(evens, vec![2, 6]);
    }

    fn s_u64(items: &[u64]) -> VecStream<u64> {
        VecStream::new(items.to_vec())
    }
}
