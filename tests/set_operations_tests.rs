//! Lazy set operation scenarios, including early-stop residue on lent inputs.

use sortstream::prelude::*;

const ASC: Direction = Direction::Ascending;
const DESC: Direction = Direction::Descending;

#[derive(Clone, Copy, Debug)]
enum Op {
    Union,
    Intersect,
    Diff,
}

struct Case {
    a: &'static [i32],
    b: &'static [i32],
    direction: Direction,
    op: Op,
    result: &'static [i32],
    remaining_a: &'static [i32],
    remaining_b: &'static [i32],
}

fn run(op: Op, a: &mut VecStream<i32>, b: &mut VecStream<i32>, direction: Direction) -> Vec<i32> {
    match op {
        Op::Union => to_vec(union(a, b, direction)),
        Op::Intersect => to_vec(intersect(a, b, direction)),
        Op::Diff => to_vec(diff(a, b, direction)),
    }
}

#[test]
fn test_early_finish_residue() {
    let cases = [
        // diff: only left exhaustion stops
        Case { a: &[1, 2, 3], b: &[1], direction: ASC, op: Op::Diff, result: &[2, 3], remaining_a: &[], remaining_b: &[] },
        Case { a: &[1], b: &[1, 2, 3], direction: ASC, op: Op::Diff, result: &[], remaining_a: &[], remaining_b: &[2, 3] },
        // union: never stops
        Case { a: &[1, 2, 3], b: &[1], direction: ASC, op: Op::Union, result: &[1, 2, 3], remaining_a: &[], remaining_b: &[] },
        Case { a: &[1], b: &[1, 2, 3], direction: ASC, op: Op::Union, result: &[1, 2, 3], remaining_a: &[], remaining_b: &[] },
        // intersect: either side stops
        Case { a: &[3, 2, 1], b: &[3], direction: DESC, op: Op::Intersect, result: &[3], remaining_a: &[1], remaining_b: &[] },
        Case { a: &[3], b: &[3, 2, 1], direction: DESC, op: Op::Intersect, result: &[3], remaining_a: &[], remaining_b: &[2, 1] },
        Case { a: &[1], b: &[1, 2, 3], direction: ASC, op: Op::Intersect, result: &[1], remaining_a: &[], remaining_b: &[2, 3] },
        // 2 is pulled and wasted
        Case { a: &[1, 2, 3], b: &[1], direction: ASC, op: Op::Intersect, result: &[1], remaining_a: &[3], remaining_b: &[] },
        Case { a: &[1, 2, 3], b: &[1, 2, 3], direction: ASC, op: Op::Intersect, result: &[1, 2, 3], remaining_a: &[], remaining_b: &[] },
    ];

    for (i, case) in cases.iter().enumerate() {
        let mut a = VecStream::new(case.a.to_vec());
        let mut b = VecStream::new(case.b.to_vec());
        let result = run(case.op, &mut a, &mut b, case.direction);
        assert_eq!(result, case.result, "case {i}: {:?}", case.op);
        assert_eq!(to_vec(&mut a), case.remaining_a, "case {i}: remaining a");
        assert_eq!(to_vec(&mut b), case.remaining_b, "case {i}: remaining b");
    }
}

#[test]
fn test_concrete_scenarios() {
    let s = |v: &[i32]| VecStream::new(v.to_vec());
    assert_eq!(to_vec(union(s(&[]), s(&[]), ASC)), Vec::<i32>::new());
    assert_eq!(to_vec(union(s(&[1]), s(&[0, 1, 2, 3]), ASC)), vec![0, 1, 2, 3]);
    assert_eq!(to_vec(intersect(s(&[1, 2, 3]), s(&[1, 2, 3]), ASC)), vec![1, 2, 3]);
    assert_eq!(to_vec(diff(s(&[1, 2, 3]), s(&[1]), ASC)), vec![2, 3]);
    assert_eq!(to_vec(diff(s(&[1]), s(&[1, 2, 3]), ASC)), Vec::<i32>::new());
    assert_eq!(to_vec(intersect(s(&[3, 2, 1]), s(&[3]), DESC)), vec![3]);
}

#[test]
fn test_composition() {
    let s = |v: &[i32]| VecStream::new(v.to_vec());
    let result = diff(intersect(s(&[1, 2, 3]), s(&[2, 3]), ASC), s(&[3]), ASC);
    assert_eq!(to_vec(result), vec![2]);

    // (A OR B) AND NOT (C AND D)
    let either = union(s(&[1, 4, 7]), s(&[2, 4, 8]), ASC);
    let both = intersect(s(&[2, 7, 9]), s(&[7, 9]), ASC);
    assert_eq!(to_vec(diff(either, both, ASC)), vec![1, 2, 4, 8]);
}

#[test]
fn test_exhaustion_is_idempotent() {
    let s = |v: &[i32]| VecStream::new(v.to_vec());
    let mut streams: Vec<Box<dyn SortedStream<Item = i32>>> = vec![
        Box::new(s(&[1])),
        Box::new(union(s(&[1]), s(&[2]), ASC)),
        Box::new(intersect(s(&[1, 2]), s(&[2]), ASC)),
        Box::new(diff(s(&[1, 2]), s(&[2, 3]), ASC)),
        Box::new(IterStream::new(vec![5, 6].into_iter())),
    ];
    for stream in streams.iter_mut() {
        while stream.pull().is_some() {}
        for _ in 0..10 {
            assert_eq!(stream.pull(), None);
        }
    }
}

#[test]
fn test_reset_replays_reference_data() {
    let mut reference = VecStream::new(vec![2, 4, 6]);
    let first = to_vec(intersect(&mut reference, VecStream::new(vec![4]), ASC));
    reference.reset();
    let second = to_vec(intersect(&mut reference, VecStream::new(vec![4]), ASC));
    assert_eq!(first, vec![4]);
    assert_eq!(first, second);
}

#[test]
fn test_posting_lists_from_iterators() {
    // doc ids as produced by an index reader
    let rust = IterStream::new([3u64, 8, 15, 21, 42].into_iter());
    let async_ = IterStream::new((0u64..50).filter(|d| d % 3 == 0));
    assert_eq!(to_vec(intersect(rust, async_, ASC)), vec![3, 15, 21, 42]);
}

#[test]
fn test_custom_policy_via_iterate() {
    // symmetric difference: values in exactly one side
    let mut out = Vec::new();
    iterate(
        VecStream::new(vec![1, 2, 3]),
        VecStream::new(vec![2, 3, 4]),
        ASC,
        |presence| match presence {
            Presence::Left(v) | Presence::Right(v) => out.push(v),
            Presence::Both(_) => {}
        },
        |_, _| false,
    );
    assert_eq!(out, vec![1, 4]);
}
