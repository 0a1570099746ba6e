//! Integration tests for `fork_join`.

#![cfg(feature = "compose")]

use std::cell::RefCell;

use arity::compose::{ForkJoin, fork_join, partial};
use arity::signature::{Function, ReusableFunction, arity};
use rstest::rstest;

fn square(value: i32) -> i32 {
    value * value
}

fn negate(value: i32) -> i32 {
    -value
}

fn add(left: i32, right: i32) -> i32 {
    left + right
}

// =============================================================================
// Merging
// =============================================================================

#[rstest]
#[case(3, 6)]
#[case(0, 0)]
#[case(-2, 6)]
fn test_fork_join_square_negate_add(#[case] input: i32, #[case] expected: i32) {
    assert_eq!(fork_join(square, negate, add).apply((input,)), expected);
}

#[test]
fn test_fork_join_passes_results_in_branch_order() {
    let pair = fork_join(
        |text: &str| text.len(),
        |text: &str| text.to_uppercase(),
        |length: usize, upper: String| format!("{length}:{upper}"),
    );
    assert_eq!(pair.apply(("abc",)), "3:ABC");
}

#[test]
fn test_fork_join_branches_share_multiple_arguments() {
    let bounds = fork_join(
        |a: i32, b: i32| a.min(b),
        |a: i32, b: i32| a.max(b),
        |low: i32, high: i32| (low, high),
    );
    assert_eq!(arity(&bounds), 2);
    assert_eq!(bounds.apply((9, 4)), (4, 9));
}

#[test]
fn test_fork_join_each_branch_gets_its_own_copy() {
    let split = fork_join(
        |mut values: Vec<i32>| {
            values.push(0);
            values.len()
        },
        |values: Vec<i32>| values.len(),
        |mutated: usize, untouched: usize| (mutated, untouched),
    );
    assert_eq!(split.apply((vec![1, 2, 3],)), (4, 3));
}

#[test]
fn test_fork_join_runs_first_branch_before_second() {
    let trace = RefCell::new(Vec::new());
    let combined = fork_join(
        |value: i32| {
            trace.borrow_mut().push("first");
            value
        },
        |value: i32| {
            trace.borrow_mut().push("second");
            value
        },
        |left: i32, right: i32| {
            trace.borrow_mut().push("join");
            left * right
        },
    );

    assert_eq!(combined.apply((6,)), 36);
    assert_eq!(*trace.borrow(), vec!["first", "second", "join"]);
}

#[test]
fn test_fork_join_apply_once_moves_branches() {
    let label = String::from("n=");
    let fused = fork_join(
        move |value: u32| label + &value.to_string(),
        |value: u32| value.is_power_of_two(),
        |text: String, power: bool| format!("{text} power={power}"),
    );
    assert_eq!(fused.apply_once((8,)), "n=8 power=true");
}

#[test]
fn test_fork_join_result_is_callable_for_other_combinators() {
    let spread = fork_join(square, negate, add);
    let shifted = partial(|offset: i32, value: i32| spread.apply((value,)) + offset, (100,));
    assert_eq!(shifted.apply((3,)), 106);
}

#[test]
#[should_panic(expected = "second branch")]
fn test_fork_join_propagates_branch_panic() {
    let failing = fork_join(square, |_: i32| -> i32 { panic!("second branch") }, add);
    let _ = failing.apply((1,));
}

#[test]
fn test_fork_join_is_copy_for_fn_pointers() {
    let combined: ForkJoin<fn(i32) -> i32, fn(i32) -> i32, fn(i32, i32) -> i32> = fork_join(
        square as fn(i32) -> i32,
        negate as fn(i32) -> i32,
        add as fn(i32, i32) -> i32,
    );
    let copy = combined;
    assert_eq!(combined.apply((5,)), copy.apply((5,)));
}

// =============================================================================
// Parallel branches
// =============================================================================

#[cfg(feature = "rayon")]
mod parallel {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_apply_par_with_join_that_is_not_sync() {
        let joins = Cell::new(0_u32);
        let counting_add = move |left: i32, right: i32| {
            joins.set(joins.get() + 1);
            left + right
        };
        let combined = fork_join(square, negate, counting_add);
        assert_eq!(combined.apply_par((3,)), 6);
        assert_eq!(combined.apply_par((4,)), 12);
    }

    #[test]
    fn test_apply_par_matches_sequential() {
        let combined = fork_join(square, negate, add);
        for value in -10..=10 {
            assert_eq!(combined.apply_par((value,)), combined.apply((value,)));
        }
    }

    #[test]
    fn test_apply_par_with_heavier_branches() {
        let statistics = fork_join(
            |values: Vec<u64>| values.iter().sum::<u64>(),
            |values: Vec<u64>| values.iter().copied().max().unwrap_or_default(),
            |sum: u64, maximum: u64| (sum, maximum),
        );
        let values: Vec<u64> = (1..=1_000).collect();
        assert_eq!(statistics.apply_par((values,)), (500_500, 1_000));
    }

    #[test]
    #[should_panic(expected = "parallel branch")]
    fn test_apply_par_propagates_panic() {
        let failing = fork_join(square, |_: i32| -> i32 { panic!("parallel branch") }, add);
        let _ = failing.apply_par((1,));
    }
}
