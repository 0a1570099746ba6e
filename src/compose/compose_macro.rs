//! Right-to-left composition.
//!
//! This module provides [`compose`] and the [`compose!`] macro, which follow
//! the mathematical notation `(f . g)(x) = f(g(x))`: the rightmost stage
//! receives the original argument list and runs first.

use crate::signature::{Function, ReusableFunction};

/// Two stages run right to left: `outer(inner(args..))`.
///
/// Built by [`compose`] or [`compose!`](crate::compose!).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compose<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner, Args> Function<Args> for Compose<Outer, Inner>
where
    Inner: Function<Args>,
    Outer: Function<(Inner::Output,)>,
{
    type Output = Outer::Output;

    const ARITY: usize = Inner::ARITY;

    #[inline]
    fn apply_once(self, args: Args) -> Self::Output {
        let intermediate = self.inner.apply_once(args);
        self.outer.apply_once((intermediate,))
    }
}

impl<Outer, Inner, Args> ReusableFunction<Args> for Compose<Outer, Inner>
where
    Inner: ReusableFunction<Args>,
    Outer: ReusableFunction<(Inner::Output,)>,
{
    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        self.outer.apply((self.inner.apply(args),))
    }
}

/// Composes two stages right to left.
///
/// # Examples
///
/// ```
/// use arity::compose::compose;
/// use arity::signature::ReusableFunction;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// // double(increment(3)) = 8
/// assert_eq!(compose(double, increment).apply((3,)), 8);
/// ```
#[inline]
pub const fn compose<Outer, Inner>(outer: Outer, inner: Inner) -> Compose<Outer, Inner> {
    Compose { outer, inner }
}

/// Composes any number of stages right to left.
///
/// `compose!(f, g, h)` behaves as `|args..| f(g(h(args..)))`. A single stage
/// is returned unchanged.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use arity::compose;
/// use arity::signature::ReusableFunction;
///
/// fn to_string(value: i32) -> String { value.to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// let digits = compose!(length, to_string);
/// assert_eq!(digits.apply((12345,)), 5);
///
/// let multiplier = 3;
/// let scaled_then_offset = compose!(|x: i32| x + 10, move |x: i32| x * multiplier);
/// assert_eq!(scaled_then_offset.apply((5,)), 25);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($remaining:expr),+ $(,)?) => {
        $crate::compose::compose($outer, $crate::compose!($($remaining),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn compose_runs_last_stage_first() {
        let composed = compose(|x: i32| x * 10, |x: i32| x - 1);
        assert_eq!(composed.apply((5,)), 40);
    }

    #[rstest]
    fn compose_arity_is_the_innermost_arity() {
        let composed = compose(|sum: i32| sum * 2, |a: i32, b: i32| a + b);
        assert_eq!(crate::signature::arity(&composed), 2);
        assert_eq!(composed.apply((4, 5)), 18);
    }

    #[rstest]
    fn compose_macro_nests_to_the_right() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        // add_one(double(square(3))) = 19
        assert_eq!(compose!(add_one, double, square).apply((3,)), 19);
    }
}
