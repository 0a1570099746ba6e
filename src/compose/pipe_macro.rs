//! Left-to-right composition.
//!
//! This module provides [`pipe`] and the [`pipe!`] macro. The first stage
//! receives the original argument list; every later stage receives the
//! previous stage's result as its only argument.

use crate::signature::{Function, ReusableFunction};

/// Two stages run left to right: `second(first(args..))`.
///
/// Built by [`pipe`] or [`pipe!`](crate::pipe!).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pipe<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second, Args> Function<Args> for Pipe<First, Second>
where
    First: Function<Args>,
    Second: Function<(First::Output,)>,
{
    type Output = Second::Output;

    const ARITY: usize = First::ARITY;

    #[inline]
    fn apply_once(self, args: Args) -> Self::Output {
        let intermediate = self.first.apply_once(args);
        self.second.apply_once((intermediate,))
    }
}

impl<First, Second, Args> ReusableFunction<Args> for Pipe<First, Second>
where
    First: ReusableFunction<Args>,
    Second: ReusableFunction<(First::Output,)>,
{
    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        let intermediate = self.first.apply(args);
        self.second.apply((intermediate,))
    }
}

static_assertions::assert_impl_all!(Pipe<fn(i32) -> i32, fn(i32) -> i32>: Copy, Send, Sync);

/// Composes two stages left to right.
///
/// # Examples
///
/// ```
/// use arity::compose::pipe;
/// use arity::signature::ReusableFunction;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// let double_then_increment = pipe(double, increment);
/// assert_eq!(double_then_increment.apply((3,)), 7);
/// ```
///
/// The first stage may take several arguments:
///
/// ```
/// use arity::compose::pipe;
/// use arity::signature::ReusableFunction;
///
/// let hypotenuse = pipe(|a: f64, b: f64| a * a + b * b, f64::sqrt);
/// assert!((hypotenuse.apply((3.0, 4.0)) - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
pub const fn pipe<First, Second>(first: First, second: Second) -> Pipe<First, Second> {
    Pipe { first, second }
}

/// Composes any number of stages left to right.
///
/// `pipe!(f, g, h)` behaves as `|args..| h(g(f(args..)))`. A single stage is
/// returned unchanged.
///
/// # Relationship with compose!
///
/// `pipe!(f, g, h)` is equivalent to `compose!(h, g, f)`.
///
/// # Examples
///
/// ```
/// use arity::pipe;
/// use arity::signature::ReusableFunction;
///
/// fn square(value: i32) -> i32 { value * value }
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> increment(18)=19
/// let pipeline = pipe!(square, double, increment);
/// assert_eq!(pipeline.apply((3,)), 19);
///
/// // single stage
/// assert_eq!(pipe!(square)(4), 16);
/// ```
///
/// Adjacent stages must agree on types:
///
/// ```compile_fail
/// use arity::pipe;
/// use arity::signature::Function;
///
/// fn length(text: String) -> usize { text.len() }
/// fn shout(text: String) -> String { text.to_uppercase() }
///
/// let _ = pipe!(length, shout).apply_once((String::from("no"),));
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($remaining:expr),+ $(,)?) => {
        $crate::compose::pipe($first, $crate::pipe!($($remaining),+))
    };
}
