//! Fan-out/fan-in composition.
//!
//! [`fork_join`] feeds one argument list to two branches and merges both
//! results with a binary `join` stage. Branches run one after the other on
//! the calling thread; with the `rayon` feature, [`ForkJoin::apply_par`] runs
//! them on the rayon pool instead.

use crate::signature::{Function, ReusableFunction};

/// Two branches over the same arguments, merged by `join`:
/// `join(first(args..), second(args..))`.
///
/// Each branch gets its own copy of the argument list, so `Args: Clone`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForkJoin<First, Second, Join> {
    first: First,
    second: Second,
    join: Join,
}

impl<First, Second, Join, Args> Function<Args> for ForkJoin<First, Second, Join>
where
    Args: Clone,
    First: Function<Args>,
    Second: Function<Args>,
    Join: Function<(First::Output, Second::Output)>,
{
    type Output = Join::Output;

    const ARITY: usize = First::ARITY;

    #[inline]
    fn apply_once(self, args: Args) -> Self::Output {
        let left = self.first.apply_once(args.clone());
        let right = self.second.apply_once(args);
        self.join.apply_once((left, right))
    }
}

impl<First, Second, Join, Args> ReusableFunction<Args> for ForkJoin<First, Second, Join>
where
    Args: Clone,
    First: ReusableFunction<Args>,
    Second: ReusableFunction<Args>,
    Join: ReusableFunction<(First::Output, Second::Output)>,
{
    #[inline]
    fn apply(&self, args: Args) -> Self::Output {
        let left = self.first.apply(args.clone());
        let right = self.second.apply(args);
        self.join.apply((left, right))
    }
}

#[cfg(feature = "rayon")]
impl<First, Second, Join> ForkJoin<First, Second, Join> {
    /// Runs both branches in parallel with [`rayon::join`], then merges.
    ///
    /// Both branches finish before `join` runs. A panic in either branch is
    /// propagated once the other branch has completed.
    ///
    /// # Examples
    ///
    /// ```
    /// use arity::compose::fork_join;
    ///
    /// let mean = fork_join(
    ///     |values: Vec<f64>| values.iter().sum::<f64>(),
    ///     |values: Vec<f64>| values.len() as f64,
    ///     |sum: f64, count: f64| sum / count,
    /// );
    /// assert!((mean.apply_par((vec![1.0, 2.0, 3.0],)) - 2.0).abs() < f64::EPSILON);
    /// ```
    pub fn apply_par<Args>(
        &self,
        args: Args,
    ) -> <Join as Function<(
        <First as Function<Args>>::Output,
        <Second as Function<Args>>::Output,
    )>>::Output
    where
        Args: Clone + Send,
        First: ReusableFunction<Args> + Sync,
        Second: ReusableFunction<Args> + Sync,
        <First as Function<Args>>::Output: Send,
        <Second as Function<Args>>::Output: Send,
        Join: ReusableFunction<(
            <First as Function<Args>>::Output,
            <Second as Function<Args>>::Output,
        )>,
    {
        let (first, second) = (&self.first, &self.second);
        let second_args = args.clone();
        let (left, right) = rayon::join(|| first.apply(args), || second.apply(second_args));
        self.join.apply((left, right))
    }
}

/// Builds a [`ForkJoin`] from two branches and a binary merge stage.
///
/// # Examples
///
/// ```
/// use arity::compose::fork_join;
/// use arity::signature::ReusableFunction;
///
/// fn square(value: i32) -> i32 { value * value }
/// fn negate(value: i32) -> i32 { -value }
/// fn add(left: i32, right: i32) -> i32 { left + right }
///
/// // 9 + (-3)
/// assert_eq!(fork_join(square, negate, add).apply((3,)), 6);
/// ```
#[inline]
pub const fn fork_join<First, Second, Join>(
    first: First,
    second: Second,
    join: Join,
) -> ForkJoin<First, Second, Join> {
    ForkJoin {
        first,
        second,
        join,
    }
}
