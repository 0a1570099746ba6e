//! Arity-aware currying.
//!
//! [`curry`] turns an n-ary callable into a chain of unary steps driven by
//! [`Append`](super::Append). Callables with zero or one parameter are already
//! curried and come back unchanged.
//!
//! For ordinary call syntax (`curried(a)(b)(c)`) use the `curry!` macro from
//! the `derive` feature instead.

use super::accumulator::Accumulator;
use crate::signature::Function;
use crate::signature::tuple::for_each_arity;

/// Conversion of a callable with parameter list `Args` into curried form.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be curried over `{Args}`",
    note = "only callables with a single, known signature of up to eight parameters can be curried"
)]
pub trait Curry<Args> {
    /// `Self` for arity 0 and 1, an [`Accumulator`] otherwise.
    type Curried;

    /// Performs the conversion.
    fn curry(self) -> Self::Curried;
}

macro_rules! impl_curry {
    () => {
        impl<F> Curry<()> for F
        where
            F: Function<()>,
        {
            type Curried = F;

            #[inline]
            fn curry(self) -> F {
                self
            }
        }
    };

    ($only:ident) => {
        impl<F, $only> Curry<($only,)> for F
        where
            F: Function<($only,)>,
        {
            type Curried = F;

            #[inline]
            fn curry(self) -> F {
                self
            }
        }
    };

    ($first:ident, $($rest:ident),+) => {
        impl<F, $first, $($rest),+> Curry<($first, $($rest,)+)> for F
        where
            F: Function<($first, $($rest,)+)>,
        {
            type Curried = Accumulator<F, (), ($first, $($rest,)+)>;

            #[inline]
            fn curry(self) -> Self::Curried {
                Accumulator::new(self)
            }
        }
    };
}

for_each_arity!(impl_curry);

static_assertions::assert_type_eq_all!(<fn(u8) -> u8 as Curry<(u8,)>>::Curried, fn(u8) -> u8);
static_assertions::assert_type_eq_all!(
    <fn(u8, u8) -> u8 as Curry<(u8, u8)>>::Curried,
    Accumulator<fn(u8, u8) -> u8, (), (u8, u8)>
);

/// Curries `function`.
///
/// - Arity 0 or 1: returns `function` itself.
/// - Arity 2 or more: returns an [`Accumulator`] with nothing bound; each
///   [`append`](super::Append::append) binds one more argument and the last
///   one invokes `function`.
///
/// # Examples
///
/// ```
/// use arity::compose::{Append, curry};
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// assert_eq!(curry(add_three).append(1).append(2).append(3), 6);
///
/// // unary callables are returned as they are
/// let increment = curry(|value: i32| value + 1);
/// assert_eq!(increment(41), 42);
/// ```
#[inline]
pub fn curry<F, Args>(function: F) -> F::Curried
where
    F: Curry<Args>,
{
    function.curry()
}
