//! The argument accumulator behind [`curry`](super::curry).
//!
//! An [`Accumulator`] owns a callable and the prefix of arguments bound so far.
//! The parameters still missing are carried as the `Remaining` tuple type, so
//! the number of outstanding arguments is known at compile time: appending to
//! an accumulator with one parameter left invokes the callable, and an
//! accumulator with nothing left is never constructed.

use std::fmt;
use std::marker::PhantomData;

use crate::signature::Function;
use crate::signature::tuple::for_each_split;

/// A callable together with a bound prefix of its arguments.
///
/// `Bound` is the tuple of arguments supplied so far and `Remaining` the tuple
/// of parameter types still expected. Each [`append`](Append::append) consumes
/// the accumulator; clone it first to branch off several continuations.
///
/// # Examples
///
/// ```
/// use arity::compose::{Append, curry};
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let with_width = curry(volume).append(2);
/// let with_width_and_height = with_width.append(3);
/// assert_eq!(with_width_and_height.append(4), 24);
/// ```
///
/// Reuse is explicit:
///
/// ```
/// use arity::compose::{Append, curry};
///
/// let scale = curry(|factor: i32, value: i32| factor * value);
/// let triple = scale.append(3);
///
/// assert_eq!(triple.clone().append(5), 15);
/// assert_eq!(triple.append(7), 21);
/// ```
pub struct Accumulator<F, Bound, Remaining> {
    function: F,
    bound: Bound,
    remaining: PhantomData<fn() -> Remaining>,
}

impl<F, Remaining> Accumulator<F, (), Remaining> {
    pub(crate) const fn new(function: F) -> Self {
        Self {
            function,
            bound: (),
            remaining: PhantomData,
        }
    }
}

impl<F, Bound, Remaining> Accumulator<F, Bound, Remaining> {
    /// Returns the arguments bound so far.
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }
}

impl<F: Clone, Bound: Clone, Remaining> Clone for Accumulator<F, Bound, Remaining> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            bound: self.bound.clone(),
            remaining: PhantomData,
        }
    }
}

impl<F, Bound: fmt::Debug, Remaining> fmt::Debug for Accumulator<F, Bound, Remaining> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Accumulator")
            .field("bound", &self.bound)
            .field("remaining", &std::any::type_name::<Remaining>())
            .finish_non_exhaustive()
    }
}

/// Supplies the next argument to a curried callable.
///
/// Only implemented while at least one parameter remains, so an
/// over-saturated call does not type-check:
///
/// ```compile_fail
/// use arity::compose::{Append, curry};
///
/// let add = curry(|first: i32, second: i32| first + second);
/// let _ = add.append(1).append(2).append(3);
/// ```
pub trait Append {
    /// The type of the next parameter.
    type Argument;

    /// Either the next accumulator or, for the last parameter, the result.
    type Output;

    /// Binds `argument` as the next parameter.
    fn append(self, argument: Self::Argument) -> Self::Output;
}

macro_rules! impl_append {
    // last parameter: saturate and invoke
    ([$($bound:ident),*] [$last:ident]) => {
        paste::paste! {
            impl<F, $($bound,)* $last> Append for Accumulator<F, ($($bound,)*), ($last,)>
            where
                F: Function<($($bound,)* $last,)>,
            {
                type Argument = $last;
                type Output = F::Output;

                #[inline]
                fn append(self, [<$last:lower>]: $last) -> Self::Output {
                    let ($([<$bound:lower>],)*) = self.bound;
                    self.function
                        .apply_once(($([<$bound:lower>],)* [<$last:lower>],))
                }
            }
        }
    };

    ([$($bound:ident),*] [$next:ident, $($rest:ident),+]) => {
        paste::paste! {
            impl<F, $($bound,)* $next, $($rest),+> Append
                for Accumulator<F, ($($bound,)*), ($next, $($rest,)+)>
            {
                type Argument = $next;
                type Output = Accumulator<F, ($($bound,)* $next,), ($($rest,)+)>;

                #[inline]
                fn append(self, [<$next:lower>]: $next) -> Self::Output {
                    let ($([<$bound:lower>],)*) = self.bound;
                    Accumulator {
                        function: self.function,
                        bound: ($([<$bound:lower>],)* [<$next:lower>],),
                        remaining: PhantomData,
                    }
                }
            }
        }
    };
}

macro_rules! impl_accumulator {
    ([$($bound:ident),*] []) => {};

    ([$($bound:ident),*] [$head:ident $(, $rest:ident)*]) => {
        impl_append!([$($bound),*] [$head $(, $rest)*]);

        impl<F, $($bound,)* $head, $($rest),*> Function<($head,)>
            for Accumulator<F, ($($bound,)*), ($head, $($rest,)*)>
        where
            Self: Append<Argument = $head>,
        {
            type Output = <Self as Append>::Output;

            const ARITY: usize = 1;

            #[inline]
            fn apply_once(self, (argument,): ($head,)) -> Self::Output {
                self.append(argument)
            }
        }
    };
}

for_each_split!(impl_accumulator);

static_assertions::assert_impl_all!(
    Accumulator<fn(i32, i32) -> i32, (), (i32, i32)>: Append, Clone, Send, Sync
);
static_assertions::assert_not_impl_any!(Accumulator<fn(i32, i32) -> i32, (i32, i32), ()>: Append);
