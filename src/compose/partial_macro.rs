//! Partial application of a leading argument prefix.
//!
//! This module provides [`partial`] and the [`partial!`] macro. Binding `m`
//! of a callable's `n` arguments yields:
//!
//! | `m`          | result                                           |
//! |--------------|--------------------------------------------------|
//! | `0`          | the callable itself                              |
//! | `0 < m < n`  | a [`Partial`] expecting the remaining arguments  |
//! | `m == n`     | the result of calling the callable right away    |
//!
//! Binding more arguments than the callable declares is a compile error.

use std::fmt;
use std::marker::PhantomData;

use crate::signature::tuple::{count_params, for_each_split};
use crate::signature::{Function, ReusableFunction};

/// Eager binding of the argument prefix `Bound` to a callable with parameter
/// list `Args`.
#[diagnostic::on_unimplemented(
    message = "cannot bind the arguments `{Bound}` to `{Self}`",
    label = "too many arguments, or argument types that do not match the leading parameters",
    note = "the bound arguments must be a prefix of the callable's parameter list"
)]
pub trait Bind<Bound, Args> {
    /// The callable itself, a [`Partial`], or the invocation result.
    type Output;

    /// Binds `bound` as the leading arguments.
    fn bind(self, bound: Bound) -> Self::Output;
}

/// A callable with a bound argument prefix, expecting the `Remaining`
/// parameters.
///
/// Invoking it through [`Function::apply_once`] moves the bound prefix into
/// the call. [`ReusableFunction::apply`] is available when the wrapped
/// callable is reusable and the prefix is `Clone`; each call then works on a
/// fresh copy of the prefix.
///
/// # Examples
///
/// ```
/// use arity::compose::partial;
/// use arity::signature::ReusableFunction;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percentage = partial(clamp, (0, 100));
/// assert_eq!(percentage.apply((150,)), 100);
/// assert_eq!(percentage.apply((-5,)), 0);
/// ```
pub struct Partial<F, Bound, Remaining> {
    function: F,
    bound: Bound,
    remaining: PhantomData<fn() -> Remaining>,
}

impl<F, Bound, Remaining> Partial<F, Bound, Remaining> {
    /// Returns the bound argument prefix.
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }
}

impl<F: Clone, Bound: Clone, Remaining> Clone for Partial<F, Bound, Remaining> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            bound: self.bound.clone(),
            remaining: PhantomData,
        }
    }
}

impl<F, Bound: fmt::Debug, Remaining> fmt::Debug for Partial<F, Bound, Remaining> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("bound", &self.bound)
            .field("remaining", &std::any::type_name::<Remaining>())
            .finish_non_exhaustive()
    }
}

macro_rules! impl_bind {
    // nothing bound, nothing declared: the callable is returned unchanged
    ([] []) => {
        impl<F> Bind<(), ()> for F
        where
            F: Function<()>,
        {
            type Output = F;

            #[inline]
            fn bind(self, (): ()) -> F {
                self
            }
        }
    };

    ([] [$($rest:ident),+]) => {
        impl<F, $($rest),+> Bind<(), ($($rest,)+)> for F
        where
            F: Function<($($rest,)+)>,
        {
            type Output = F;

            #[inline]
            fn bind(self, (): ()) -> F {
                self
            }
        }
    };

    // every argument bound: invoke immediately
    ([$($bound:ident),+] []) => {
        impl<F, $($bound),+> Bind<($($bound,)+), ($($bound,)+)> for F
        where
            F: Function<($($bound,)+)>,
        {
            type Output = F::Output;

            #[inline]
            fn bind(self, bound: ($($bound,)+)) -> Self::Output {
                self.apply_once(bound)
            }
        }
    };

    ([$($bound:ident),+] [$($rest:ident),+]) => {
        paste::paste! {
            impl<F, $($bound,)+ $($rest),+> Bind<($($bound,)+), ($($bound,)+ $($rest,)+)> for F
            where
                F: Function<($($bound,)+ $($rest,)+)>,
            {
                type Output = Partial<F, ($($bound,)+), ($($rest,)+)>;

                #[inline]
                fn bind(self, bound: ($($bound,)+)) -> Self::Output {
                    Partial {
                        function: self,
                        bound,
                        remaining: PhantomData,
                    }
                }
            }

            impl<F, $($bound,)+ $($rest),+> Function<($($rest,)+)>
                for Partial<F, ($($bound,)+), ($($rest,)+)>
            where
                F: Function<($($bound,)+ $($rest,)+)>,
            {
                type Output = F::Output;

                const ARITY: usize = count_params!($($rest)+);

                #[inline]
                fn apply_once(self, ($([<$rest:lower>],)+): ($($rest,)+)) -> Self::Output {
                    let ($([<$bound:lower>],)+) = self.bound;
                    self.function
                        .apply_once(($([<$bound:lower>],)+ $([<$rest:lower>],)+))
                }
            }

            impl<F, $($bound,)+ $($rest),+> ReusableFunction<($($rest,)+)>
                for Partial<F, ($($bound,)+), ($($rest,)+)>
            where
                F: ReusableFunction<($($bound,)+ $($rest,)+)>,
                $($bound: Clone,)+
            {
                #[inline]
                fn apply(&self, ($([<$rest:lower>],)+): ($($rest,)+)) -> Self::Output {
                    let ($([<$bound:lower>],)+) = self.bound.clone();
                    self.function
                        .apply(($([<$bound:lower>],)+ $([<$rest:lower>],)+))
                }
            }
        }
    };
}

for_each_split!(impl_bind);

/// Binds the tuple `bound` as the leading arguments of `function`.
///
/// # Examples
///
/// ```
/// use arity::compose::partial;
/// use arity::signature::Function;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// // a proper prefix yields a callable over the rest
/// assert_eq!(partial(add_three, (1, 2)).apply_once((3,)), 6);
///
/// // binding everything calls the function
/// assert_eq!(partial(add_three, (1, 2, 3)), 6);
///
/// // binding nothing returns the function
/// assert_eq!(partial(add_three, ())(1, 2, 3), 6);
/// ```
///
/// Too many arguments are rejected at compile time:
///
/// ```compile_fail
/// use arity::compose::partial;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// let _ = partial(add, (1, 2, 3));
/// ```
#[inline]
pub fn partial<F, Bound, Args>(function: F, bound: Bound) -> F::Output
where
    F: Bind<Bound, Args>,
{
    function.bind(bound)
}

/// Binds a leading argument prefix; the variadic form of [`partial`].
///
/// `partial!(f)` is `f`, `partial!(f, a, b)` is `partial(f, (a, b))`.
///
/// # Examples
///
/// ```
/// use arity::partial;
/// use arity::signature::ReusableFunction;
///
/// fn format_greeting(greeting: &str, name: &str, punctuation: char) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let hello = partial!(format_greeting, "Hello");
/// assert_eq!(hello.apply(("Alice", '!')), "Hello, Alice!");
///
/// let hello_bob = partial!(format_greeting, "Hello", "Bob");
/// assert_eq!(hello_bob.apply(('?',)), "Hello, Bob?");
///
/// assert_eq!(partial!(format_greeting, "Hi", "Carol", '.'), "Hi, Carol.");
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr $(,)?) => {
        $function
    };

    ($function:expr, $($argument:expr),+ $(,)?) => {
        $crate::compose::partial($function, ($($argument,)+))
    };
}
