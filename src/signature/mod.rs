//! Signature introspection for callable values.
//!
//! A callable's signature is the ordered tuple of its parameter types plus its
//! result type. In this crate that shape is expressed as a trait bound rather
//! than discovered at run time: a value `F` "has signature `(P1, .., Pn) -> R`"
//! exactly when `F: Function<(P1, .., Pn), Output = R>`.
//!
//! # Overview
//!
//! - [`Function`]: consuming invocation with the whole argument list as a tuple.
//!   Implemented for every `FnOnce(P1, .., Pn) -> R` with `n <= 8`.
//! - [`ReusableFunction`]: invocation by reference, implemented for every
//!   `Fn(P1, .., Pn) -> R`.
//! - [`arity`]: reads the parameter count of a value.
//! - [`ResultOf`]: names the result type of a signature.
//!
//! Combinator outputs ([`Pipe`](crate::compose::Pipe),
//! [`Partial`](crate::compose::Partial) and friends) implement the same two
//! traits, so anything a combinator produces can be handed to another one.
//!
//! # Resolution
//!
//! Plain functions, function pointers and closures resolve through the blanket
//! impls below. A method is just a function whose first parameter is the
//! receiver: bind the receiver in a closure (or with
//! [`partial`](crate::compose::partial)) to obtain the receiver-free signature.
//!
//! The parameter tuple is a trait parameter, so it is usually inferred from the
//! callable itself. A closure whose parameter types cannot be inferred, or a
//! generic function that is not instantiated, has no single signature and is
//! rejected at compile time.
//!
//! # Examples
//!
//! ```
//! use arity::signature::{Function, ReusableFunction, arity};
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(arity(&add), 2);
//! assert_eq!(add.apply((1, 2)), 3);
//!
//! let greeting = String::from("hello");
//! let consume = move |suffix: &str| greeting + suffix;
//! assert_eq!(consume.apply_once((", world",)), "hello, world");
//! ```

pub(crate) mod tuple;

use tuple::{count_params, for_each_arity};

/// A callable with a statically known parameter list `Args` that may be
/// invoked once.
///
/// `Args` is always a tuple: `()` for nullary callables, `(P1,)` for unary
/// ones, `(P1, P2)` for binary ones and so on.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with the argument list `{Args}`",
    label = "expected a callable taking `{Args}`",
    note = "callables with up to eight parameters are supported; closures may need parameter type annotations"
)]
pub trait Function<Args> {
    /// The result type of the invocation.
    type Output;

    /// The number of declared parameters.
    const ARITY: usize;

    /// Invokes the callable, consuming it.
    fn apply_once(self, args: Args) -> Self::Output;
}

/// A callable that can be invoked any number of times through a shared
/// reference.
pub trait ReusableFunction<Args>: Function<Args> {
    /// Invokes the callable without consuming it.
    fn apply(&self, args: Args) -> Self::Output;
}

/// The result type of calling `F` with `Args`.
pub type ResultOf<F, Args> = <F as Function<Args>>::Output;

/// Returns the number of declared parameters of `function`.
///
/// The value is a compile-time constant of the callable's type; the argument
/// is only used to drive inference.
///
/// # Examples
///
/// ```
/// use arity::signature::arity;
///
/// assert_eq!(arity(&|| 0), 0);
/// assert_eq!(arity(&|value: u8| value), 1);
/// assert_eq!(arity(&|a: u8, b: u8, c: u8| a + b + c), 3);
/// ```
#[inline]
pub const fn arity<F, Args>(_function: &F) -> usize
where
    F: Function<Args>,
{
    F::ARITY
}

macro_rules! impl_function_for_closures {
    ($($param:ident),*) => {
        paste::paste! {
            impl<F, R, $($param),*> Function<($($param,)*)> for F
            where
                F: FnOnce($($param),*) -> R,
            {
                type Output = R;

                const ARITY: usize = count_params!($($param)*);

                #[inline]
                fn apply_once(self, ($([<$param:lower>],)*): ($($param,)*)) -> R {
                    self($([<$param:lower>]),*)
                }
            }

            impl<F, R, $($param),*> ReusableFunction<($($param,)*)> for F
            where
                F: Fn($($param),*) -> R,
            {
                #[inline]
                fn apply(&self, ($([<$param:lower>],)*): ($($param,)*)) -> R {
                    self($([<$param:lower>]),*)
                }
            }
        }
    };
}

for_each_arity!(impl_function_for_closures);
