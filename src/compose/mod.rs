//! Function combinators.
//!
//! This module turns callables into related callables: curried, partially
//! applied, chained, fanned out, or observed. Every combinator output is
//! itself a [`Function`](crate::signature::Function) (and a
//! [`ReusableFunction`](crate::signature::ReusableFunction) whenever its parts
//! are), so the combinators nest freely.
//!
//! # Overview
//!
//! - [`curry`]: n-ary callable to a chain of unary [`Append`] steps
//! - [`partial`] / [`partial!`]: bind a leading argument prefix
//! - [`pipe`] / [`pipe!`]: left-to-right composition
//! - [`compose()`] / [`compose!`]: right-to-left composition
//! - [`fork_join`]: run two branches on the same arguments and merge
//! - [`seq`] / [`seq!`]: ordered side effects, value passed through
//! - [`identity`]: the unit of composition
//! - `curry!` (feature `derive`): currying with plain call syntax
//!
//! # Examples
//!
//! ```
//! use arity::prelude::*;
//! use arity::{compose, partial, pipe};
//!
//! fn add_three(x: i32, y: i32, z: i32) -> i32 { x + y + z }
//! fn double(n: i32) -> i32 { 2 * n }
//! fn increment(n: i32) -> i32 { n + 1 }
//! fn square(n: i32) -> i32 { n * n }
//! fn negate(n: i32) -> i32 { -n }
//! fn add(a: i32, b: i32) -> i32 { a + b }
//!
//! assert_eq!(curry(add_three).append(1).append(2).append(3), 6);
//! assert_eq!(partial!(add_three, 1, 2).apply((3,)), 6);
//! assert_eq!(pipe!(double, increment).apply((3,)), 7);
//! assert_eq!(compose!(double, increment).apply((3,)), 8);
//! assert_eq!(fork_join(square, negate, add).apply((3,)), 6);
//! ```
//!
//! # Ownership
//!
//! Combinators own the callables they wrap. Consuming calls
//! ([`Append::append`], [`Function::apply_once`](crate::signature::Function::apply_once))
//! move captured state; nothing is duplicated behind the caller's back. Clone
//! an accumulator or a partial application explicitly to reuse it.
//!
//! # Errors
//!
//! Misuse is a compile error: binding too many arguments, chaining stages
//! whose types do not line up, or appending past the last parameter. Panics
//! raised by wrapped callables unwind through every combinator untouched, and
//! `Result`-returning stages are treated as ordinary values.

mod accumulator;
mod compose_macro;
mod curry;
mod fork_join;
mod partial_macro;
mod pipe_macro;
mod seq_macro;
mod utils;

pub use accumulator::{Accumulator, Append};
pub use compose_macro::{Compose, compose};
pub use curry::{Curry, curry};
pub use fork_join::{ForkJoin, fork_join};
pub use partial_macro::{Bind, Partial, partial};
pub use pipe_macro::{Pipe, pipe};
pub use seq_macro::seq;
pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::partial;
pub use crate::pipe;
pub use crate::seq;

#[cfg(feature = "derive")]
pub use arity_derive::curry;
