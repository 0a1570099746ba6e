//! # arity
//!
//! Arity-aware function combinators for Rust: currying, partial application,
//! left-to-right and right-to-left composition, fork-join and sequencing.
//!
//! ## Overview
//!
//! Every combinator is driven by a callable's statically known signature.
//! The parameter list of a callable is a tuple type discovered through the
//! [`Function`](signature::Function) trait, so argument counts and types are
//! checked by the compiler and nothing is erased or boxed.
//!
//! - **Signature**: [`Function`](signature::Function) and
//!   [`ReusableFunction`](signature::ReusableFunction), implemented for all
//!   closures and functions with up to eight parameters
//! - **Function Composition**: `curry`, `partial!`, `pipe!`, `compose!`,
//!   `fork_join`, `seq!`
//!
//! ## Feature Flags
//!
//! - `compose`: Function combinators (enabled by default)
//! - `derive`: The `curry!` procedural macro (enabled by default)
//! - `rayon`: Parallel branches for `ForkJoin::apply_par`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use arity::prelude::*;
//!
//! fn add_three(first: i32, second: i32, third: i32) -> i32 {
//!     first + second + third
//! }
//!
//! assert_eq!(curry(add_three).append(1).append(2).append(3), 6);
//! assert_eq!(partial(add_three, (1, 2)).apply((3,)), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use arity::prelude::*;
/// ```
pub mod prelude {
    pub use crate::signature::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod signature;

#[cfg(feature = "compose")]
pub mod compose;
