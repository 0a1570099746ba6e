//! Procedural macros for the arity function combinator library.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a multi-argument closure or function into a chain of
//!   single-argument closures called with plain call syntax
//!
//! # Example
//!
//! ```rust,ignore
//! use arity::compose::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a multi-argument closure or function into curried form.
///
/// The result takes one argument per call and invokes the wrapped callable
/// once the last argument arrives: `curry!(f, 3)(a)(b)(c) == f(a, b, c)`.
///
/// # Supported Forms
///
/// - `curry!(|a: A, b: B| body)`: arity read from the closure's parameters,
///   annotations carried onto the generated stages
/// - `curry!(function, n)`: `n` must be an integer literal
///
/// Arity 0 and 1 callables are returned unchanged.
///
/// # Ownership
///
/// Every stage is a `move` closure that captures the wrapped callable and the
/// arguments received so far. Nothing is cloned or reference counted: when all
/// captures are `Copy` each intermediate stage can be reused, otherwise a
/// stage is consumed by its first call. Clone the values up front to reuse a
/// stage over non-`Copy` data.
///
/// # Errors
///
/// Produces a compile error when a bare path is given without an arity, when
/// the arity is not an integer literal, or when the input is neither a closure
/// nor a path.
///
/// # Example
///
/// ```rust,ignore
/// use arity::compose::curry;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let flat = curried(2);
/// assert_eq!(flat(3)(4), 24);
/// assert_eq!(flat(5)(1), 10);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
