//! Helper functions for composition.

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// - `compose!(identity, f)` behaves as `f`
/// - `pipe!(f, identity)` behaves as `f`
///
/// # Examples
///
/// ```
/// use arity::compose::identity;
/// use arity::compose;
/// use arity::signature::ReusableFunction;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(compose!(identity, double).apply((5,)), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
