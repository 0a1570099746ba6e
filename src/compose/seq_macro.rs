//! Ordered side effects over a value that is returned unchanged.

/// Shows `value` to every stage in order, then returns it.
///
/// Each stage receives a shared reference to the same, untouched value;
/// whatever a stage returns is dropped. With no stages this is the identity.
///
/// # Examples
///
/// ```
/// use arity::compose::seq;
///
/// fn check_positive(value: &i32) {
///     assert!(*value > 0);
/// }
///
/// fn check_odd(value: &i32) {
///     assert_eq!(value % 2, 1);
/// }
///
/// let value = seq(7, [check_positive as fn(&i32), check_odd]);
/// assert_eq!(value, 7);
/// ```
#[inline]
pub fn seq<T, I, G, O>(value: T, stages: I) -> T
where
    I: IntoIterator<Item = G>,
    G: FnOnce(&T) -> O,
{
    for stage in stages {
        let _ = stage(&value);
    }
    value
}

/// Runs heterogeneous observer stages over a value, then yields the value.
///
/// `seq!(v, g1, g2)` calls `g1(&v)`, then `g2(&v)`, and evaluates to `v`.
/// `seq!(v)` is `v`.
///
/// # Examples
///
/// ```
/// use arity::seq;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
///
/// let order = seq!(
///     String::from("order-17"),
///     |id: &String| log.borrow_mut().push(format!("validated {id}")),
///     |id: &String| id.len(),
///     |id: &String| log.borrow_mut().push(format!("stored {id}")),
/// );
///
/// assert_eq!(order, "order-17");
/// assert_eq!(*log.borrow(), vec!["validated order-17", "stored order-17"]);
/// ```
#[macro_export]
macro_rules! seq {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $($stage:expr),+ $(,)?) => {{
        let value = $value;
        $(
            let _ = ($stage)(&value);
        )+
        value
    }};
}
