//! Arity enumeration macros.
//!
//! Every trait impl that depends on the shape of a parameter list is generated
//! by feeding a callback macro to one of the enumerators below. Parameter type
//! names are always `P1` .. `P8`, so a callback can derive binding names from
//! them with `paste`.

/// Counts the identifiers it is given.
macro_rules! count_params {
    () => {
        0usize
    };
    ($head:ident $($tail:ident)*) => {
        1usize + $crate::signature::tuple::count_params!($($tail)*)
    };
}

/// Invokes `$callback!(P1, .., Pn)` for every supported arity, `n` in `0..=8`.
macro_rules! for_each_arity {
    ($callback:ident) => {
        $callback!();
        $callback!(P1);
        $callback!(P1, P2);
        $callback!(P1, P2, P3);
        $callback!(P1, P2, P3, P4);
        $callback!(P1, P2, P3, P4, P5);
        $callback!(P1, P2, P3, P4, P5, P6);
        $callback!(P1, P2, P3, P4, P5, P6, P7);
        $callback!(P1, P2, P3, P4, P5, P6, P7, P8);
    };
}

/// Invokes `$callback!([bound..] [remaining..])` for every way of splitting
/// every supported parameter list into a bound prefix and a remaining suffix.
///
/// For `(P1, P2)` the callback sees `[] [P1, P2]`, `[P1] [P2]` and `[P1, P2] []`.
macro_rules! for_each_split {
    ($callback:ident) => {
        $crate::signature::tuple::for_each_split!(@split $callback [] []);
        $crate::signature::tuple::for_each_split!(@split $callback [] [P1]);
        $crate::signature::tuple::for_each_split!(@split $callback [] [P1, P2]);
        $crate::signature::tuple::for_each_split!(@split $callback [] [P1, P2, P3]);
        $crate::signature::tuple::for_each_split!(@split $callback [] [P1, P2, P3, P4]);
        $crate::signature::tuple::for_each_split!(@split $callback [] [P1, P2, P3, P4, P5]);
        $crate::signature::tuple::for_each_split!(@split $callback [] [P1, P2, P3, P4, P5, P6]);
        $crate::signature::tuple::for_each_split!(
            @split $callback [] [P1, P2, P3, P4, P5, P6, P7]
        );
        $crate::signature::tuple::for_each_split!(
            @split $callback [] [P1, P2, P3, P4, P5, P6, P7, P8]
        );
    };

    (@split $callback:ident [$($bound:ident),*] []) => {
        $callback!([$($bound),*] []);
    };

    (@split $callback:ident [$($bound:ident),*] [$head:ident $(, $rest:ident)*]) => {
        $callback!([$($bound),*] [$head $(, $rest)*]);
        $crate::signature::tuple::for_each_split!(
            @split $callback [$($bound,)* $head] [$($rest),*]
        );
    };
}

pub(crate) use {count_params, for_each_arity, for_each_split};

#[cfg(test)]
mod tests {
    use rstest::rstest;

    macro_rules! arity_of {
        ($($param:ident),*) => {
            count_params!($($param)*)
        };
    }

    #[rstest]
    fn count_params_counts_identifiers() {
        assert_eq!(arity_of!(), 0);
        assert_eq!(arity_of!(P1), 1);
        assert_eq!(arity_of!(P1, P2, P3, P4, P5, P6, P7, P8), 8);
    }

    #[rstest]
    fn for_each_split_visits_every_prefix() {
        let mut splits: Vec<(usize, usize)> = Vec::new();

        macro_rules! record {
            ([$($bound:ident),*] [$($rest:ident),*]) => {
                splits.push((count_params!($($bound)*), count_params!($($rest)*)));
            };
        }

        for_each_split!(record);

        // sum of (n + 1) for n in 0..=8
        assert_eq!(splits.len(), 45);
        assert!(splits.contains(&(0, 0)));
        assert!(splits.contains(&(3, 5)));
        assert!(splits.contains(&(8, 0)));
        assert!(splits.iter().all(|(bound, rest)| bound + rest <= 8));
    }
}
