/// Assert that the floating point numbers are equal within the given epsilon.
#[cfg(test)]
macro_rules! assert_float_eq {
    ($a:expr, $b:expr, $eps:expr, $debug:expr) => {{
        // Make variables to avoid evaluating experssions multiple times.
        let a: f64 = $a;
        let b: f64 = $b;
        let eps: f64 = $eps;
        let error = (a - b).abs();
        if error > eps {
            eprintln!("{:?}", $debug);
        }
        assert!(
            error <= eps,
            "Assertion failed: |({}) - ({})| = {:e} <= {:e}",
            a,
            b,
            error,
            eps
        );
    }};
    ($a:expr, $b:expr, $eps:expr) => {
        $crate::macros::assert_float_eq!($a, $b, $eps, "")
    };
    ($a:expr, $b:expr) => {
        $crate::macros::assert_float_eq!($a, $b, f64::EPSILON)
    };
}

/// Assert that two uv positions are equal within the given epsilon.
#[cfg(test)]
macro_rules! assert_uv_eq {
    ($a:expr, $b:expr, $eps:expr) => {{
        let a: glam::DVec2 = $a;
        let b: glam::DVec2 = $b;
        $crate::macros::assert_float_eq!(a.x, b.x, $eps, (a, b));
        $crate::macros::assert_float_eq!(a.y, b.y, $eps, (a, b));
    }};
    ($a:expr, $b:expr) => {
        $crate::macros::assert_uv_eq!($a, $b, 1e-9)
    };
}

#[cfg(test)]
pub(crate) use assert_float_eq;
#[cfg(test)]
pub(crate) use assert_uv_eq;
