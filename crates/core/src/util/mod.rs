/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took at the given level (debug by default),
/// and evaluates to the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Integer square root, i.e. `floor(sqrt(n))`. The float estimate is only a
/// starting point, it gets corrected so the result is exact for any `u128`.
pub fn isqrt(n: u128) -> u128 {
    let mut root = (n as f64).sqrt() as u128;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

/// `sqrt(n)` rounded half-up to an integer, computed exactly. `sqrt(n)` of an
/// integer is never exactly `k + 0.5`, so this is `r` or `r + 1` where
/// `r = floor(sqrt(n))`, depending on whether `n >= r² + r + 1`.
pub fn round_sqrt(n: u128) -> u128 {
    let root = isqrt(n);
    if n - root * root > root {
        root + 1
    } else {
        root
    }
}

/// Round a float half-up, i.e. `floor(x + 0.5)`
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Represent a non-negative number as a whole integer `N` or a half-integer
/// `N.5`. Fractions up to a quarter are dropped, up to three quarters become
/// a half, anything above that rounds up to the next integer.
pub fn round_to_half(value: f64) -> String {
    let whole = value.trunc();
    let fraction = value - whole;
    if fraction <= 0.25 {
        format!("{}", whole as i64)
    } else if fraction <= 0.75 {
        format!("{}.5", whole as i64)
    } else {
        format!("{}", whole as i64 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(8), 2);
        assert_eq!(isqrt(9), 3);
        assert_eq!(isqrt(275), 16);
        assert_eq!(isqrt(u64::MAX as u128), 4_294_967_295);
        assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    }

    #[test]
    fn test_round_sqrt() {
        // sqrt(129) = 11.36
        assert_eq!(round_sqrt(129), 11);
        // sqrt(273) = 16.52
        assert_eq!(round_sqrt(273), 17);
        // 16.5² = 272.25, so 272 stays down and 273 goes up
        assert_eq!(round_sqrt(272), 16);
        assert_eq!(round_sqrt(64), 8);
        assert_eq!(round_sqrt(0), 0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(1.49), 1);
        assert_eq!(round_half_up(0.13), 0);
    }

    #[test]
    fn test_round_to_half() {
        assert_eq!(round_to_half(3.0), "3");
        assert_eq!(round_to_half(2.25), "2");
        assert_eq!(round_to_half(2.26), "2.5");
        assert_eq!(round_to_half(2.75), "2.5");
        assert_eq!(round_to_half(2.9), "3");
        assert_eq!(round_to_half(0.968), "1");
    }
}
