use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Two consecutive integers whose nth powers enclose a value.
///
/// Holds `low` with `low^n <= value < (low + 1)^n`, along with both powers
/// computed exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerBracket {
    /// The integer floor of the real nth root.
    pub low: u64,

    /// `low^n`.
    pub low_pow: BigUint,

    /// `(low + 1)^n`.
    pub high_pow: BigUint,
}

impl PowerBracket {
    /// Brackets the real nth root of `value`.
    ///
    /// Starts from a floating-point estimate and walks it until the exact
    /// powers enclose `value`. For large values the estimate can land one unit
    /// to either side of the true floor.
    #[must_use]
    pub fn around(value: &BigUint, n: u32) -> Self {
        let estimate = estimate_root(value, n);

        let mut low = estimate;
        let mut low_pow = BigUint::from(low).pow(n);
        while low > 0 && low_pow > *value {
            low -= 1;
            low_pow = BigUint::from(low).pow(n);
        }

        let mut high_pow = BigUint::from(low + 1).pow(n);
        while high_pow <= *value {
            low += 1;
            low_pow = high_pow;
            high_pow = BigUint::from(low + 1).pow(n);
        }

        if low != estimate {
            tracing::trace!(n, estimate, corrected = low, "root estimate was off");
        }

        Self {
            low,
            low_pow,
            high_pow,
        }
    }

    /// Returns the upper end of the bracket, `low + 1`.
    #[must_use]
    pub fn high(&self) -> u64 {
        self.low + 1
    }

    /// Picks the end of the bracket whose power is nearest to `value`.
    ///
    /// Returns the chosen base and the absolute distance of its power from
    /// `value`. On an exact tie the lower end wins.
    #[must_use]
    pub fn nearest(&self, value: &BigUint) -> (u64, BigUint) {
        let miss_low = abs_diff(value, &self.low_pow);
        let miss_high = abs_diff(&self.high_pow, value);

        if miss_low <= miss_high {
            (self.low, miss_low)
        } else {
            (self.high(), miss_high)
        }
    }
}

/// Floor of `value^(1/n)` computed in floating point.
fn estimate_root(value: &BigUint, n: u32) -> u64 {
    let approx = value.to_f64().unwrap_or(f64::INFINITY);
    // Saturating cast; the walk in `around` fixes any error.
    approx.powf(1.0 / f64::from(n)).floor() as u64
}

fn abs_diff(a: &BigUint, b: &BigUint) -> BigUint {
    if a >= b { a - b } else { b - a }
}
