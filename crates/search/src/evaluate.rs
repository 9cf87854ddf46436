use fermat_core::Candidate;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::bracket::PowerBracket;

/// How closely one candidate's sum of powers misses a perfect power.
#[derive(Debug, Clone, PartialEq)]
pub struct MissEvaluation {
    pub candidate: Candidate,

    /// `x^n + y^n`, exact.
    pub lhs: BigUint,

    /// The base whose nth power is nearest to `lhs`.
    pub z: u64,

    /// `|lhs - z^n|`, exact.
    pub actual_miss: BigUint,

    /// `actual_miss / lhs`.
    pub relative_miss: f64,
}

/// Evaluates a candidate against the nearest integer nth power.
///
/// The candidate's bases must not both be zero.
#[must_use]
pub fn evaluate(candidate: Candidate, n: u32) -> MissEvaluation {
    let lhs = BigUint::from(candidate.x).pow(n) + BigUint::from(candidate.y).pow(n);

    let (z, actual_miss) = PowerBracket::around(&lhs, n).nearest(&lhs);
    let relative_miss = ratio(&actual_miss, &lhs);

    MissEvaluation {
        candidate,
        lhs,
        z,
        actual_miss,
        relative_miss,
    }
}

fn ratio(numerator: &BigUint, denominator: &BigUint) -> f64 {
    let num = numerator.to_f64().unwrap_or(f64::INFINITY);
    let den = denominator.to_f64().unwrap_or(f64::INFINITY);
    num / den
}
