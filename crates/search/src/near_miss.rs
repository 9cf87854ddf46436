use num_bigint::BigUint;

use crate::MissEvaluation;

/// A champion: the candidate with the smallest relative miss at some point
/// in the scan.
///
/// Emitted with every improvement and returned as the final result.
#[derive(Debug, Clone, PartialEq)]
pub struct NearMiss {
    pub x: u64,
    pub y: u64,
    pub z: u64,
    pub actual_miss: BigUint,
    pub relative_miss: f64,
}

impl From<&MissEvaluation> for NearMiss {
    fn from(eval: &MissEvaluation) -> Self {
        Self {
            x: eval.candidate.x,
            y: eval.candidate.y,
            z: eval.z,
            actual_miss: eval.actual_miss.clone(),
            relative_miss: eval.relative_miss,
        }
    }
}
