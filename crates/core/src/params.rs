use thiserror::Error;

use crate::Candidates;

/// Smallest exponent accepted by [`SearchParameters::new`].
pub const MIN_EXPONENT: u32 = 3;

/// Largest exponent accepted by [`SearchParameters::new`].
pub const MAX_EXPONENT: u32 = 11;

/// Smallest base on the search lattice; both `x` and `y` start here.
pub const MIN_BASE: u64 = 10;

/// Exponent and bound for one near-miss search.
///
/// Both bases range over the closed interval `[MIN_BASE, k]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParameters {
    n: u32,
    k: u64,
}

/// Errors that can occur when validating search parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("n must be an integer between 3 and 11 (inclusive)")]
    ExponentOutOfRange(u32),

    #[error("k must be an integer greater than 10")]
    BoundTooSmall(u64),
}

impl SearchParameters {
    /// Creates validated search parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is outside `3..=11` or `k` is not greater than 10.
    pub fn new(n: u32, k: u64) -> Result<Self, ParamsError> {
        Self::check_exponent(n)?;
        Self::check_bound(k)?;
        Ok(Self { n, k })
    }

    /// Creates search parameters without validation.
    ///
    /// The scan stays well defined for any `n >= 1`; a bound below
    /// [`MIN_BASE`] simply yields an empty lattice. Front ends should use
    /// [`SearchParameters::new`].
    #[must_use]
    pub fn new_unchecked(n: u32, k: u64) -> Self {
        Self { n, k }
    }

    /// Checks an exponent on its own, for front ends that collect `n` and `k`
    /// separately.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::ExponentOutOfRange`] if `n` is outside `3..=11`.
    pub fn check_exponent(n: u32) -> Result<u32, ParamsError> {
        if (MIN_EXPONENT..=MAX_EXPONENT).contains(&n) {
            Ok(n)
        } else {
            Err(ParamsError::ExponentOutOfRange(n))
        }
    }

    /// Checks a bound on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::BoundTooSmall`] if `k` is not greater than 10.
    pub fn check_bound(k: u64) -> Result<u64, ParamsError> {
        if k > MIN_BASE {
            Ok(k)
        } else {
            Err(ParamsError::BoundTooSmall(k))
        }
    }

    /// Returns the exponent.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Returns the inclusive upper bound for both bases.
    #[must_use]
    pub fn k(&self) -> u64 {
        self.k
    }

    /// Returns the lattice of candidates in canonical order.
    #[must_use]
    pub fn candidates(&self) -> Candidates {
        Candidates::new(self.k)
    }

    /// Returns the number of candidates on the lattice.
    ///
    /// With `m = k - 9` distinct bases this is `m * (m + 1) / 2`.
    #[must_use]
    pub fn candidate_count(&self) -> u128 {
        let m = u128::from(self.k.saturating_sub(MIN_BASE - 1));
        m * (m + 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_ranges() {
        for n in MIN_EXPONENT..=MAX_EXPONENT {
            let params = SearchParameters::new(n, 11).expect("valid");
            assert_eq!(params.n(), n);
            assert_eq!(params.k(), 11);
        }
    }

    #[test]
    fn rejects_exponent_out_of_range() {
        assert_eq!(
            SearchParameters::new(2, 20),
            Err(ParamsError::ExponentOutOfRange(2))
        );
        assert_eq!(
            SearchParameters::new(12, 20),
            Err(ParamsError::ExponentOutOfRange(12))
        );
    }

    #[test]
    fn rejects_bound_at_or_below_ten() {
        assert_eq!(SearchParameters::new(3, 10), Err(ParamsError::BoundTooSmall(10)));
        assert_eq!(SearchParameters::new(3, 0), Err(ParamsError::BoundTooSmall(0)));
    }

    #[test]
    fn exponent_is_checked_first() {
        assert_eq!(
            SearchParameters::new(1, 1),
            Err(ParamsError::ExponentOutOfRange(1))
        );
    }

    #[test]
    fn candidate_count_matches_enumeration() {
        for k in [9, 10, 11, 12, 25] {
            let params = SearchParameters::new_unchecked(3, k);
            let counted = params.candidates().count() as u128;
            assert_eq!(params.candidate_count(), counted, "k = {k}");
        }
    }

    #[test]
    fn error_messages_name_the_range() {
        let msg = ParamsError::ExponentOutOfRange(42).to_string();
        assert!(msg.contains("between 3 and 11"), "{msg}");

        let msg = ParamsError::BoundTooSmall(4).to_string();
        assert!(msg.contains("greater than 10"), "{msg}");
    }
}
