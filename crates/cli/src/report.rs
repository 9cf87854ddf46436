use std::fmt;

use fermat_core::SearchParameters;
use fermat_search::NearMiss;

pub const BANNER: &str = "\
Fermat Near Miss Finder
Find integer near-misses of x^n + y^n ≈ z^n
Note: valid n values are integers with 3 ≤ n ≤ 11. x and y range from 10..k (k>10).";

/// The lines printed before the scan starts.
pub fn search_header(params: &SearchParameters) -> String {
    format!(
        "Searching near misses with n = {}, x and y in [10, {}] ...\n\
         This may take a while for large k. The program will report each time a new best is found.",
        params.n(),
        params.k()
    )
}

/// A new champion, printed as soon as it is found.
pub struct Update<'a>(pub &'a NearMiss);

impl fmt::Display for Update<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let best = self.0;
        writeln!(f, "--- New best near miss found ---")?;
        writeln!(f, "x = {}, y = {}, chosen z = {}", best.x, best.y, best.z)?;
        writeln!(f, "Actual miss (integer) = {}", best.actual_miss)?;
        write!(
            f,
            "Relative miss = {:.10} ({:.6}%)",
            best.relative_miss,
            best.relative_miss * 100.0
        )
    }
}

/// The overall result, printed last.
pub struct Final<'a>(pub Option<&'a NearMiss>);

impl fmt::Display for Final<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== FINAL / BEST RESULT (printed last) ===")?;
        let Some(best) = self.0 else {
            return write!(f, "No valid results found.");
        };
        writeln!(f, "x = {}, y = {}, z = {}", best.x, best.y, best.z)?;
        writeln!(f, "Actual miss = {}", best.actual_miss)?;
        write!(
            f,
            "Relative miss = {:.12} ({:.8}%)",
            best.relative_miss,
            best.relative_miss * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigUint;

    fn ten_ten() -> NearMiss {
        NearMiss {
            x: 10,
            y: 10,
            z: 13,
            actual_miss: BigUint::from(197_u32),
            relative_miss: 0.0985,
        }
    }

    #[test]
    fn update_block() {
        let text = Update(&ten_ten()).to_string();

        assert_eq!(
            text,
            "--- New best near miss found ---\n\
             x = 10, y = 10, chosen z = 13\n\
             Actual miss (integer) = 197\n\
             Relative miss = 0.0985000000 (9.850000%)"
        );
    }

    #[test]
    fn final_block() {
        let best = ten_ten();
        let text = Final(Some(&best)).to_string();

        assert!(text.starts_with("=== FINAL / BEST RESULT (printed last) ===\n"));
        assert!(text.contains("x = 10, y = 10, z = 13\n"));
        assert!(text.contains("Actual miss = 197\n"));
        assert!(text.ends_with("Relative miss = 0.098500000000 (9.85000000%)"));
    }

    #[test]
    fn final_without_result() {
        let text = Final(None).to_string();
        assert!(text.ends_with("No valid results found."));
    }

    #[test]
    fn header_names_the_parameters() {
        let params = SearchParameters::new(4, 250).expect("valid");
        let text = search_header(&params);
        assert!(text.starts_with("Searching near misses with n = 4, x and y in [10, 250] ..."));
    }
}
