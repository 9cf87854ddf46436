use clap::Parser;

use crate::input::{parse_bound, parse_exponent};

/// Search for integer near misses of Fermat's Last Theorem: x^n + y^n ≈ z^n.
///
/// Any value not given on the command line is prompted for.
#[derive(Debug, Parser)]
#[command(name = "near-miss", version)]
pub struct Args {
    /// Exponent n (integer, 3..=11)
    #[arg(short = 'n', long = "exponent", value_parser = parse_exponent)]
    pub exponent: Option<u32>,

    /// Upper bound k for x and y (integer, k > 10)
    #[arg(short = 'k', long = "bound", value_parser = parse_bound)]
    pub bound: Option<u64>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let args = Args::try_parse_from(["near-miss", "-n", "5", "-k", "200"]).expect("valid");

        assert_eq!(args.exponent, Some(5));
        assert_eq!(args.bound, Some(200));
        assert!(!args.pause);
    }

    #[test]
    fn values_are_optional() {
        let args = Args::try_parse_from(["near-miss", "--pause"]).expect("valid");

        assert_eq!(args.exponent, None);
        assert_eq!(args.bound, None);
        assert!(args.pause);
    }

    #[test]
    fn rejects_invalid_flag_values() {
        assert!(Args::try_parse_from(["near-miss", "--exponent", "2"]).is_err());
        assert!(Args::try_parse_from(["near-miss", "--bound", "10"]).is_err());
        assert!(Args::try_parse_from(["near-miss", "--bound", "ten"]).is_err());
    }
}
