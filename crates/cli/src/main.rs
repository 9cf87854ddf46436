//! Command-line front end for the Fermat near-miss search.
//!
//! Usage:
//!   near-miss                     # prompts for n and k
//!   near-miss -n 3 -k 1000
//!   RUST_LOG=debug near-miss -n 5 -k 200 --pause

mod args;
mod input;
mod interrupt;
mod report;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use fermat_core::SearchParameters;
use tracing_subscriber::EnvFilter;

use args::Args;
use input::{parse_bound, parse_exponent, prompt_until_valid};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    println!("{}", report::BANNER);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let params = resolve_params(&args, &mut input, &mut output)?;

    println!("\n{}\n", report::search_header(&params));

    let solution = interrupt::run_until_interrupted(params)?;

    println!("\n{}", report::Final(solution.best.as_ref()));

    if args.pause {
        pause(&mut input, &mut output)?;
    }

    Ok(())
}

/// Takes `n` and `k` from the flags, prompting for whichever is missing.
fn resolve_params<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<SearchParameters> {
    let n = match args.exponent {
        Some(n) => n,
        None => prompt_until_valid(
            input,
            output,
            "Enter exponent n (integer, 3..11): ",
            parse_exponent,
        )?,
    };

    let k = match args.bound {
        Some(k) => k,
        None => prompt_until_valid(
            input,
            output,
            "Enter upper bound k for x and y (integer, k > 10): ",
            parse_bound,
        )?,
    };

    SearchParameters::new(n, k).context("invalid search parameters")
}

fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<()> {
    write!(output, "\nPress Enter to exit...")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read from stdin")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_skip_prompts() {
        let args = Args::try_parse_from(["near-miss", "-n", "3", "-k", "11"]).expect("valid");
        let mut input = "".as_bytes();
        let mut output = Vec::new();

        let params = resolve_params(&args, &mut input, &mut output).expect("no prompt needed");

        assert_eq!((params.n(), params.k()), (3, 11));
        assert!(output.is_empty());
    }

    #[test]
    fn prompts_for_missing_bound() {
        let args = Args::try_parse_from(["near-miss", "-n", "7"]).expect("valid");
        let mut input = "5\n42\n".as_bytes();
        let mut output = Vec::new();

        let params =
            resolve_params(&args, &mut input, &mut output).expect("second line is valid");

        assert_eq!((params.n(), params.k()), (7, 42));

        let transcript = String::from_utf8(output).expect("utf8");
        assert!(transcript.contains("k must be an integer greater than 10"));
        assert!(!transcript.contains("Enter exponent"));
    }
}
