use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use fermat_core::{ParamsError, SearchParameters};
use thiserror::Error;

/// Why a line of user input was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Input cannot be blank. Please enter an integer.")]
    Blank,

    #[error("Please enter a valid integer.")]
    NotAnInteger,

    #[error("Invalid. {0}.")]
    OutOfRange(#[from] ParamsError),
}

/// Parses and validates an exponent.
///
/// # Errors
///
/// Returns an error if the input is blank, not an integer, or outside `3..=11`.
pub fn parse_exponent(raw: &str) -> Result<u32, InputError> {
    let value = parse_integer(raw)?;
    let n = u32::try_from(value).unwrap_or(if value < 0 { 0 } else { u32::MAX });
    Ok(SearchParameters::check_exponent(n)?)
}

/// Parses and validates a bound.
///
/// # Errors
///
/// Returns an error if the input is blank, not an integer, not greater than 10,
/// or too large to represent.
pub fn parse_bound(raw: &str) -> Result<u64, InputError> {
    let value = parse_integer(raw)?;
    let k = match u64::try_from(value) {
        Ok(k) => k,
        Err(_) if value < 0 => 0,
        Err(_) => return Err(InputError::NotAnInteger),
    };
    Ok(SearchParameters::check_bound(k)?)
}

fn parse_integer(raw: &str) -> Result<i128, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank);
    }
    trimmed.parse().map_err(|_| InputError::NotAnInteger)
}

/// Asks for a value until `parse` accepts a line.
///
/// Each rejected line is answered with the parse error's message.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the input ends before
/// a valid value is entered.
pub fn prompt_until_valid<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    parse: F,
) -> anyhow::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}").context("failed to write prompt")?;
        output.flush().context("failed to flush prompt")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            bail!("input ended before a valid value was entered");
        }

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(error) => {
                tracing::debug!(input = line.trim(), %error, "rejected input");
                writeln!(output, "{error}").context("failed to write message")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_accepts_range_with_whitespace() {
        assert_eq!(parse_exponent(" 3\n"), Ok(3));
        assert_eq!(parse_exponent("11"), Ok(11));
    }

    #[test]
    fn exponent_rejections() {
        assert_eq!(parse_exponent("   "), Err(InputError::Blank));
        assert_eq!(parse_exponent("three"), Err(InputError::NotAnInteger));
        assert_eq!(parse_exponent("4.5"), Err(InputError::NotAnInteger));
        assert_eq!(
            parse_exponent("12"),
            Err(InputError::OutOfRange(ParamsError::ExponentOutOfRange(12)))
        );
        assert!(matches!(
            parse_exponent("-4"),
            Err(InputError::OutOfRange(ParamsError::ExponentOutOfRange(_)))
        ));
        assert!(matches!(
            parse_exponent("99999999999"),
            Err(InputError::OutOfRange(ParamsError::ExponentOutOfRange(_)))
        ));
    }

    #[test]
    fn bound_rejections() {
        assert_eq!(parse_bound("11"), Ok(11));
        assert_eq!(parse_bound(""), Err(InputError::Blank));
        assert_eq!(
            parse_bound("10"),
            Err(InputError::OutOfRange(ParamsError::BoundTooSmall(10)))
        );
        assert_eq!(
            parse_bound("-20"),
            Err(InputError::OutOfRange(ParamsError::BoundTooSmall(0)))
        );
        assert_eq!(
            parse_bound("100000000000000000000000"),
            Err(InputError::NotAnInteger)
        );
    }

    #[test]
    fn prompt_repeats_until_valid() {
        let mut input = "\nabc\n2\n5\n".as_bytes();
        let mut output = Vec::new();

        let n = prompt_until_valid(&mut input, &mut output, "n: ", parse_exponent)
            .expect("fourth line is valid");

        assert_eq!(n, 5);

        let transcript = String::from_utf8(output).expect("utf8");
        assert_eq!(transcript.matches("n: ").count(), 4);
        assert!(transcript.contains("Input cannot be blank."));
        assert!(transcript.contains("Please enter a valid integer."));
        assert!(transcript.contains("Invalid. n must be an integer between 3 and 11 (inclusive)."));
    }

    #[test]
    fn prompt_fails_when_input_ends() {
        let mut input = "1\n".as_bytes();
        let mut output = Vec::new();

        let result = prompt_until_valid(&mut input, &mut output, "k: ", parse_bound);

        assert!(result.is_err());
    }
}
