use chrono::NaiveDate;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use thiserror::Error;

use crate::error::{InvoiceError, Result};

/// Why an answer was rejected. Shown to the user before asking again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number")]
    InvalidNumber,

    #[error("Please enter a number that is zero or greater")]
    Negative,

    #[error("Please use the format YYYY-MM-DD")]
    InvalidDate,
}

/// Parse a non-negative decimal such as hours or an hourly rate
pub fn parse_amount(input: &str) -> std::result::Result<f64, InputError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber)?;

    if !value.is_finite() {
        return Err(InputError::InvalidNumber);
    }
    if value < 0.0 {
        return Err(InputError::Negative);
    }
    Ok(value)
}

/// Parse a calendar date in YYYY-MM-DD form
pub fn parse_date(input: &str) -> std::result::Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate)
}

/// Only "y" or "yes" (any case) count as agreement
pub fn is_affirmative(input: &str) -> bool {
    let answer = input.trim().to_ascii_lowercase();
    answer == "y" || answer == "yes"
}

/// Line-oriented question and answer over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
    currency_symbol: String,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            currency_symbol: "$".to_string(),
        }
    }

    pub fn with_currency(mut self, symbol: &str) -> Self {
        self.currency_symbol = symbol.to_string();
        self
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a full line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Show `label` and wait for one line of input. Closed input counts as cancellation.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InvoiceError::Cancelled);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Keep asking until `parse` accepts the answer
    pub fn ask_until<T, F>(&mut self, label: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, InputError>,
    {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(%answer, error = %e, "rejected input");
                    self.say(&e.to_string())?;
                }
            }
        }
    }

    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        Ok(is_affirmative(&self.ask(label)?))
    }
}
