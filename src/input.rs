//! Console input with defaults
//!
//! Every numeric prompt has a default. Blank or unparsable input falls back
//! to it silently; [`Parsed::defaulted`] records that it happened.

use std::io::{BufRead, Write};

use crate::core::PricerResult;

/// A value read from the user, and whether the default was used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Parsed<T> {
    pub fn supplied(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

/// Parse a number, falling back to `default` on blank or invalid input
///
/// Surrounding whitespace is ignored. The whole token must be a number:
/// `"0.25"` parses, `"0.25y"` falls back.
pub fn parse_with_fallback(input: &str, default: f64) -> Parsed<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Parsed::fallback(default);
    }

    match trimmed.parse::<f64>() {
        Ok(value) => Parsed::supplied(value),
        Err(_) => {
            tracing::debug!("Unparsable input {:?}, using default {}", trimmed, default);
            Parsed::fallback(default)
        }
    }
}

/// Line-oriented prompts over any reader and writer
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` and read one line; `None` at end of input
    pub fn read_line(&mut self, prompt: &str) -> PricerResult<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Free text, `default` when blank
    pub fn prompt_text(&mut self, prompt: &str, default: &str) -> PricerResult<Parsed<String>> {
        let line = self.read_line(prompt)?.unwrap_or_default();
        let trimmed = line.trim();

        Ok(if trimmed.is_empty() {
            Parsed::fallback(default.to_string())
        } else {
            Parsed::supplied(trimmed.to_string())
        })
    }

    /// Number, `default` when blank or unparsable
    pub fn prompt_number(&mut self, prompt: &str, default: f64) -> PricerResult<Parsed<f64>> {
        let line = self.read_line(prompt)?.unwrap_or_default();
        Ok(parse_with_fallback(&line, default))
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_supplied() {
        assert_eq!(parse_with_fallback("0.25", 0.5), Parsed::supplied(0.25));
        assert_eq!(parse_with_fallback("  105 \n", 0.0), Parsed::supplied(105.0));
        assert_eq!(parse_with_fallback("-0.01", 0.01), Parsed::supplied(-0.01));
    }

    #[test]
    fn test_parse_fallback() {
        assert_eq!(parse_with_fallback("", 0.5), Parsed::fallback(0.5));
        assert_eq!(parse_with_fallback("   ", 0.5), Parsed::fallback(0.5));
        assert_eq!(parse_with_fallback("abc", 0.2), Parsed::fallback(0.2));
        assert_eq!(parse_with_fallback("0.25y", 0.5), Parsed::fallback(0.5));
    }

    #[test]
    fn test_supplied_default_value_is_not_defaulted() {
        let p = parse_with_fallback("0.5", 0.5);
        assert_eq!(p.value, 0.5);
        assert!(!p.defaulted);
    }

    #[test]
    fn test_prompter_sequence() {
        let input = Cursor::new("IBM\n\n0.75\r\nxyz\n");
        let mut prompter = Prompter::new(input, Vec::new());

        let symbol = prompter.prompt_text("Symbol: ", "AAPL").unwrap();
        assert_eq!(symbol, Parsed::supplied("IBM".to_string()));

        let strike = prompter.prompt_number("Strike: ", 105.0).unwrap();
        assert_eq!(strike, Parsed::fallback(105.0));

        let time = prompter.prompt_number("Time: ", 0.5).unwrap();
        assert_eq!(time, Parsed::supplied(0.75));

        let rate = prompter.prompt_number("Rate: ", 0.01).unwrap();
        assert_eq!(rate, Parsed::fallback(0.01));

        // Input exhausted
        let vol = prompter.prompt_number("Vol: ", 0.2).unwrap();
        assert_eq!(vol, Parsed::fallback(0.2));

        let (_, out) = prompter.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "Symbol: Strike: Time: Rate: Vol: ");
    }
}
