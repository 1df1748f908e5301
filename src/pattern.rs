//! Date patterns for the bound value.
//!
//! Patterns use the token style form hosts already configure (`DD/MM/YYYY`, `yMd`):
//!
//! | token | meaning |
//! |---|---|
//! | `YYYY`, `yyyy`, `Y`, `y` | full year |
//! | `YY`, `yy` | two-digit year |
//! | `MM` / `M` | month, zero-padded / unpadded |
//! | `MMM` / `MMMM` | month name, abbreviated / full |
//! | `DD`, `dd` / `D`, `d` | day of month, zero-padded / unpadded |
//! | `ddd` / `dddd` | weekday name, abbreviated / full |
//! | `'text'` | literal text, `''` is a literal quote |
//!
//! Other non-letter characters are literals. Any other letter run is rejected, so a
//! pattern never silently formats something other than what it names. Patterns are
//! compiled once into a chrono format string, which then drives both formatting
//! and parsing.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DATE_FORMAT, DEFAULT_OUTPUT_FORMAT};
use crate::{ParseError, prelude::*};

const QUOTE: char = '\'';

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{source}")]
#[serde(try_from = "String", into = "String")]
pub struct DatePattern {
    source:   String,
    strftime: String,
}

impl DatePattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    /// Returns `ParseError::UnsupportedToken` for a letter run outside the token
    /// table or an unterminated quoted literal.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut strftime = String::with_capacity(source.len() * 2);
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c == QUOTE {
                if chars.next_if_eq(&QUOTE).is_some() {
                    strftime.push(QUOTE);
                    continue;
                }
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some(QUOTE) if chars.next_if_eq(&QUOTE).is_some() => text.push(QUOTE),
                        Some(QUOTE) => break,
                        Some(literal) => text.push(literal),
                        None => {
                            return Err(ParseError::UnsupportedToken {
                                token:   format!("{QUOTE}{text}"),
                                pattern: source.to_owned(),
                            });
                        }
                    }
                }
                text.chars().for_each(|literal| push_literal(&mut strftime, literal));
                continue;
            }

            // length of the run of identical characters starting at `c`
            let mut run = 1;
            while chars.next_if_eq(&c).is_some() {
                run += 1;
            }

            let specifier = match (c, run) {
                ('Y' | 'y', 1 | 4) => "%Y",
                ('Y' | 'y', 2) => "%y",
                ('M', 1) => "%-m",
                ('M', 2) => "%m",
                ('M', 3) => "%b",
                ('M', 4) => "%B",
                ('D' | 'd', 1) => "%-d",
                ('D' | 'd', 2) => "%d",
                ('d', 3) => "%a",
                ('d', 4) => "%A",
                (letter, _) if letter.is_alphabetic() => {
                    return Err(ParseError::UnsupportedToken {
                        token:   letter.to_string().repeat(run),
                        pattern: source.to_owned(),
                    });
                }
                (literal, _) => {
                    (0..run).for_each(|_| push_literal(&mut strftime, literal));
                    continue;
                }
            };
            strftime.push_str(specifier);
        }

        Ok(Self {
            source: source.to_owned(),
            strftime,
        })
    }

    /// The default reading pattern, `yMd`
    pub fn default_input() -> Self {
        Self {
            source:   DEFAULT_DATE_FORMAT.to_owned(),
            strftime: "%Y%-m%-d".to_owned(),
        }
    }

    /// The default writing pattern, `DD/MM/YYYY`
    pub fn default_output() -> Self {
        Self {
            source:   DEFAULT_OUTPUT_FORMAT.to_owned(),
            strftime: "%d/%m/%Y".to_owned(),
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.strftime).to_string()
    }

    /// Parses a single date written in this pattern.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank input and `ParseError::InvalidDate`
    /// when the input does not match the pattern or names a non-existent day.
    pub fn parse(&self, input: &str) -> Result<NaiveDate, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        NaiveDate::parse_from_str(trimmed, &self.strftime).map_err(|e| ParseError::InvalidDate {
            input:   trimmed.to_owned(),
            pattern: self.source.clone(),
            reason:  e.to_string(),
        })
    }
}

fn push_literal(strftime: &mut String, literal: char) {
    if literal == '%' {
        strftime.push_str("%%");
    } else {
        strftime.push(literal);
    }
}

impl FromStr for DatePattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DatePattern {
    type Error = ParseError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Self::new(&source)
    }
}

impl From<DatePattern> for String {
    fn from(pattern: DatePattern) -> Self {
        pattern.source
    }
}
