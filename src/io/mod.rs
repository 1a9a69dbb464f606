//! # Reading of numbers
//!
//! This module provides read functionality for the notations a number can be written in.
use std::str::FromStr;

use crate::data::decimal::Decimal;
use crate::data::sexagesimal::Sexagesimal;
use crate::io::error::FormatError;

pub mod error;
pub(crate) mod parsing;

/// The notations that text can be read in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Notation {
    /// Base 60 digits, a parenthesized period is read as a finite run of digits.
    #[default]
    Sexagesimal,
    /// Base 60 digits, a parenthesized period repeats forever.
    Periodic,
    /// A finite decimal number such as `9998.5` or `1.5E+3`.
    Decimal,
}

/// Read a number from text.
///
/// # Arguments
///
/// * `text`: The number, without surrounding whitespace.
/// * `notation`: How to interpret the text.
///
/// # Errors
///
/// A `FormatError` when the text can't be read in the requested notation.
pub fn import(text: &str, notation: Notation) -> Result<Sexagesimal, FormatError> {
    match notation {
        Notation::Sexagesimal => Sexagesimal::parse(text),
        Notation::Periodic => Sexagesimal::parse_periodic(text),
        Notation::Decimal => Decimal::from_str(text).map(|decimal| Sexagesimal::from_decimal(&decimal)),
    }
}
