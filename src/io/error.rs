//! # Error reporting for reading and computing with sexagesimal numbers
//!
//! A collection of structures describing any problems encountered during parsing of text, or
//! during arithmetic that would leave the rationals.
use std::error;
use std::fmt;

/// An `Error` is created when either parsing or an arithmetic operation failed.
///
/// It is the highest error in the error hierarchy, useful for callers that mix both.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Text could not be read as a number.
    Format(FormatError),
    /// A denominator or divisor was zero.
    DivisionByZero(DivisionByZero),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Format(error) => fmt::Display::fmt(error, f),
            Error::DivisionByZero(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Format(error) => Some(error),
            Error::DivisionByZero(error) => Some(error),
        }
    }
}

impl From<FormatError> for Error {
    fn from(error: FormatError) -> Self {
        Error::Format(error)
    }
}

impl From<DivisionByZero> for Error {
    fn from(error: DivisionByZero) -> Self {
        Error::DivisionByZero(error)
    }
}

/// A `FormatError` represents text that violates the grammar of the number notation.
///
/// It holds a description of what is wrong and, if the problem can be attributed to a single
/// token, that token.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FormatError {
    description: String,
    token: Option<String>,
}

impl FormatError {
    /// Create a new `FormatError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), token: None, }
    }

    /// Create a new `FormatError` that points at the token which caused it.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `token`: The part of the input that could not be read.
    pub fn with_token(description: impl Into<String>, token: impl Into<String>) -> Self {
        Self { description: description.into(), token: Some(token.into()), }
    }

    /// What went wrong, without the offending token.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The offending token, if the error could be attributed to one.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.token {
            Some(token) => write!(f, "FormatError: {}: \"{}\"", self.description, token),
            None => write!(f, "FormatError: {}", self.description),
        }
    }
}

impl error::Error for FormatError {}

/// A `DivisionByZero` is returned when a fraction is created with a zero denominator, or when a
/// number is divided by zero.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("DivisionByZero: denominator is zero")
    }
}

impl error::Error for DivisionByZero {}
