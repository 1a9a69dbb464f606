//! # Exact sexagesimal numbers
//!
//! Rational numbers in the base 60 notation of Sumerian and Babylonian mathematics. Values are
//! exact fractions of arbitrary size integers, so arithmetic never rounds. They can be written
//! truncated to a number of base 60 digits, or exactly, with the repeating part of the expansion
//! between parentheses:
//!
//! ```
//! use sexagesimal::Sexagesimal;
//!
//! let seventh = Sexagesimal::from_fraction(1, 7).unwrap();
//! assert_eq!(seventh.display(4), "0.8:34:17:8");
//! assert_eq!(seventh.exact_periodic(), "0.(8:34:17)");
//!
//! let sum = Sexagesimal::parse("1:30").unwrap() + Sexagesimal::parse("2:15").unwrap();
//! assert_eq!(sum.to_string(), "3:45");
//! ```
#![warn(missing_docs)]

pub mod data;
pub mod io;

pub use data::decimal::Decimal;
pub use data::sexagesimal::Sexagesimal;
pub use io::error::{DivisionByZero, Error, FormatError};
