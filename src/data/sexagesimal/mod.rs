//! # Exact sexagesimal numbers
//!
//! A rational number that is read and written in base 60, the way Sumerian and Babylonian scribes
//! wrote their numbers. The value is stored as a fraction of arbitrary size integers, so that
//! arithmetic never loses precision, and only converted to base 60 digits when displayed.
//!
//! Digits are written as decimal numbers in `[0, 59]`, separated by `:`. The integer part is
//! separated from the fractional part by a `.`, so `2:46:58.30:15` is
//! `2·60² + 46·60 + 58 + 30/60 + 15/60²`.
use std::hash::{Hash, Hasher};

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::data::decimal::{self, Decimal};
use crate::io::error::{DivisionByZero, FormatError};
use crate::io::parsing::{self, ParsedDigits};

mod digits;
mod format;
mod ops;

/// The radix of the number system.
pub const RADIX: u32 = 60;
/// Number of fractional digits shown by `Display` and `display` when no precision is requested.
pub const DEFAULT_PRECISION: usize = 10;
/// Significant digits kept by `to_decimal` for values without a finite decimal expansion.
pub const DECIMAL_PRECISION: usize = 50;

/// An exact rational number with a base 60 notation.
///
/// The representation is canonical: the fraction is always in lowest terms and the denominator is
/// always positive. Two values that are numerically equal therefore have identical fields, which
/// keeps `Hash` consistent with `Eq`.
#[derive(Clone, Debug)]
pub struct Sexagesimal {
    numerator: BigInt,
    denominator: BigInt,
}

impl Sexagesimal {
    /// Create an integer value.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self { numerator: value.into(), denominator: BigInt::one(), }
    }

    /// Create a value from a fraction.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer, the sign of the value may be on either of the two arguments.
    /// * `denominator`: Any nonzero integer.
    ///
    /// # Return value
    ///
    /// The fraction in lowest terms.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the denominator is zero.
    pub fn from_fraction(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, DivisionByZero> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(DivisionByZero);
        }

        Ok(Self::normalized(numerator.into(), denominator))
    }

    /// Create a value from a finite decimal number.
    ///
    /// The decimal `unscaled · 10^-scale` becomes the fraction `unscaled / 10^scale`, which is then
    /// reduced. This conversion is exact, and takes time proportional to the magnitude of the scale.
    pub fn from_decimal(value: &Decimal) -> Self {
        let power = decimal::pow10(value.scale().unsigned_abs());

        if value.scale() >= 0 {
            Self::normalized(value.unscaled().clone(), power)
        } else {
            Self::from_integer(value.unscaled() * power)
        }
    }

    /// Read a number in sexagesimal notation, such as `-1:30.15`.
    ///
    /// A parenthesized run in the fractional part, as written by `exact_periodic`, is accepted but
    /// the parentheses are ignored: `0.(8:34:17)` is read as the finite `0.8:34:17`, and
    /// `0.(8):34` as `0.8:34`. Use
    /// `parse_periodic` to read such a run as repeating forever.
    ///
    /// # Errors
    ///
    /// A `FormatError` if the text does not follow the notation, or if a digit is not in
    /// `[0, 59]`.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let digits = parsing::parse_digits(text)?;
        Ok(Self::from_parsed_digits(&digits, false))
    }

    /// Read a number in sexagesimal notation, interpreting a parenthesized run of fractional
    /// digits as repeating forever.
    ///
    /// This is the inverse of `exact_periodic`: `0.(8:34:17)` is exactly one seventh.
    ///
    /// # Errors
    ///
    /// A `FormatError` under the same conditions as `parse`, and also if digits follow the
    /// parenthesized run, because a run that repeats forever has to be the last one.
    pub fn parse_periodic(text: &str) -> Result<Self, FormatError> {
        let digits = parsing::parse_digits(text)?;
        if !digits.period_ends_fraction() {
            return Err(FormatError::with_token("digits after the period", text));
        }

        Ok(Self::from_parsed_digits(&digits, true))
    }

    /// Combine the digits of a number into a value.
    ///
    /// # Arguments
    ///
    /// * `digits`: Syntactically valid digits, each in `[0, 59]`.
    /// * `periodic`: Whether the period marked in `digits`, if any, repeats forever. If so, the
    /// period should end the fraction.
    fn from_parsed_digits(digits: &ParsedDigits, periodic: bool) -> Self {
        let integer_part = fold_digits(&digits.integer);

        let (fraction_numerator, fraction_denominator) = match &digits.period {
            Some(period) if periodic => {
                debug_assert!(digits.period_ends_fraction());
                let (prefix, cycle) = digits.fraction.split_at(period.start);
                // 0.p(c) = (p·(60^|c| - 1) + c) / (60^|p| · (60^|c| - 1))
                let cycle_denominator = radix_power(cycle.len()) - BigInt::one();
                (
                    fold_digits(prefix) * &cycle_denominator + fold_digits(cycle),
                    radix_power(prefix.len()) * cycle_denominator,
                )
            },
            _ => (fold_digits(&digits.fraction), radix_power(digits.fraction.len())),
        };

        let numerator = integer_part * &fraction_denominator + fraction_numerator;
        let numerator = if digits.negative { -numerator } else { numerator };

        Self::normalized(numerator, fraction_denominator)
    }

    /// Reduce a fraction to lowest terms, with the sign on the numerator.
    ///
    /// The denominator should not be zero.
    pub(crate) fn normalized(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        // `gcd(0, d) = |d|`, so zero always ends up as `0 / 1`.
        let gcd = numerator.gcd(&denominator);
        let numerator = numerator / &gcd;
        let denominator = denominator / gcd;

        if denominator.is_negative() {
            Self { numerator: -numerator, denominator: -denominator, }
        } else {
            Self { numerator, denominator, }
        }
    }

    /// The numerator of the fraction in lowest terms, carrying the sign of the value.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator of the fraction in lowest terms, always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Whether the value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.sign() == Sign::Minus
    }

    /// Whether the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// The integer part of the value, truncating toward zero.
    pub fn to_integer(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// The value as a decimal number.
    ///
    /// Exact if the value has a finite decimal expansion, otherwise rounded half up to
    /// `DECIMAL_PRECISION` significant digits.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_fraction(&self.numerator, &self.denominator, DECIMAL_PRECISION)
    }

    /// The value as a decimal number, rounded half up to `significant_digits` significant digits if
    /// it has no finite decimal expansion.
    pub fn to_decimal_with_precision(&self, significant_digits: usize) -> Decimal {
        Decimal::from_fraction(&self.numerator, &self.denominator, significant_digits)
    }
}

/// Read base 60 digits, most significant first, as an integer.
fn fold_digits(digits: &[u8]) -> BigInt {
    digits.iter()
        .fold(BigInt::zero(), |accumulator, &digit| accumulator * RADIX + u32::from(digit))
}

/// `60^exponent`
fn radix_power(exponent: usize) -> BigInt {
    num_traits::pow(BigInt::from(RADIX), exponent)
}

impl From<i64> for Sexagesimal {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for Sexagesimal {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&Decimal> for Sexagesimal {
    fn from(value: &Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl std::str::FromStr for Sexagesimal {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl Hash for Sexagesimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

/// Shorthand for creating a sexagesimal number in tests.
#[macro_export]
macro_rules! S60 {
    ($value:expr) => {
        $crate::Sexagesimal::from_integer($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Sexagesimal::from_fraction($numer as i64, $denom as i64).unwrap()
    };
}
