//! # Finite decimal numbers
//!
//! An arbitrary precision decimal `unscaled · 10^-scale`, the companion type used to move values
//! in and out of base 60 in the notation people usually write numbers in.
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::io::error::FormatError;

/// Largest exponent magnitude accepted when reading exponent notation such as `1.5E+3`.
///
/// Converting a decimal to a fraction takes time and memory proportional to its scale, so the
/// exponent is limited to keep reading text bounded by the length of that text.
pub const MAX_EXPONENT: i64 = 100_000;

/// A finite decimal number, `unscaled · 10^-scale`.
///
/// A negative scale multiplies by a power of ten, so `15` with scale `-2` is `1500`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

impl Decimal {
    /// Create a decimal from its digits and the position of the decimal point.
    ///
    /// # Arguments
    ///
    /// * `unscaled`: All digits of the number as an integer.
    /// * `scale`: Number of those digits that lie after the decimal point. Converting to a fraction
    /// computes `10^|scale|`, so this should stay within a reasonable range.
    pub fn new(unscaled: impl Into<BigInt>, scale: i64) -> Self {
        Self { unscaled: unscaled.into(), scale, }
    }

    /// All digits of the number as an integer.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of digits after the decimal point, negative for multiples of powers of ten.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Approximate a fraction by a decimal.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: A positive integer.
    /// * `significant_digits`: Precision used when the fraction has no finite decimal expansion.
    ///
    /// # Return value
    ///
    /// The exact value if the denominator has no prime factors other than 2 and 5, otherwise the
    /// value rounded half up (away from zero at a tie) to `significant_digits` digits. Trailing
    /// zeros after the decimal point are removed.
    pub(crate) fn from_fraction(
        numerator: &BigInt,
        denominator: &BigInt,
        significant_digits: usize,
    ) -> Self {
        debug_assert!(denominator.is_positive());

        if numerator.is_zero() {
            return Self::new(0, 0);
        }

        let decimal = match terminating_scale(denominator) {
            Some(scale) => {
                let unscaled = numerator * pow10(scale) / denominator;
                Self::new(unscaled, scale as i64)
            },
            None => Self::rounded(numerator, denominator, significant_digits.max(1)),
        };

        decimal.strip_trailing_zeros()
    }

    /// Round a fraction half up to a number of significant digits.
    fn rounded(numerator: &BigInt, denominator: &BigInt, significant_digits: usize) -> Self {
        let magnitude = numerator.abs();
        // The value lies in [10^exponent, 10^(exponent + 1)).
        let mut exponent = magnitude.to_string().len() as i64 - denominator.to_string().len() as i64;
        if compare_scaled(&magnitude, denominator, exponent).is_lt() {
            exponent -= 1;
        }

        let scale = significant_digits as i64 - 1 - exponent;
        let (scaled_numerator, scaled_denominator) = if scale >= 0 {
            (&magnitude * pow10(scale as u64), denominator.clone())
        } else {
            (magnitude, denominator * pow10(scale.unsigned_abs()))
        };

        let (quotient, remainder) = scaled_numerator.div_rem(&scaled_denominator);
        let unscaled = if remainder * 2 >= scaled_denominator {
            quotient + 1
        } else {
            quotient
        };

        let unscaled = if numerator.is_negative() { -unscaled } else { unscaled };
        Self::new(unscaled, scale)
    }

    /// Remove zeros at the end of the fractional part, without turning the scale negative.
    fn strip_trailing_zeros(mut self) -> Self {
        let ten = BigInt::from(10);
        while self.scale > 0 && !self.unscaled.is_zero() && self.unscaled.is_multiple_of(&ten) {
            self.unscaled /= &ten;
            self.scale -= 1;
        }
        if self.unscaled.is_zero() {
            self.scale = 0;
        }

        self
    }
}

/// The number of decimal digits after the point needed to write `1 / denominator` exactly, if
/// that is finite.
fn terminating_scale(denominator: &BigInt) -> Option<u64> {
    let mut rest = denominator.clone();
    let mut twos = 0;
    let mut fives = 0;

    let two = BigInt::from(2);
    while rest.is_multiple_of(&two) {
        rest /= &two;
        twos += 1;
    }
    let five = BigInt::from(5);
    while rest.is_multiple_of(&five) {
        rest /= &five;
        fives += 1;
    }

    if rest.is_one() { Some(u64::max(twos, fives)) } else { None }
}

/// Compare `magnitude / denominator` to `10^exponent`.
fn compare_scaled(magnitude: &BigInt, denominator: &BigInt, exponent: i64) -> std::cmp::Ordering {
    if exponent >= 0 {
        magnitude.cmp(&(denominator * pow10(exponent as u64)))
    } else {
        (magnitude * pow10(exponent.unsigned_abs())).cmp(denominator)
    }
}

/// `10^exponent`
pub(crate) fn pow10(exponent: u64) -> BigInt {
    num_traits::pow(BigInt::from(10), usize::try_from(exponent).unwrap_or(usize::MAX))
}

impl FromStr for Decimal {
    type Err = FormatError;

    /// Read a decimal such as `-12.50`, `.5` or `1.5E+3`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(index) => {
                let exponent_text = &text[index + 1..];
                let exponent = exponent_text.parse::<i64>()
                    .map_err(|_| FormatError::with_token("invalid exponent", exponent_text))?;
                if !(-MAX_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
                    return Err(FormatError::with_token("exponent out of range", exponent_text));
                }
                (&text[..index], exponent)
            },
            None => (text, 0),
        };

        let (negative, unsigned) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if integer.len() + fraction.len() == 0 || !all_digits(integer) || !all_digits(fraction) {
            return Err(FormatError::with_token("not a decimal number", text));
        }

        let digits = format!("{}{}", integer, fraction);
        let unscaled = BigInt::from_str(&digits)
            .map_err(|_| FormatError::with_token("not a decimal number", text))?;
        let unscaled = if negative { -unscaled } else { unscaled };
        let scale = fraction.len() as i64 - exponent;

        Ok(Self::new(unscaled, scale))
    }
}

impl fmt::Display for Decimal {
    /// Plain notation, without an exponent.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let digits = self.unscaled.abs().to_string();

        if self.scale <= 0 {
            let zeros = if self.unscaled.is_zero() { 0 } else { self.scale.unsigned_abs() as usize };
            return write!(f, "{}{}{}", sign, digits, "0".repeat(zeros));
        }

        let scale = self.scale as usize;
        if digits.len() > scale {
            let (integer, fraction) = digits.split_at(digits.len() - scale);
            write!(f, "{}{}.{}", sign, integer, fraction)
        } else {
            write!(f, "{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits)
        }
    }
}
