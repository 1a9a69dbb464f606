//! # Digit extraction
//!
//! Finite sequences of base 60 digits of a value, used for display.
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::data::sexagesimal::{RADIX, Sexagesimal};

impl Sexagesimal {
    /// The base 60 digits of the integer part of the absolute value, most significant first.
    ///
    /// # Return value
    ///
    /// A nonempty `Vec`, `[0]` if the absolute value is smaller than one.
    pub fn integer_digits(&self) -> Vec<u8> {
        let quotient = self.numerator.magnitude() / self.denominator.magnitude();
        // Yields `[0]` for zero.
        quotient.to_radix_be(RADIX)
    }

    /// The first base 60 digits of the fractional part of the absolute value.
    ///
    /// # Arguments
    ///
    /// * `precision`: Maximum number of digits to extract.
    ///
    /// # Return value
    ///
    /// At most `precision` digits. Extraction stops early when the expansion ends, so the sequence
    /// is empty for integers. The digits are truncated, not rounded.
    pub fn fraction_digits(&self, precision: usize) -> Vec<u8> {
        let denominator = self.denominator.magnitude();
        let mut remainder = self.numerator.magnitude() % denominator;

        let mut digits = Vec::new();
        while !remainder.is_zero() && digits.len() < precision {
            let (digit, next) = (remainder * RADIX).div_rem(denominator);
            digits.push(to_digit(&digit));
            remainder = next;
        }

        digits
    }

    /// The integer part and the remainder of the absolute value, as used by long division.
    pub(super) fn split_magnitude(&self) -> (BigUint, BigUint) {
        self.numerator.magnitude().div_rem(self.denominator.magnitude())
    }

    /// The denominator as an unsigned integer.
    pub(super) fn denominator_magnitude(&self) -> &BigUint {
        debug_assert!(self.denominator > BigInt::zero());
        self.denominator.magnitude()
    }
}

/// Convert the quotient of a long division step to a digit.
///
/// The quotient of `60·r` by `d`, with `r < d`, is always smaller than 60.
pub(super) fn to_digit(quotient: &BigUint) -> u8 {
    debug_assert!(*quotient < BigUint::from(RADIX));
    quotient.to_u32_digits()
        .first()
        .map_or(0, |&digit| digit as u8)
}
