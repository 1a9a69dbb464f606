//! # Formatting
//!
//! Two renderings of a value: a truncated one with a bounded number of fractional digits, and an
//! exact one that marks the repeating part of the expansion with parentheses.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use itertools::Itertools;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::data::sexagesimal::{DEFAULT_PRECISION, RADIX, Sexagesimal};
use crate::data::sexagesimal::digits::to_digit;
use crate::io::parsing::{DIGIT_SEPARATOR, FRACTION_SEPARATOR, NEGATIVE_SIGN, PERIOD_CLOSE, PERIOD_OPEN};

impl Sexagesimal {
    /// Render the value with at most `precision` fractional digits.
    ///
    /// The fractional digits are truncated, and trailing zeros are removed. This rendering is not
    /// exact in general: one seventh shows as `0.8:34:17:8:34:17:8:34:17:8` at precision 10.
    pub fn display(&self, precision: usize) -> String {
        let mut fraction = self.fraction_digits(precision);
        while fraction.last() == Some(&0) {
            fraction.pop();
        }

        let mut result = String::new();
        if self.is_negative() {
            result.push(NEGATIVE_SIGN);
        }
        result.push_str(&join_digits(&self.integer_digits()));
        if !fraction.is_empty() {
            result.push(FRACTION_SEPARATOR);
            result.push_str(&join_digits(&fraction));
        }

        result
    }

    /// Render the exact base 60 expansion of the value.
    ///
    /// A finite expansion is written in full. An infinite expansion is eventually periodic; the
    /// repeating digits are written once, between parentheses, as in `0.(8:34:17)` for one
    /// seventh.
    ///
    /// This is long division in base 60. Each remainder is smaller than the denominator, so a
    /// remainder repeats, and the digits start to repeat with it, within `denominator` steps.
    pub fn exact_periodic(&self) -> String {
        let (integer_part, mut remainder) = self.split_magnitude();
        let denominator = self.denominator_magnitude();

        let mut result = String::new();
        if self.is_negative() {
            result.push(NEGATIVE_SIGN);
        }
        result.push_str(&join_digits(&integer_part.to_radix_be(RADIX)));

        if remainder.is_zero() {
            return result;
        }
        result.push(FRACTION_SEPARATOR);

        // For each remainder, the index of the digit that was computed from it.
        let mut seen = HashMap::<BigUint, usize>::new();
        let mut digits = Vec::new();

        let period_start = loop {
            match seen.entry(remainder.clone()) {
                Entry::Occupied(entry) => break Some(*entry.get()),
                Entry::Vacant(entry) => { entry.insert(digits.len()); },
            }

            let (digit, next) = (remainder * RADIX).div_rem(denominator);
            digits.push(to_digit(&digit));
            remainder = next;

            if remainder.is_zero() {
                break None;
            }
        };

        match period_start {
            None => result.push_str(&join_digits(&digits)),
            Some(start) => {
                let (prefix, period) = digits.split_at(start);
                if !prefix.is_empty() {
                    result.push_str(&join_digits(prefix));
                    result.push(DIGIT_SEPARATOR);
                }
                result.push(PERIOD_OPEN);
                result.push_str(&join_digits(period));
                result.push(PERIOD_CLOSE);
            },
        }

        result
    }
}

fn join_digits(digits: &[u8]) -> String {
    digits.iter().join(&DIGIT_SEPARATOR.to_string())
}

impl fmt::Display for Sexagesimal {
    /// Truncated rendering, see `Sexagesimal::display`.
    ///
    /// The precision of the formatter, as in `{:.20}`, is the maximum number of fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.display(f.precision().unwrap_or(DEFAULT_PRECISION)))
    }
}
