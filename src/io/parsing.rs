//! # Parsing sexagesimal notation
//!
//! First stage of reading a number. Checks that the text is syntactically correct and that every
//! digit lies in `[0, 59]`, but doesn't compute a value: that is left to the number type, which
//! decides how a marked period should be interpreted.
use std::ops::Range;

use crate::data::sexagesimal::RADIX;
use crate::io::error::FormatError;

/// Separates the integer part from the fractional part.
pub(crate) const FRACTION_SEPARATOR: char = '.';
/// Separates two digits.
pub(crate) const DIGIT_SEPARATOR: char = ':';
pub(crate) const PERIOD_OPEN: char = '(';
pub(crate) const PERIOD_CLOSE: char = ')';
pub(crate) const NEGATIVE_SIGN: char = '-';

/// The digits of a number in sexagesimal notation, not yet combined into a value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ParsedDigits {
    /// Whether the text started with a minus sign.
    pub negative: bool,
    /// Digits before the fraction separator, most significant first. Never empty.
    pub integer: Vec<u8>,
    /// Digits after the fraction separator, most significant first.
    pub fraction: Vec<u8>,
    /// Indices into `fraction` of the digits inside the parentheses, if a period was marked.
    pub period: Option<Range<usize>>,
}

impl ParsedDigits {
    /// Whether the marked period, if any, runs up to the last fractional digit.
    pub fn period_ends_fraction(&self) -> bool {
        self.period.as_ref().is_none_or(|period| period.end == self.fraction.len())
    }
}

/// Split text in sexagesimal notation into its digits.
///
/// # Arguments
///
/// * `text`: For example `-2:46:58.30:15` or `0.(8:34:17)`.
///
/// # Return value
///
/// The digits and sign, with the position of the period if parentheses were present.
///
/// # Errors
///
/// A `FormatError` if the text is empty, contains anything other than digits and separators,
/// contains an empty digit, has misplaced parentheses or contains a digit of 60 or more.
pub(crate) fn parse_digits(text: &str) -> Result<ParsedDigits, FormatError> {
    let (negative, unsigned) = match text.strip_prefix(NEGATIVE_SIGN) {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if unsigned.is_empty() {
        return Err(FormatError::with_token("no digits", text));
    }

    let (integer_text, fraction_text) = match unsigned.split_once(FRACTION_SEPARATOR) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let integer = parse_digit_group(integer_text)?;
    let (fraction, period) = match fraction_text {
        Some(fraction_text) => parse_fraction(fraction_text)?,
        None => (Vec::new(), None),
    };

    Ok(ParsedDigits { negative, integer, fraction, period, })
}

/// Parse the digits after the fraction separator.
///
/// The parentheses may enclose a single contiguous run of whole digits, anywhere in the fraction.
fn parse_fraction(text: &str) -> Result<(Vec<u8>, Option<Range<usize>>), FormatError> {
    let open = text.find(PERIOD_OPEN);
    let close = text.find(PERIOD_CLOSE);

    match (open, close) {
        (None, None) => Ok((parse_digit_group(text)?, None)),
        (Some(open), Some(close)) if open < close => {
            let (prefix, rest) = text.split_at(open);
            let cycle = &rest[PERIOD_OPEN.len_utf8()..close - open];
            let suffix = &rest[close - open + PERIOD_CLOSE.len_utf8()..];

            let parentheses = [PERIOD_OPEN, PERIOD_CLOSE];
            if cycle.contains(parentheses) || suffix.contains(parentheses) {
                return Err(FormatError::with_token("more than one period", text));
            }

            let mut digits = match prefix {
                "" => Vec::new(),
                _ => {
                    let prefix = prefix.strip_suffix(DIGIT_SEPARATOR)
                        .ok_or_else(|| FormatError::with_token("period starts inside a digit", text))?;
                    parse_digit_group(prefix)?
                },
            };
            let start = digits.len();
            digits.extend(parse_digit_group(cycle)?);
            let end = digits.len();

            if !suffix.is_empty() {
                let suffix = suffix.strip_prefix(DIGIT_SEPARATOR)
                    .ok_or_else(|| FormatError::with_token("period ends inside a digit", text))?;
                digits.extend(parse_digit_group(suffix)?);
            }

            Ok((digits, Some(start..end)))
        },
        _ => Err(FormatError::with_token("unbalanced parentheses", text)),
    }
}

/// Parse one or more digits separated by `:`.
fn parse_digit_group(text: &str) -> Result<Vec<u8>, FormatError> {
    text.split(DIGIT_SEPARATOR)
        .map(parse_digit)
        .collect()
}

/// Parse a single digit, written in decimal.
fn parse_digit(token: &str) -> Result<u8, FormatError> {
    if token.is_empty() {
        return Err(FormatError::new("empty digit"));
    }
    if !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(FormatError::with_token("digit is not a number", token));
    }

    // Any run of decimal digits that doesn't fit a `u32` is out of range as well.
    match token.parse::<u32>() {
        Ok(digit) if digit < RADIX => Ok(digit as u8),
        _ => Err(FormatError::with_token("digit out of range", token)),
    }
}

#[cfg(test)]
mod test {
    use std::ops::Range;

    use crate::io::parsing::{parse_digits, ParsedDigits};

    fn digits(
        negative: bool,
        integer: &[u8],
        fraction: &[u8],
        period: Option<Range<usize>>,
    ) -> ParsedDigits {
        ParsedDigits {
            negative,
            integer: integer.to_vec(),
            fraction: fraction.to_vec(),
            period,
        }
    }

    #[test]
    fn integer() {
        assert_eq!(parse_digits("1:30"), Ok(digits(false, &[1, 30], &[], None)));
        assert_eq!(parse_digits("0"), Ok(digits(false, &[0], &[], None)));
        assert_eq!(parse_digits("-59"), Ok(digits(true, &[59], &[], None)));
        assert_eq!(parse_digits("007:00"), Ok(digits(false, &[7, 0], &[], None)));
    }

    #[test]
    fn fraction() {
        assert_eq!(
            parse_digits("2:46:58.30:15"),
            Ok(digits(false, &[2, 46, 58], &[30, 15], None)),
        );
        assert_eq!(parse_digits("-0.30"), Ok(digits(true, &[0], &[30], None)));
    }

    #[test]
    fn period() {
        assert_eq!(
            parse_digits("0.(8:34:17)"),
            Ok(digits(false, &[0], &[8, 34, 17], Some(0..3))),
        );
        assert_eq!(
            parse_digits("1.30:(20)"),
            Ok(digits(false, &[1], &[30, 20], Some(1..2))),
        );
        assert!(parse_digits("1.30:(20)").unwrap().period_ends_fraction());
        assert!(parse_digits("1.30").unwrap().period_ends_fraction());
    }

    #[test]
    fn period_inside_fraction() {
        let parsed = parse_digits("0.(8):34").unwrap();
        assert_eq!(parsed, digits(false, &[0], &[8, 34], Some(0..1)));
        assert!(!parsed.period_ends_fraction());

        assert_eq!(
            parse_digits("-0.8:(34:17):8"),
            Ok(digits(true, &[0], &[8, 34, 17, 8], Some(1..3))),
        );

        let error = parse_digits("1.(2)3").unwrap_err();
        assert_eq!(error.description(), "period ends inside a digit");
        let error = parse_digits("1.(2):(3)").unwrap_err();
        assert_eq!(error.description(), "more than one period");
    }

    #[test]
    fn out_of_range() {
        let error = parse_digits("60:00").unwrap_err();
        assert_eq!(error.description(), "digit out of range");
        assert_eq!(error.token(), Some("60"));

        assert!(parse_digits("1.60").is_err());
        assert!(parse_digits("99999999999999999999").is_err());
    }

    #[test]
    fn malformed() {
        for text in [
            "", "-", "--1", "1::2", ":1", "1:", "1.", ".30", "1.2.3", "a", "1:+2", " 1", "1.2e3",
            "1.(2", "1.2)", "1.)2(", "1.(2)3", "1.(2)(3)", "1.((2))", "1.2(3)", "1.()", "(1).2",
            "1.(2:)", "1.(2):", "1.(2)::3", "1.(2):3)",
        ] {
            assert!(parse_digits(text).is_err(), "{:?} should not parse", text);
        }
    }
}
