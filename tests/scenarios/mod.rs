use std::cmp::Ordering;

use num_bigint::BigInt;

use sexagesimal::{Decimal, DivisionByZero, Error, Sexagesimal};
use sexagesimal::io::{import, Notation};

#[test]
fn one_thirty() {
    let x = Sexagesimal::parse("1:30").unwrap();
    assert_eq!(x.to_decimal().to_string(), "90");
    assert_eq!(x.display(10), "1:30");
    assert_eq!(x.to_string(), "1:30");
}

#[test]
fn addition() {
    let c = Sexagesimal::parse("1:30").unwrap();
    let d = Sexagesimal::parse("2:15").unwrap();
    assert_eq!(d.to_decimal().to_string(), "135");
    assert_eq!(c.add(&d).display(10), "3:45");

    let sum = c.to_integer() + d.to_integer();
    assert_eq!(sum, BigInt::from(225));
    assert_eq!(Sexagesimal::from_integer(sum).to_string(), "3:45");
}

#[test]
fn one_seventh() {
    let x = Sexagesimal::from_fraction(1, 7).unwrap();
    assert_eq!(x.display(10), "0.8:34:17:8:34:17:8:34:17:8");
    assert_eq!(x.exact_periodic(), "0.(8:34:17)");
}

#[test]
fn with_fraction() {
    let x = Sexagesimal::parse("2:46:58.30:15").unwrap();
    let expected = Sexagesimal::from_fraction(9998 * 240 + 121, 240).unwrap();
    assert_eq!(x, expected);
    assert_eq!(x.to_decimal_with_precision(12).to_string(), "9998.50416667");
    assert_eq!(x.display(10), "2:46:58.30:15");
    assert_eq!(x.exact_periodic(), "2:46:58.30:15");
}

#[test]
fn comparison() {
    let c = Sexagesimal::parse("1:30").unwrap();
    let d = Sexagesimal::parse("2:15").unwrap();
    assert_eq!(c.compare(&d), Ordering::Less);
    assert_eq!(d.compare(&c), Ordering::Greater);
    assert!(!c.equals(&d));
}

#[test]
fn failures() {
    assert_eq!(Sexagesimal::from_fraction(1, 0), Err(DivisionByZero));
    assert!(Sexagesimal::parse("60:00").is_err());

    let zero = Sexagesimal::from_integer(0);
    assert_eq!(Sexagesimal::from_integer(1).divide(&zero), Err(DivisionByZero));
}

#[test]
fn errors_combine() {
    fn ratio(numerator: &str, denominator: &str) -> Result<Sexagesimal, Error> {
        let numerator = Sexagesimal::parse(numerator)?;
        let denominator = Sexagesimal::parse(denominator)?;
        Ok(numerator.divide(&denominator)?)
    }

    assert_eq!(ratio("1", "7").map(|x| x.exact_periodic()), Ok("0.(8:34:17)".to_string()));
    assert!(matches!(ratio("1", "0"), Err(Error::DivisionByZero(_))));
    assert!(matches!(ratio("1", "0:60"), Err(Error::Format(_))));
}

#[test]
fn decimals() {
    let x = Sexagesimal::from_decimal(&"0.125".parse::<Decimal>().unwrap());
    assert_eq!(x.display(10), "0.7:30");

    let x = import("1.5E+3", Notation::Decimal).unwrap();
    assert_eq!(x.display(10), "25:0");
}

#[test]
fn periodic_input() {
    let f = Sexagesimal::parse("0.(8:34:17)").unwrap();
    assert_eq!(f.to_decimal_with_precision(6).to_string(), "0.142856");

    let g = Sexagesimal::parse_periodic("0.(8:34:17)").unwrap();
    assert_eq!(g, Sexagesimal::from_fraction(1, 7).unwrap());
}
