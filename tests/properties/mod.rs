use std::cmp::Ordering;

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use sexagesimal::Sexagesimal;

fn values() -> Vec<Sexagesimal> {
    (-30..30)
        .flat_map(|numerator| {
            [1, 2, 3, 7, 12, 49, 60, 61, 3600]
                .into_iter()
                .map(move |denominator| Sexagesimal::from_fraction(numerator, denominator).unwrap())
        })
        .collect()
}

#[test]
fn canonical() {
    for x in values() {
        assert!(x.denominator().is_positive());
        assert!(x.numerator().gcd(x.denominator()).is_one());
        if x.numerator().is_zero() {
            assert!(x.denominator().is_one());
        }
    }
}

#[test]
fn arithmetic_is_exact() {
    let values = values();
    for a in values.iter().step_by(7) {
        for b in &values {
            assert_eq!(&(a + b) - b, *a);
            assert_eq!(a.add(&b.subtract(a)), *b);
            if !b.is_zero() {
                assert_eq!(&(a * b) / b, *a);
            }
        }
    }
}

#[test]
fn total_order() {
    let mut values = values();
    values.sort();
    for pair in values.windows(2) {
        assert_ne!(pair[0].compare(&pair[1]), Ordering::Greater);
        assert_eq!(pair[1].compare(&pair[0]), pair[0].compare(&pair[1]).reverse());
        assert_eq!(pair[0].equals(&pair[1]), pair[0] == pair[1]);
    }
}

#[test]
fn exact_periodic_terminates_with_one_period() {
    for x in values() {
        let rendered = x.exact_periodic();
        let fraction = rendered.split_once('.').map_or("", |(_, fraction)| fraction);
        let digits = fraction.split(':').count();
        assert!(digits <= x.denominator().to_string().parse::<usize>().unwrap());
        assert!(rendered.matches('(').count() <= 1);
        assert_eq!(Sexagesimal::parse_periodic(&rendered).unwrap(), x);
    }
}

#[test]
fn truncated_display_is_a_prefix_of_the_expansion() {
    for x in values() {
        let exact = x.exact_periodic();
        let unrolled = match exact.split_once('(') {
            Some((prefix, period)) => {
                let period = period.trim_end_matches(')');
                format!("{}{}", prefix, vec![period; 4].join(":"))
            },
            None => exact.clone(),
        };

        let truncated = x.display(4);
        assert!(unrolled.starts_with(&truncated), "{} is not a prefix of {}", truncated, unrolled);
    }
}
