//! # Arithmetic and comparison
//!
//! All operations are exact: they work on the fractions by cross-multiplication of arbitrary size
//! integers, and normalize the result.
use std::cmp::Ordering;

use num_traits::Zero;

use crate::data::sexagesimal::Sexagesimal;
use crate::io::error::DivisionByZero;

impl Sexagesimal {
    /// `self + other`
    pub fn add(&self, other: &Self) -> Self {
        Self::normalized(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// `self - other`
    pub fn subtract(&self, other: &Self) -> Self {
        Self::normalized(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// `self · other`
    pub fn multiply(&self, other: &Self) -> Self {
        Self::normalized(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// `self / other`
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, DivisionByZero> {
        if other.numerator.is_zero() {
            return Err(DivisionByZero);
        }

        Ok(Self::normalized(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// Compare two values by cross-multiplication.
    pub fn compare(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so the products keep the order of the values.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }

    /// Whether two values are numerically equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

mod compare {
    use std::cmp::Ordering;

    use crate::data::sexagesimal::Sexagesimal;

    impl PartialEq for Sexagesimal {
        fn eq(&self, other: &Self) -> bool {
            self.equals(other)
        }
    }

    impl Eq for Sexagesimal {}

    impl PartialOrd for Sexagesimal {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Sexagesimal {
        fn cmp(&self, other: &Self) -> Ordering {
            self.compare(other)
        }
    }
}

mod field {
    use num_bigint::BigInt;
    use num_traits::{One, Zero};

    use crate::data::sexagesimal::Sexagesimal;

    impl Zero for Sexagesimal {
        fn zero() -> Self {
            Self::from_integer(BigInt::zero())
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }
    }

    impl One for Sexagesimal {
        fn one() -> Self {
            Self::from_integer(BigInt::one())
        }
    }

    mod add {
        use std::iter::Sum;
        use std::ops::{Add, AddAssign};

        use num_traits::Zero;

        use crate::data::sexagesimal::Sexagesimal;

        impl Add for Sexagesimal {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Sexagesimal::add(&self, &rhs)
            }
        }

        impl Add<&Sexagesimal> for Sexagesimal {
            type Output = Self;

            fn add(self, rhs: &Self) -> Self::Output {
                Sexagesimal::add(&self, rhs)
            }
        }

        impl Add<Sexagesimal> for &Sexagesimal {
            type Output = Sexagesimal;

            fn add(self, rhs: Sexagesimal) -> Self::Output {
                Sexagesimal::add(self, &rhs)
            }
        }

        impl Add for &Sexagesimal {
            type Output = Sexagesimal;

            fn add(self, rhs: Self) -> Self::Output {
                Sexagesimal::add(self, rhs)
            }
        }

        impl AddAssign<&Sexagesimal> for Sexagesimal {
            fn add_assign(&mut self, rhs: &Self) {
                *self = Sexagesimal::add(self, rhs);
            }
        }

        impl AddAssign for Sexagesimal {
            fn add_assign(&mut self, rhs: Self) {
                *self += &rhs;
            }
        }

        impl Sum for Sexagesimal {
            fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), |total, item| total + item)
            }
        }

        impl<'a> Sum<&'a Sexagesimal> for Sexagesimal {
            fn sum<I: Iterator<Item=&'a Sexagesimal>>(iter: I) -> Self {
                iter.fold(Self::zero(), |total, item| total + item)
            }
        }
    }

    mod sub {
        use std::ops::{Neg, Sub, SubAssign};

        use crate::data::sexagesimal::Sexagesimal;

        impl Sub for Sexagesimal {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                self.subtract(&rhs)
            }
        }

        impl Sub<&Sexagesimal> for Sexagesimal {
            type Output = Self;

            fn sub(self, rhs: &Self) -> Self::Output {
                self.subtract(rhs)
            }
        }

        impl Sub<Sexagesimal> for &Sexagesimal {
            type Output = Sexagesimal;

            fn sub(self, rhs: Sexagesimal) -> Self::Output {
                self.subtract(&rhs)
            }
        }

        impl Sub for &Sexagesimal {
            type Output = Sexagesimal;

            fn sub(self, rhs: Self) -> Self::Output {
                self.subtract(rhs)
            }
        }

        impl SubAssign<&Sexagesimal> for Sexagesimal {
            fn sub_assign(&mut self, rhs: &Self) {
                *self = self.subtract(rhs);
            }
        }

        impl SubAssign for Sexagesimal {
            fn sub_assign(&mut self, rhs: Self) {
                *self -= &rhs;
            }
        }

        impl Neg for Sexagesimal {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { numerator: -self.numerator, denominator: self.denominator, }
            }
        }

        impl Neg for &Sexagesimal {
            type Output = Sexagesimal;

            fn neg(self) -> Self::Output {
                -self.clone()
            }
        }
    }

    mod mul {
        use std::iter::Product;
        use std::ops::{Mul, MulAssign};

        use num_traits::One;

        use crate::data::sexagesimal::Sexagesimal;

        impl Mul for Sexagesimal {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                self.multiply(&rhs)
            }
        }

        impl Mul<&Sexagesimal> for Sexagesimal {
            type Output = Self;

            fn mul(self, rhs: &Self) -> Self::Output {
                self.multiply(rhs)
            }
        }

        impl Mul<Sexagesimal> for &Sexagesimal {
            type Output = Sexagesimal;

            fn mul(self, rhs: Sexagesimal) -> Self::Output {
                self.multiply(&rhs)
            }
        }

        impl Mul for &Sexagesimal {
            type Output = Sexagesimal;

            fn mul(self, rhs: Self) -> Self::Output {
                self.multiply(rhs)
            }
        }

        impl MulAssign<&Sexagesimal> for Sexagesimal {
            fn mul_assign(&mut self, rhs: &Self) {
                *self = self.multiply(rhs);
            }
        }

        impl MulAssign for Sexagesimal {
            fn mul_assign(&mut self, rhs: Self) {
                *self *= &rhs;
            }
        }

        impl Product for Sexagesimal {
            fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Self::one(), |total, item| total * item)
            }
        }
    }

    /// Division through the operators panics on a zero divisor, like the `num` ratios do. Use
    /// `Sexagesimal::divide` to get a `Result` instead.
    mod div {
        use std::ops::{Div, DivAssign};

        use crate::data::sexagesimal::Sexagesimal;

        fn divide_or_panic(lhs: &Sexagesimal, rhs: &Sexagesimal) -> Sexagesimal {
            match lhs.divide(rhs) {
                Ok(quotient) => quotient,
                Err(error) => panic!("{}", error),
            }
        }

        impl Div for Sexagesimal {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                divide_or_panic(&self, &rhs)
            }
        }

        impl Div<&Sexagesimal> for Sexagesimal {
            type Output = Self;

            fn div(self, rhs: &Self) -> Self::Output {
                divide_or_panic(&self, rhs)
            }
        }

        impl Div<Sexagesimal> for &Sexagesimal {
            type Output = Sexagesimal;

            fn div(self, rhs: Sexagesimal) -> Self::Output {
                divide_or_panic(self, &rhs)
            }
        }

        impl Div for &Sexagesimal {
            type Output = Sexagesimal;

            fn div(self, rhs: Self) -> Self::Output {
                divide_or_panic(self, rhs)
            }
        }

        impl DivAssign<&Sexagesimal> for Sexagesimal {
            fn div_assign(&mut self, rhs: &Self) {
                *self = divide_or_panic(self, rhs);
            }
        }

        impl DivAssign for Sexagesimal {
            fn div_assign(&mut self, rhs: Self) {
                *self /= &rhs;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use num_traits::{One, Zero};

    use crate::S60;
    use crate::data::sexagesimal::Sexagesimal;
    use crate::io::error::DivisionByZero;

    #[test]
    fn field_identities() {
        for i in -10..0 {
            assert_eq!(S60!(0, i), Sexagesimal::zero());
        }
        for i in 1..10 {
            assert_eq!(S60!(0, i), Sexagesimal::zero());
        }
        for i in -10..0 {
            assert_eq!(S60!(i, i), Sexagesimal::one());
        }
        for i in 1..10 {
            assert_eq!(S60!(i, i), Sexagesimal::one());
        }
    }

    #[test]
    fn add() {
        assert_eq!(S60!(3, 2) + S60!(6, 4), S60!(3));
        assert_eq!(S60!(0, 2) + S60!(0, 5), S60!(0, 3));
        assert_eq!(S60!(90).add(&S60!(135)), S60!(225));

        let mut x = S60!(0);
        for _ in 0..1000 {
            x += S60!(1, 60);
        }
        assert_eq!(x, S60!(50, 3));
    }

    #[test]
    fn sub() {
        assert_eq!(S60!(3, 2) - S60!(6, 4), S60!(0, 9));
        assert_eq!(S60!(1, 3) - &S60!(1, 2), S60!(-1, 6));
        assert_eq!(S60!(1, 3).subtract(&S60!(1, 3)), Sexagesimal::zero());
        assert_eq!(-S60!(1, 7), S60!(1, -7));
        assert_eq!(-&S60!(0), S60!(0));
    }

    #[test]
    fn mul() {
        assert_eq!(S60!(3, 2) * S60!(6, 4), S60!(9, 4));
        assert_eq!(S60!(0, 2) * S60!(0, 5), S60!(0, 3));
        assert_eq!(&S60!(-11, 12) * &S60!(13, -14), S60!(11 * 13, 12 * 14));
        assert_eq!([S60!(1, 2), S60!(2, 3), S60!(3, 4)].into_iter().product::<Sexagesimal>(), S60!(1, 4));
    }

    #[test]
    fn div() {
        assert_eq!(S60!(3, 2) / S60!(6, 4), Sexagesimal::one());
        assert_eq!(S60!(0, 2) / S60!(2, 5), Sexagesimal::zero());
        assert_eq!(S60!(1).divide(&S60!(-7)), Ok(S60!(-1, 7)));
        assert_eq!(S60!(1).divide(&S60!(0)), Err(DivisionByZero));
    }

    #[test]
    #[should_panic]
    fn div_zero() {
        let _result = S60!(4564, 65468) / S60!(0, 654654);
    }

    #[test]
    fn exactness() {
        for a_numerator in -12..12 {
            for a_denominator in 1..12 {
                let a = S60!(a_numerator, a_denominator);
                for b_numerator in -12..12 {
                    for b_denominator in [1, 7, 60, 61] {
                        let b = S60!(b_numerator, b_denominator);
                        assert_eq!(a.add(&b).subtract(&b), a);
                        assert_eq!(a.add(&b.subtract(&a)), b);
                        if !b.is_zero() {
                            assert_eq!(a.multiply(&b).divide(&b), Ok(a.clone()));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn compare() {
        assert_eq!(S60!(90).compare(&S60!(135)), Ordering::Less);
        assert_eq!(S60!(1, 3).compare(&S60!(2, 6)), Ordering::Equal);
        assert_eq!(S60!(-1, 3).compare(&S60!(-1, 2)), Ordering::Greater);
        assert!(S60!(1, 7) < S60!(1, 6));
        assert!(S60!(-1, 7) > S60!(-1, 6));
    }

    #[test]
    fn compare_consistency() {
        let values = (-6..6)
            .flat_map(|numerator| (1..6).map(move |denominator| S60!(numerator, denominator)))
            .collect::<Vec<_>>();

        for a in &values {
            for b in &values {
                assert_eq!(a.compare(b), b.compare(a).reverse());
                assert_eq!(a.equals(b), a.compare(b) == Ordering::Equal);
                for c in &values {
                    if a <= b && b <= c {
                        assert!(a <= c);
                    }
                }
            }
        }
    }

    #[test]
    fn huge_values() {
        let big = (0..40).map(|_| S60!(59)).product::<Sexagesimal>();
        let huge = &big * &big;
        assert_eq!(huge.divide(&big), Ok(big.clone()));
        assert!(huge > big);
        assert_eq!((&huge + S60!(1, 3)) - &huge, S60!(1, 3));
    }
}
