use std::fmt;

use alloy::primitives::U256;
use rust_decimal::Decimal;

use super::{EntityError, EntityResult};

/// A non-negative rational number over 256-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numerator: U256,
    denominator: U256,
}

impl Fraction {
    pub fn new(numerator: U256, denominator: U256) -> EntityResult<Self> {
        if denominator.is_zero() {
            return Err(EntityError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> U256 {
        self.numerator
    }

    pub fn denominator(&self) -> U256 {
        self.denominator
    }

    /// Floor division of numerator by denominator.
    pub fn quotient(&self) -> U256 {
        self.numerator / self.denominator
    }

    pub fn invert(&self) -> EntityResult<Self> {
        Self::new(self.denominator, self.numerator)
    }

    /// `1 + self`
    pub fn one_plus(&self) -> EntityResult<Self> {
        let numerator = self
            .denominator
            .checked_add(self.numerator)
            .ok_or(EntityError::Overflow)?;
        Self::new(numerator, self.denominator)
    }

    /// `floor(amount * self)`
    pub fn mul_floor(&self, amount: U256) -> EntityResult<U256> {
        let product = amount
            .checked_mul(self.numerator)
            .ok_or(EntityError::Overflow)?;
        Ok(product / self.denominator)
    }
}

/// A percentage stored as a fraction of one (1% = 1/100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(Fraction);

impl Percent {
    pub fn new(numerator: U256, denominator: U256) -> EntityResult<Self> {
        Fraction::new(numerator, denominator).map(Self)
    }

    /// Build from a human percentage such as `0.5` (meaning 0.5%).
    ///
    /// Negative values are rejected; the decimal scale is kept exactly, so
    /// `0.25` becomes `25 / 10000`.
    pub fn from_decimal(percentage: Decimal) -> EntityResult<Self> {
        if percentage.is_sign_negative() && !percentage.is_zero() {
            return Err(EntityError::InvalidPercent(format!(
                "{percentage} must not be negative"
            )));
        }
        let mantissa = percentage.mantissa().unsigned_abs();
        let scale = U256::from(10u64).pow(U256::from(percentage.scale()));
        let denominator = U256::from(100u64)
            .checked_mul(scale)
            .ok_or(EntityError::Overflow)?;
        Self::new(U256::from(mantissa), denominator)
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.numerator, self.0.denominator)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_zero_denominator_is_rejected() {
        assert_eq!(
            Fraction::new(U256::from(1u64), U256::ZERO),
            Err(EntityError::ZeroDenominator)
        );
    }

    #[test]
    fn test_quotient_floors() {
        let f = Fraction::new(U256::from(7u64), U256::from(2u64)).unwrap();
        assert_eq!(f.quotient(), U256::from(3u64));
    }

    #[test]
    fn test_one_plus_and_invert() {
        let one_percent = Fraction::new(U256::from(1u64), U256::from(100u64)).unwrap();
        let factor = one_percent.one_plus().unwrap();
        assert_eq!(factor.numerator(), U256::from(101u64));
        assert_eq!(factor.denominator(), U256::from(100u64));

        let inverted = factor.invert().unwrap();
        assert_eq!(inverted.mul_floor(U256::from(90u64)).unwrap(), U256::from(89u64));
    }

    #[test]
    fn test_fraction_holds_values_wider_than_u64() {
        let wide = U256::from(u64::MAX) * U256::from(1_000u64);
        let f = Fraction::new(wide, U256::from(1_000u64)).unwrap();
        assert_eq!(f.quotient(), U256::from(u64::MAX));

        let percent = Percent::new(U256::from(1u64), wide).unwrap();
        assert_eq!(percent.as_fraction().denominator(), wide);
    }

    #[test]
    fn test_mul_floor_overflow() {
        let f = Fraction::new(U256::from(2u64), U256::from(1u64)).unwrap();
        assert_eq!(f.mul_floor(U256::MAX), Err(EntityError::Overflow));
    }

    #[test]
    fn test_percent_from_decimal() {
        let half = Percent::from_decimal(Decimal::from_str("0.5").unwrap()).unwrap();
        assert_eq!(
            half,
            Percent::new(U256::from(5u64), U256::from(1000u64)).unwrap()
        );

        let two = Percent::from_decimal(Decimal::from_str("2").unwrap()).unwrap();
        assert_eq!(two, Percent::new(U256::from(2u64), U256::from(100u64)).unwrap());

        let zero = Percent::from_decimal(Decimal::ZERO).unwrap();
        assert!(zero.as_fraction().numerator().is_zero());
    }

    #[test]
    fn test_percent_rejects_negative() {
        let result = Percent::from_decimal(Decimal::from_str("-1").unwrap());
        assert!(matches!(result, Err(EntityError::InvalidPercent(_))));
    }
}
