//! Prices
//!
//! Monetary amounts are carried in integer minor units (cents). Decimal
//! values only appear at the wire and input boundaries, and conversions in
//! both directions are exact.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

/// Errors produced at the decimal boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative")]
    Negative,

    /// The amount carries precision below one cent.
    #[error("price has sub-cent precision")]
    SubCentPrecision,

    /// The amount does not fit in minor units.
    #[error("price out of range")]
    OutOfRange,

    /// The input is not a decimal number at all.
    #[error("price is not a valid decimal")]
    Invalid,
}

/// A non-negative price in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// Zero minor units.
    pub const ZERO: Self = Self(0);

    /// Creates a price from minor units.
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// The amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Converts an exact decimal amount (major units) into a price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] for negative amounts,
    /// [`PriceError::SubCentPrecision`] for amounts finer than one cent, and
    /// [`PriceError::OutOfRange`] when the amount does not fit in minor units.
    pub fn from_decimal(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        let minor = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(PriceError::OutOfRange)?;

        if minor.normalize().scale() > 0 {
            return Err(PriceError::SubCentPrecision);
        }

        minor.to_u64().ok_or(PriceError::OutOfRange).map(Self)
    }

    /// The exact decimal amount in major units, scale 2.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }

    /// Adds two prices, saturating at the representable maximum.
    #[must_use]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Multiplies by a line quantity, saturating at the representable maximum.
    #[must_use]
    pub fn saturating_mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.to_decimal(), f)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid)?;

        Self::from_decimal(amount)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn from_decimal_whole_cents() -> TestResult {
        let price = Price::from_decimal(Decimal::new(1999, 2))?;

        assert_eq!(price.minor_units(), 1999);

        Ok(())
    }

    #[test]
    fn from_decimal_whole_units() -> TestResult {
        let price = Price::from_decimal(Decimal::from(10))?;

        assert_eq!(price.minor_units(), 1000);

        Ok(())
    }

    #[test]
    fn from_decimal_rejects_negative() {
        let result = Price::from_decimal(Decimal::new(-100, 2));

        assert_eq!(result, Err(PriceError::Negative));
    }

    #[test]
    fn from_decimal_rejects_sub_cent_precision() {
        let result = Price::from_decimal(Decimal::new(10_005, 4));

        assert_eq!(result, Err(PriceError::SubCentPrecision));
    }

    #[test]
    fn trailing_zero_scale_is_not_sub_cent() -> TestResult {
        // 5.10 written with extra scale, e.g. "5.1000".
        let price = Price::from_decimal(Decimal::new(51_000, 4))?;

        assert_eq!(price.minor_units(), 510);

        Ok(())
    }

    #[test]
    fn decimal_round_trip_is_exact() -> TestResult {
        let price = Price::from_minor(2500);

        assert_eq!(price.to_decimal(), Decimal::new(2500, 2));
        assert_eq!(Price::from_decimal(price.to_decimal())?, price);

        Ok(())
    }

    #[test]
    fn displays_with_two_decimal_places() {
        assert_eq!(Price::from_minor(2500).to_string(), "25.00");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn parses_from_str() -> TestResult {
        assert_eq!("19.99".parse::<Price>()?, Price::from_minor(1999));
        assert_eq!(" 5 ".parse::<Price>()?, Price::from_minor(500));

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("ten pounds".parse::<Price>(), Err(PriceError::Invalid));
    }

    #[test]
    fn saturating_arithmetic_saturates() {
        let max = Price::from_minor(u64::MAX);

        assert_eq!(max.saturating_add(Price::from_minor(1)), max);
        assert_eq!(max.saturating_mul(2), max);
    }
}
