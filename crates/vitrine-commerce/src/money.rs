//! Money type for representing monetary values.
//!
//! Amounts are integer centavos so that cart totals never drift the way
//! repeated floating-point sums do. The storefront sells in reais only.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency prefix used in every rendered amount.
pub const CURRENCY_PREFIX: &str = "R$";

/// A monetary value in centavos.
///
/// Serializes as a decimal number (`159.9`) so catalog feeds can carry
/// prices the way people write them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    centavos: i64,
}

impl Money {
    /// Create a Money value from centavos.
    pub const fn new(centavos: i64) -> Self {
        Self { centavos }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use vitrine_commerce::Money;
    /// let price = Money::from_decimal(159.90);
    /// assert_eq!(price.centavos(), 15990);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Zero reais.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Amount in centavos.
    pub fn centavos(&self) -> i64 {
        self.centavos
    }

    pub fn is_zero(&self) -> bool {
        self.centavos == 0
    }

    pub fn is_negative(&self) -> bool {
        self.centavos < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.centavos as f64 / 100.0
    }

    /// Format with exactly two decimal places (e.g., "649.70").
    pub fn display_amount(&self) -> String {
        let sign = if self.centavos < 0 { "-" } else { "" };
        let abs = self.centavos.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Format with the currency prefix (e.g., "R$ 649.70").
    pub fn display(&self) -> String {
        format!("{} {}", CURRENCY_PREFIX, self.display_amount())
    }

    /// Multiply by a quantity, saturating instead of wrapping.
    pub fn multiply(&self, factor: u32) -> Money {
        Money::new(self.centavos.saturating_mul(i64::from(factor)))
    }

    /// Add, returning None on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.centavos.checked_add(other.centavos).map(Money::new)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.centavos.saturating_add(other.centavos))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, factor: u32) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("price must be a finite number"));
        }
        if amount.abs() >= i64::MAX as f64 / 100.0 {
            return Err(serde::de::Error::custom(format!(
                "price {} is out of range",
                amount
            )));
        }
        Ok(Money::from_decimal(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(159.90).centavos(), 15990);
        assert_eq!(Money::from_decimal(329.9).centavos(), 32990);
        assert_eq!(Money::from_decimal(0.0).centavos(), 0);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(64970).display(), "R$ 649.70");
        assert_eq!(Money::new(5).display_amount(), "0.05");
        assert_eq!(Money::new(-150).display_amount(), "-1.50");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::from_decimal(159.90);
        assert_eq!((m * 2).centavos(), 31980);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::new(31980), Money::new(32990)].into_iter().sum();
        assert_eq!(total.display_amount(), "649.70");
    }

    #[test]
    fn test_money_serde_decimal() {
        let m: Money = serde_json::from_str("89.9").unwrap();
        assert_eq!(m.centavos(), 8990);
        assert_eq!(serde_json::to_string(&m).unwrap(), "89.9");
    }

    #[test]
    fn test_money_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("-1e300").is_err());
        assert!(serde_json::from_str::<Money>("1000000000").is_ok());
    }

    #[test]
    fn test_checked_add_overflow() {
        assert!(Money::new(i64::MAX).checked_add(Money::new(1)).is_none());
    }
}
