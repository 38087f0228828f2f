//! Amount type for representing monetary values
//!
//! Wraps an `f64` and carries the crate-wide settlement tolerance: two
//! amounts closer together than [`TOLERANCE`] are considered equal, and a
//! debt within tolerance of zero counts as settled. Floats are used rather
//! than integer cents because the settlement algorithm distributes
//! receivables proportionally and needs fractional intermediate values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Amounts closer together than this are considered settled
pub const TOLERANCE: f64 = 1e-3;

/// A signed monetary amount
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is settled (within tolerance of zero)
    pub fn is_zero(&self) -> bool {
        self.0.abs() <= TOLERANCE
    }

    /// Check if the amount is meaningfully positive (beyond tolerance)
    pub fn is_positive(&self) -> bool {
        self.0 > TOLERANCE
    }

    /// Check if the amount is meaningfully negative (beyond tolerance)
    pub fn is_negative(&self) -> bool {
        self.0 < -TOLERANCE
    }

    /// Check if the amount is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Check if two amounts are equal within tolerance
    pub fn approx_eq(&self, other: Amount) -> bool {
        (self.0 - other.0).abs() <= TOLERANCE
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('$').unwrap_or(s);

        let value: f64 = s
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;
        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(s.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Amount {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            AmountParseError::NotFinite(s) => write!(f, "Amount is not a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_value() {
        let a = Amount::new(10.5);
        assert_eq!(a.value(), 10.5);
        assert_eq!(Amount::zero().value(), 0.0);
    }

    #[test]
    fn test_tolerance_predicates() {
        assert!(Amount::zero().is_zero());
        assert!(Amount::new(0.0005).is_zero());
        assert!(Amount::new(-0.0005).is_zero());
        assert!(!Amount::new(0.002).is_zero());

        assert!(Amount::new(0.002).is_positive());
        assert!(!Amount::new(0.0005).is_positive());
        assert!(Amount::new(-0.002).is_negative());
        assert!(!Amount::new(-0.0005).is_negative());
    }

    #[test]
    fn test_approx_eq() {
        assert!(Amount::new(2.5).approx_eq(Amount::new(2.5005)));
        assert!(!Amount::new(2.5).approx_eq(Amount::new(2.502)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("$10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("-10.50").unwrap().value(), -10.5);
        assert_eq!(Amount::parse("-$10.50").unwrap().value(), -10.5);
        assert_eq!(Amount::parse(" 10 ").unwrap().value(), 10.0);

        assert!(matches!(
            Amount::parse("abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("inf"),
            Err(AmountParseError::NotFinite(_))
        ));
        assert!(matches!(
            Amount::parse("NaN"),
            Err(AmountParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Amount::new(10.5)), "10.50");
        assert_eq!(format!("{}", Amount::new(0.0)), "0.00");
        assert_eq!(format!("{}", Amount::new(-10.5)), "-10.50");
        assert_eq!(format!("{}", Amount::new(2.499999)), "2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(10.0);
        let b = Amount::new(4.0);

        assert_eq!((a + b).value(), 14.0);
        assert_eq!((a - b).value(), 6.0);
        assert_eq!((-a).value(), -10.0);
        assert_eq!((a * 0.5).value(), 5.0);

        let mut c = a;
        c += b;
        c -= Amount::new(2.0);
        assert_eq!(c.value(), 12.0);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [Amount::new(1.0), Amount::new(2.5), Amount::new(3.5)]
            .into_iter()
            .sum();
        assert_eq!(total.value(), 7.0);
    }

    #[test]
    fn test_serialization() {
        let a = Amount::new(10.5);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(a, deserialized);
    }
}
