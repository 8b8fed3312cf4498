//! Monetary amount as the API accepts it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in major currency units.
///
/// The API takes either an integer or a real number. Integers are kept as
/// integers so that zero-decimal currencies such as IDR serialize as `100000`
/// rather than `100000.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Integer(i64),
    Decimal(f64),
}

impl Amount {
    /// Returns true for amounts strictly below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Amount::Integer(v) => *v < 0,
            Amount::Decimal(v) => *v < 0.0,
        }
    }

    /// Returns false for NaN and infinite decimals, which have no JSON form.
    pub fn is_finite(&self) -> bool {
        match self {
            Amount::Integer(_) => true,
            Amount::Decimal(v) => v.is_finite(),
        }
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Integer(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::Integer(value.into())
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount::Integer(value.into())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Decimal(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Integer(v) => write!(f, "{}", v),
            Amount::Decimal(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_amount_serializes_without_fraction() {
        let json = serde_json::to_string(&Amount::from(100_000)).unwrap();
        assert_eq!(json, "100000");
    }

    #[test]
    fn test_amount_deserialize_picks_variant() {
        let int: Amount = serde_json::from_str("250000").unwrap();
        assert_eq!(int, Amount::Integer(250_000));

        let dec: Amount = serde_json::from_str("12.5").unwrap();
        assert_eq!(dec, Amount::Decimal(12.5));
    }

    #[test]
    fn test_negative_amount() {
        assert!(Amount::from(-1).is_negative());
        assert!(Amount::from(-0.01).is_negative());
        assert!(!Amount::from(0).is_negative());
    }

    #[test]
    fn test_non_finite_amount() {
        assert!(!Amount::from(f64::NAN).is_finite());
        assert!(!Amount::from(f64::INFINITY).is_finite());
        assert!(Amount::from(1.5).is_finite());
    }
}
