use crate::Result;

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Money parse error: {0}: {1}")]
    Parse(&'static str, String),
}

/// Monetary amount in the branch currency. Plain floating point underneath;
/// display is always 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Money(pub f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    pub fn parse(string: String) -> Result<Self> {
        let value = string
            .trim()
            .parse::<f64>()
            .map_err(|_| MoneyError::Parse("Not a number", string.clone()))?;

        if !value.is_finite() {
            Err(MoneyError::Parse("Not a finite amount", string))?
        }

        return Ok(Self(value));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{:.2}", self.0);
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        return Self(self.0 + other.0);
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        return Self(self.0 - other.0);
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_and_fractional() {
        assert_eq!(Money::parse("100".to_string()).unwrap(), Money(100.0));
        assert_eq!(Money::parse("100.5".to_string()).unwrap(), Money(100.5));
        assert_eq!(Money::parse(" 0.01 ".to_string()).unwrap(), Money(0.01));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Money::parse("".to_string()).is_err());
        assert!(Money::parse("abc".to_string()).is_err());
        assert!(Money::parse("NaN".to_string()).is_err());
        assert!(Money::parse("inf".to_string()).is_err());
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money(250.5).to_string(), "250.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }
}
