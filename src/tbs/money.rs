use std::fmt;

use thiserror::Error;

/// Number of stored fractional digits
const SCALE_DIGITS: usize = 4;
const SCALE: i64 = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point currency amount, stored as ten-thousandths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Builds an amount from whole units, e.g. `Money::units(500)` is 500.00
    pub const fn units(units: i64) -> Self {
        return Self(units * SCALE);
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();
        let parse_err = |reason: &'static str| MoneyError::Parse(reason, string.to_string());

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        if unsigned.is_empty() {
            return Err(parse_err("No digits"));
        }

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            return Err(parse_err("Too many decimal points"));
        }

        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if whole.is_empty() && fraction.is_empty() {
            return Err(parse_err("No digits"));
        }

        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(parse_err("Invalid digit"));
        }

        if fraction.len() > SCALE_DIGITS {
            return Err(parse_err("Too many decimal places"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| parse_err("Value out of range"))?
        };

        let fraction: i64 = format!("{:0<width$}", fraction, width = SCALE_DIGITS)
            .parse()
            .map_err(|_| parse_err("Invalid digit"))?;

        let value = whole
            .checked_mul(SCALE)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(|| parse_err("Value out of range"))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        return match self.0.checked_add(other.0) {
            Some(value) => Ok(Money(value)),
            None if other.0 > 0 => Err(MoneyError::Overflow("add", self, other)),
            None => Err(MoneyError::Underflow("add", self, other)),
        };
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        return match self.0.checked_sub(other.0) {
            Some(value) => Ok(Money(value)),
            None if other.0 < 0 => Err(MoneyError::Overflow("sub", self, other)),
            None => Err(MoneyError::Underflow("sub", self, other)),
        };
    }
}

impl fmt::Display for Money {
    /// Prints at least two fractional digits, more only when they are significant
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / SCALE as u64;
        let fraction = format!("{:0>width$}", abs % SCALE as u64, width = SCALE_DIGITS);
        let fraction = fraction.trim_end_matches('0');

        return write!(f, "{sign}{whole}.{fraction:0<2}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Money::parse("100"), Ok(Money(1_000_000)));
        assert_eq!(Money::parse("100.5"), Ok(Money(1_005_000)));
        assert_eq!(Money::parse(" 0.0001 "), Ok(Money(1)));
        assert_eq!(Money::parse(".25"), Ok(Money(2_500)));
        assert_eq!(Money::parse("-5.5"), Ok(Money(-55_000)));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in ["", "-", ".", "abc", "1.2.3", "1,50", "1.23456", "12a", "99999999999999999999"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyError::Parse(_, _))),
                "expected parse error for {input:?}"
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(Money::units(100).to_string(), "100.00");
        assert_eq!(Money(1_005_000).to_string(), "100.50");
        assert_eq!(Money(12_345).to_string(), "1.2345");
        assert_eq!(Money(-55_000).to_string(), "-5.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(Money::units(2).checked_add(Money::units(3)), Ok(Money::units(5)));
        assert_eq!(Money::units(2).checked_sub(Money::units(3)), Ok(Money::units(-1)));

        assert!(matches!(
            Money::MAX.checked_add(Money(1)),
            Err(MoneyError::Overflow("add", _, _))
        ));
        assert!(matches!(
            Money::MIN.checked_sub(Money(1)),
            Err(MoneyError::Underflow("sub", _, _))
        ));
    }
}
