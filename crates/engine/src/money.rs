use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Signed money amount represented as **integer minor units** (cents).
///
/// Use this type for **all** monetary values in the engine (expense amounts,
/// budgets, totals) to avoid floating-point drift: summing `120.00` and
/// `80.50` gives exactly `200.50`.
///
/// The value is signed so that "remaining budget" can go below zero. Stored
/// expense amounts are always positive.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().minor(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value, saturating at `i64::MAX`.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Sums all amounts, failing with [`EngineError::InvalidAmount`] on
    /// overflow. An empty iterator sums to zero.
    pub fn try_sum<I>(amounts: I) -> Result<Money, EngineError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts.into_iter().try_fold(Money::ZERO, |acc, amount| {
            acc.checked_add(amount)
                .ok_or_else(|| EngineError::InvalidAmount("total too large".to_string()))
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        let rendered = format!("{sign}{units}.{cents:02}");
        // `pad` keeps width/alignment flags working in table output.
        f.pad(&rendered)
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Money {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string into minor units.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("'{}' is not a number", s.trim()));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let cents_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| overflow())?;

        let cents: i64 = match cents_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidAmount("too many decimals".to_string())),
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money(signed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_two_decimals() {
        assert_eq!(Money::new(0).to_string(), "0.00");
        assert_eq!(Money::new(1).to_string(), "0.01");
        assert_eq!(Money::new(10).to_string(), "0.10");
        assert_eq!(Money::new(20050).to_string(), "200.50");
        assert_eq!(Money::new(-1050).to_string(), "-10.50");
        assert_eq!(format!("{:>8}", Money::new(1050)), "   10.50");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().minor(), 1050);
        assert_eq!("10,50".parse::<Money>().unwrap().minor(), 1050);
        assert_eq!("80.".parse::<Money>().unwrap().minor(), 8000);
        assert_eq!("-0.01".parse::<Money>().unwrap().minor(), -1);
        assert_eq!("+1.00".parse::<Money>().unwrap().minor(), 100);
        assert_eq!("  2.30 ".parse::<Money>().unwrap().minor(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("12.345".parse::<Money>().is_err());
        assert!("0.001".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn try_sum_is_exact_and_detects_overflow() {
        let amounts = [Money::new(12000), Money::new(8050)];
        assert_eq!(Money::try_sum(amounts).unwrap(), Money::new(20050));
        assert_eq!(Money::try_sum(Vec::<Money>::new()).unwrap(), Money::ZERO);
        assert!(Money::try_sum([Money::new(i64::MAX), Money::new(1)]).is_err());
    }

    #[test]
    fn checked_sub_and_abs_never_panic() {
        assert_eq!(Money::new(500).checked_sub(Money::new(800)), Some(Money::new(-300)));
        assert_eq!(Money::new(i64::MIN).checked_sub(Money::new(1)), None);
        assert_eq!(Money::new(-300).abs(), Money::new(300));
        assert_eq!(Money::new(i64::MIN).abs(), Money::new(i64::MAX));
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::new(29950)).unwrap();
        assert_eq!(json, "\"299.50\"");
        let back: Money = serde_json::from_str("\"-3.10\"").unwrap();
        assert_eq!(back, Money::new(-310));
    }
}
