//! Money type for representing currency amounts
//!
//! Internally stores amounts as a count of minor units (hundredths) in an i64
//! so arithmetic and the account-file round-trip never touch floating point.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use thiserror::Error;

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create an amount from minor units
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional portion (0-99)
    pub const fn subunits(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a plain decimal amount: `"500"`, `"500.0"`, `"10.50"`, `"-3.25"`.
    ///
    /// Fractional digits beyond the second are truncated. This accepts every
    /// amount the account file format can contain.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let minor = match digits.split_once('.') {
            Some((whole, frac)) => {
                let units: i64 = whole
                    .parse()
                    .map_err(|_| MoneyParseError::Invalid(s.to_string()))?;
                let frac_minor = parse_fraction(frac)
                    .ok_or_else(|| MoneyParseError::Invalid(s.to_string()))?;
                units * 100 + frac_minor
            }
            None => {
                digits
                    .parse::<i64>()
                    .map_err(|_| MoneyParseError::Invalid(s.to_string()))?
                    * 100
            }
        };

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Render with a leading currency symbol, sign first: `-₹50.00`
    pub fn with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.subunits())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.subunits())
        }
    }
}

/// Two-digit fractional part; empty means zero, a single digit means tenths.
fn parse_fraction(frac: &str) -> Option<i64> {
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match frac.len() {
        0 => Some(0),
        1 => frac.parse::<i64>().ok().map(|d| d * 10),
        _ => frac[..2].parse().ok(),
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.subunits())
        } else {
            write!(f, "{}.{:02}", self.units(), self.subunits())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
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
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("empty amount")]
    Empty,

    #[error("invalid amount: {0}")]
    Invalid(String),
}
