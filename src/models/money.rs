//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift
//! when many expenses are summed. Arithmetic saturates instead of wrapping,
//! and single amounts are capped at [`Money::MAX`] so that realistic totals
//! stay exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Currency symbols stripped from the front of user input
const KNOWN_SYMBOLS: [char; 5] = ['$', '₪', '€', '£', '¥'];

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted for a single expense or the budget
    /// (one trillion currency units)
    pub const MAX: Money = Money(100_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use project_budget::models::Money;
    /// let amount = Money::from_cents(25050); // 250.50
    /// assert_eq!(amount.to_string(), "250.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a floating point value in currency units
    ///
    /// Rounds to the nearest cent. Returns `None` for NaN, infinities and
    /// values outside the representable range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in currency units as a float, for ratios and charts
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether the amount lies in `0..=Money::MAX`
    pub const fn is_storable(&self) -> bool {
        self.0 >= 0 && self.0 <= Self::MAX.0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Ratio of this amount to another, or `None` when the divisor is zero
    pub fn ratio_of(&self, divisor: Money) -> Option<f64> {
        if divisor.is_zero() {
            None
        } else {
            Some(self.0 as f64 / divisor.0 as f64)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "250.50", "-10.5", "$10.50", "₪1,250", "500" (whole units) and
    /// anything else Rust parses as a finite `f64` (e.g. "1e3"). Fractions
    /// beyond two digits are rounded half away from zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, trimmed),
        };
        let rest = rest
            .strip_prefix(|c: char| KNOWN_SYMBOLS.contains(&c))
            .unwrap_or(rest)
            .trim_start();
        let cleaned: String = rest.chars().filter(|c| *c != ',' && *c != '_').collect();

        let cents = match parse_decimal_cents(&cleaned) {
            Some(cents) => cents,
            None => {
                let value: f64 = cleaned
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
                Money::from_f64(value)
                    .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?
                    .cents()
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

/// Parse plain `digits[.digits]` into cents, `None` if the shape doesn't match
fn parse_decimal_cents(s: &str) -> Option<i64> {
    let (whole, fraction) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let units: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let digits: Vec<u32> = fraction.chars().filter_map(|c| c.to_digit(10)).collect();
    let tenths = digits.first().copied().unwrap_or(0) as i64;
    let hundredths = digits.get(1).copied().unwrap_or(0) as i64;
    let round_up = digits.get(2).map(|d| *d >= 5).unwrap_or(false);

    units
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths + i64::from(round_up))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

/// Serde adapter that stores money as a decimal number of currency units
///
/// Used for the persisted expense records and exports, so files read
/// `"amount": 250.5` rather than cents. Deserialization never fails: a
/// negative, non-numeric, missing or too large value becomes zero.
pub mod units {
    use super::Money;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let parsed = match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(value) => Money::from_f64(value),
            RawAmount::Text(text) => Money::parse(&text).ok(),
            RawAmount::Other(_) => None,
        };
        Ok(parsed.filter(Money::is_storable).unwrap_or_default())
    }
}
