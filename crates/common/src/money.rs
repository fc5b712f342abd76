//! Money amounts in integer cents.

use serde::{Deserialize, Serialize};

/// Money amount represented in cents to avoid floating point issues.
///
/// Amounts are parsed exactly from decimal text at the loading boundary
/// and summed with plain integer arithmetic, so aggregates carry no
/// rounding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Parses a decimal string like `"123.45"` into exact cents.
    ///
    /// Accepts an optional leading minus, a bare integer part (`"12"` is
    /// 1200 cents), and at most two fraction digits. Returns `None` for
    /// anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if fraction.len() > 2 {
            return None;
        }
        // i64::from_str accepts a sign, which `split_once` must not let through.
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let fraction_cents: i64 = if fraction.is_empty() {
            0
        } else {
            let digits: i64 = fraction.parse().ok()?;
            if fraction.len() == 1 { digits * 10 } else { digits }
        };

        let cents = whole * 100 + fraction_cents;
        Some(Self {
            cents: if negative { -cents } else { cents },
        })
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_fraction_digits() {
        assert_eq!(Money::parse("123.45"), Some(Money::from_cents(12345)));
        assert_eq!(Money::parse("0.05"), Some(Money::from_cents(5)));
    }

    #[test]
    fn parse_bare_integer() {
        assert_eq!(Money::parse("12"), Some(Money::from_cents(1200)));
        assert_eq!(Money::parse("0"), Some(Money::zero()));
    }

    #[test]
    fn parse_single_fraction_digit() {
        assert_eq!(Money::parse("7.5"), Some(Money::from_cents(750)));
    }

    #[test]
    fn parse_negative() {
        assert_eq!(Money::parse("-3.10"), Some(Money::from_cents(-310)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("."), None);
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse("1.234"), None);
        assert_eq!(Money::parse("12.x"), None);
    }

    #[test]
    fn addition_is_exact() {
        let total = Money::parse("0.10").unwrap() + Money::parse("0.20").unwrap();
        assert_eq!(total, Money::from_cents(30));
    }

    #[test]
    fn add_assign_accumulates() {
        let mut total = Money::zero();
        total += Money::from_cents(150);
        total += Money::from_cents(50);
        assert_eq!(total.cents(), 200);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(Money::from_cents(12345).to_string(), "$123.45");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-310).to_string(), "-$3.10");
    }
}
