use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CURRENCY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("currency pattern is valid"));

/// Check that a string is a currency amount with exactly two fractional digits.
pub fn is_currency_format(s: &str) -> bool {
    CURRENCY_PATTERN.is_match(s)
}

/// A non-negative currency amount held as an integer number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(u64);

impl Cents {
    pub fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Parse a currency string like "35.35" into cents.
    ///
    /// Fails if the string does not match `^\d+\.\d{2}$` or the amount
    /// does not fit in a `u64` cent count.
    pub fn parse(s: &str) -> Result<Self> {
        if !is_currency_format(s) {
            bail!("Amount must look like 123.45: {}", s)
        }
        let (dollars, cents) = s
            .split_once('.')
            .with_context(|| format!("Amount has no decimal point: {}", s))?;
        let dollars: u64 = dollars
            .parse()
            .with_context(|| format!("Amount too large: {}", s))?;
        let cents: u64 = cents.parse()?;

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Cents)
            .with_context(|| format!("Amount too large: {}", s))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// True when the fractional part is exactly `.00`
    pub fn is_whole_dollar(self) -> bool {
        self.0 % 100 == 0
    }

    pub fn is_multiple_of(self, cents: u64) -> bool {
        cents != 0 && self.0 % cents == 0
    }

    /// `ceil(cents / divisor)` without going through floating point.
    pub fn div_ceil(self, divisor: u64) -> u64 {
        self.0.div_ceil(divisor)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
