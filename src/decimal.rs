use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// decimal places kept on monetary input before any whole-unit rounding
const MONEY_SCALE: u32 = 8;

/// Fixed-point monetary amount in major currency units (rupees, dollars, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MONEY_SCALE))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(MONEY_SCALE)))
    }

    /// create from integer amount (rupees, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// lenient intake from a form field; NaN, infinities and values outside
    /// the decimal range collapse to zero
    pub fn from_f64(amount: f64) -> Self {
        Decimal::from_f64(amount)
            .map(Money::from_decimal)
            .unwrap_or(Money::ZERO)
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    /// round to whole currency units, ties away from zero
    pub fn round_to_unit(&self) -> Self {
        Money(round_half_away(self.0, 0))
    }

    /// whole units as an integer, `None` when fractional or out of range
    pub fn to_i64(&self) -> Option<i64> {
        if self.0.fract().is_zero() {
            self.0.to_i64()
        } else {
            None
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i64> for Money {
    fn from(i: i64) -> Self {
        Money::from_major(i)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(MONEY_SCALE))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(MONEY_SCALE))
    }
}

/// rate type for interest rates, stored as a fraction (0.10 is 10%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from a percentage figure (e.g., 8.5 for 8.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// create from whole percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::ONE_HUNDRED)
    }

    /// create from basis points (e.g., 500 for 5%)
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::from(bps) / Decimal::from(10_000))
    }

    /// lenient intake of a percentage typed into a form field; non-finite
    /// values collapse to zero
    pub fn from_f64_percent(p: f64) -> Self {
        Decimal::from_f64(p)
            .map(Rate::from_percent)
            .unwrap_or(Rate::ZERO)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage, `None` when the fraction is too large to scale
    pub fn as_percentage(&self) -> Option<Decimal> {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|p| p.normalize())
    }

    /// monthly rate from annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_percentage() {
            Some(percent) => write!(f, "{}%", percent),
            None => write!(f, "{} (fraction)", self.0),
        }
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

/// round to `dp` places with ties away from zero
pub(crate) fn round_half_away(d: Decimal, dp: u32) -> Decimal {
    d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
