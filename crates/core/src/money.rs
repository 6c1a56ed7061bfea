//! Money in the smallest currency unit (cents).
//!
//! All monetary amounts are integer cents. Percentages are expressed in basis
//! points (500 = 5%) and rounded half-up to the nearest cent, which is all the
//! precision the pricing rules ever need: subtotals are exact products of
//! cent prices and quantities, and shipping is a fixed constant.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A monetary amount in integer cents.
///
/// Signed so that intermediate arithmetic (e.g. subtracting discounts) cannot
/// silently wrap; domain constructors reject negative prices at the edge.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in cents.
    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// A basis-point fraction of this amount, rounded half-up to the cent.
    ///
    /// `Money::from_cents(12_500).percent_bps(500)` is 625 cents (5% of
    /// $125.00). The `+ 5000` term rounds the half-cent boundary upward,
    /// matching conventional currency rounding.
    pub fn percent_bps(&self, bps: u32) -> Money {
        // i128 to keep large subtotals from overflowing the intermediate.
        let cents = (self.0 as i128 * bps as i128 + 5_000) / 10_000;
        Money(cents as i64)
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}${}.{:02}", (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Multiplication by a quantity (line totals).
impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, qty: u32) -> Self {
        Self(self.0 * qty as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}
