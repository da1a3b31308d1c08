//! Integer price representation in the smallest currency unit.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A monetary amount in the smallest currency unit (rupiah).
///
/// The backend quotes every price as a plain integer, so all arithmetic
/// here is exact `i64` math - no rounding, no precision loss for amounts
/// well past 10^9.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero rupiah.
    pub const ZERO: Self = Self(0);

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0 * quantity as i64)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    /// Formats as `Rp 15.000`, with `id-ID` dot thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        let lead = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && i % 3 == lead {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}Rp {grouped}")
    }
}
