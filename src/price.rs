//! Rupee amounts for catalog prices.
//!
//! Uses whole-rupee integer representation to avoid floating-point precision
//! issues in price comparisons. CourtKart is a single-market store, so there
//! is no currency dimension: everything is INR.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rupee sign used in price display.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

/// A non-negative price in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Rupees(u32);

impl Rupees {
    /// Create a rupee amount.
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Get the raw rupee amount.
    pub const fn amount(&self) -> u32 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Percentage discount of `sale` relative to this original price,
    /// rounded to the nearest whole percent.
    ///
    /// Returns 0 when the original price is zero or not actually higher than
    /// the sale price, so callers never see a negative discount.
    pub fn discount_percent(&self, sale: Rupees) -> u32 {
        if self.0 == 0 || sale.0 >= self.0 {
            return 0;
        }
        let savings = (self.0 - sale.0) as f64;
        (savings / self.0 as f64 * 100.0).round() as u32
    }

    /// Format as a display string with the rupee sign and digit grouping,
    /// e.g. `₹18,999`.
    pub fn display(&self) -> String {
        format!("{}", self)
    }
}

impl From<u32> for Rupees {
    fn from(amount: u32) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "{}{}", RUPEE_SYMBOL, grouped)
    }
}
