//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog is priced in naira. Prices arrive from the content store as
//! plain JSON numbers and are rendered with group separators and the currency
//! glyph, e.g. `₦12,500` or `₦1,234.50`.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative naira amount.
///
/// ## Constraints
///
/// - Amount must be >= 0
///
/// ## Examples
///
/// ```
/// use franemm_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(12_500, 0)).expect("non-negative");
/// assert_eq!(price.to_string(), "₦12,500");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// The currency glyph used across the storefront.
    pub const CURRENCY_GLYPH: &'static str = "₦";

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// A zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format the amount with thousands separators, without the glyph.
    ///
    /// Whole amounts render without decimals; fractional amounts render with
    /// exactly two decimal places.
    #[must_use]
    pub fn formatted_amount(&self) -> String {
        let rounded = self.0.round_dp(2);
        let whole = rounded.trunc();
        let grouped = group_thousands(&whole.to_string());

        if rounded.fract().is_zero() {
            grouped
        } else {
            // round_dp(2) leaves at most two fractional digits
            let cents = (rounded.fract() * Decimal::ONE_HUNDRED)
                .abs()
                .to_i64()
                .unwrap_or(0);
            format!("{grouped}.{cents:02}")
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::CURRENCY_GLYPH, self.formatted_amount())
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Insert a comma between every group of three digits, counting from the
/// right.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_digit() && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }

    out
}
