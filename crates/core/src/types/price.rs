//! Positive prices using decimal arithmetic.
//!
//! All prices in the shop are Brazilian reais, so no currency is carried.
//! Display formatting (`R$ 25,50`) belongs to the storefront filters.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be greater than zero (got {0})")]
    NotPositive(Decimal),
    /// The text could not be read as a decimal number.
    #[error("invalid price: {0:?}")]
    Unparseable(String),
}

/// A strictly positive amount in reais.
///
/// Serialized as a decimal string (`"25.50"`) so that snapshots never go
/// through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] for zero or negative amounts.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount > Decimal::ZERO {
            Ok(Self(amount))
        } else {
            Err(PriceError::NotPositive(amount))
        }
    }

    /// Create a price from an integer number of centavos.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] when `cents <= 0`.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// Parse a price typed into an admin form.
    ///
    /// Surrounding whitespace is ignored and a comma is accepted as the
    /// decimal separator (`"25,50"`), as Brazilian keyboards produce it.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Unparseable`] for non-numeric text and
    /// [`PriceError::NotPositive`] for zero or negative amounts.
    pub fn parse_form(input: &str) -> Result<Self, PriceError> {
        let normalized = input.trim().replace(',', ".");
        let amount = Decimal::from_str(&normalized)
            .map_err(|_| PriceError::Unparseable(input.to_owned()))?;
        Self::new(amount)
    }

    /// The amount in reais.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
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

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_form(s)
    }
}
