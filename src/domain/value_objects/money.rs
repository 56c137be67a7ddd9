//! # Money
//!
//! Exact decimal amount and ISO currency code.
//!
//! Amounts are `rust_decimal::Decimal`; no floating point is involved
//! anywhere between the store and the response.
//!
//! # Examples
//!
//! ```
//! use price_resolver::domain::value_objects::{Currency, Money};
//! use rust_decimal::Decimal;
//!
//! let money = Money::new(Decimal::new(3550, 2), Currency::new("eur"));
//! assert!(money.is_valid());
//! assert_eq!(money.to_string(), "35.50 EUR");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency code, stored upper-cased.
///
/// Construction does not validate; use [`Currency::parse`] for strict input
/// and [`Currency::is_empty`] to detect a blank code on records read from a
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Wraps a code, trimming and upper-casing it.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    /// Parses a strict three-letter alphabetic code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrency` for anything else.
    pub fn parse(code: &str) -> DomainResult<Self> {
        let currency = Self::new(code);
        if currency.0.len() != 3 || !currency.0.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_currency(code.to_string()));
        }
        Ok(currency)
    }

    /// Returns the code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the code is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An amount in a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a money value.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Returns the amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Positive amount and non-blank currency.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.amount > Decimal::ZERO && !self.currency.is_empty()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
