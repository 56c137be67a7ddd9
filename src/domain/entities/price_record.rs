//! # Price Record Entity
//!
//! A time-bounded price for a (brand, product) pair.
//!
//! Records are read-only snapshots owned by the price store. The core only
//! reads and selects them, so the type is a plain immutable value with
//! structural equality.
//!
//! # Examples
//!
//! ```
//! use price_resolver::domain::entities::PriceRecord;
//! use price_resolver::domain::value_objects::{BrandId, PriceListId, ProductId, Timestamp};
//! use rust_decimal::Decimal;
//!
//! let record = PriceRecord::builder(
//!     BrandId::new(1),
//!     ProductId::new(35455),
//!     PriceListId::new(1),
//!     Timestamp::from_ymd_hms(2020, 6, 14, 0, 0, 0).unwrap(),
//!     Timestamp::from_ymd_hms(2020, 12, 31, 23, 59, 59).unwrap(),
//! )
//! .amount(Decimal::new(3550, 2))
//! .currency("EUR")
//! .build()
//! .unwrap();
//!
//! assert!(record.is_valid());
//! assert_eq!(record.display_price(), "35.50 EUR");
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{
    BrandId, Currency, Money, PriceListId, ProductId, Timestamp, ValidityWindow,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price-list entry.
///
/// # Invariants
///
/// - `start_date <= end_date` (held by [`ValidityWindow`])
///
/// Validity in the business sense (positive amount, non-blank currency) is
/// reported by [`PriceRecord::is_valid`] but not enforced at construction,
/// because stores may legitimately hold such rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRecord {
    brand_id: BrandId,
    product_id: ProductId,
    price_list_id: PriceListId,
    window: ValidityWindow,
    priority: i32,
    price: Money,
}

impl PriceRecord {
    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValidityWindow` if `start_date > end_date`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brand_id: BrandId,
        product_id: ProductId,
        price_list_id: PriceListId,
        start_date: Timestamp,
        end_date: Timestamp,
        priority: i32,
        amount: Decimal,
        currency: Currency,
    ) -> DomainResult<Self> {
        let window = ValidityWindow::new(start_date, end_date)?;
        Ok(Self::from_parts(
            brand_id,
            product_id,
            price_list_id,
            window,
            priority,
            Money::new(amount, currency),
        ))
    }

    /// Assembles a record from already-validated parts.
    #[must_use]
    pub fn from_parts(
        brand_id: BrandId,
        product_id: ProductId,
        price_list_id: PriceListId,
        window: ValidityWindow,
        priority: i32,
        price: Money,
    ) -> Self {
        Self {
            brand_id,
            product_id,
            price_list_id,
            window,
            priority,
            price,
        }
    }

    /// Returns a builder with priority 0, amount 0 and currency `EUR`.
    #[must_use]
    pub fn builder(
        brand_id: BrandId,
        product_id: ProductId,
        price_list_id: PriceListId,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> PriceRecordBuilder {
        PriceRecordBuilder::new(brand_id, product_id, price_list_id, start_date, end_date)
    }

    /// Brand the price belongs to.
    #[inline]
    #[must_use]
    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    /// Product the price belongs to.
    #[inline]
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Price list the entry comes from.
    #[inline]
    #[must_use]
    pub fn price_list_id(&self) -> PriceListId {
        self.price_list_id
    }

    /// Applicable window.
    #[inline]
    #[must_use]
    pub fn window(&self) -> &ValidityWindow {
        &self.window
    }

    /// First instant the price applies.
    #[inline]
    #[must_use]
    pub fn start_date(&self) -> Timestamp {
        self.window.start()
    }

    /// Last instant the price applies.
    #[inline]
    #[must_use]
    pub fn end_date(&self) -> Timestamp {
        self.window.end()
    }

    /// Disambiguator between overlapping entries; higher wins.
    #[inline]
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Amount and currency.
    #[inline]
    #[must_use]
    pub fn price(&self) -> &Money {
        &self.price
    }

    /// Exact amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.price.amount()
    }

    /// Currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &Currency {
        self.price.currency()
    }

    /// Returns true if the record is for the given brand and product.
    #[must_use]
    pub fn is_for(&self, brand_id: BrandId, product_id: ProductId) -> bool {
        self.brand_id == brand_id && self.product_id == product_id
    }

    /// Returns true if `instant` falls inside the inclusive window.
    #[inline]
    #[must_use]
    pub fn applies_at(&self, instant: Timestamp) -> bool {
        self.window.contains(instant)
    }

    /// Positive amount and non-blank currency.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.price.is_valid()
    }

    /// `"<amount> <currency>"`, as shown to API clients.
    #[must_use]
    pub fn display_price(&self) -> String {
        self.price.to_string()
    }
}

impl fmt::Display for PriceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceRecord(brand={} product={} list={} priority={} price={} window={})",
            self.brand_id,
            self.product_id,
            self.price_list_id,
            self.priority,
            self.price,
            self.window
        )
    }
}

/// Builder for [`PriceRecord`].
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built"]
pub struct PriceRecordBuilder {
    brand_id: BrandId,
    product_id: ProductId,
    price_list_id: PriceListId,
    start_date: Timestamp,
    end_date: Timestamp,
    priority: i32,
    amount: Decimal,
    currency: Currency,
}

impl PriceRecordBuilder {
    /// Creates a builder with the required fields.
    pub fn new(
        brand_id: BrandId,
        product_id: ProductId,
        price_list_id: PriceListId,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Self {
        Self {
            brand_id,
            product_id,
            price_list_id,
            start_date,
            end_date,
            priority: 0,
            amount: Decimal::ZERO,
            currency: Currency::new("EUR"),
        }
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the currency code.
    pub fn currency(mut self, code: impl AsRef<str>) -> Self {
        self.currency = Currency::new(code);
        self
    }

    /// Builds the record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValidityWindow` if start is after end.
    pub fn build(self) -> DomainResult<PriceRecord> {
        PriceRecord::new(
            self.brand_id,
            self.product_id,
            self.price_list_id,
            self.start_date,
            self.end_date,
            self.priority,
            self.amount,
            self.currency,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    fn ts(month: u32, day: u32, hour: u32, min: u32) -> Timestamp {
        Timestamp::from_ymd_hms(2020, month, day, hour, min, 0).unwrap()
    }

    fn record(amount: Decimal, currency: &str) -> PriceRecord {
        PriceRecord::builder(
            BrandId::new(1),
            ProductId::new(35455),
            PriceListId::new(2),
            ts(6, 14, 15, 0),
            ts(6, 14, 18, 30),
        )
        .priority(1)
        .amount(amount)
        .currency(currency)
        .build()
        .unwrap()
    }

    #[test]
    fn builder_sets_every_field() {
        let r = record(Decimal::new(2545, 2), "EUR");
        assert_eq!(r.brand_id(), BrandId::new(1));
        assert_eq!(r.product_id(), ProductId::new(35455));
        assert_eq!(r.price_list_id(), PriceListId::new(2));
        assert_eq!(r.priority(), 1);
        assert_eq!(r.amount(), Decimal::new(2545, 2));
        assert_eq!(r.currency().as_str(), "EUR");
        assert_eq!(r.start_date(), ts(6, 14, 15, 0));
        assert_eq!(r.end_date(), ts(6, 14, 18, 30));
    }

    #[test]
    fn new_rejects_inverted_window() {
        let result = PriceRecord::builder(
            BrandId::new(1),
            ProductId::new(1),
            PriceListId::new(1),
            ts(6, 15, 0, 0),
            ts(6, 14, 0, 0),
        )
        .build();
        assert!(matches!(result, Err(DomainError::InvalidValidityWindow(_))));
    }

    #[test]
    fn applies_at_uses_inclusive_bounds() {
        let r = record(Decimal::ONE, "EUR");
        assert!(r.applies_at(ts(6, 14, 15, 0)));
        assert!(r.applies_at(ts(6, 14, 18, 30)));
        assert!(!r.applies_at(ts(6, 14, 18, 31)));
    }

    #[test]
    fn validity_is_reported_not_enforced() {
        let r = record(Decimal::ZERO, "");
        assert!(!r.is_valid());
        assert!(record(Decimal::new(2545, 2), "EUR").is_valid());
    }

    #[test]
    fn display_price_joins_amount_and_currency() {
        assert_eq!(record(Decimal::new(2545, 2), "eur").display_price(), "25.45 EUR");
    }

    #[test]
    fn is_for_matches_brand_and_product() {
        let r = record(Decimal::ONE, "EUR");
        assert!(r.is_for(BrandId::new(1), ProductId::new(35455)));
        assert!(!r.is_for(BrandId::new(2), ProductId::new(35455)));
        assert!(!r.is_for(BrandId::new(1), ProductId::new(1)));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(record(Decimal::ONE, "EUR"), record(Decimal::ONE, "EUR"));
        assert_ne!(record(Decimal::ONE, "EUR"), record(Decimal::TWO, "EUR"));
    }
}
