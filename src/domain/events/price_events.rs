//! # Price Events
//!
//! Payload published after a price has been resolved.
//!
//! # Examples
//!
//! ```
//! use price_resolver::domain::entities::PriceRecord;
//! use price_resolver::domain::events::{DomainEvent, PriceRetrieved};
//! use price_resolver::domain::value_objects::{BrandId, PriceListId, ProductId, Timestamp};
//! use rust_decimal::Decimal;
//!
//! let record = PriceRecord::builder(
//!     BrandId::new(1),
//!     ProductId::new(35455),
//!     PriceListId::new(2),
//!     Timestamp::from_ymd_hms(2020, 6, 14, 15, 0, 0).unwrap(),
//!     Timestamp::from_ymd_hms(2020, 6, 14, 18, 30, 0).unwrap(),
//! )
//! .priority(1)
//! .amount(Decimal::new(2545, 2))
//! .build()
//! .unwrap();
//!
//! let event = PriceRetrieved::from_record(&record);
//! assert_eq!(event.partition_key(), "35455-1");
//! ```

use crate::domain::entities::PriceRecord;
use crate::domain::events::domain_event::{DomainEvent, EventType};
use crate::domain::value_objects::{BrandId, Currency, PriceListId, ProductId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A price was resolved and handed back to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRetrieved {
    /// Unique identifier for this event.
    pub event_id: Uuid,
    /// Brand of the resolved price.
    pub brand_id: BrandId,
    /// First instant of the resolved price's window.
    pub start_date: Timestamp,
    /// Last instant of the resolved price's window.
    pub end_date: Timestamp,
    /// Price list the record came from.
    pub price_list: PriceListId,
    /// Product of the resolved price.
    pub product_id: ProductId,
    /// Priority of the resolved record.
    pub priority: i32,
    /// Exact amount, serialized as a string.
    pub price: Decimal,
    /// Currency code.
    pub currency: Currency,
    /// When the event was built.
    pub event_timestamp: Timestamp,
    /// Always [`EventType::PriceRetrieved`].
    pub event_type: EventType,
}

impl PriceRetrieved {
    /// Builds the event for a resolved record, stamped now.
    #[must_use]
    pub fn from_record(record: &PriceRecord) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            brand_id: record.brand_id(),
            start_date: record.start_date(),
            end_date: record.end_date(),
            price_list: record.price_list_id(),
            product_id: record.product_id(),
            priority: record.priority(),
            price: record.amount(),
            currency: record.currency().clone(),
            event_timestamp: Timestamp::now(),
            event_type: EventType::PriceRetrieved,
        }
    }
}

impl DomainEvent for PriceRetrieved {
    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn occurred_at(&self) -> Timestamp {
        self.event_timestamp
    }

    fn event_type(&self) -> EventType {
        self.event_type
    }

    fn partition_key(&self) -> String {
        format!("{}-{}", self.product_id, self.brand_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record() -> PriceRecord {
        PriceRecord::builder(
            BrandId::new(1),
            ProductId::new(35455),
            PriceListId::new(4),
            Timestamp::from_ymd_hms(2020, 6, 15, 16, 0, 0).unwrap(),
            Timestamp::from_ymd_hms(2020, 12, 31, 23, 59, 59).unwrap(),
        )
        .priority(1)
        .amount(Decimal::new(3895, 2))
        .currency("EUR")
        .build()
        .unwrap()
    }

    #[test]
    fn from_record_copies_fields() {
        let event = PriceRetrieved::from_record(&record());
        assert_eq!(event.brand_id, BrandId::new(1));
        assert_eq!(event.product_id, ProductId::new(35455));
        assert_eq!(event.price_list, PriceListId::new(4));
        assert_eq!(event.priority, 1);
        assert_eq!(event.price, Decimal::new(3895, 2));
        assert_eq!(event.currency.as_str(), "EUR");
        assert_eq!(event.event_type(), EventType::PriceRetrieved);
    }

    #[test]
    fn each_event_gets_its_own_id() {
        let a = PriceRetrieved::from_record(&record());
        let b = PriceRetrieved::from_record(&record());
        assert_ne!(a.event_id(), b.event_id());
    }

    #[test]
    fn json_shape_matches_wire_contract() {
        let event = PriceRetrieved::from_record(&record());
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["brandId"], 1);
        assert_eq!(value["productId"], 35455);
        assert_eq!(value["priceList"], 4);
        assert_eq!(value["price"], "38.95");
        assert_eq!(value["startDate"], "2020-06-15 16:00:00");
        assert_eq!(value["eventType"], "PRICE_RETRIEVED");
    }
}
