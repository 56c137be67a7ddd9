//! # Identifiers
//!
//! Integer identifiers for brands, products and price lists.
//!
//! Each identifier is a transparent newtype so the three cannot be swapped
//! by accident at a call site.
//!
//! # Examples
//!
//! ```
//! use price_resolver::domain::value_objects::{BrandId, ProductId};
//!
//! let brand = BrandId::new(1);
//! let product = ProductId::positive(35455).unwrap();
//! assert_eq!(brand.get(), 1);
//! assert_eq!(product.to_string(), "35455");
//! assert!(ProductId::positive(0).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $inner:ty, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Wraps a raw value without validation.
            #[inline]
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Wraps a raw value, rejecting zero and negative values.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidIdentifier` if `value <= 0`.
            pub fn positive(value: $inner) -> DomainResult<Self> {
                if value <= 0 {
                    return Err(DomainError::invalid_identifier(format!(
                        "{} must be positive, got {}",
                        $label, value
                    )));
                }
                Ok(Self(value))
            }

            /// Returns the raw value.
            #[inline]
            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(
    /// Brand (chain) identifier.
    BrandId,
    i32,
    "brandId"
);

integer_id!(
    /// Product identifier.
    ProductId,
    i64,
    "productId"
);

integer_id!(
    /// Price list (tariff) identifier.
    PriceListId,
    i32,
    "priceList"
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn positive_accepts_positive_values() {
        assert_eq!(BrandId::positive(1).unwrap().get(), 1);
        assert_eq!(ProductId::positive(35455).unwrap().get(), 35455);
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        let err = BrandId::positive(0).unwrap_err();
        assert!(err.to_string().contains("brandId"));
        assert!(ProductId::positive(-3).is_err());
        assert!(PriceListId::positive(-1).is_err());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(35455)).unwrap();
        assert_eq!(json, "35455");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProductId::new(35455));
    }
}
