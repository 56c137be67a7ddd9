//! # Price Resolution
//!
//! Selects the single applicable price among overlapping candidates.
//!
//! Candidates are expected to already apply at the query instant; temporal
//! filtering belongs to the caller. Selection is by highest `priority`. Among
//! records sharing the maximum priority the winner is decided by
//! [`resolution_order`]:
//!
//! 1. latest `start_date` (the most recently opened price list)
//! 2. highest `price_list_id`
//! 3. first in input order
//!
//! Records that tie on all three keys can only differ in amount or currency,
//! and for those the earliest one read wins.
//!
//! # Examples
//!
//! ```
//! use price_resolver::domain::entities::PriceRecord;
//! use price_resolver::domain::services::price_resolution::select_best;
//! use price_resolver::domain::value_objects::{BrandId, PriceListId, ProductId, Timestamp};
//! use rust_decimal::Decimal;
//!
//! let start = Timestamp::from_ymd_hms(2020, 6, 14, 0, 0, 0).unwrap();
//! let end = Timestamp::from_ymd_hms(2020, 12, 31, 23, 59, 59).unwrap();
//! let base = PriceRecord::builder(BrandId::new(1), ProductId::new(35455), PriceListId::new(1), start, end)
//!     .amount(Decimal::new(3550, 2))
//!     .build()
//!     .unwrap();
//! let promo = PriceRecord::builder(BrandId::new(1), ProductId::new(35455), PriceListId::new(2), start, end)
//!     .priority(1)
//!     .amount(Decimal::new(2545, 2))
//!     .build()
//!     .unwrap();
//!
//! let selected = select_best(&[base, promo.clone()]).unwrap();
//! assert_eq!(selected, promo);
//! ```

use crate::domain::entities::PriceRecord;
use crate::domain::errors::{DomainError, DomainResult};
use std::cmp::Ordering;

/// Total order used to pick a winner; `Greater` means `a` beats `b`.
///
/// Store adapters that resolve a best match on their side must order rows
/// the same way.
#[must_use]
pub fn resolution_order(a: &PriceRecord, b: &PriceRecord) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.start_date().cmp(&b.start_date()))
        .then_with(|| a.price_list_id().cmp(&b.price_list_id()))
}

/// Picks the highest-priority record.
///
/// A missing sequence is treated the same as an empty one.
///
/// # Errors
///
/// Returns `DomainError::NoPriceAvailable` when there is nothing to select.
pub fn select_highest_priority(candidates: Option<&[PriceRecord]>) -> DomainResult<PriceRecord> {
    select_best(candidates.unwrap_or_default())
}

/// Picks the highest-priority record from a slice.
///
/// # Errors
///
/// Returns `DomainError::NoPriceAvailable` when `candidates` is empty.
pub fn select_best(candidates: &[PriceRecord]) -> DomainResult<PriceRecord> {
    let mut best: Option<&PriceRecord> = None;
    for candidate in candidates {
        // Strictly greater only, so the first of a full tie is kept.
        if best.is_none_or(|b| resolution_order(candidate, b) == Ordering::Greater) {
            best = Some(candidate);
        }
    }
    best.cloned().ok_or(DomainError::NoPriceAvailable)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{BrandId, PriceListId, ProductId, Timestamp};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn ts(month: u32, day: u32, hour: u32) -> Timestamp {
        Timestamp::from_ymd_hms(2020, month, day, hour, 0, 0).unwrap()
    }

    fn candidate(list: i32, priority: i32, start: Timestamp, cents: i64) -> PriceRecord {
        PriceRecord::builder(
            BrandId::new(1),
            ProductId::new(35455),
            PriceListId::new(list),
            start,
            ts(12, 31, 23),
        )
        .priority(priority)
        .amount(Decimal::new(cents, 2))
        .currency("EUR")
        .build()
        .unwrap()
    }

    #[test]
    fn empty_sequence_fails() {
        assert_eq!(select_best(&[]), Err(DomainError::NoPriceAvailable));
    }

    #[test]
    fn absent_sequence_fails_like_empty() {
        assert_eq!(
            select_highest_priority(None),
            Err(DomainError::NoPriceAvailable)
        );
        assert_eq!(
            select_highest_priority(Some(&[])),
            Err(DomainError::NoPriceAvailable)
        );
    }

    #[test]
    fn singleton_is_returned_unchanged() {
        let only = candidate(1, 0, ts(6, 14, 0), 3550);
        assert_eq!(select_best(std::slice::from_ref(&only)).unwrap(), only);
    }

    #[test]
    fn higher_priority_wins_over_cheaper_or_dearer() {
        let base = candidate(1, 0, ts(6, 14, 0), 3550);
        let promo = candidate(2, 1, ts(6, 14, 15), 2545);
        let selected = select_best(&[base.clone(), promo.clone()]).unwrap();
        assert_eq!(selected.priority(), 1);
        assert_eq!(selected.amount(), Decimal::new(2545, 2));

        let reversed = select_best(&[promo.clone(), base]).unwrap();
        assert_eq!(reversed, promo);
    }

    #[test]
    fn tie_on_priority_goes_to_latest_start() {
        let older = candidate(4, 1, ts(6, 14, 0), 1000);
        let newer = candidate(3, 1, ts(6, 15, 0), 2000);
        assert_eq!(select_best(&[older.clone(), newer.clone()]).unwrap(), newer);
        assert_eq!(select_best(&[newer.clone(), older]).unwrap(), newer);
    }

    #[test]
    fn tie_on_priority_and_start_goes_to_highest_price_list() {
        let low = candidate(2, 1, ts(6, 14, 0), 1000);
        let high = candidate(7, 1, ts(6, 14, 0), 2000);
        assert_eq!(select_best(&[high.clone(), low.clone()]).unwrap(), high);
        assert_eq!(select_best(&[low, high.clone()]).unwrap(), high);
    }

    #[test]
    fn full_tie_keeps_first_read() {
        let first = candidate(2, 1, ts(6, 14, 0), 1000);
        let second = candidate(2, 1, ts(6, 14, 0), 9999);
        let selected = select_best(&[first.clone(), second.clone()]).unwrap();
        assert_eq!(selected, first);

        // Same input order, same answer.
        for _ in 0..10 {
            assert_eq!(select_best(&[first.clone(), second.clone()]).unwrap(), first);
        }
    }

    #[test]
    fn resolution_order_ranks_priority_first() {
        let a = candidate(1, 2, ts(6, 1, 0), 1);
        let b = candidate(9, 1, ts(6, 30, 0), 1);
        assert_eq!(resolution_order(&a, &b), Ordering::Greater);
        assert_eq!(resolution_order(&b, &a), Ordering::Less);
        assert_eq!(resolution_order(&a, &a), Ordering::Equal);
    }

    fn arb_candidate() -> impl Strategy<Value = PriceRecord> {
        (1..6i32, -3..4i32, 1..28u32, 1..10_000i64).prop_map(|(list, priority, day, cents)| {
            candidate(list, priority, ts(6, day, 0), cents)
        })
    }

    proptest! {
        #[test]
        fn selected_priority_is_maximal(candidates in prop::collection::vec(arb_candidate(), 1..20)) {
            let selected = select_best(&candidates).unwrap();
            for c in &candidates {
                prop_assert!(selected.priority() >= c.priority());
            }
        }

        #[test]
        fn selected_is_one_of_the_candidates(candidates in prop::collection::vec(arb_candidate(), 1..20)) {
            let selected = select_best(&candidates).unwrap();
            prop_assert!(candidates.contains(&selected));
        }

        #[test]
        fn selection_is_deterministic(candidates in prop::collection::vec(arb_candidate(), 1..20)) {
            let first = select_best(&candidates).unwrap();
            let second = select_best(&candidates).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn winner_is_never_beaten(candidates in prop::collection::vec(arb_candidate(), 1..20)) {
            let selected = select_best(&candidates).unwrap();
            for c in &candidates {
                prop_assert_ne!(resolution_order(c, &selected), Ordering::Greater);
            }
        }
    }
}
