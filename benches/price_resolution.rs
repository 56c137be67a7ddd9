//! Benchmarks for price selection.
//!
//! Run with: cargo bench --bench price_resolution

#![allow(clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use price_resolver::domain::entities::PriceRecord;
use price_resolver::domain::services::select_best;
use price_resolver::domain::value_objects::{BrandId, PriceListId, ProductId, Timestamp};
use price_resolver::infrastructure::persistence::PriceStore;
use price_resolver::infrastructure::persistence::in_memory::InMemoryPriceStore;
use rust_decimal::Decimal;
use std::hint::black_box;

const BRAND: BrandId = BrandId::new(1);
const PRODUCT: ProductId = ProductId::new(35455);

/// `n` overlapping records for one product, priorities cycling 0..8.
fn candidates(n: i32) -> Vec<PriceRecord> {
    (0..n)
        .map(|i| {
            let day = u32::try_from(i % 28).unwrap() + 1;
            PriceRecord::builder(
                BRAND,
                PRODUCT,
                PriceListId::new(i + 1),
                Timestamp::from_ymd_hms(2020, 1, day, 0, 0, 0).unwrap(),
                Timestamp::from_ymd_hms(2020, 12, 31, 23, 59, 59).unwrap(),
            )
            .priority(i % 8)
            .amount(Decimal::new(1000 + i64::from(i), 2))
            .build()
            .unwrap()
        })
        .collect()
}

fn bench_select_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_best");

    for n in [4, 64, 1_024] {
        let records = candidates(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| select_best(black_box(records)).unwrap());
        });
    }

    group.finish();
}

fn bench_in_memory_best_match(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let at = Timestamp::from_ymd_hms(2020, 6, 15, 12, 0, 0).unwrap();
    let mut group = c.benchmark_group("in_memory_best_match");

    for n in [4, 64, 1_024] {
        let store = InMemoryPriceStore::with_records(candidates(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, store| {
            b.to_async(&runtime).iter(|| async {
                store
                    .find_best_match(BRAND, PRODUCT, black_box(at))
                    .await
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_best, bench_in_memory_best_match);
criterion_main!(benches);
