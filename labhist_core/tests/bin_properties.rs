// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariants of the binner over generated inputs.

use labhist_core::{Bucket, Record, bin};
use proptest::prelude::*;

fn records(values: &[f64]) -> Vec<Record<usize>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Record::new("r", v, i))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn every_record_lands_in_exactly_one_bucket(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200),
        bucket_count in 1usize..40,
    ) {
        let buckets = bin(records(&values), bucket_count).unwrap();
        let total: usize = buckets.iter().map(Bucket::len).sum();
        prop_assert_eq!(total, values.len());

        let mut seen: Vec<usize> = buckets
            .iter()
            .flat_map(|b| b.items.iter().map(|r| r.annotation))
            .collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..values.len()).collect::<Vec<_>>());
    }

    #[test]
    fn buckets_partition_the_value_range(
        values in prop::collection::vec(-1.0e3f64..1.0e3, 1..100),
        bucket_count in 1usize..30,
    ) {
        let buckets = bin(records(&values), bucket_count).unwrap();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(buckets[0].range_start, min);
        prop_assert_eq!(buckets[buckets.len() - 1].range_end, max);
        for pair in buckets.windows(2) {
            prop_assert_eq!(pair[0].range_end, pair[1].range_start);
            prop_assert!(pair[0].range_start <= pair[0].range_end);
        }
        for b in &buckets {
            for r in &b.items {
                prop_assert!(b.contains(r.value), "{} outside its bucket", r.value);
            }
        }
    }

    #[test]
    fn grouping_is_stable(
        values in prop::collection::vec(0.0f64..10.0, 1..100),
        bucket_count in 1usize..10,
    ) {
        let buckets = bin(records(&values), bucket_count).unwrap();
        for b in &buckets {
            let order: Vec<usize> = b.items.iter().map(|r| r.annotation).collect();
            prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn binning_is_idempotent(
        values in prop::collection::vec(-50.0f64..50.0, 0..60),
        bucket_count in 1usize..12,
    ) {
        let a = bin(records(&values), bucket_count).unwrap();
        let b = bin(records(&values), bucket_count).unwrap();
        prop_assert_eq!(a, b);
    }
}
