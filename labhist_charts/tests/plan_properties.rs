// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout invariants over generated buckets and viewports.

use labhist_charts::{LayoutConstraints, Size, plan};
use labhist_core::{Bucket, Record, bin};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn buckets(values: &[f64], bucket_count: usize) -> Vec<Bucket<()>> {
    let records = values.iter().map(|&v| Record::new("r", v, ()));
    bin(records, bucket_count).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn columns_fit_the_viewport(
        values in prop::collection::vec(-1.0e3f64..1.0e3, 1..150),
        bucket_count in 1usize..40,
        width in 40.0f64..2000.0,
        height in 60.0f64..1200.0,
    ) {
        let buckets = buckets(&values, bucket_count);
        let p = plan(&buckets, Size::new(width, height), &LayoutConstraints::default());
        prop_assert_eq!(p.columns.len(), buckets.len());
        prop_assert!(p.total_width() <= width + EPS);
        prop_assert!(p.row_height <= 20.0);
        prop_assert!(p.column_width <= 150.0);

        for (i, column) in p.columns.iter().enumerate() {
            prop_assert!(column.x_offset + p.column_width <= width + EPS);
            // Bars end on the baseline and never rise more than half a row above the top.
            prop_assert!((column.bar_top + column.bar_height - p.baseline).abs() < EPS);
            prop_assert!(column.bar_top >= -p.row_height / 2.0 - EPS);
            prop_assert_eq!(column.labels.len(), buckets[i].len());
            for label in &column.labels {
                let origin = p.label_origin(column, label);
                prop_assert!(origin.y <= p.baseline + EPS, "label below the baseline");
            }
        }
    }

    #[test]
    fn ticks_cover_every_boundary(
        values in prop::collection::vec(-1.0e3f64..1.0e3, 1..150),
        bucket_count in 1usize..40,
        width in 40.0f64..2000.0,
    ) {
        let buckets = buckets(&values, bucket_count);
        let p = plan(&buckets, Size::new(width, 600.0), &LayoutConstraints::default());
        prop_assert_eq!(p.axis_ticks.len(), buckets.len() + 1);
        prop_assert_eq!(p.axis_ticks[0].position, 0.0);
        for pair in p.axis_ticks.windows(2) {
            prop_assert!(pair[0].value <= pair[1].value);
            prop_assert!(pair[0].position <= pair[1].position + EPS);
        }
        let last = p.axis_ticks[p.axis_ticks.len() - 1];
        if buckets[0].range_start < buckets[buckets.len() - 1].range_end {
            prop_assert!((last.position - p.total_width()).abs() < 1e-6);
        }
    }

    #[test]
    fn planning_is_idempotent(
        values in prop::collection::vec(-50.0f64..50.0, 0..60),
        bucket_count in 1usize..12,
        width in 1.0f64..1500.0,
        height in 1.0f64..900.0,
    ) {
        let buckets = buckets(&values, bucket_count);
        let viewport = Size::new(width, height);
        let a = plan(&buckets, viewport, &LayoutConstraints::default());
        let b = plan(&buckets, viewport, &LayoutConstraints::default());
        prop_assert_eq!(&a, &b);
        if values.is_empty() {
            prop_assert!(a.is_empty());
            prop_assert!(a.axis_ticks.is_empty());
        }
    }
}
