// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout planner.
//!
//! Given buckets in ascending range order and a viewport, [`plan`] computes:
//! - one column per bucket, all of width `column_width`, laid out left to right,
//! - one label row per record, all of height `row_height`,
//! - one bar per column, grown upward from a shared baseline at `height - margin_bottom`,
//! - axis ticks at every bucket boundary, mapped onto `[0, bucket_count * column_width]`.
//!
//! The plan borrows the buckets it was computed from; it does not copy records.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

use kurbo::{Point, Rect};
use labhist_core::{Bucket, Record};
use tracing::debug;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::{LayoutConstraints, ScaleLinear, Size};

/// Renderer-agnostic geometry for one render pass.
#[derive(Debug, PartialEq)]
pub struct LayoutPlan<'a, A = String> {
    /// Width of every column.
    pub column_width: f64,
    /// Height of one label row.
    pub row_height: f64,
    /// The y coordinate bars grow upward from; the axis is drawn along it.
    pub baseline: f64,
    /// Maximum rendered length of a label, `column_width - column_padding`.
    pub label_width: f64,
    /// Horizontal offset of label text within its column.
    pub label_inset: f64,
    /// Horizontal inset of a bar on each side of its column.
    pub bar_inset: f64,
    /// One entry per bucket, in bucket order.
    pub columns: Vec<ColumnLayout<'a, A>>,
    /// Ticks at each bucket's `range_start` plus the last bucket's `range_end`.
    pub axis_ticks: Vec<AxisTick>,
}

/// Geometry for one bucket.
#[derive(Debug, PartialEq)]
pub struct ColumnLayout<'a, A = String> {
    /// The bucket this column draws.
    pub bucket: &'a Bucket<A>,
    /// Left edge of the column.
    pub x_offset: f64,
    /// Top edge of the bar.
    pub bar_top: f64,
    /// Height of the bar, one row per record plus half a row.
    pub bar_height: f64,
    /// One entry per record, in bucket order.
    pub labels: Vec<LabelPosition<'a, A>>,
}

/// A record and the vertical offset of its label.
///
/// `y` is measured from the column's text origin, which sits one row below `bar_top` so the
/// first label's baseline clears the bar's top edge.
#[derive(Debug, PartialEq)]
pub struct LabelPosition<'a, A = String> {
    /// The record whose label is drawn here.
    pub record: &'a Record<A>,
    /// Offset of the label baseline below the column's text origin.
    pub y: f64,
}

/// One axis tick: a bucket boundary and where it lands on the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    /// The boundary value in data units.
    pub value: f64,
    /// Horizontal position along the axis, starting at the first column's left edge.
    pub position: f64,
}

// Manual impls: the derived ones would require `A: Clone`/`A: Copy`, but only references
// to records are held.
impl<A> Clone for LabelPosition<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for LabelPosition<'_, A> {}

impl<A> Clone for ColumnLayout<'_, A> {
    fn clone(&self) -> Self {
        Self {
            bucket: self.bucket,
            x_offset: self.x_offset,
            bar_top: self.bar_top,
            bar_height: self.bar_height,
            labels: self.labels.clone(),
        }
    }
}

impl<A> Clone for LayoutPlan<'_, A> {
    fn clone(&self) -> Self {
        Self {
            column_width: self.column_width,
            row_height: self.row_height,
            baseline: self.baseline,
            label_width: self.label_width,
            label_inset: self.label_inset,
            bar_inset: self.bar_inset,
            columns: self.columns.clone(),
            axis_ticks: self.axis_ticks.clone(),
        }
    }
}

impl<A> Default for LayoutPlan<'_, A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> LayoutPlan<'_, A> {
    /// A plan with no columns and no ticks; renderers draw nothing for it.
    pub fn empty() -> Self {
        Self {
            column_width: 0.0,
            row_height: 0.0,
            baseline: 0.0,
            label_width: 0.0,
            label_inset: 0.0,
            bar_inset: 0.0,
            columns: Vec::new(),
            axis_ticks: Vec::new(),
        }
    }

    /// Whether the plan has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total width covered by the columns.
    pub fn total_width(&self) -> f64 {
        self.column_width * self.columns.len() as f64
    }

    /// The bar rectangle for `column`, inset horizontally by `bar_inset`.
    pub fn bar_rect(&self, column: &ColumnLayout<'_, A>) -> Rect {
        Rect::new(
            column.x_offset + self.bar_inset,
            column.bar_top,
            column.x_offset + self.column_width - self.bar_inset,
            column.bar_top + column.bar_height,
        )
    }

    /// Absolute anchor point (start, baseline) of `label` within `column`.
    pub fn label_origin(
        &self,
        column: &ColumnLayout<'_, A>,
        label: &LabelPosition<'_, A>,
    ) -> Point {
        Point::new(
            column.x_offset + self.label_inset,
            column.bar_top + self.row_height + label.y,
        )
    }
}

/// Computes the layout plan for `buckets` in `viewport`.
///
/// Empty `buckets` and degenerate viewports (zero, negative or non-finite extents) produce
/// [`LayoutPlan::empty`]. Negative constraint values are treated as zero.
///
/// Column width is `min(max_column_width, floor(width / bucket_count))`, but never below 1.
/// When the viewport is narrower than `bucket_count`, the columns therefore extend past
/// `viewport.width` ([`LayoutPlan::total_width`] exceeds it) and renderers should clip.
/// Row height is `min(max_row_height, floor((height - margin_bottom) / max_items))`, where
/// `max_items` is the largest bucket size (at least 1).
pub fn plan<'a, A>(
    buckets: &'a [Bucket<A>],
    viewport: Size,
    constraints: &LayoutConstraints,
) -> LayoutPlan<'a, A> {
    let (Some(first), Some(last)) = (buckets.first(), buckets.last()) else {
        debug!("no buckets, emitting an empty plan");
        return LayoutPlan::empty();
    };
    if viewport.is_degenerate() {
        debug!(
            width = viewport.width,
            height = viewport.height,
            "degenerate viewport, emitting an empty plan"
        );
        return LayoutPlan::empty();
    }

    let c = constraints.clamped();
    let bucket_count = buckets.len();

    let column_width = (viewport.width / bucket_count as f64)
        .floor()
        .min(c.max_column_width)
        .max(1.0);
    let max_items = buckets.iter().map(Bucket::len).max().unwrap_or(0).max(1);
    let row_height = ((viewport.height - c.margin_bottom) / max_items as f64)
        .floor()
        .min(c.max_row_height)
        .max(0.0);
    let baseline = viewport.height - c.margin_bottom;

    let columns: Vec<ColumnLayout<'a, A>> = buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let bar_height = bucket.len() as f64 * row_height + row_height / 2.0;
            ColumnLayout {
                bucket,
                x_offset: column_width * i as f64,
                bar_top: viewport.height - bar_height - c.margin_bottom,
                bar_height,
                labels: bucket
                    .items
                    .iter()
                    .enumerate()
                    .map(|(j, record)| LabelPosition {
                        record,
                        y: row_height * j as f64,
                    })
                    .collect(),
            }
        })
        .collect();

    let axis_scale = ScaleLinear::new(
        (first.range_start, last.range_end),
        (0.0, bucket_count as f64 * column_width),
    );
    let axis_ticks: Vec<AxisTick> = buckets
        .iter()
        .map(|b| b.range_start)
        .chain(iter::once(last.range_end))
        .map(|value| AxisTick {
            value,
            position: axis_scale.map(value),
        })
        .collect();

    debug!(
        columns = bucket_count,
        column_width,
        row_height,
        max_items,
        "planned histogram layout"
    );

    LayoutPlan {
        column_width,
        row_height,
        baseline,
        label_width: (column_width - c.column_padding).max(0.0),
        label_inset: c.column_padding / 2.0,
        bar_inset: c.bar_inset.min(column_width / 2.0),
        columns,
        axis_ticks,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn bucket(start: f64, end: f64, labels: &[&str]) -> Bucket<()> {
        let mut b = Bucket::new(start, end, false);
        b.items = labels.iter().map(|l| Record::new(*l, start, ())).collect();
        b
    }

    #[test]
    fn column_width_is_capped_by_the_constraint() {
        let buckets = vec![bucket(0.0, 1.0, &["a"]), bucket(1.0, 2.0, &["b"])];
        let p = plan(&buckets, Size::new(1000.0, 400.0), &LayoutConstraints::default());
        assert_eq!(p.column_width, 150.0);
    }

    #[test]
    fn column_width_floors_the_even_split() {
        let buckets = vec![
            bucket(0.0, 1.0, &["a"]),
            bucket(1.0, 2.0, &[]),
            bucket(2.0, 3.0, &["c"]),
        ];
        let p = plan(&buckets, Size::new(100.0, 400.0), &LayoutConstraints::default());
        assert_eq!(p.column_width, 33.0);
        assert_eq!(p.columns[2].x_offset, 66.0);
    }

    #[test]
    fn column_width_never_drops_below_one() {
        let buckets: Vec<Bucket<()>> = (0..10)
            .map(|i| bucket(f64::from(i), f64::from(i + 1), &[]))
            .collect();
        let p = plan(&buckets, Size::new(4.0, 400.0), &LayoutConstraints::default());
        assert_eq!(p.column_width, 1.0);
    }

    #[test]
    fn narrow_viewports_overflow_by_whole_columns() {
        let buckets: Vec<Bucket<()>> = (0..10)
            .map(|i| bucket(f64::from(i), f64::from(i + 1), &[]))
            .collect();
        let p = plan(&buckets, Size::new(4.0, 400.0), &LayoutConstraints::default());
        assert_eq!(p.total_width(), 10.0);
        let last = &p.columns[9];
        assert_eq!(last.x_offset + p.column_width, 10.0);
        assert_eq!(p.axis_ticks[10].position, 10.0);
    }

    #[test]
    fn row_height_divides_the_space_above_the_margin() {
        let labels = ["a"; 30];
        let buckets = vec![bucket(0.0, 1.0, &labels)];
        let p = plan(&buckets, Size::new(200.0, 340.0), &LayoutConstraints::default());
        // (340 - 40) / 30 = 10.
        assert_eq!(p.row_height, 10.0);
        assert_eq!(p.columns[0].bar_height, 305.0);
        assert_eq!(p.columns[0].bar_top, -5.0);
    }

    #[test]
    fn row_height_is_capped_and_empty_buckets_still_plan() {
        let buckets = vec![bucket(0.0, 1.0, &[]), bucket(1.0, 2.0, &[])];
        let p = plan(&buckets, Size::new(200.0, 840.0), &LayoutConstraints::default());
        assert_eq!(p.row_height, 20.0);
        assert_eq!(p.columns[0].bar_height, 10.0);
        assert_eq!(p.columns[0].bar_top, 790.0);
    }

    #[test]
    fn labels_step_down_one_row_at_a_time() {
        let buckets = vec![bucket(0.0, 1.0, &["a", "b", "c"])];
        let p = plan(&buckets, Size::new(200.0, 840.0), &LayoutConstraints::default());
        let ys: Vec<f64> = p.columns[0].labels.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![0.0, 20.0, 40.0]);

        let col = &p.columns[0];
        let last = p.label_origin(col, &col.labels[2]);
        // The last baseline sits half a row above the bar's bottom edge.
        assert_eq!(last.y, p.baseline - p.row_height / 2.0);
        assert_eq!(last.x, 5.0);
    }

    #[test]
    fn bar_rect_is_inset_within_its_column() {
        let buckets = vec![bucket(0.0, 1.0, &["a"]), bucket(1.0, 2.0, &["b", "c"])];
        let p = plan(&buckets, Size::new(300.0, 840.0), &LayoutConstraints::default());
        let r = p.bar_rect(&p.columns[1]);
        assert_eq!(r, Rect::new(152.0, 750.0, 298.0, 800.0));
        assert_eq!(p.label_width, 140.0);
    }

    #[test]
    fn empty_buckets_yield_an_empty_plan() {
        let buckets: Vec<Bucket<()>> = Vec::new();
        let p = plan(&buckets, Size::new(300.0, 300.0), &LayoutConstraints::default());
        assert!(p.is_empty());
        assert!(p.axis_ticks.is_empty());
    }

    #[test]
    fn degenerate_viewport_yields_an_empty_plan() {
        let buckets = vec![bucket(0.0, 1.0, &["a"])];
        for viewport in [
            Size::new(0.0, 300.0),
            Size::new(300.0, 0.0),
            Size::new(-1.0, -1.0),
        ] {
            let p = plan(&buckets, viewport, &LayoutConstraints::default());
            assert!(p.is_empty(), "expected empty plan for {viewport:?}");
            assert!(p.axis_ticks.is_empty(), "expected no ticks for {viewport:?}");
        }
    }
}
