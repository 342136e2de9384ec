// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout inputs: viewport size and sizing constraints.
//!
//! The histogram visual historically came in two flavors, one drawing onto a fixed 1200×800
//! canvas and one adapting to the host viewport. Both are the same planner with different
//! inputs: pass [`LayoutConstraints::FIXED_CANVAS`] as the viewport for the former.

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether there is no room to draw anything.
    ///
    /// Non-positive and non-finite extents are degenerate.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Sizing limits applied by the planner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConstraints {
    /// Upper bound on column width.
    pub max_column_width: f64,
    /// Upper bound on the height of one label row.
    pub max_row_height: f64,
    /// Space kept free below the bars' baseline for the axis.
    pub margin_bottom: f64,
    /// Horizontal space per column not available to label text.
    pub column_padding: f64,
    /// Horizontal inset of a bar on each side of its column.
    pub bar_inset: f64,
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self {
            max_column_width: 150.0,
            max_row_height: 20.0,
            margin_bottom: 40.0,
            column_padding: 10.0,
            bar_inset: 2.0,
        }
    }
}

impl LayoutConstraints {
    /// The canvas the fixed-size variant of the visual lays out on.
    pub const FIXED_CANVAS: Size = Size::new(1200.0, 800.0);

    /// Sets the maximum column width.
    pub fn with_max_column_width(mut self, max_column_width: f64) -> Self {
        self.max_column_width = max_column_width;
        self
    }

    /// Sets the maximum row height.
    pub fn with_max_row_height(mut self, max_row_height: f64) -> Self {
        self.max_row_height = max_row_height;
        self
    }

    /// Sets the bottom margin.
    pub fn with_margin_bottom(mut self, margin_bottom: f64) -> Self {
        self.margin_bottom = margin_bottom;
        self
    }

    /// Sets the column padding.
    pub fn with_column_padding(mut self, column_padding: f64) -> Self {
        self.column_padding = column_padding;
        self
    }

    /// Sets the bar inset.
    pub fn with_bar_inset(mut self, bar_inset: f64) -> Self {
        self.bar_inset = bar_inset;
        self
    }

    /// Returns a copy with every negative (or `NaN`) limit replaced by zero.
    pub(crate) fn clamped(&self) -> Self {
        Self {
            max_column_width: self.max_column_width.max(0.0),
            max_row_height: self.max_row_height.max(0.0),
            margin_bottom: self.margin_bottom.max(0.0),
            column_padding: self.column_padding.max(0.0),
            bar_inset: self.bar_inset.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes() {
        assert!(Size::new(0.0, 100.0).is_degenerate(), "zero width");
        assert!(Size::new(100.0, -1.0).is_degenerate(), "negative height");
        assert!(Size::new(f64::NAN, 100.0).is_degenerate(), "NaN width");
        assert!(
            Size::new(100.0, f64::INFINITY).is_degenerate(),
            "infinite height"
        );
        assert!(!Size::new(1.0, 1.0).is_degenerate(), "tiny but drawable");
    }

    #[test]
    fn clamping_zeroes_negative_limits() {
        let c = LayoutConstraints::default()
            .with_margin_bottom(-5.0)
            .with_column_padding(f64::NAN)
            .clamped();
        assert_eq!(c.margin_bottom, 0.0);
        assert_eq!(c.column_padding, 0.0);
        assert_eq!(c.max_column_width, 150.0);
    }
}
