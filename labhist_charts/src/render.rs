// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer capability and plan walking.
//!
//! Drawing is a downstream concern. A renderer only needs three primitives; [`draw_plan`]
//! translates a [`LayoutPlan`] into calls against them in paint order: each column's bar,
//! then that column's labels top to bottom, then the axis.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use tracing::trace;

use crate::{GeneralObject, LayoutPlan, NumberFormat};

/// Resolved styling for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    /// Bar fill, passed to the renderer untouched.
    pub fill: String,
    /// Format for axis tick labels.
    pub number_format: NumberFormat,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&GeneralObject::default())
    }
}

impl From<&GeneralObject> for ChartStyle {
    fn from(general: &GeneralObject) -> Self {
        Self {
            fill: String::from(general.resolved_fill()),
            number_format: NumberFormat::parse(general.resolved_format()),
        }
    }
}

impl ChartStyle {
    /// Sets the bar fill.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the tick label format.
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}

/// An axis tick ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    /// Offset along the axis from its origin.
    pub position: f64,
    /// Formatted boundary value.
    pub text: String,
}

/// The drawing primitives a histogram needs.
///
/// `A` is the record annotation type; renderers typically attach it as a tooltip.
pub trait Renderer<A> {
    /// Fills `rect` with `fill`, a color string as resolved by the host.
    fn draw_rect(&mut self, rect: Rect, fill: &str);

    /// Draws a label with its start/baseline at `origin`, no longer than `max_width`.
    fn draw_text(&mut self, origin: Point, text: &str, max_width: f64, annotation: &A);

    /// Draws a horizontal axis of `length` starting at `origin`.
    fn draw_axis(&mut self, origin: Point, length: f64, ticks: &[TickLabel]);
}

/// Issues the draw calls for `plan`.
///
/// The axis origin is `(0, plan.baseline)`, so the axis line coincides with the bars' bottom
/// edges; renderers that want a gap below the bars offset it themselves. An empty plan issues
/// no calls at all.
pub fn draw_plan<A, R>(plan: &LayoutPlan<'_, A>, style: &ChartStyle, renderer: &mut R)
where
    R: Renderer<A> + ?Sized,
{
    if plan.is_empty() {
        trace!("empty plan, nothing to draw");
        return;
    }

    for column in &plan.columns {
        renderer.draw_rect(plan.bar_rect(column), &style.fill);
        for label in &column.labels {
            renderer.draw_text(
                plan.label_origin(column, label),
                &label.record.label,
                plan.label_width,
                &label.record.annotation,
            );
        }
    }

    let ticks: Vec<TickLabel> = plan
        .axis_ticks
        .iter()
        .map(|tick| TickLabel {
            position: tick.position,
            text: style.number_format.format(tick.value),
        })
        .collect();
    renderer.draw_axis(Point::new(0.0, plan.baseline), plan.total_width(), &ticks);
}
