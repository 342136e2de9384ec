// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks.
//!
//! The planner caps label length at `label_width` but does not shape text. Renderers use a
//! [`TextMeasurer`] to decide whether a label needs squeezing to fit.

/// A minimal text measurement interface.
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the plan.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);

    /// Whether `text` fits in `max_width` at `font_size`.
    fn fits(&self, text: &str, font_size: f64, max_width: f64) -> bool {
        self.measure(text, font_size).0 <= max_width
    }
}

/// A tiny heuristic text measurer.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
