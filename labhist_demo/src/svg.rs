// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Renderer`] that writes SVG markup.

use kurbo::{Point, Rect};
use labhist_charts::{HeuristicTextMeasurer, Renderer, Size, TextMeasurer, TickLabel};
use peniko::Brush;
use peniko::color::{Srgb, parse_color};
use tracing::warn;

/// Space around the chart, on every side.
const MARGIN: f64 = 20.0;
/// Label font size unless the rows are shorter.
pub(crate) const DEFAULT_FONT_SIZE: f64 = 12.0;
const TICK_FONT_SIZE: f64 = 11.0;
const TICK_LENGTH: f64 = 6.0;
const AXIS_COLOR: &str = "#000000";

/// Collects draw calls into an SVG document.
#[derive(Debug)]
pub(crate) struct SvgRenderer {
    body: String,
    viewport: Size,
    font_size: f64,
    measurer: HeuristicTextMeasurer,
}

impl SvgRenderer {
    pub(crate) fn new(viewport: Size) -> Self {
        Self {
            body: String::new(),
            viewport,
            font_size: DEFAULT_FONT_SIZE,
            measurer: HeuristicTextMeasurer,
        }
    }

    pub(crate) fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Wraps everything drawn so far in an `<svg>` element.
    pub(crate) fn finish(self) -> String {
        let width = self.viewport.width + 2.0 * MARGIN;
        let height = self.viewport.height + 2.0 * MARGIN;
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<g transform="translate({MARGIN} {MARGIN})" font-family="sans-serif">"#
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</g>\n</svg>\n");
        out
    }
}

impl Renderer<String> for SvgRenderer {
    fn draw_rect(&mut self, rect: Rect, fill: &str) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        match parse_brush(fill) {
            Some(brush) => write_paint_attr(&mut self.body, "fill", &brush),
            None => {
                warn!(fill, "unrecognized fill color, drawing an unfilled bar");
                self.body.push_str(r#" fill="none""#);
            }
        }
        self.body.push_str("/>\n");
    }

    fn draw_text(&mut self, origin: Point, text: &str, max_width: f64, annotation: &String) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" style="text-transform:uppercase""#,
            origin.x, origin.y, self.font_size
        ));
        if !self.measurer.fits(text, self.font_size, max_width) {
            self.body.push_str(&format!(
                r#" textLength="{max_width}" lengthAdjust="spacingAndGlyphs""#
            ));
        }
        self.body.push('>');
        self.body.push_str("<title>");
        self.body.push_str(&escape_xml(annotation));
        self.body.push_str("</title>");
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    fn draw_axis(&mut self, origin: Point, length: f64, ticks: &[TickLabel]) {
        self.body.push_str(&format!(
            r#"<g class="axis" transform="translate({} {})">"#,
            origin.x, origin.y
        ));
        self.body.push('\n');
        self.body.push_str(&format!(
            r#"<path d="M0,0H{length}" fill="none" stroke="{AXIS_COLOR}"/>"#
        ));
        self.body.push('\n');
        for tick in ticks {
            let x = tick.position;
            self.body.push_str(&format!(
                r#"<line x1="{x}" y1="0" x2="{x}" y2="{TICK_LENGTH}" stroke="{AXIS_COLOR}"/>"#
            ));
            self.body.push_str(&format!(
                r#"<text x="{x}" y="{}" font-size="{TICK_FONT_SIZE}" text-anchor="middle">"#,
                TICK_LENGTH + TICK_FONT_SIZE + 2.0
            ));
            self.body.push_str(&escape_xml(&tick.text));
            self.body.push_str("</text>\n");
        }
        self.body.push_str("</g>\n");
    }
}

/// Parses a CSS color string into a solid brush.
pub(crate) fn parse_brush(fill: &str) -> Option<Brush> {
    let color = parse_color(fill.trim()).ok()?;
    Some(Brush::Solid(color.to_alpha_color::<Srgb>()))
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
