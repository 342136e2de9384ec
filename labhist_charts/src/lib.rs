// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout planning for labeled histograms.
//!
//! This crate sits between the binner in `labhist_core` and a renderer:
//! - [`plan`] turns buckets plus a viewport into a [`LayoutPlan`]: column width, row height,
//!   per-column bar geometry, per-label offsets and axis tick positions.
//! - [`draw_plan`] walks a plan and issues draw calls against a [`Renderer`].
//! - [`GeneralObject`] and [`Capabilities`] model the host's persisted properties and data
//!   roles, with the documented fallbacks for fill color and number format.
//!
//! Drawing primitives are out of scope; renderers implement [`Renderer`] downstream.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
mod float;
mod format;
mod host;
mod layout;
mod measure;
mod plan;
mod render;
mod scale;

pub use format::NumberFormat;
pub use host::{
    Capabilities, DEFAULT_FILL, DEFAULT_FORMAT, DataRole, DataRoleKind, GeneralObject,
    ObjectInstance, ObjectProperty, PropertyKind,
};
pub use layout::{LayoutConstraints, Size};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use plan::{AxisTick, ColumnLayout, LabelPosition, LayoutPlan, plan};
pub use render::{ChartStyle, Renderer, TickLabel, draw_plan};
pub use scale::ScaleLinear;
