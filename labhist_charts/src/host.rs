// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host's view of the visual: data roles, persisted properties and their fallbacks.
//!
//! The host application owns persistence. This module only describes what the visual
//! understands ([`Capabilities`]) and resolves persisted values with documented fallbacks
//! ([`GeneralObject`]). It never reads or writes persisted state itself.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use labhist_core::BinCount;

/// Fill used when the host has no persisted fill.
pub const DEFAULT_FILL: &str = "#C9FFD8";
/// Number format used when the host has no persisted format.
pub const DEFAULT_FORMAT: &str = "#";

/// How the host feeds a data role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRoleKind {
    /// A categorical field the rows are grouped by.
    Grouping,
    /// A numeric field.
    Measure,
}

/// A data role the visual accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataRole {
    /// Role name.
    pub name: &'static str,
    /// Role kind.
    pub kind: DataRoleKind,
}

/// Type of a persisted property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// A solid fill color.
    Fill,
    /// A number.
    Numeric,
}

/// A persisted property the visual reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectProperty {
    /// Object the property is stored under.
    pub object: &'static str,
    /// Property name.
    pub name: &'static str,
    /// Name shown in the host's property pane.
    pub display_name: &'static str,
    /// Property type.
    pub kind: PropertyKind,
}

/// Declarative description of what the visual consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Accepted data roles.
    pub data_roles: &'static [DataRole],
    /// Persisted properties.
    pub properties: &'static [ObjectProperty],
}

impl Capabilities {
    /// Capabilities of the labeled histogram: a `category` grouping, a `measure` value, and
    /// `fill`/`size` properties under the `general` object.
    pub const LABELED_HISTOGRAM: Self = Self {
        data_roles: &[
            DataRole {
                name: "category",
                kind: DataRoleKind::Grouping,
            },
            DataRole {
                name: "measure",
                kind: DataRoleKind::Measure,
            },
        ],
        properties: &[
            ObjectProperty {
                object: "general",
                name: "fill",
                display_name: "Columns Fill",
                kind: PropertyKind::Fill,
            },
            ObjectProperty {
                object: "general",
                name: "size",
                display_name: "Bucket Count",
                kind: PropertyKind::Numeric,
            },
        ],
    };

    /// Looks up a data role by name.
    pub fn role(&self, name: &str) -> Option<&'static DataRole> {
        self.data_roles.iter().find(|r| r.name == name)
    }

    /// Looks up a persisted property by name.
    pub fn property(&self, name: &str) -> Option<&'static ObjectProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// One object instance as enumerated to the host's property pane.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectInstance {
    /// Object name.
    pub object_name: &'static str,
    /// Name shown in the property pane.
    pub display_name: &'static str,
    /// `(property, resolved value)` pairs.
    pub properties: Vec<(&'static str, String)>,
}

/// Values persisted under the `general` object, as handed over by the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneralObject {
    /// Persisted bar fill.
    pub fill: Option<String>,
    /// Persisted number format for the axis.
    pub format: Option<String>,
    /// Persisted bucket count.
    pub size: Option<f64>,
}

impl GeneralObject {
    /// Sets the persisted fill.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the persisted number format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the persisted bucket count.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// The fill to draw bars with, falling back to [`DEFAULT_FILL`].
    pub fn resolved_fill(&self) -> &str {
        self.fill
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FILL)
    }

    /// The axis number format, falling back to [`DEFAULT_FORMAT`].
    pub fn resolved_format(&self) -> &str {
        self.format
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FORMAT)
    }

    /// The bucket count rule.
    ///
    /// A persisted `size` of at least 1 is used as a fixed count (fractions truncate); anything
    /// else falls back to [`BinCount::default`].
    pub fn bin_count(&self) -> BinCount {
        match self.size {
            Some(size) if size.is_finite() && size >= 1.0 && size <= usize::MAX as f64 => {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "range checked above; fractions are meant to truncate"
                )]
                BinCount::Fixed(size as usize)
            }
            _ => BinCount::default(),
        }
    }

    /// The object instances shown in the host's property pane.
    pub fn instances(&self) -> Vec<ObjectInstance> {
        vec![ObjectInstance {
            object_name: "general",
            display_name: "General",
            properties: vec![("fill", String::from(self.resolved_fill()))],
        }]
    }
}
