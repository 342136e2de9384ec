// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-to-record adaptation.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Record;

/// Default maximum label length, in characters.
pub const DEFAULT_LABEL_CAP: usize = 20;

/// Turns `(category, value)` rows into [`Record`]s.
///
/// The label is the category truncated to `label_cap` characters. The annotation is the
/// tooltip text `"<category> <value>"`, built from the untruncated category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowAdapter {
    /// Maximum label length in characters.
    pub label_cap: usize,
}

impl Default for RowAdapter {
    fn default() -> Self {
        Self {
            label_cap: DEFAULT_LABEL_CAP,
        }
    }
}

impl RowAdapter {
    /// Sets the label length cap.
    pub fn with_label_cap(mut self, label_cap: usize) -> Self {
        self.label_cap = label_cap;
        self
    }

    /// Adapts a single row.
    pub fn record(&self, category: &str, value: f64) -> Record<String> {
        let label = match category.char_indices().nth(self.label_cap) {
            Some((end, _)) => &category[..end],
            None => category,
        };
        Record::new(label, value, format!("{category} {value}"))
    }

    /// Adapts a sequence of rows, preserving their order.
    pub fn records<S: AsRef<str>>(
        &self,
        rows: impl IntoIterator<Item = (S, f64)>,
    ) -> Vec<Record<String>> {
        rows.into_iter()
            .map(|(category, value)| self.record(category.as_ref(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_categories_are_truncated_but_tooltip_keeps_them() {
        let r = RowAdapter::default().record("Democratic Republic of Timor", 42.5);
        assert_eq!(r.label, "Democratic Republic ");
        assert_eq!(r.annotation, "Democratic Republic of Timor 42.5");
    }

    #[test]
    fn whole_numbers_print_without_a_fraction() {
        let r = RowAdapter::default().record("Iceland", 77.0);
        assert_eq!(r.label, "Iceland");
        assert_eq!(r.annotation, "Iceland 77");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let r = RowAdapter::default()
            .with_label_cap(3)
            .record("Curaçao", 1.0);
        assert_eq!(r.label, "Cur");
        let r = RowAdapter::default()
            .with_label_cap(4)
            .record("Curaçao", 1.0);
        assert_eq!(r.label, "Cura");
        let r = RowAdapter::default()
            .with_label_cap(5)
            .record("Curaçao", 1.0);
        assert_eq!(r.label, "Curaç");
    }

    #[test]
    fn rows_keep_their_order() {
        let records = RowAdapter::default().records([("b", 2.0), ("a", 1.0)]);
        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["b", "a"]);
    }
}
