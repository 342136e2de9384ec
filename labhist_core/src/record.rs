// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records and buckets.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// One labeled value to be placed in a histogram.
///
/// `annotation` is an opaque payload (typically tooltip text) that is carried through binning
/// and layout untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Record<A = String> {
    /// Display label, already truncated by the data adapter.
    pub label: String,
    /// The value that decides which bucket the record lands in.
    pub value: f64,
    /// Opaque payload passed through to the renderer.
    pub annotation: A,
}

impl<A> Record<A> {
    /// Creates a record.
    pub fn new(label: impl Into<String>, value: f64, annotation: A) -> Self {
        Self {
            label: label.into(),
            value,
            annotation,
        }
    }
}

/// A contiguous value range and the records that fell into it.
///
/// Buckets are half-open, `[range_start, range_end)`, except the last bucket of a sequence,
/// which also includes `range_end` (see [`Bucket::closed`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket<A = String> {
    /// Inclusive lower bound.
    pub range_start: f64,
    /// Upper bound; inclusive only when `closed` is set.
    pub range_end: f64,
    /// Whether `range_end` belongs to this bucket.
    pub closed: bool,
    /// Records in input order.
    pub items: Vec<Record<A>>,
}

impl<A> Bucket<A> {
    /// Creates an empty bucket.
    pub fn new(range_start: f64, range_end: f64, closed: bool) -> Self {
        Self {
            range_start,
            range_end,
            closed,
            items: Vec::new(),
        }
    }

    /// Number of records in the bucket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bucket holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Width of the bucket's value range.
    pub fn width(&self) -> f64 {
        self.range_end - self.range_start
    }

    /// Whether `value` falls inside this bucket's range.
    pub fn contains(&self, value: f64) -> bool {
        if value < self.range_start {
            return false;
        }
        if self.closed {
            value <= self.range_end
        } else {
            value < self.range_end
        }
    }

    /// Iterates over the labels of the bucket's records.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|r| r.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_bucket_excludes_its_end() {
        let b: Bucket<()> = Bucket::new(0.0, 10.0, false);
        assert!(b.contains(0.0), "start is inclusive");
        assert!(b.contains(9.999), "interior value");
        assert!(!b.contains(10.0), "end is exclusive");
        assert!(!b.contains(-0.5), "below range");
    }

    #[test]
    fn closed_bucket_includes_its_end() {
        let b: Bucket<()> = Bucket::new(5.0, 5.0, true);
        assert!(b.contains(5.0), "degenerate closed bucket holds its only value");
        assert!((b.width() - 0.0).abs() < 1e-12, "zero-width bucket");
    }
}
