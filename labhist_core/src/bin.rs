// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equal-width histogram binning.
//!
//! [`bin`] splits `[min, max]` of the input values into `bucket_count` contiguous buckets and
//! moves each record into exactly one of them:
//! - bucket `k` spans `[min + k * width, min + (k + 1) * width)`,
//! - the last bucket is closed on the right so it includes `max`,
//! - records keep their relative input order within a bucket.
//!
//! All values equal (including a single record) is special-cased to one `[min, min]` bucket.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::str::FromStr;

use tracing::{debug, trace};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::{Bucket, Error, Record};

/// How many buckets to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BinCount {
    /// A caller-chosen number of buckets.
    Fixed(usize),
    /// Sturges' rule, `ceil(log2(n)) + 1` for `n` records.
    ///
    /// This is the default threshold rule of the charting library the histogram visual was
    /// first drawn with.
    #[default]
    Sturges,
}

impl BinCount {
    /// Resolves the rule into a concrete bucket count for `record_count` records.
    ///
    /// `Fixed(0)` resolves to `0` and is rejected by [`bin`].
    pub fn resolve(self, record_count: usize) -> usize {
        match self {
            Self::Fixed(n) => n,
            Self::Sturges => {
                if record_count <= 1 {
                    return 1;
                }
                let n = (record_count as f64).log2().ceil() + 1.0;
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "log2 of a usize is at most 64"
                )]
                {
                    n as usize
                }
            }
        }
    }
}

impl FromStr for BinCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("sturges") {
            return Ok(Self::Sturges);
        }
        match s.parse::<usize>() {
            Ok(0) => Err(Error::ZeroBucketCount),
            Ok(n) => Ok(Self::Fixed(n)),
            Err(_) => Err(Error::InvalidBinCount(String::from(s))),
        }
    }
}

/// Partitions `records` into `bucket_count` equal-width buckets spanning `[min, max]`.
///
/// Returns an empty sequence for empty input. When every value is equal, a single `[min, min]`
/// bucket holding all records is returned regardless of `bucket_count`.
///
/// Buckets that receive no records are still emitted.
///
/// # Errors
///
/// - [`Error::ZeroBucketCount`] if `bucket_count` is zero (checked before anything else).
/// - [`Error::NonFiniteValue`] if any record value is `NaN` or infinite.
pub fn bin<A>(
    records: impl IntoIterator<Item = Record<A>>,
    bucket_count: usize,
) -> Result<Vec<Bucket<A>>, Error> {
    if bucket_count == 0 {
        return Err(Error::ZeroBucketCount);
    }
    let records: Vec<Record<A>> = records.into_iter().collect();
    let Some((min, max)) = value_extent(&records)? else {
        debug!("no records to bin");
        return Ok(Vec::new());
    };

    if min == max {
        debug!(
            records = records.len(),
            value = min,
            "all values equal, emitting a single bucket"
        );
        return Ok(vec![Bucket {
            range_start: min,
            range_end: max,
            closed: true,
            items: records,
        }]);
    }

    let edges = Edges::new(min, max, bucket_count);
    let mut buckets: Vec<Bucket<A>> = (0..bucket_count)
        .map(|k| Bucket::new(edges.start(k), edges.end(k), k + 1 == bucket_count))
        .collect();

    let record_count = records.len();
    for record in records {
        let k = edges.index_of(record.value);
        trace!(value = record.value, bucket = k, "assigned record");
        buckets[k].items.push(record);
    }

    debug!(
        records = record_count,
        buckets = bucket_count,
        min,
        max,
        width = edges.width,
        "binned records"
    );
    Ok(buckets)
}

/// Resolves `count` against the number of records and bins them.
///
/// # Errors
///
/// See [`bin`].
pub fn bin_with<A>(
    records: impl IntoIterator<Item = Record<A>>,
    count: BinCount,
) -> Result<Vec<Bucket<A>>, Error> {
    let records: Vec<Record<A>> = records.into_iter().collect();
    let bucket_count = count.resolve(records.len());
    bin(records, bucket_count)
}

/// Returns `(min, max)` over the record values, or `None` for empty input.
fn value_extent<A>(records: &[Record<A>]) -> Result<Option<(f64, f64)>, Error> {
    let mut extent: Option<(f64, f64)> = None;
    for (index, record) in records.iter().enumerate() {
        let value = record.value;
        if !value.is_finite() {
            return Err(Error::NonFiniteValue { index, value });
        }
        extent = Some(match extent {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
    }
    Ok(extent)
}

/// Shared bucket boundaries.
///
/// Adjacent buckets read the same edge value, so `end(k) == start(k + 1)` holds exactly.
#[derive(Clone, Copy, Debug)]
struct Edges {
    min: f64,
    max: f64,
    width: f64,
    count: usize,
}

impl Edges {
    fn new(min: f64, max: f64, count: usize) -> Self {
        let n = count as f64;
        let mut width = (max - min) / n;
        if !width.is_finite() {
            // `max - min` overflowed for values near the ends of the f64 range.
            width = max / n - min / n;
        }
        Self {
            min,
            max,
            width,
            count,
        }
    }

    fn start(&self, k: usize) -> f64 {
        if k == 0 {
            return self.min;
        }
        let offset = k as f64 * self.width;
        if offset.is_finite() {
            self.min + offset
        } else {
            let t = k as f64 / self.count as f64;
            self.min * (1.0 - t) + self.max * t
        }
    }

    fn end(&self, k: usize) -> f64 {
        if k + 1 >= self.count {
            self.max
        } else {
            self.start(k + 1)
        }
    }

    /// Bucket index for `value`, which must lie in `[min, max]`.
    fn index_of(&self, value: f64) -> usize {
        let last = self.count - 1;
        let raw = ((value - self.min) / self.width).floor();
        let mut k = if raw <= 0.0 {
            0
        } else if raw >= last as f64 {
            last
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "raw is in (0, last) and integral"
            )]
            {
                raw as usize
            }
        };
        // Rounding in the division can disagree with the stored edges, and for spans narrower
        // than an ulp of `min` several edges collapse onto one float. Walk to the bucket whose
        // stored `[start, end)` holds the value.
        while k > 0 && value < self.start(k) {
            k -= 1;
        }
        while k < last && value >= self.start(k + 1) {
            k += 1;
        }
        k
    }
}
