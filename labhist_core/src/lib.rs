// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records, buckets and the histogram binner.
//!
//! This crate is the data half of a labeled histogram:
//! - [`RowAdapter`] turns `(category, value)` rows into [`Record`]s,
//! - [`bin`] partitions records into equal-width [`Bucket`]s spanning `[min, max]`.
//!
//! Everything here is a pure transform: no retained state, no I/O. Geometry lives in
//! `labhist_charts`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod adapter;
mod bin;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod record;

pub use adapter::{DEFAULT_LABEL_CAP, RowAdapter};
pub use bin::{BinCount, bin, bin_with};
pub use error::Error;
pub use record::{Bucket, Record};
