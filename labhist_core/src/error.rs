// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for binning.

extern crate alloc;

use alloc::string::String;

/// Errors returned by the binner.
///
/// Every variant is a caller contract violation; the binner never returns partial buckets.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A bucket count of zero was requested.
    #[error("bucket count must be at least 1")]
    ZeroBucketCount,
    /// A record value was `NaN` or infinite.
    #[error("record {index} has a non-finite value ({value})")]
    NonFiniteValue {
        /// Position of the offending record in the input.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// A bin count string was neither a positive integer nor a known rule name.
    #[error("invalid bin count `{0}`: expected a positive integer or `sturges`")]
    InvalidBinCount(String),
}

impl Error {
    /// Whether this error reports invalid caller input.
    ///
    /// All current variants do; the method exists so callers can branch on the error class
    /// rather than on individual variants.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::ZeroBucketCount | Self::NonFiniteValue { .. } | Self::InvalidBinCount(_) => true,
        }
    }
}
