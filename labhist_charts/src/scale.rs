// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear axis scale.

/// A linear mapping from a continuous domain to a continuous range.
///
/// A zero-width domain maps every value to the start of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a scale from data units in `domain` to axis offsets in `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps `value` onto the range. Values outside the domain extrapolate.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// The domain start.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// The domain end.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// The output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
