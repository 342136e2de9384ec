// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for axis tick labels.
//!
//! Hosts persist format strings in the spreadsheet style: `#` and `0` are digit placeholders,
//! `.` starts the fraction, `,` in the integer part turns on thousands grouping. Only the
//! number of fraction digits and grouping are honored; everything else is ignored.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// A parsed number format string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberFormat {
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Whether to group the integer part in thousands.
    pub grouping: bool,
}

impl NumberFormat {
    /// Parses a format string such as `#`, `0.00` or `#,##0.0`.
    ///
    /// Unknown characters are ignored, so any string parses.
    pub fn parse(pattern: &str) -> Self {
        let (int_part, frac_part) = match pattern.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (pattern, None),
        };
        let decimals = frac_part
            .map(|f| f.chars().filter(|c| matches!(c, '0' | '#')).count())
            .unwrap_or(0);
        Self {
            decimals,
            grouping: int_part.contains(','),
        }
    }

    /// Formats `value`.
    ///
    /// Values that round to zero never carry a minus sign.
    pub fn format(&self, value: f64) -> String {
        let raw = format!("{:.*}", self.decimals, value);
        let (sign, digits) = match raw.strip_prefix('-') {
            Some(rest) if rest.chars().any(|c| matches!(c, '1'..='9')) => ("-", rest),
            Some(rest) => ("", rest),
            None => ("", raw.as_str()),
        };
        if !self.grouping {
            return format!("{sign}{digits}");
        }
        let (int_digits, frac) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits, None),
        };
        let mut out = String::with_capacity(raw.len() + int_digits.len() / 3);
        out.push_str(sign);
        for (i, c) in int_digits.chars().enumerate() {
            if i > 0 && (int_digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        if let Some(frac) = frac {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}
