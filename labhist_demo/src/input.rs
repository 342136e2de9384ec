// Copyright 2025 the Labhist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV table input.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use tracing::debug;

/// Reads `(category, value)` rows from the CSV file at `path`.
pub(crate) fn read_rows_from_path(path: &Path) -> Result<Vec<(String, f64)>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_rows(file).with_context(|| format!("reading {}", path.display()))
}

/// Reads `(category, value)` rows from CSV data with a header row.
///
/// Columns are taken by position; header names are not checked. Extra columns are ignored.
pub(crate) fn read_rows<R: Read>(reader: R) -> Result<Vec<(String, f64)>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = i + 2;
        let record = record.with_context(|| format!("line {line}"))?;
        let category = record
            .get(0)
            .with_context(|| format!("line {line}: missing category"))?;
        let value = record
            .get(1)
            .with_context(|| format!("line {line}: missing value"))?;
        let value: f64 = value
            .parse()
            .with_context(|| format!("line {line}: `{value}` is not a number"))?;
        rows.push((category.to_string(), value));
    }
    debug!(rows = rows.len(), "read csv table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_order() {
        let data = "country,share\nQatar, 86.9\n\"Korea, Rep.\",59.5\n";
        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                ("Qatar".to_string(), 86.9),
                ("Korea, Rep.".to_string(), 59.5),
            ]
        );
    }

    #[test]
    fn header_only_is_an_empty_table() {
        let rows = read_rows("category,value\n".as_bytes()).unwrap();
        assert!(rows.is_empty(), "no data rows");
    }

    #[test]
    fn bad_values_report_their_line() {
        let data = "category,value\nA,1\nB,lots\n";
        let err = read_rows(data.as_bytes()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 3"), "{message}");
        assert!(message.contains("lots"), "{message}");
    }

    #[test]
    fn missing_values_are_errors() {
        let err = read_rows("category,value\nA\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("missing value"), "{err:#}");
    }
}
