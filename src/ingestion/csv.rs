//! CSV ingestion implementation.

use std::path::Path;

use crate::error::LoadResult;
use crate::types::{RawCell, RawTable};

/// Ingest a CSV file into a [`RawTable`].
///
/// Rules:
///
/// - CSV must have a header row; header names are trimmed but otherwise kept
///   verbatim (diacritics included).
/// - Cell types are inferred per cell: whole number, then float, then text.
///   Empty cells map to [`RawCell::Empty`].
/// - Schema checks happen later, in [`crate::validate`].
pub fn read_csv_from_path(path: impl AsRef<Path>) -> LoadResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    read_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader (files, upload buffers, tests).
pub fn read_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<RawTable> {
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_owned()).collect();

    let mut rows: Vec<Vec<RawCell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = (0..headers.len())
            .map(|i| infer_cell(record.get(i).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(RawTable::new(headers, rows))
}

fn infer_cell(raw: &str) -> RawCell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return RawCell::Empty;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return RawCell::Number(i as f64);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return RawCell::Number(f);
    }
    RawCell::Text(trimmed.to_owned())
}
