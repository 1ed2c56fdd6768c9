#![cfg(feature = "excel")]

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader as _, Sheets};

use crate::error::{LoadError, LoadResult};
use crate::ingestion::unified::SheetSelection;
use crate::types::{RawCell, RawTable};

/// Ingest a spreadsheet (`.xlsx`, `.xls`, `.ods`, etc.) into a [`RawTable`].
///
/// Behavior:
/// - Picks sheets per `selection`; [`SheetSelection::First`] uses the first sheet
/// - Detects the first non-empty row of each sheet as its header row
/// - When several sheets are selected, all must share the same header row;
///   their data rows are concatenated
pub fn read_excel_from_path(
    path: impl AsRef<Path>,
    selection: &SheetSelection,
) -> LoadResult<RawTable> {
    let workbook = open_workbook_auto(path)?;
    read_workbook(workbook, selection)
}

/// Ingest a spreadsheet from an in-memory byte buffer (the upload capability).
pub fn read_excel_from_bytes(bytes: &[u8], selection: &SheetSelection) -> LoadResult<RawTable> {
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    read_workbook(workbook, selection)
}

fn read_workbook<RS: Read + Seek>(
    mut workbook: Sheets<RS>,
    selection: &SheetSelection,
) -> LoadResult<RawTable> {
    let available = workbook.sheet_names().to_vec();
    let sheets: Vec<String> = match selection {
        SheetSelection::First => available.first().cloned().into_iter().collect(),
        SheetSelection::Sheet(name) => vec![name.clone()],
        SheetSelection::AllSheets => available,
        SheetSelection::Sheets(names) => names.clone(),
    };
    if sheets.is_empty() {
        return Err(LoadError::Workbook {
            message: "workbook has no sheets".to_string(),
        });
    }

    let mut out: Option<RawTable> = None;
    for sheet in sheets {
        let range = workbook.worksheet_range(&sheet)?;
        let (headers, rows) = read_sheet_range(&sheet, &range)?;
        match out.as_mut() {
            None => out = Some(RawTable::new(headers, rows)),
            Some(table) => {
                if table.headers != headers {
                    return Err(LoadError::Workbook {
                        message: format!(
                            "sheet '{sheet}' headers {headers:?} do not match first sheet {:?}",
                            table.headers
                        ),
                    });
                }
                table.rows.extend(rows);
            }
        }
    }

    // `sheets` was non-empty, so `out` is set.
    out.ok_or_else(|| LoadError::Workbook {
        message: "workbook has no sheets".to_string(),
    })
}

fn read_sheet_range(
    sheet: &str,
    range: &calamine::Range<Data>,
) -> LoadResult<(Vec<String>, Vec<Vec<RawCell>>)> {
    let mut header_row_idx: Option<usize> = None;
    let mut headers: Vec<String> = Vec::new();

    for (idx0, row) in range.rows().enumerate() {
        if row.iter().any(|c| !matches!(c, Data::Empty)) {
            header_row_idx = Some(idx0);
            headers = row.iter().map(cell_to_header_string).collect();
            break;
        }
    }

    let header_row_idx = header_row_idx.ok_or_else(|| LoadError::Workbook {
        message: format!("sheet '{sheet}' has no non-empty rows (no header row found)"),
    })?;

    let mut rows: Vec<Vec<RawCell>> = Vec::new();
    for (idx0, row) in range.rows().enumerate() {
        if idx0 <= header_row_idx {
            continue;
        }
        let out_row = (0..headers.len())
            .map(|i| convert_cell(row.get(i).unwrap_or(&Data::Empty)))
            .collect();
        rows.push(out_row);
    }

    Ok((headers, rows))
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_owned(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(c: &Data) -> RawCell {
    match c {
        Data::Empty => RawCell::Empty,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                RawCell::Empty
            } else {
                RawCell::Text(trimmed.to_owned())
            }
        }
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Float(f) => RawCell::Number(*f),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(e) => RawCell::Text(format!("{e:?}")),
    }
}
