//! Unified table-loading entrypoint.
//!
//! Most callers should use [`load_table_from_path`], which reads a file into a
//! [`RawTable`]:
//!
//! - If [`LoadOptions::format`] is `None`, the format is inferred from the file
//!   extension.
//! - If a [`super::observability::LoadObserver`] is provided, success/rejection
//!   events are reported to it.
//!
//! Uploaded buffers go through [`load_table_from_bytes`], which requires an
//! explicit format (there is no extension to infer from).

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::RawTable;

use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values.
    Csv,
    /// Spreadsheet/workbook formats (feature-gated behind `excel`).
    Excel,
}

impl TableFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Some(Self::Excel),
            _ => None,
        }
    }

    /// Infer a format from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }
}

/// How to choose sheet(s) when ingesting a spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelection {
    /// Ingest the first sheet (default).
    #[default]
    First,
    /// Ingest a single named sheet.
    Sheet(String),
    /// Ingest all sheets and concatenate rows.
    AllSheets,
    /// Ingest only the listed sheets (in order) and concatenate rows.
    Sheets(Vec<String>),
}

/// Options controlling unified loading behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// If `None`, auto-detect format from the file extension.
    pub format: Option<TableFormat>,
    /// Spreadsheet-specific sheet choice.
    pub sheet_selection: SheetSelection,
    /// Optional observer for load outcomes.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked. Defaults to `Critical`.
    pub alert_at_or_above: Option<LoadSeverity>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("sheet_selection", &self.sheet_selection)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl LoadOptions {
    fn alert_threshold(&self) -> LoadSeverity {
        self.alert_at_or_above.unwrap_or(LoadSeverity::Critical)
    }
}

/// Load a table from a file path.
///
/// - If `options.format` is `None`, the format is inferred from the extension.
/// - When an observer is configured, `on_loaded` fires on success and
///   `on_rejected` (plus `on_alert` at or above the threshold) on failure.
///
/// # Examples
///
/// ```no_run
/// use vacancy_dashboard::ingestion::{load_table_from_path, LoadOptions};
///
/// # fn main() -> Result<(), vacancy_dashboard::LoadError> {
/// let table = load_table_from_path("vagas.csv", &LoadOptions::default())?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_table_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> LoadResult<RawTable> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = LoadContext {
        source: path.display().to_string(),
        format,
    };

    let result = match format {
        TableFormat::Csv => csv::read_csv_from_path(path),
        TableFormat::Excel => read_excel_dispatch_path(path, &options.sheet_selection),
    };

    report(options, &ctx, &result);
    result
}

/// Load a table from an in-memory byte buffer (the "upload file → bytes"
/// capability). The format must be given explicitly.
pub fn load_table_from_bytes(
    bytes: &[u8],
    format: TableFormat,
    options: &LoadOptions,
) -> LoadResult<RawTable> {
    let ctx = LoadContext {
        source: "<upload>".to_string(),
        format,
    };

    let result = match format {
        TableFormat::Csv => {
            let mut rdr = ::csv::ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_reader(bytes);
            csv::read_csv_from_reader(&mut rdr)
        }
        TableFormat::Excel => read_excel_dispatch_bytes(bytes, &options.sheet_selection),
    };

    report(options, &ctx, &result);
    result
}

fn report(options: &LoadOptions, ctx: &LoadContext, result: &LoadResult<RawTable>) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(table) => obs.on_loaded(
            ctx,
            LoadStats {
                rows: table.row_count(),
            },
        ),
        Err(e) => {
            let sev = severity_for_error(e);
            obs.on_rejected(ctx, sev, e);
            if sev >= options.alert_threshold() {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}

/// Classify an error for observer/alerting purposes. I/O problems are critical;
/// everything else is a plain rejection.
pub fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        #[cfg(feature = "excel")]
        LoadError::Excel(_) | LoadError::Workbook { .. } => LoadSeverity::Error,
        LoadError::UnknownFormat { .. } => LoadSeverity::Error,
        LoadError::Validation(_) => LoadSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> LoadResult<TableFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| LoadError::UnknownFormat {
            message: format!("cannot infer format: path has no extension ({})", path.display()),
        })?;

    TableFormat::from_extension(ext).ok_or_else(|| LoadError::UnknownFormat {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

fn read_excel_dispatch_path(path: &Path, sel: &SheetSelection) -> LoadResult<RawTable> {
    // Avoid unused warnings when the feature is off.
    let _ = (path, sel);

    #[cfg(feature = "excel")]
    {
        super::excel::read_excel_from_path(path, sel)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(LoadError::UnknownFormat {
            message: "spreadsheet ingestion not enabled (enable cargo feature 'excel')".to_string(),
        })
    }
}

fn read_excel_dispatch_bytes(bytes: &[u8], sel: &SheetSelection) -> LoadResult<RawTable> {
    let _ = (bytes, sel);

    #[cfg(feature = "excel")]
    {
        super::excel::read_excel_from_bytes(bytes, sel)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(LoadError::UnknownFormat {
            message: "spreadsheet ingestion not enabled (enable cargo feature 'excel')".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{load_table_from_bytes, LoadOptions, TableFormat};

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(TableFormat::from_extension("CSV"), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_extension("xlsx"), Some(TableFormat::Excel));
        assert_eq!(TableFormat::from_extension("Ods"), Some(TableFormat::Excel));
        assert_eq!(TableFormat::from_extension("parquet"), None);
    }

    #[test]
    fn format_from_path_uses_the_extension() {
        assert_eq!(TableFormat::from_path("dados/vagas.csv"), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_path("vagas.XLSX"), Some(TableFormat::Excel));
        assert_eq!(TableFormat::from_path("vagas"), None);
    }

    #[test]
    fn bytes_entry_reads_csv_uploads() {
        let bytes = "Município,Vagas\nPalmas,3\n".as_bytes();
        let table =
            load_table_from_bytes(bytes, TableFormat::Csv, &LoadOptions::default()).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.headers[0], "Município");
    }

    #[cfg(not(feature = "excel"))]
    #[test]
    fn excel_without_feature_is_a_clear_error() {
        use crate::error::LoadError;

        let err =
            load_table_from_bytes(&[], TableFormat::Excel, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::UnknownFormat { .. }));
        assert!(err.to_string().contains("excel"));
    }
}
