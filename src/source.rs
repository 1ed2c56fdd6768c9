//! Dataset source arbitration: imported file or synthetic fallback.
//!
//! The boundary where input-facing errors stop. Parse and validation failures
//! are reported (observer + `log`) and answered with the cached synthetic
//! table, so the dashboard always has data to render.

use std::path::Path;

use serde::Serialize;

use crate::error::{LoadError, LoadResult};
use crate::ingestion::{
    load_table_from_bytes, load_table_from_path, severity_for_error, LoadContext, LoadOptions,
    TableFormat,
};
use crate::synthetic::synthetic_table;
use crate::types::VacancyTable;
use crate::validate::to_vacancy_table;

/// Where the active dataset came from; the presentation layer captions the
/// dashboard with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataOrigin {
    /// The built-in prototype dataset.
    Synthetic,
    /// A user-supplied file that passed validation.
    Imported,
}

/// Import a file and validate it into a [`VacancyTable`]. No fallback; the
/// error carries the user-facing reason.
pub fn import_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<VacancyTable> {
    let raw = load_table_from_path(path, options)?;
    Ok(to_vacancy_table(&raw)?)
}

/// Import an uploaded buffer and validate it into a [`VacancyTable`].
pub fn import_from_bytes(
    bytes: &[u8],
    format: TableFormat,
    options: &LoadOptions,
) -> LoadResult<VacancyTable> {
    let raw = load_table_from_bytes(bytes, format, options)?;
    Ok(to_vacancy_table(&raw)?)
}

/// Load a file, falling back to the synthetic dataset on any error.
///
/// The returned origin tells the caller which one it got.
pub fn load_or_fallback(path: impl AsRef<Path>, options: &LoadOptions) -> (VacancyTable, DataOrigin) {
    let path = path.as_ref();
    match import_from_path(path, options) {
        Ok(table) => {
            log::info!("using imported dataset from {} ({} rows)", path.display(), table.len());
            (table, DataOrigin::Imported)
        }
        Err(error) => fall_back(path.display().to_string(), TableFormat::from_path(path), options, error),
    }
}

/// Upload-buffer variant of [`load_or_fallback`].
pub fn load_or_fallback_from_bytes(
    bytes: &[u8],
    format: TableFormat,
    options: &LoadOptions,
) -> (VacancyTable, DataOrigin) {
    match import_from_bytes(bytes, format, options) {
        Ok(table) => {
            log::info!("using uploaded dataset ({} rows)", table.len());
            (table, DataOrigin::Imported)
        }
        Err(error) => fall_back("<upload>".to_string(), Some(format), options, error),
    }
}

fn fall_back(
    source: String,
    format: Option<TableFormat>,
    options: &LoadOptions,
    error: LoadError,
) -> (VacancyTable, DataOrigin) {
    log::warn!("dataset rejected ({source}): {error}; using the synthetic dataset");
    if let (Some(observer), Some(format)) = (options.observer.as_ref(), format) {
        let ctx = LoadContext { source, format };
        // Parse errors were already reported by the loader; validation errors
        // surface here, then the fallback notice either way.
        if matches!(error, LoadError::Validation(_)) {
            observer.on_rejected(&ctx, severity_for_error(&error), &error);
        }
        observer.on_fallback(&ctx, &error);
    }
    (synthetic_table().clone(), DataOrigin::Synthetic)
}
