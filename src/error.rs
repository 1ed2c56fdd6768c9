use thiserror::Error;

/// Convenience result type for loading and export operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned when reading, validating, or exporting a dataset.
///
/// All variants are input-facing: they are caught at the load boundary and turned
/// into user-visible messages plus a fallback to the synthetic dataset. Nothing in
/// the aggregation/view pipeline produces one.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "excel")]
    /// Spreadsheet parse error (feature-gated behind `excel`).
    #[error("spreadsheet error: {0}")]
    Excel(#[from] calamine::Error),

    #[cfg(feature = "excel")]
    /// Workbook structure problem (no sheets, header mismatch across tabs).
    #[error("workbook error: {message}")]
    Workbook { message: String },

    /// The input format could not be determined or is not supported.
    #[error("unsupported input: {message}")]
    UnknownFormat { message: String },

    /// The parsed table failed schema/constraint validation.
    #[error("invalid dataset: {0}")]
    Validation(#[from] ValidationError),
}

/// Why an imported table was rejected by the validator.
///
/// The `Display` string is the user-facing reason; it names the offending column
/// and, where applicable, the 1-based data row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required column is absent from the header row.
    #[error("missing required column '{column}'. found columns: {found:?}")]
    MissingColumn {
        /// The absent column name.
        column: String,
        /// The headers that were actually present.
        found: Vec<String>,
    },

    /// The table has a header but no data rows.
    #[error("the table has no data rows")]
    Empty,

    /// A vacancy-count cell is not a whole number.
    #[error("column '{column}' must contain only whole numbers (row {row})")]
    NonNumeric {
        /// The offending column name.
        column: String,
        /// 1-based data row of the first offending cell.
        row: usize,
    },

    /// A vacancy-count cell is negative.
    #[error("column '{column}' cannot contain negative values (row {row})")]
    Negative {
        /// The offending column name.
        column: String,
        /// 1-based data row of the first offending cell.
        row: usize,
    },
}
