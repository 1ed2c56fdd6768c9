//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`load_table_from_path`] (from [`unified`]) which:
//!
//! - auto-detects the format by file extension (or you can override via
//!   [`LoadOptions`])
//! - reads the file into an untyped [`crate::types::RawTable`] for the validator
//! - optionally reports success/rejection to a [`LoadObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`excel`] (feature `excel`)

pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver,
};
pub use unified::{
    load_table_from_bytes, load_table_from_path, severity_for_error, LoadOptions, SheetSelection,
    TableFormat,
};
