//! Core data model types for the dashboard pipeline.
//!
//! Imported files are first read into a loosely-typed [`RawTable`] (headers plus
//! [`RawCell`]s), which is what the validator inspects. Validated data lives in a
//! [`VacancyTable`] of typed [`VacancyRecord`]s; that is the shape the cascade,
//! aggregator, and view feeders operate on.

use serde::{Deserialize, Serialize};

/// The fixed column-name contract, including diacritics.
///
/// These names must match uploaded spreadsheets exactly and are reused verbatim in
/// the CSV export header.
pub mod columns {
    /// Municipality column.
    pub const MUNICIPALITY: &str = "Município";
    /// Health-region column.
    pub const HEALTH_REGION: &str = "Região de Saúde";
    /// Hospital column.
    pub const HOSPITAL: &str = "Hospital";
    /// Role column.
    pub const ROLE: &str = "Cargo";
    /// Vacancy-count column.
    pub const VACANCIES: &str = "Vagas";

    /// All required columns, in export order.
    pub const EXPECTED: [&str; 5] = [MUNICIPALITY, HEALTH_REGION, HOSPITAL, ROLE, VACANCIES];
}

/// A loosely-typed cell read from an imported file, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Missing/empty cell.
    Empty,
    /// Text content.
    Text(String),
    /// Numeric content (CSV numbers and spreadsheet number cells).
    Number(f64),
    /// Boolean content (spreadsheet bool cells).
    Bool(bool),
}

impl RawCell {
    /// Interpret the cell as a whole number, if it is one.
    ///
    /// Numbers with a fractional part are rejected; text and bool cells are not
    /// coerced.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    /// Render the cell as display text (used when converting label columns).
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(f) => {
                if f.fract() == 0.0 && f.is_finite() {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// An imported table as read from disk or upload: headers plus untyped rows.
///
/// Column order is whatever the file used; lookups go through [`RawTable::column_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Header row, trimmed.
    pub headers: Vec<String>,
    /// Data rows; each row has one cell per header (short rows read as empty).
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    /// Create a raw table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { headers, rows }
    }

    /// Returns the index of a column by exact name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One validated row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyRecord {
    /// Municipality name (`Município`).
    pub municipality: String,
    /// Health region (`Região de Saúde`).
    pub health_region: String,
    /// Hospital name (`Hospital`).
    pub hospital: String,
    /// Role/position (`Cargo`).
    pub role: String,
    /// Open-position count (`Vagas`).
    pub vacancies: u32,
}

impl VacancyRecord {
    /// Create a record.
    pub fn new(
        municipality: impl Into<String>,
        health_region: impl Into<String>,
        hospital: impl Into<String>,
        role: impl Into<String>,
        vacancies: u32,
    ) -> Self {
        Self {
            municipality: municipality.into(),
            health_region: health_region.into(),
            hospital: hospital.into(),
            role: role.into(),
            vacancies,
        }
    }
}

/// An ordered, validated collection of [`VacancyRecord`]s.
///
/// An empty table is valid as a *filtered* result; validation rejects empty
/// *imported* tables before one is ever constructed from an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacancyTable {
    /// Row storage, in input order.
    pub records: Vec<VacancyRecord>,
}

impl VacancyTable {
    /// Create a table from records.
    pub fn new(records: Vec<VacancyRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a new table containing only records that match `predicate`.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&VacancyRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        Self { records }
    }
}

/// A grouping dimension of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Group by municipality.
    Municipality,
    /// Group by health region.
    HealthRegion,
    /// Group by hospital.
    Hospital,
    /// Group by role.
    Role,
}

impl Dimension {
    /// The record field this dimension groups on.
    pub fn value<'a>(&self, record: &'a VacancyRecord) -> &'a str {
        match self {
            Self::Municipality => &record.municipality,
            Self::HealthRegion => &record.health_region,
            Self::Hospital => &record.hospital,
            Self::Role => &record.role,
        }
    }

    /// The column name this dimension corresponds to in files and exports.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Municipality => columns::MUNICIPALITY,
            Self::HealthRegion => columns::HEALTH_REGION,
            Self::Hospital => columns::HOSPITAL,
            Self::Role => columns::ROLE,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}
