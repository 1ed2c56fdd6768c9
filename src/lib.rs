//! `vacancy-dashboard` is the core of a filterable dashboard for public-sector
//! health job-vacancy data: it loads a tabular dataset (synthetic or imported),
//! derives cascading filter options, applies the current selection, and shapes
//! consistent aggregates for every chart the dashboard shows.
//!
//! The primary entrypoint is [`dashboard::DashboardFrame::render`], which runs
//! one full pass — cascade, filter, aggregate, view shaping — per user
//! interaction. Rendering itself is someone else's job: the frame is plain,
//! serializable data any toolkit can draw.
//!
//! ## Datasets
//!
//! The fixed schema is the five columns `Município`, `Região de Saúde`,
//! `Hospital`, `Cargo`, `Vagas` (see [`types::columns`]). Data comes from:
//!
//! - the built-in synthetic provider ([`synthetic::synthetic_table`]) —
//!   deterministic, cached for the whole session
//! - an imported CSV or spreadsheet ([`ingestion`] + [`validate`]), with
//!   automatic fallback to the synthetic table on rejection
//!   ([`source::load_or_fallback`])
//!
//! Spreadsheet support is feature-gated behind `excel` (adds `calamine`).
//!
//! ## Quick example: filter and aggregate
//!
//! ```rust
//! use vacancy_dashboard::dashboard::DashboardFrame;
//! use vacancy_dashboard::selection::Selection;
//! use vacancy_dashboard::types::{Dimension, VacancyRecord, VacancyTable};
//!
//! let table = VacancyTable::new(vec![
//!     VacancyRecord::new("Palmas", "Capim Dourado", "HGP", "Médico", 10),
//!     VacancyRecord::new("Araguaína", "Médio Norte Araguaia", "Hosp. Regional", "Enfermeiro", 15),
//! ]);
//!
//! let selection = Selection::all().with_region("Capim Dourado");
//! let frame = DashboardFrame::render(&table, &selection, Dimension::Municipality);
//!
//! assert_eq!(frame.filtered.len(), 1);
//! assert_eq!(frame.summary.total_vacancies, 10);
//! assert_eq!(frame.summary.distinct_municipalities, 1);
//! ```
//!
//! ## Quick example: validate an upload
//!
//! ```rust
//! use vacancy_dashboard::ingestion::{load_table_from_bytes, LoadOptions, TableFormat};
//! use vacancy_dashboard::validate::to_vacancy_table;
//!
//! let bytes = "Município,Região de Saúde,Hospital,Cargo,Vagas\n\
//!              Palmas,Capim Dourado,HGP,Médico,10\n";
//! let raw = load_table_from_bytes(bytes.as_bytes(), TableFormat::Csv, &LoadOptions::default())
//!     .unwrap();
//! let table = to_vacancy_table(&raw).unwrap();
//! assert_eq!(table.len(), 1);
//! ```
//!
//! A rejected file reports *why*, and callers fall back to the synthetic data:
//!
//! ```rust
//! use vacancy_dashboard::types::{columns, RawCell, RawTable};
//! use vacancy_dashboard::validate::validate;
//!
//! // "Vagas" column absent.
//! let raw = RawTable::new(
//!     vec![
//!         "Município".to_string(),
//!         "Região de Saúde".to_string(),
//!         "Hospital".to_string(),
//!         "Cargo".to_string(),
//!     ],
//!     vec![vec![
//!         RawCell::Text("Palmas".into()),
//!         RawCell::Text("Capim Dourado".into()),
//!         RawCell::Text("HGP".into()),
//!         RawCell::Text("Médico".into()),
//!     ]],
//! );
//! let err = validate(&raw).unwrap_err();
//! assert!(err.to_string().contains(columns::VACANCIES));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: schema constants, raw import tables, the validated dataset
//! - [`ingestion`]: CSV/spreadsheet loading (paths and uploaded bytes) with
//!   load observers
//! - [`validate`]: the import validator
//! - [`synthetic`]: the cached deterministic prototype dataset
//! - [`source`]: imported-vs-synthetic arbitration with fallback
//! - [`selection`]: filter state and the change-notifying holder
//! - [`cascade`]: dependent option sets + subset filtering
//! - [`aggregate`]: group sums, top-N(+`Outros`), pivot, hierarchy, summary
//! - [`views`]: per-chart payload feeders
//! - [`export`]: CSV export of the filtered subset
//! - [`dashboard`]: the per-interaction frame

pub mod aggregate;
pub mod cascade;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod selection;
pub mod source;
pub mod synthetic;
pub mod types;
pub mod validate;
pub mod views;

pub use error::{LoadError, LoadResult, ValidationError};
