//! The filter cascade: dependent option sets and subset filtering.
//!
//! Option sets are derived from whatever dataset is active — synthetic or
//! imported — purely by co-occurrence. Nothing here consults the fixture
//! municipality→region map, so arbitrary imported pairings behave the same as
//! the prototype data.
//!
//! The cascade rules, top to bottom:
//!
//! 1. regions: always every region in the dataset
//! 2. municipalities: restricted by the selected region, if any
//! 3. hospitals: restricted by the selected municipality, else the selected
//!    region, else unrestricted
//! 4. roles: always every role — roles are deliberately *not* cascaded
//!
//! Option lists are sorted and deduplicated; the "all" sentinel shown in choice
//! widgets is the presentation layer's to prepend.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::selection::Selection;
use crate::types::{Dimension, VacancyRecord, VacancyTable};

/// The per-dimension choice lists offered for the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// All health regions in the dataset.
    pub regions: Vec<String>,
    /// Municipalities valid under the selected region.
    pub municipalities: Vec<String>,
    /// Hospitals valid under the selected municipality/region.
    pub hospitals: Vec<String>,
    /// All roles in the dataset (never cascaded).
    pub roles: Vec<String>,
}

impl FilterOptions {
    /// Compute the option sets for `selection` over `table`.
    pub fn compute(table: &VacancyTable, selection: &Selection) -> Self {
        let regions = distinct(table, Dimension::HealthRegion, |_| true);

        let municipalities = match &selection.region {
            Some(region) => distinct(table, Dimension::Municipality, |r| {
                r.health_region == *region
            }),
            None => distinct(table, Dimension::Municipality, |_| true),
        };

        let hospitals = match (&selection.municipality, &selection.region) {
            (Some(municipality), _) => distinct(table, Dimension::Hospital, |r| {
                r.municipality == *municipality
            }),
            (None, Some(region)) => distinct(table, Dimension::Hospital, |r| {
                r.health_region == *region
            }),
            (None, None) => distinct(table, Dimension::Hospital, |_| true),
        };

        let roles = distinct(table, Dimension::Role, |_| true);

        Self {
            regions,
            municipalities,
            hospitals,
            roles,
        }
    }
}

fn distinct<F>(table: &VacancyTable, dimension: Dimension, mut keep: F) -> Vec<String>
where
    F: FnMut(&VacancyRecord) -> bool,
{
    let set: BTreeSet<&str> = table
        .records
        .iter()
        .filter(|r| keep(r))
        .map(|r| dimension.value(r))
        .collect();
    set.into_iter().map(str::to_owned).collect()
}

/// Produce the filtered subset: every set field of `selection` applied as an
/// equality predicate, combined with AND.
///
/// A stale selection (e.g. a municipality outside the newly selected region)
/// simply yields an empty table; the cascade never rewrites the selection.
pub fn apply(table: &VacancyTable, selection: &Selection) -> VacancyTable {
    table.filter_records(|r| selection.matches(r))
}
