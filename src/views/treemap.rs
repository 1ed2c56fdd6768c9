//! Treemap feeder: region → municipality containment.

use serde::Serialize;

use crate::aggregate::{hierarchy, RegionBranch};
use crate::types::VacancyTable;

/// Chart-ready treemap data. Rectangle areas are proportional to vacancy sums;
/// every region's value equals the sum of its municipalities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Treemap {
    /// Top-level branches, descending by total.
    pub regions: Vec<RegionBranch>,
    /// Sum over all branches (the root rectangle).
    pub total: u64,
}

/// Build the treemap hierarchy over the filtered subset.
pub fn treemap(table: &VacancyTable) -> Treemap {
    let regions = hierarchy(table);
    let total = regions.iter().map(|b| b.vacancies).sum();
    Treemap { regions, total }
}
