//! Bar-chart feeder.

use serde::Serialize;

use crate::aggregate::{group_totals, GroupTotal};
use crate::types::{Dimension, VacancyTable};

/// Base chart height in pixels for up to [`BASELINE_ITEMS`] bars.
pub const BASE_HEIGHT: u32 = 500;
/// Extra height per bar beyond the baseline.
pub const HEIGHT_STEP: u32 = 15;
/// Number of bars the base height accommodates.
pub const BASELINE_ITEMS: usize = 10;

/// Chart-ready bar data for one grouping dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    /// The dimension the bars group on.
    pub dimension: Dimension,
    /// `(label, value)` pairs, descending by value.
    pub bars: Vec<GroupTotal>,
    /// Height the renderer should honor to keep labels readable:
    /// `BASE_HEIGHT + max(0, bars − BASELINE_ITEMS) × HEIGHT_STEP`.
    pub height_hint: u32,
}

/// Build bar data for `dimension` over the filtered subset.
pub fn bar_chart(table: &VacancyTable, dimension: Dimension) -> BarChart {
    let bars = group_totals(table, dimension);
    let extra = bars.len().saturating_sub(BASELINE_ITEMS) as u32;
    BarChart {
        dimension,
        bars,
        height_hint: BASE_HEIGHT + extra * HEIGHT_STEP,
    }
}
