//! One render-cycle pass over the pipeline.
//!
//! A [`DashboardFrame`] is everything the presentation layer needs for one
//! interaction: the option lists for each filter widget, the filtered subset for
//! the detail table, the metric row and statistics panel, and all five chart
//! payloads. Every part is derived from the same filtered subset in a single
//! synchronous pass, so the views cannot drift apart.

use serde::Serialize;

use crate::aggregate::{summary, Summary};
use crate::cascade::{self, FilterOptions};
use crate::selection::Selection;
use crate::types::{Dimension, VacancyTable};
use crate::views::{
    bar_chart, heatmap, pie, stacked, treemap, BarChart, Heatmap, PieChart, StackedComposition,
    Treemap,
};

/// The complete payload for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    /// Choice lists for the four filter widgets.
    pub options: FilterOptions,
    /// The filtered subset, for the detail table and the CSV download.
    pub filtered: VacancyTable,
    /// Metric row + statistics panel numbers.
    pub summary: Summary,
    /// Bar chart for the caller-chosen dimension.
    pub bar: BarChart,
    /// Region × role heatmap.
    pub heatmap: Heatmap,
    /// Pie over regions.
    pub pie_regions: PieChart,
    /// Pie over roles.
    pub pie_roles: PieChart,
    /// Stacked composition of the top municipalities.
    pub stacked: StackedComposition,
    /// Region → municipality treemap.
    pub treemap: Treemap,
}

impl DashboardFrame {
    /// Run one full pass: cascade options, filter, aggregate, and shape every
    /// view. `bar_dimension` is the grouping the bar-chart radio has selected.
    pub fn render(table: &VacancyTable, selection: &Selection, bar_dimension: Dimension) -> Self {
        let options = FilterOptions::compute(table, selection);
        let filtered = cascade::apply(table, selection);

        Self {
            options,
            summary: summary(&filtered),
            bar: bar_chart(&filtered, bar_dimension),
            heatmap: heatmap(&filtered),
            pie_regions: pie(&filtered, Dimension::HealthRegion),
            pie_roles: pie(&filtered, Dimension::Role),
            stacked: stacked(&filtered),
            treemap: treemap(&filtered),
            filtered,
        }
    }
}
