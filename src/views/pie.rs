//! Pie/donut feeder.

use serde::Serialize;

use crate::aggregate::{top_n_with_other, GroupTotal};
use crate::types::{Dimension, VacancyTable};

/// Number of slices shown before the tail collapses into `Outros`.
pub const TOP_SLICES: usize = 8;

/// Chart-ready pie data: the top groups plus an `Outros` bucket when a tail
/// exists. The renderer derives percentages from the slice sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    /// The dimension the slices group on.
    pub dimension: Dimension,
    /// Slices, descending; `Outros` last when present.
    pub slices: Vec<GroupTotal>,
}

/// Build pie data for `dimension` over the filtered subset.
///
/// The dashboard shows two of these side by side — one for regions, one for
/// roles — computed independently from the same subset.
pub fn pie(table: &VacancyTable, dimension: Dimension) -> PieChart {
    PieChart {
        dimension,
        slices: top_n_with_other(table, dimension, TOP_SLICES),
    }
}

#[cfg(test)]
mod tests {
    use super::pie;
    use crate::aggregate::OTHER_LABEL;
    use crate::types::{Dimension, VacancyRecord, VacancyTable};

    #[test]
    fn long_tail_collapses_into_outros() {
        let records = (0..10)
            .map(|i| VacancyRecord::new("m", "r", "h", format!("cargo-{i:02}"), 10 - i as u32))
            .collect();
        let chart = pie(&VacancyTable::new(records), Dimension::Role);

        assert_eq!(chart.slices.len(), 9);
        assert_eq!(chart.slices.last().unwrap().key, OTHER_LABEL);
        // 10+9+...+1 = 55; tail = 2 + 1.
        assert_eq!(chart.slices.last().unwrap().vacancies, 3);
    }

    #[test]
    fn few_groups_mean_no_outros() {
        let table = VacancyTable::new(vec![
            VacancyRecord::new("m", "Norte", "h", "c", 5),
            VacancyRecord::new("m", "Sul", "h", "c", 3),
        ]);
        let chart = pie(&table, Dimension::HealthRegion);
        assert_eq!(chart.slices.len(), 2);
        assert!(chart.slices.iter().all(|s| s.key != OTHER_LABEL));
    }

    #[test]
    fn empty_subset_yields_no_slices() {
        let chart = pie(&VacancyTable::default(), Dimension::Role);
        assert!(chart.slices.is_empty());
    }
}
