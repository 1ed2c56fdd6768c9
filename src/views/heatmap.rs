//! Heatmap feeder: vacancies by health region and role.

use serde::Serialize;

use crate::aggregate::{pivot, Pivot};
use crate::types::{Dimension, VacancyTable};

/// How many roles the heatmap shows; the long tail would drown the signal.
pub const TOP_ROLES: usize = 10;

/// Region × role matrix, restricted to the top roles, 0-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Row labels (health regions), lexicographic.
    pub regions: Vec<String>,
    /// Column labels (roles), by descending overall total.
    pub roles: Vec<String>,
    /// `values[region][role]` vacancy sums.
    pub values: Vec<Vec<u64>>,
}

/// Build the heatmap matrix over the filtered subset.
pub fn heatmap(table: &VacancyTable) -> Heatmap {
    heatmap_with_top_roles(table, TOP_ROLES)
}

/// Build the heatmap with an explicit role limit.
pub fn heatmap_with_top_roles(table: &VacancyTable, top_roles: usize) -> Heatmap {
    let Pivot {
        row_keys,
        col_keys,
        values,
    } = pivot(table, Dimension::HealthRegion, Dimension::Role, Some(top_roles));
    Heatmap {
        regions: row_keys,
        roles: col_keys,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::{heatmap, heatmap_with_top_roles};
    use crate::types::{VacancyRecord, VacancyTable};

    fn sample_table() -> VacancyTable {
        VacancyTable::new(vec![
            VacancyRecord::new("Palmas", "Capim Dourado", "HGP", "Médico", 10),
            VacancyRecord::new("Palmas", "Capim Dourado", "HGP", "Enfermeiro", 3),
            VacancyRecord::new("Gurupi", "Ilha do Bananal", "HRG", "Enfermeiro", 5),
            VacancyRecord::new("Gurupi", "Ilha do Bananal", "HRG", "Psicólogo", 1),
        ])
    }

    #[test]
    fn matrix_is_zero_filled_with_ranked_columns() {
        let hm = heatmap(&sample_table());
        assert_eq!(hm.regions, vec!["Capim Dourado", "Ilha do Bananal"]);
        // Médico 10 > Enfermeiro 8 > Psicólogo 1.
        assert_eq!(hm.roles, vec!["Médico", "Enfermeiro", "Psicólogo"]);
        assert_eq!(hm.values, vec![vec![10, 3, 0], vec![0, 5, 1]]);
    }

    #[test]
    fn role_limit_truncates_columns() {
        let hm = heatmap_with_top_roles(&sample_table(), 2);
        assert_eq!(hm.roles, vec!["Médico", "Enfermeiro"]);
        assert_eq!(hm.values[0].len(), 2);
    }

    #[test]
    fn empty_subset_yields_empty_matrix() {
        let hm = heatmap(&VacancyTable::default());
        assert!(hm.regions.is_empty());
        assert!(hm.roles.is_empty());
        assert!(hm.values.is_empty());
    }
}
