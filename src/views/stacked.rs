//! Stacked-bar feeder: role composition of the busiest municipalities.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregate::top_n;
use crate::types::{Dimension, VacancyTable};

/// How many municipalities the stacked chart shows.
pub const TOP_MUNICIPALITIES: usize = 8;

/// One stacked series: a role's value in each charted municipality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedSeries {
    /// Role name.
    pub role: String,
    /// Vacancy sums aligned with [`StackedComposition::municipalities`].
    pub values: Vec<u64>,
}

/// Municipality × role composition, restricted to the top municipalities by
/// total. All roles present in those municipalities are retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedComposition {
    /// Charted municipalities, descending by total.
    pub municipalities: Vec<String>,
    /// One series per role, descending by the role's total within the chart.
    pub series: Vec<StackedSeries>,
}

/// Build the stacked composition over the filtered subset.
pub fn stacked(table: &VacancyTable) -> StackedComposition {
    let municipalities: Vec<String> = top_n(table, Dimension::Municipality, TOP_MUNICIPALITIES)
        .into_iter()
        .map(|g| g.key)
        .collect();

    let subset = table.filter_records(|r| municipalities.contains(&r.municipality));

    let mut per_role: BTreeMap<&str, BTreeMap<&str, u64>> = BTreeMap::new();
    for r in &subset.records {
        *per_role
            .entry(r.role.as_str())
            .or_default()
            .entry(r.municipality.as_str())
            .or_insert(0) += u64::from(r.vacancies);
    }

    let mut series: Vec<StackedSeries> = per_role
        .into_iter()
        .map(|(role, by_municipality)| StackedSeries {
            role: role.to_owned(),
            values: municipalities
                .iter()
                .map(|m| by_municipality.get(m.as_str()).copied().unwrap_or(0))
                .collect(),
        })
        .collect();
    series.sort_by(|a, b| {
        let ta: u64 = a.values.iter().sum();
        let tb: u64 = b.values.iter().sum();
        tb.cmp(&ta).then_with(|| a.role.cmp(&b.role))
    });

    StackedComposition {
        municipalities,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::{stacked, TOP_MUNICIPALITIES};
    use crate::types::{VacancyRecord, VacancyTable};

    #[test]
    fn restricts_to_top_municipalities_but_keeps_all_their_roles() {
        // Ten municipalities with descending totals; m-09 and m-08 fall off.
        let mut records: Vec<VacancyRecord> = (0..10)
            .map(|i| {
                VacancyRecord::new(format!("m-{i:02}"), "r", "h", "Médico", 100 - 10 * i as u32)
            })
            .collect();
        // A rare role inside a charted municipality must survive.
        records.push(VacancyRecord::new("m-00", "r", "h", "Físico", 1));
        let comp = stacked(&VacancyTable::new(records));

        assert_eq!(comp.municipalities.len(), TOP_MUNICIPALITIES);
        assert!(!comp.municipalities.contains(&"m-08".to_string()));
        assert!(!comp.municipalities.contains(&"m-09".to_string()));

        let roles: Vec<&str> = comp.series.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(roles, vec!["Médico", "Físico"]);
    }

    #[test]
    fn series_values_align_with_municipality_order() {
        let table = VacancyTable::new(vec![
            VacancyRecord::new("Palmas", "r", "h", "Médico", 10),
            VacancyRecord::new("Palmas", "r", "h", "Enfermeiro", 4),
            VacancyRecord::new("Gurupi", "r", "h", "Médico", 6),
        ]);
        let comp = stacked(&table);

        assert_eq!(comp.municipalities, vec!["Palmas", "Gurupi"]);
        let medico = comp.series.iter().find(|s| s.role == "Médico").unwrap();
        assert_eq!(medico.values, vec![10, 6]);
        let enfermeiro = comp.series.iter().find(|s| s.role == "Enfermeiro").unwrap();
        assert_eq!(enfermeiro.values, vec![4, 0]);
    }

    #[test]
    fn empty_subset_yields_empty_composition() {
        let comp = stacked(&VacancyTable::default());
        assert!(comp.municipalities.is_empty());
        assert!(comp.series.is_empty());
    }
}
