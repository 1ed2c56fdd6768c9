//! Aggregation over the filtered subset.
//!
//! Everything here is recomputed from scratch per render cycle — aggregates are
//! derived values, never patched in place. All operations degrade to empty
//! output on an empty subset; none of them can fail.
//!
//! Descending sorts break ties lexicographically by key, so equal inputs always
//! produce identical output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Dimension, VacancyTable};

/// Label of the synthetic bucket holding the collapsed long tail.
pub const OTHER_LABEL: &str = "Outros";

/// Sum of vacancies for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal {
    /// Distinct value of the grouping dimension.
    pub key: String,
    /// Sum of `vacancies` across the group's rows.
    pub vacancies: u64,
}

/// A dense two-dimensional pivot, missing combinations filled with 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pivot {
    /// Row labels, sorted lexicographically.
    pub row_keys: Vec<String>,
    /// Column labels; lexicographic, or by descending overall total when the
    /// pivot is restricted to top columns.
    pub col_keys: Vec<String>,
    /// `values[r][c]` is the vacancy sum for `(row_keys[r], col_keys[c])`.
    pub values: Vec<Vec<u64>>,
}

/// One region of the region → municipality containment hierarchy.
///
/// `vacancies` is computed as the sum of the children, so the
/// parent-equals-sum-of-children invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionBranch {
    /// Health-region name.
    pub region: String,
    /// Region total (sum of `municipalities`).
    pub vacancies: u64,
    /// Per-municipality totals within the region, descending.
    pub municipalities: Vec<GroupTotal>,
}

/// Summary statistics over a filtered subset.
///
/// `None` statistics mean "no data" — an empty subset is informational, never an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Grand total of `vacancies`.
    pub total_vacancies: u64,
    /// Distinct hospitals.
    pub distinct_hospitals: usize,
    /// Distinct municipalities.
    pub distinct_municipalities: usize,
    /// Distinct roles.
    pub distinct_roles: usize,
    /// Mean of per-municipality totals.
    pub mean_per_municipality: Option<f64>,
    /// Median of per-municipality totals.
    pub median_per_municipality: Option<f64>,
    /// Smallest single-row vacancy count.
    pub min_vacancies: Option<u32>,
    /// Largest single-row vacancy count.
    pub max_vacancies: Option<u32>,
    /// The five municipalities with the most vacancies.
    pub top_municipalities: Vec<GroupTotal>,
    /// The five roles with the most vacancies.
    pub top_roles: Vec<GroupTotal>,
}

/// Grand total of `vacancies` over the whole table.
pub fn grand_total(table: &VacancyTable) -> u64 {
    table.records.iter().map(|r| u64::from(r.vacancies)).sum()
}

/// Sum of vacancies per distinct value of `dimension`, sorted descending by sum
/// (ties lexicographic by key).
pub fn group_totals(table: &VacancyTable, dimension: Dimension) -> Vec<GroupTotal> {
    let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
    for r in &table.records {
        *sums.entry(dimension.value(r)).or_insert(0) += u64::from(r.vacancies);
    }

    let mut out: Vec<GroupTotal> = sums
        .into_iter()
        .map(|(key, vacancies)| GroupTotal {
            key: key.to_owned(),
            vacancies,
        })
        .collect();
    out.sort_by(|a, b| b.vacancies.cmp(&a.vacancies).then_with(|| a.key.cmp(&b.key)));
    out
}

/// The `n` largest groups of `dimension` by vacancy sum.
pub fn top_n(table: &VacancyTable, dimension: Dimension, n: usize) -> Vec<GroupTotal> {
    let mut out = group_totals(table, dimension);
    out.truncate(n);
    out
}

/// Top-N groups plus an `Outros` bucket holding the remainder.
///
/// The bucket is appended iff the remainder (grand total minus the top-N sum) is
/// strictly positive, so the slice sums always account for the whole subset.
pub fn top_n_with_other(table: &VacancyTable, dimension: Dimension, n: usize) -> Vec<GroupTotal> {
    let mut out = top_n(table, dimension, n);
    let top_sum: u64 = out.iter().map(|g| g.vacancies).sum();
    let remainder = grand_total(table) - top_sum;
    if remainder > 0 {
        out.push(GroupTotal {
            key: OTHER_LABEL.to_owned(),
            vacancies: remainder,
        });
    }
    out
}

/// Dense pivot of vacancy sums over `(rows, cols)`.
///
/// With `top_cols = Some(n)`, columns are the `n` values of `cols` with the
/// greatest overall sum — ranked over the whole subset, independent of the row
/// dimension — in that rank order. Otherwise all columns, lexicographic.
pub fn pivot(
    table: &VacancyTable,
    rows: Dimension,
    cols: Dimension,
    top_cols: Option<usize>,
) -> Pivot {
    let mut sums: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    let mut row_set: BTreeMap<&str, ()> = BTreeMap::new();
    for r in &table.records {
        let key = (rows.value(r), cols.value(r));
        *sums.entry(key).or_insert(0) += u64::from(r.vacancies);
        row_set.insert(rows.value(r), ());
    }

    let col_keys: Vec<String> = match top_cols {
        Some(n) => top_n(table, cols, n).into_iter().map(|g| g.key).collect(),
        None => {
            let set: std::collections::BTreeSet<&str> =
                table.records.iter().map(|r| cols.value(r)).collect();
            set.into_iter().map(str::to_owned).collect()
        }
    };
    let row_keys: Vec<String> = row_set.into_keys().map(str::to_owned).collect();

    let values = row_keys
        .iter()
        .map(|rk| {
            col_keys
                .iter()
                .map(|ck| sums.get(&(rk.as_str(), ck.as_str())).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Pivot {
        row_keys,
        col_keys,
        values,
    }
}

/// Region → municipality containment hierarchy, regions and children both
/// sorted descending by total.
pub fn hierarchy(table: &VacancyTable) -> Vec<RegionBranch> {
    let mut per_pair: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    for r in &table.records {
        let key = (r.health_region.as_str(), r.municipality.as_str());
        *per_pair.entry(key).or_insert(0) += u64::from(r.vacancies);
    }

    let mut branches: BTreeMap<&str, Vec<GroupTotal>> = BTreeMap::new();
    for ((region, municipality), vacancies) in per_pair {
        branches.entry(region).or_default().push(GroupTotal {
            key: municipality.to_owned(),
            vacancies,
        });
    }

    let mut out: Vec<RegionBranch> = branches
        .into_iter()
        .map(|(region, mut municipalities)| {
            municipalities
                .sort_by(|a, b| b.vacancies.cmp(&a.vacancies).then_with(|| a.key.cmp(&b.key)));
            let vacancies = municipalities.iter().map(|m| m.vacancies).sum();
            RegionBranch {
                region: region.to_owned(),
                vacancies,
                municipalities,
            }
        })
        .collect();
    out.sort_by(|a, b| {
        b.vacancies
            .cmp(&a.vacancies)
            .then_with(|| a.region.cmp(&b.region))
    });
    out
}

/// Summary statistics for the metric row and the statistics panel.
///
/// Mean/median run over *per-municipality totals*; min/max run over the raw
/// per-row counts of the subset.
pub fn summary(table: &VacancyTable) -> Summary {
    let per_municipality = group_totals(table, Dimension::Municipality);
    let totals: Vec<u64> = per_municipality.iter().map(|g| g.vacancies).collect();

    let mean = if totals.is_empty() {
        None
    } else {
        Some(totals.iter().sum::<u64>() as f64 / totals.len() as f64)
    };
    let median = median_of(&totals);

    Summary {
        total_vacancies: grand_total(table),
        distinct_hospitals: distinct_count(table, Dimension::Hospital),
        distinct_municipalities: per_municipality.len(),
        distinct_roles: distinct_count(table, Dimension::Role),
        mean_per_municipality: mean,
        median_per_municipality: median,
        min_vacancies: table.records.iter().map(|r| r.vacancies).min(),
        max_vacancies: table.records.iter().map(|r| r.vacancies).max(),
        top_municipalities: top_n(table, Dimension::Municipality, 5),
        top_roles: top_n(table, Dimension::Role, 5),
    }
}

fn distinct_count(table: &VacancyTable, dimension: Dimension) -> usize {
    let set: std::collections::BTreeSet<&str> =
        table.records.iter().map(|r| dimension.value(r)).collect();
    set.len()
}

fn median_of(totals: &[u64]) -> Option<f64> {
    if totals.is_empty() {
        return None;
    }
    let mut values = totals.to_vec();
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid] as f64)
    } else {
        Some((values[mid - 1] + values[mid]) as f64 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        grand_total, group_totals, hierarchy, pivot, summary, top_n, top_n_with_other, OTHER_LABEL,
    };
    use crate::types::{Dimension, VacancyRecord, VacancyTable};

    fn sample_table() -> VacancyTable {
        VacancyTable::new(vec![
            VacancyRecord::new("Palmas", "Capim Dourado", "HGP", "Médico", 10),
            VacancyRecord::new("Palmas", "Capim Dourado", "HGP", "Enfermeiro", 6),
            VacancyRecord::new("Palmas", "Capim Dourado", "Dona Regina", "Médico", 4),
            VacancyRecord::new("Gurupi", "Ilha do Bananal", "HR Gurupi", "Médico", 8),
            VacancyRecord::new("Gurupi", "Ilha do Bananal", "HR Gurupi", "Psicólogo", 2),
            VacancyRecord::new("Arraias", "Sudeste", "HR Arraias", "Enfermeiro", 8),
        ])
    }

    #[test]
    fn group_totals_sum_and_sort_descending() {
        let totals = group_totals(&sample_table(), Dimension::Municipality);
        let as_pairs: Vec<(&str, u64)> =
            totals.iter().map(|g| (g.key.as_str(), g.vacancies)).collect();
        assert_eq!(as_pairs, vec![("Palmas", 20), ("Gurupi", 10), ("Arraias", 8)]);
    }

    #[test]
    fn group_totals_break_ties_lexicographically() {
        let table = VacancyTable::new(vec![
            VacancyRecord::new("B", "r", "h", "c", 5),
            VacancyRecord::new("A", "r", "h", "c", 5),
            VacancyRecord::new("C", "r", "h", "c", 7),
        ]);
        let totals = group_totals(&table, Dimension::Municipality);
        let keys: Vec<&str> = totals.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["C", "A", "B"]);
    }

    #[test]
    fn grand_total_matches_sum_over_any_grouping() {
        let table = sample_table();
        let expected = grand_total(&table);
        for dim in [
            Dimension::Municipality,
            Dimension::HealthRegion,
            Dimension::Hospital,
            Dimension::Role,
        ] {
            let sum: u64 = group_totals(&table, dim).iter().map(|g| g.vacancies).sum();
            assert_eq!(sum, expected, "{dim}");
        }
    }

    #[test]
    fn top_n_with_other_accounts_for_the_whole_subset() {
        // The worked example: sums [50,40,30,20,10,10,5,5,3,2], top-8 = 165, Other = 10.
        let sums = [50u32, 40, 30, 20, 10, 10, 5, 5, 3, 2];
        let records = sums
            .iter()
            .enumerate()
            .map(|(i, &v)| VacancyRecord::new("m", "r", "h", format!("cargo-{i:02}"), v))
            .collect();
        let table = VacancyTable::new(records);

        let slices = top_n_with_other(&table, Dimension::Role, 8);
        assert_eq!(slices.len(), 9);
        let other = slices.last().unwrap();
        assert_eq!(other.key, OTHER_LABEL);
        assert_eq!(other.vacancies, 10);
        let total: u64 = slices.iter().map(|g| g.vacancies).sum();
        assert_eq!(total, 175);
    }

    #[test]
    fn top_n_with_other_omits_empty_bucket() {
        let table = sample_table();
        // Only 3 municipalities; top-8 covers everything, so no bucket.
        let slices = top_n_with_other(&table, Dimension::Municipality, 8);
        assert_eq!(slices.len(), 3);
        assert!(slices.iter().all(|g| g.key != OTHER_LABEL));
    }

    #[test]
    fn pivot_zero_fills_missing_combinations() {
        let p = pivot(
            &sample_table(),
            Dimension::HealthRegion,
            Dimension::Role,
            None,
        );
        assert_eq!(p.row_keys, vec!["Capim Dourado", "Ilha do Bananal", "Sudeste"]);
        assert_eq!(p.col_keys, vec!["Enfermeiro", "Médico", "Psicólogo"]);
        assert_eq!(
            p.values,
            vec![vec![6, 14, 0], vec![0, 8, 2], vec![8, 0, 0]]
        );
    }

    #[test]
    fn pivot_top_columns_are_ranked_independent_of_rows() {
        let p = pivot(
            &sample_table(),
            Dimension::HealthRegion,
            Dimension::Role,
            Some(2),
        );
        // Médico 22 > Enfermeiro 14 > Psicólogo 2.
        assert_eq!(p.col_keys, vec!["Médico", "Enfermeiro"]);
        assert_eq!(p.values, vec![vec![14, 6], vec![8, 0], vec![0, 8]]);
    }

    #[test]
    fn hierarchy_parents_equal_sum_of_children() {
        let branches = hierarchy(&sample_table());
        for branch in &branches {
            let child_sum: u64 = branch.municipalities.iter().map(|m| m.vacancies).sum();
            assert_eq!(branch.vacancies, child_sum, "{}", branch.region);
        }
        let overall: u64 = branches.iter().map(|b| b.vacancies).sum();
        assert_eq!(overall, grand_total(&sample_table()));
    }

    #[test]
    fn summary_statistics_run_over_the_right_populations() {
        let s = summary(&sample_table());
        assert_eq!(s.total_vacancies, 38);
        assert_eq!(s.distinct_hospitals, 4);
        assert_eq!(s.distinct_municipalities, 3);
        assert_eq!(s.distinct_roles, 3);
        // Per-municipality totals: [20, 10, 8].
        assert_eq!(s.mean_per_municipality, Some(38.0 / 3.0));
        assert_eq!(s.median_per_municipality, Some(10.0));
        // Min/max over raw row counts, not grouped sums.
        assert_eq!(s.min_vacancies, Some(2));
        assert_eq!(s.max_vacancies, Some(10));
        assert_eq!(s.top_municipalities.len(), 3);
        assert_eq!(s.top_roles[0].key, "Médico");
    }

    #[test]
    fn median_averages_the_two_middle_values() {
        let table = VacancyTable::new(vec![
            VacancyRecord::new("A", "r", "h", "c", 4),
            VacancyRecord::new("B", "r", "h", "c", 10),
            VacancyRecord::new("C", "r", "h", "c", 6),
            VacancyRecord::new("D", "r", "h", "c", 20),
        ]);
        let s = summary(&table);
        assert_eq!(s.median_per_municipality, Some(8.0));
    }

    #[test]
    fn everything_degrades_on_an_empty_subset() {
        let empty = VacancyTable::default();

        assert_eq!(grand_total(&empty), 0);
        assert!(group_totals(&empty, Dimension::Role).is_empty());
        assert!(top_n_with_other(&empty, Dimension::Role, 8).is_empty());
        assert!(hierarchy(&empty).is_empty());

        let p = pivot(&empty, Dimension::HealthRegion, Dimension::Role, Some(10));
        assert!(p.row_keys.is_empty());
        assert!(p.col_keys.is_empty());
        assert!(p.values.is_empty());

        let s = summary(&empty);
        assert_eq!(s.total_vacancies, 0);
        assert_eq!(s.distinct_hospitals, 0);
        assert_eq!(s.distinct_municipalities, 0);
        assert_eq!(s.distinct_roles, 0);
        assert_eq!(s.mean_per_municipality, None);
        assert_eq!(s.median_per_municipality, None);
        assert_eq!(s.min_vacancies, None);
        assert_eq!(s.max_vacancies, None);
        assert!(s.top_municipalities.is_empty());
        assert!(s.top_roles.is_empty());
    }
}
