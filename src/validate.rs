//! Schema and constraint validation for imported tables.
//!
//! The checks mirror what the upload path promises users: the five required
//! columns must be present (extra columns are tolerated), the table must have
//! data, and `Vagas` must hold only non-negative whole numbers. [`validate`] is a
//! pure check; [`to_vacancy_table`] validates and converts in one step. On any
//! rejection the caller falls back to the synthetic dataset instead of halting.

use crate::error::ValidationError;
use crate::types::{columns, RawCell, RawTable, VacancyRecord, VacancyTable};

/// Verify that `table` conforms to the dashboard schema.
///
/// Returns the first problem found; the error's `Display` string is the
/// user-facing reason.
pub fn validate(table: &RawTable) -> Result<(), ValidationError> {
    for column in columns::EXPECTED {
        if table.column_index(column).is_none() {
            return Err(ValidationError::MissingColumn {
                column: column.to_string(),
                found: table.headers.clone(),
            });
        }
    }

    if table.rows.is_empty() {
        return Err(ValidationError::Empty);
    }

    let Some(vacancies_idx) = table.column_index(columns::VACANCIES) else {
        // Checked above; kept as a guard rather than an unwrap.
        return Err(ValidationError::MissingColumn {
            column: columns::VACANCIES.to_string(),
            found: table.headers.clone(),
        });
    };

    for (row0, row) in table.rows.iter().enumerate() {
        let cell = row.get(vacancies_idx).unwrap_or(&RawCell::Empty);
        match cell.as_integer() {
            Some(n) if n < 0 => {
                return Err(ValidationError::Negative {
                    column: columns::VACANCIES.to_string(),
                    row: row0 + 1,
                });
            }
            Some(n) if u32::try_from(n).is_err() => {
                return Err(ValidationError::NonNumeric {
                    column: columns::VACANCIES.to_string(),
                    row: row0 + 1,
                });
            }
            Some(_) => {}
            None => {
                return Err(ValidationError::NonNumeric {
                    column: columns::VACANCIES.to_string(),
                    row: row0 + 1,
                });
            }
        }
    }

    Ok(())
}

/// Validate `table` and convert it into a typed [`VacancyTable`].
pub fn to_vacancy_table(table: &RawTable) -> Result<VacancyTable, ValidationError> {
    validate(table)?;

    let idx_of = |name: &str| {
        // Presence was established by validate().
        table
            .column_index(name)
            .unwrap_or_else(|| unreachable!("validated column '{name}' missing"))
    };
    let municipality = idx_of(columns::MUNICIPALITY);
    let health_region = idx_of(columns::HEALTH_REGION);
    let hospital = idx_of(columns::HOSPITAL);
    let role = idx_of(columns::ROLE);
    let vacancies = idx_of(columns::VACANCIES);

    let text_at = |row: &[RawCell], idx: usize| {
        row.get(idx).unwrap_or(&RawCell::Empty).to_text()
    };

    let records = table
        .rows
        .iter()
        .map(|row| {
            let count = row
                .get(vacancies)
                .and_then(RawCell::as_integer)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or_else(|| unreachable!("validated vacancy cell not a count"));
            VacancyRecord::new(
                text_at(row, municipality),
                text_at(row, health_region),
                text_at(row, hospital),
                text_at(row, role),
                count,
            )
        })
        .collect();

    Ok(VacancyTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::{to_vacancy_table, validate};
    use crate::error::ValidationError;
    use crate::types::{columns, RawCell, RawTable};

    fn cell(s: &str) -> RawCell {
        RawCell::Text(s.to_string())
    }

    fn good_table() -> RawTable {
        RawTable::new(
            columns::EXPECTED.iter().map(|s| s.to_string()).collect(),
            vec![
                vec![
                    cell("Palmas"),
                    cell("Capim Dourado"),
                    cell("Hospital Geral de Palmas"),
                    cell("Médico"),
                    RawCell::Number(10.0),
                ],
                vec![
                    cell("Araguaína"),
                    cell("Médio Norte Araguaia"),
                    cell("Hospital Regional de Araguaína"),
                    cell("Enfermeiro"),
                    RawCell::Number(15.0),
                ],
            ],
        )
    }

    #[test]
    fn accepts_a_conforming_table() {
        assert_eq!(validate(&good_table()), Ok(()));
    }

    #[test]
    fn rejects_missing_column_naming_it() {
        let mut table = good_table();
        table.headers.remove(4);
        for row in &mut table.rows {
            row.remove(4);
        }

        let err = validate(&table).unwrap_err();
        assert!(matches!(err, ValidationError::MissingColumn { .. }));
        assert!(err.to_string().contains("Vagas"));
    }

    #[test]
    fn tolerates_extra_columns() {
        let mut table = good_table();
        table.headers.push("Observação".to_string());
        for row in &mut table.rows {
            row.push(cell("ok"));
        }
        assert_eq!(validate(&table), Ok(()));
    }

    #[test]
    fn rejects_empty_table() {
        let mut table = good_table();
        table.rows.clear();
        assert_eq!(validate(&table), Err(ValidationError::Empty));
    }

    #[test]
    fn rejects_non_numeric_vacancies() {
        let mut table = good_table();
        table.rows[1][4] = cell("muitas");
        let err = validate(&table).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumeric {
                column: "Vagas".to_string(),
                row: 2,
            }
        );
        assert!(err.to_string().contains("Vagas"));
    }

    #[test]
    fn rejects_fractional_vacancies() {
        let mut table = good_table();
        table.rows[0][4] = RawCell::Number(1.5);
        assert!(matches!(
            validate(&table),
            Err(ValidationError::NonNumeric { row: 1, .. })
        ));
    }

    #[test]
    fn rejects_negative_vacancies() {
        let mut table = good_table();
        table.rows[0][4] = RawCell::Number(-2.0);
        assert_eq!(
            validate(&table),
            Err(ValidationError::Negative {
                column: "Vagas".to_string(),
                row: 1,
            })
        );
    }

    #[test]
    fn conversion_reads_columns_by_name_not_position() {
        // Shuffle the column order; conversion must still land fields correctly.
        let table = RawTable::new(
            vec![
                columns::VACANCIES.to_string(),
                columns::ROLE.to_string(),
                columns::MUNICIPALITY.to_string(),
                columns::HEALTH_REGION.to_string(),
                columns::HOSPITAL.to_string(),
            ],
            vec![vec![
                RawCell::Number(7.0),
                cell("Médico"),
                cell("Palmas"),
                cell("Capim Dourado"),
                cell("HGP"),
            ]],
        );

        let out = to_vacancy_table(&table).unwrap();
        assert_eq!(out.len(), 1);
        let r = &out.records[0];
        assert_eq!(r.municipality, "Palmas");
        assert_eq!(r.health_region, "Capim Dourado");
        assert_eq!(r.hospital, "HGP");
        assert_eq!(r.role, "Médico");
        assert_eq!(r.vacancies, 7);
    }

    #[test]
    fn conversion_keeps_zero_counts() {
        let mut table = good_table();
        table.rows[0][4] = RawCell::Number(0.0);
        let out = to_vacancy_table(&table).unwrap();
        assert_eq!(out.records[0].vacancies, 0);
    }
}
