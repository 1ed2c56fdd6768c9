//! CSV export of the filtered subset.
//!
//! Output uses the same column names as accepted uploads (diacritics included),
//! UTF-8, comma-delimited, header row first — a round-trippable file.

use std::io::Write;

use crate::error::LoadResult;
use crate::types::{columns, VacancyTable};

/// Write `table` as CSV to `writer`.
pub fn write_csv<W: Write>(table: &VacancyTable, writer: W) -> LoadResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(columns::EXPECTED)?;
    for r in &table.records {
        let vacancies = r.vacancies.to_string();
        out.write_record([
            r.municipality.as_str(),
            r.health_region.as_str(),
            r.hospital.as_str(),
            r.role.as_str(),
            vacancies.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Render `table` as CSV bytes, ready for a download button.
pub fn to_csv_bytes(table: &VacancyTable) -> LoadResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::to_csv_bytes;
    use crate::types::{VacancyRecord, VacancyTable};

    #[test]
    fn header_row_uses_the_exact_column_contract() {
        let bytes = to_csv_bytes(&VacancyTable::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "Município,Região de Saúde,Hospital,Cargo,Vagas"
        );
    }

    #[test]
    fn rows_follow_in_table_order() {
        let table = VacancyTable::new(vec![
            VacancyRecord::new("Palmas", "Capim Dourado", "HGP", "Médico", 10),
            VacancyRecord::new("Gurupi", "Ilha do Bananal", "HRG", "Enfermeiro", 4),
        ]);
        let text = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Palmas,Capim Dourado,HGP,Médico,10");
        assert_eq!(lines[2], "Gurupi,Ilha do Bananal,HRG,Enfermeiro,4");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let table = VacancyTable::new(vec![VacancyRecord::new(
            "Palmas",
            "Capim Dourado",
            "Hospital Geral de Palmas (HGP), ala pediátrica",
            "Médico",
            1,
        )]);
        let text = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();
        assert!(text.contains("\"Hospital Geral de Palmas (HGP), ala pediátrica\""));
    }
}
