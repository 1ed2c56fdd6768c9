//! Synthetic dataset provider.
//!
//! Builds the prototype dataset for the state health network: 15 municipalities
//! across the 8 official health regions (PDR 2014), their 17 state hospitals, and
//! the role list from Lei 2.670/2012. Vacancy counts are *derived*, not drawn: each
//! (hospital, role) pair hashes to a count inside the range its role class allows,
//! so the table is identical on every call within a session without any seed
//! plumbing. The built table is cached process-wide; see [`synthetic_table`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::types::{VacancyRecord, VacancyTable};

/// Municipality → health region, in generation order.
const MUNICIPALITY_REGION: [(&str, &str); 15] = [
    ("Palmas", "Capim Dourado"),
    ("Araguaína", "Médio Norte Araguaia"),
    ("Gurupi", "Ilha do Bananal"),
    ("Porto Nacional", "Amor Perfeito"),
    ("Paraíso do Tocantins", "Cantão"),
    ("Arraias", "Sudeste"),
    ("Pedro Afonso", "Cerrado Tocantins Araguaia"),
    ("Guaraí", "Médio Norte Araguaia"),
    ("Dianópolis", "Sudeste"),
    ("Alvorada", "Ilha do Bananal"),
    ("Miracema do Tocantins", "Capim Dourado"),
    ("Xambioá", "Médio Norte Araguaia"),
    ("Arapoema", "Cerrado Tocantins Araguaia"),
    ("Araguaçu", "Ilha do Bananal"),
    ("Augustinópolis", "Bico do Papagaio"),
];

/// State hospital units (17), keyed by municipality.
const HOSPITALS: [(&str, &str); 17] = [
    ("Palmas", "Hospital Geral de Palmas (HGP) - com ala pediátrica"),
    ("Palmas", "Hospital e Maternidade Dona Regina"),
    ("Araguaína", "Hospital Regional de Araguaína"),
    ("Araguaína", "Hospital Materno Infantil Tia Dedé"),
    ("Gurupi", "Hospital Regional de Gurupi"),
    ("Porto Nacional", "Hospital Regional de Porto Nacional"),
    ("Paraíso do Tocantins", "Hospital Regional de Paraíso do Tocantins"),
    ("Arraias", "Hospital Regional de Arraias"),
    ("Pedro Afonso", "Hospital Regional de Pedro Afonso"),
    ("Guaraí", "Hospital Regional de Guaraí"),
    ("Dianópolis", "Hospital Regional de Dianópolis"),
    ("Alvorada", "Hospital Regional de Alvorada"),
    ("Miracema do Tocantins", "Hospital Regional de Miracema"),
    ("Xambioá", "Hospital Regional de Xambioá"),
    ("Arapoema", "Hospital e Maternidade Irmã Rita"),
    ("Araguaçu", "Hospital Regional de Araguaçu"),
    ("Augustinópolis", "Hospital Regional de Augustinópolis"),
];

/// Roles from Lei 2.670/2012.
const ROLES: [&str; 33] = [
    "Analista em Controle de Zoonoses",
    "Assistente Social",
    "Biólogo em Saúde",
    "Biomédico",
    "Enfermeiro",
    "Farmacêutico",
    "Farmacêutico-Bioquímico",
    "Fonoaudiólogo",
    "Nutricionista",
    "Psicólogo",
    "Tecnólogo",
    "Cirurgião-Dentista",
    "Médico",
    "Fisioterapeuta",
    "Terapeuta Ocupacional",
    "Administrador Hospitalar",
    "Auditor em Saúde",
    "Engenheiro Clínico",
    "Executivo em Saúde",
    "Inspetor em Vigilância Sanitária",
    "Pesquisador Docente em Saúde Pública",
    "Gestor em Saúde",
    "Físico",
    "Instrumentador Cirúrgico",
    "Técnico em Imobilização Ortopédica",
    "Técnico de Saúde Bucal",
    "Técnico em Enfermagem",
    "Técnico em Laboratório",
    "Técnico em Radiologia",
    "Assistente de Serviços de Saúde",
    "Auxiliar de Serviços de Saúde",
    "Auxiliar de Enfermagem",
    "Auxiliar de Laboratório",
];

const HIGH_DEMAND: [&str; 3] = ["Médico", "Enfermeiro", "Técnico em Enfermagem"];
const AUXILIARY: [&str; 2] = ["Auxiliar de Enfermagem", "Auxiliar de Laboratório"];
const MANAGEMENT: [&str; 3] = [
    "Gestor em Saúde",
    "Executivo em Saúde",
    "Pesquisador Docente em Saúde Pública",
];

fn vacancy_cap(municipality: &str) -> u32 {
    match municipality {
        "Palmas" | "Araguaína" | "Gurupi" => 25,
        "Porto Nacional" | "Paraíso do Tocantins" | "Augustinópolis" => 15,
        _ => 10,
    }
}

fn region_of(municipality: &str) -> &'static str {
    MUNICIPALITY_REGION
        .iter()
        .find(|(m, _)| *m == municipality)
        .map(|(_, r)| *r)
        .unwrap_or_else(|| unreachable!("fixture municipality '{municipality}' has no region"))
}

/// Deterministic stand-in for a random draw: hash (hospital, role) into
/// `lo..=hi`. Same inputs, same count, on every call.
fn derived_count(hospital: &str, role: &str, lo: u32, hi: u32) -> u32 {
    let mut hasher = DefaultHasher::new();
    hospital.hash(&mut hasher);
    role.hash(&mut hasher);
    let span = u64::from(hi - lo + 1);
    lo + (hasher.finish() % span) as u32
}

fn count_for(hospital: &str, role: &str, cap: u32) -> u32 {
    if HIGH_DEMAND.contains(&role) {
        derived_count(hospital, role, 2, cap)
    } else if AUXILIARY.contains(&role) {
        derived_count(hospital, role, 0, 3)
    } else if MANAGEMENT.contains(&role) {
        derived_count(hospital, role, 0, 2)
    } else {
        derived_count(hospital, role, 0, cap / 2)
    }
}

/// Build the synthetic table from scratch.
///
/// Zero-count (hospital, role) pairs are omitted, as the prototype data was.
/// Prefer [`synthetic_table`], which builds once and reuses the result.
pub fn generate() -> VacancyTable {
    let mut records = Vec::new();
    for (municipality, hospital) in HOSPITALS {
        let region = region_of(municipality);
        let cap = vacancy_cap(municipality);
        for role in ROLES {
            let vacancies = count_for(hospital, role, cap);
            if vacancies > 0 {
                records.push(VacancyRecord::new(
                    municipality,
                    region,
                    hospital,
                    role,
                    vacancies,
                ));
            }
        }
    }
    VacancyTable::new(records)
}

/// The cached synthetic dataset.
///
/// Built on first use and shared for the rest of the process, so filter changes
/// within a session always see the same data.
pub fn synthetic_table() -> &'static VacancyTable {
    static TABLE: OnceLock<VacancyTable> = OnceLock::new();
    TABLE.get_or_init(generate)
}
