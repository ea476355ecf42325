//! Built-in message catalog for eligibility results and reports.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "es")]
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::PtBr, Locale::Es];

    pub fn from_tag(tag: &str) -> Option<Locale> {
        match tag.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            "pt" | "pt-br" => Some(Locale::PtBr),
            "es" | "es-es" | "es-419" => Some(Locale::Es),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
            Locale::Es => "es",
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Locale::En => ',',
            Locale::PtBr | Locale::Es => '.',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::En => '.',
            Locale::PtBr | Locale::Es => ',',
        }
    }

    /// Integer digits required before grouping kicks in.
    ///
    /// Spanish leaves four-digit numbers ungrouped (`1234,50`).
    pub fn min_grouping_digits(&self) -> usize {
        match self {
            Locale::Es => 5,
            _ => 4,
        }
    }

    pub fn eligible(&self, area: &str) -> String {
        match self {
            Locale::En => format!("Eligibility check complete: {area} of the farm is eligible."),
            Locale::PtBr => format!("Verificação concluída: {area} da fazenda são elegíveis."),
            Locale::Es => format!("Verificación completa: {area} de la finca son elegibles."),
        }
    }

    pub fn no_eligible_area(&self) -> &'static str {
        match self {
            Locale::En => "No eligible area found.",
            Locale::PtBr => "Nenhuma área elegível encontrada.",
            Locale::Es => "No se encontró área elegible.",
        }
    }

    pub fn cause_deforestation(&self, area: &str) -> String {
        match self {
            Locale::En => {
                format!("Likely cause: {area} of deforestation detected within the farm boundary.")
            }
            Locale::PtBr => format!(
                "Causa provável: {area} de desmatamento detectados dentro do limite da fazenda."
            ),
            Locale::Es => format!(
                "Causa probable: {area} de deforestación detectados dentro del límite de la finca."
            ),
        }
    }

    pub fn cause_high_wetlands(&self, percent: u32) -> String {
        match self {
            Locale::En => format!("Likely cause: wetlands cover more than {percent}% of the farm."),
            Locale::PtBr => {
                format!("Causa provável: áreas úmidas cobrem mais de {percent}% da fazenda.")
            }
            Locale::Es => {
                format!("Causa probable: los humedales cubren más del {percent}% de la finca.")
            }
        }
    }

    pub fn cause_low_forest(&self, percent: u32) -> String {
        match self {
            Locale::En => {
                format!("Likely cause: forest coverage is below {percent}% of the farm.")
            }
            Locale::PtBr => {
                format!("Causa provável: cobertura florestal inferior a {percent}% da fazenda.")
            }
            Locale::Es => {
                format!("Causa probable: cobertura forestal inferior al {percent}% de la finca.")
            }
        }
    }

    pub fn analysis_incomplete(&self) -> &'static str {
        match self {
            Locale::En => "Analysis incomplete: area data is missing.",
            Locale::PtBr => "Análise incompleta: dados de área ausentes.",
            Locale::Es => "Análisis incompleto: faltan datos de área.",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN_LABELS,
            Locale::PtBr => &PT_BR_LABELS,
            Locale::Es => &ES_LABELS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fixed labels used by the summary and the report.
#[derive(Debug)]
pub struct Labels {
    pub report_title: &'static str,
    pub farm: &'static str,
    pub boundary_area: &'static str,
    pub deforestation: &'static str,
    pub forest: &'static str,
    pub wetlands: &'static str,
    pub eligible_area: &'static str,
    pub deforestation_years: &'static str,
    pub none: &'static str,
    pub result: &'static str,
    pub disclaimer: &'static str,
}

static EN_LABELS: Labels = Labels {
    report_title: "Eligibility report",
    farm: "Farm",
    boundary_area: "Boundary area",
    deforestation: "Deforestation",
    forest: "Forest",
    wetlands: "Wetlands",
    eligible_area: "Eligible area",
    deforestation_years: "Deforestation years",
    none: "None",
    result: "Result",
    disclaimer: "The eligible area is an estimate from remote analysis and is subject to field verification.",
};

static PT_BR_LABELS: Labels = Labels {
    report_title: "Relatório de elegibilidade",
    farm: "Fazenda",
    boundary_area: "Área do limite",
    deforestation: "Desmatamento",
    forest: "Floresta",
    wetlands: "Áreas úmidas",
    eligible_area: "Área elegível",
    deforestation_years: "Anos de desmatamento",
    none: "Nenhum",
    result: "Resultado",
    disclaimer: "A área elegível é uma estimativa obtida por análise remota e está sujeita a verificação em campo.",
};

static ES_LABELS: Labels = Labels {
    report_title: "Informe de elegibilidad",
    farm: "Finca",
    boundary_area: "Área del límite",
    deforestation: "Deforestación",
    forest: "Bosque",
    wetlands: "Humedales",
    eligible_area: "Área elegible",
    deforestation_years: "Años de deforestación",
    none: "Ninguno",
    result: "Resultado",
    disclaimer: "El área elegible es una estimación obtenida por análisis remoto y está sujeta a verificación en campo.",
};
