use crate::format::{format_area_inline, format_area_report, format_report_year};
use crate::i18n::Locale;
use crate::model::EligibilityDerivedResult;
use serde::Serialize;
use std::fmt::Write;

/// One label/value line of the on-screen summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

/// Summary rows shown next to the map after a check.
///
/// Missing values render as `0.00 ha` here, unlike the report.
pub fn summary_rows(result: &EligibilityDerivedResult, locale: Locale) -> Vec<SummaryRow> {
    let labels = locale.labels();
    [
        (labels.boundary_area, result.total_uploaded_area_ha),
        (labels.deforestation, result.deforestation_area_ha),
        (labels.forest, result.forest_area_ha),
        (labels.wetlands, result.wetlands_area_ha),
        (labels.eligible_area, result.eligible_area_ha),
    ]
    .into_iter()
    .map(|(label, value)| SummaryRow {
        label: label.to_string(),
        value: format_area_inline(Some(value), locale),
    })
    .collect()
}

/// Downloadable eligibility report for one farm.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityReport {
    pub title: String,
    pub farm_name: String,
    pub rows: Vec<SummaryRow>,
    pub deforestation_years: Vec<i32>,
    pub message: String,
    pub disclaimer: String,
}

impl EligibilityReport {
    pub fn build(farm_name: &str, result: &EligibilityDerivedResult, locale: Locale) -> Self {
        let labels = locale.labels();
        let rows = [
            (labels.boundary_area, result.total_uploaded_area_ha),
            (labels.deforestation, result.deforestation_area_ha),
            (labels.forest, result.forest_area_ha),
            (labels.wetlands, result.wetlands_area_ha),
            (labels.eligible_area, result.eligible_area_ha),
        ]
        .into_iter()
        .map(|(label, value)| SummaryRow {
            label: label.to_string(),
            value: format_area_report(Some(value), locale),
        })
        .collect();

        Self {
            title: labels.report_title.to_string(),
            farm_name: farm_name.to_string(),
            rows,
            deforestation_years: result
                .deforestation_years
                .iter()
                .map(|y| format_report_year(*y))
                .collect(),
            message: result.message.clone(),
            disclaimer: format!("* {}", labels.disclaimer),
        }
    }

    /// Plain-text rendering, one section per block.
    pub fn render_text(&self, locale: Locale) -> String {
        let labels = locale.labels();
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        let _ = writeln!(out, "{}: {}", labels.farm, self.farm_name);
        let _ = writeln!(out);

        let width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);
        for (i, row) in self.rows.iter().enumerate() {
            let marker = if i + 1 == self.rows.len() { " *" } else { "" };
            let _ = writeln!(out, "  {:<width$}  {}{}", row.label, row.value, marker);
        }
        let _ = writeln!(out);

        let years = if self.deforestation_years.is_empty() {
            labels.none.to_string()
        } else {
            self.deforestation_years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "{}: {}", labels.deforestation_years, years);
        let _ = writeln!(out);

        let _ = writeln!(out, "{}:", labels.result);
        for line in self.message.lines() {
            let _ = writeln!(out, "  {line}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.disclaimer);

        out
    }
}
