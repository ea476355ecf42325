use crate::i18n::Locale;
use serde::{Deserialize, Serialize};

/// Thresholds and limits applied by an eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub name: String,
    pub version: String,
    /// Boundaries larger than this are rejected before analysis.
    pub max_boundary_area_ha: f64,
    /// Deforestation at or below this is treated as geometry noise.
    #[serde(default = "default_deforestation_min_ha")]
    pub deforestation_min_ha: f64,
    /// Wetlands above this share of the boundary are reported as the cause.
    #[serde(default = "default_wetlands_max_ratio")]
    pub wetlands_max_ratio: f64,
    /// Forest below this share of the boundary is reported as the cause.
    #[serde(default = "default_forest_min_ratio")]
    pub forest_min_ratio: f64,
    #[serde(default = "default_analysis_timeout_secs")]
    pub analysis_timeout_secs: u64,
    #[serde(default)]
    pub default_locale: Locale,
}

fn default_deforestation_min_ha() -> f64 {
    0.01
}

fn default_wetlands_max_ratio() -> f64 {
    0.8
}

fn default_forest_min_ratio() -> f64 {
    0.1
}

fn default_analysis_timeout_secs() -> u64 {
    120
}
