use serde::{Deserialize, Serialize};
use std::fmt;

/// A value read from a loosely-typed feature property.
///
/// The parse step decides once whether a property is usable; the resolver
/// only ever matches on the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Absent,
    Valid(T),
    Invalid(String),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

/// One classified shape returned by the external analysis.
#[derive(Debug, Clone, Default)]
pub struct GeographicFeature {
    /// Position in the source collection.
    pub index: usize,
    pub name: Option<String>,
    pub geometry: Field<geo::Geometry<f64>>,
    /// Precomputed area in hectares, valid only when `>= 0`.
    pub area_ha: Field<f64>,
    /// Raw year as reported upstream (not yet normalized).
    pub year: Field<i32>,
}

impl GeographicFeature {
    /// Case-insensitive substring match of the feature name against `key`.
    pub fn matches_key(&self, key: &str) -> bool {
        match self.name.as_deref() {
            Some(name) => name.to_lowercase().contains(&key.to_lowercase()),
            None => false,
        }
    }
}

/// Typed view of the analysis response.
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    /// `None` when the response carried no `features` array at all.
    pub features: Option<Vec<GeographicFeature>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Deforestation,
    Forest,
    Wetlands,
    EligibleArea,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Deforestation,
        CategoryKey::Forest,
        CategoryKey::Wetlands,
        CategoryKey::EligibleArea,
    ];

    /// The substring used to recognise features of this category.
    pub fn key(&self) -> &'static str {
        match self {
            CategoryKey::Deforestation => "deforestedareas",
            CategoryKey::Forest => "forestunion",
            CategoryKey::Wetlands => "wetlandsunion",
            CategoryKey::EligibleArea => "eligibleareafeature",
        }
    }

    pub fn from_key(s: &str) -> Option<CategoryKey> {
        let lower = s.trim().to_lowercase();
        CategoryKey::ALL.into_iter().find(|c| c.key() == lower)
    }

    /// Number of features whose name falls in this category.
    pub fn count_matches(self, features: &[GeographicFeature]) -> usize {
        features.iter().filter(|f| f.matches_key(self.key())).count()
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingAreaAndGeometry,
    InvalidGeometry,
    InvalidArea,
    NonPositiveGeometryArea,
    InvalidYear,
}

/// A data-quality problem found while aggregating one feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDiagnostic {
    pub feature_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
    pub category: CategoryKey,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Summed area of one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAreaResult {
    pub area_ha: f64,
    /// Ascending, distinct. Only filled for deforestation.
    pub years: Vec<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<FeatureDiagnostic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibilityCause {
    Deforestation,
    HighWetlands,
    LowForest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EligibilityOutcome {
    Eligible,
    Ineligible {
        #[serde(skip_serializing_if = "Option::is_none")]
        cause: Option<IneligibilityCause>,
    },
    Incomplete,
}

/// Result of interpreting one analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityDerivedResult {
    pub message: String,
    pub total_uploaded_area_ha: f64,
    pub deforestation_area_ha: f64,
    pub forest_area_ha: f64,
    pub wetlands_area_ha: f64,
    pub eligible_area_ha: f64,
    pub deforestation_years: Vec<i32>,
    pub outcome: EligibilityOutcome,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<FeatureDiagnostic>,
}

impl EligibilityDerivedResult {
    pub fn is_eligible(&self) -> bool {
        matches!(self.outcome, EligibilityOutcome::Eligible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: Option<&str>) -> GeographicFeature {
        GeographicFeature {
            name: name.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_key_case_insensitive_substring() {
        assert!(named(Some("Deforestedareas_2020")).matches_key("deforestedareas"));
        assert!(named(Some("forestUnion")).matches_key("FORESTUNION"));
        assert!(!named(Some("forest")).matches_key("forestunion"));
    }

    #[test]
    fn test_unnamed_feature_never_matches() {
        assert!(!named(None).matches_key("forestunion"));
    }

    #[test]
    fn test_category_from_key() {
        assert_eq!(
            CategoryKey::from_key(" WetlandsUnion "),
            Some(CategoryKey::Wetlands)
        );
        assert_eq!(CategoryKey::from_key("pasture"), None);
    }

    #[test]
    fn test_count_matches_uses_trimmed_key() {
        let features = vec![
            named(Some("forestUnion")),
            named(Some("ForestUnion_2")),
            named(Some("wetlandsUnion")),
            named(None),
        ];
        let category = CategoryKey::from_key(" forestunion ").unwrap();
        assert_eq!(category.count_matches(&features), 2);
        assert_eq!(CategoryKey::Deforestation.count_matches(&features), 0);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(EligibilityOutcome::Ineligible {
            cause: Some(IneligibilityCause::HighWetlands),
        })
        .unwrap();
        assert_eq!(json["status"], "ineligible");
        assert_eq!(json["cause"], "high_wetlands");
    }
}
