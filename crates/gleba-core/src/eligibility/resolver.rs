use crate::error::GlebaError;
use crate::geometry;
use crate::model::{
    CategoryAreaResult, CategoryKey, DiagnosticKind, FeatureDiagnostic, Field, GeographicFeature,
};
use std::collections::BTreeSet;

/// Sum the area of every feature whose name contains the category key.
///
/// Best effort: a feature that cannot be measured contributes zero and leaves
/// a diagnostic behind, it never aborts the scan.
pub fn resolve_category_area(
    features: &[GeographicFeature],
    category: CategoryKey,
) -> CategoryAreaResult {
    let key = category.key();
    let mut total = 0.0;
    let mut years = BTreeSet::new();
    let mut diagnostics = Vec::new();

    for feature in features.iter().filter(|f| f.matches_key(key)) {
        total += feature_area(feature, category, &mut diagnostics);

        if category == CategoryKey::Deforestation {
            match &feature.year {
                Field::Valid(year) => {
                    years.insert(normalize_year(*year));
                }
                Field::Invalid(reason) => {
                    diagnostics.push(diagnostic(
                        feature,
                        category,
                        DiagnosticKind::InvalidYear,
                        reason.clone(),
                    ));
                }
                Field::Absent => {}
            }
        }
    }

    for d in &diagnostics {
        tracing::warn!(
            category = %d.category,
            feature = d.feature_index,
            name = d.feature_name.as_deref().unwrap_or(""),
            "{}",
            d.message
        );
    }
    tracing::debug!(category = %category, area_ha = total, "resolved category area");

    CategoryAreaResult {
        area_ha: total,
        years: years.into_iter().collect(),
        diagnostics,
    }
}

/// Same as [`resolve_category_area`], addressed by the wire key.
pub fn resolve_category_area_by_key(
    features: &[GeographicFeature],
    key: &str,
) -> Result<CategoryAreaResult, GlebaError> {
    let category =
        CategoryKey::from_key(key).ok_or_else(|| GlebaError::UnknownCategory(key.to_string()))?;
    Ok(resolve_category_area(features, category))
}

/// Two-digit deforestation years are always in the 2000s.
pub fn normalize_year(year: i32) -> i32 {
    if year < 100 {
        year + 2000
    } else {
        year
    }
}

/// Area contribution of one matching feature, in hectares.
fn feature_area(
    feature: &GeographicFeature,
    category: CategoryKey,
    diagnostics: &mut Vec<FeatureDiagnostic>,
) -> f64 {
    if let Field::Valid(area) = feature.area_ha {
        return area;
    }

    match &feature.geometry {
        Field::Valid(geom) => {
            let area = geometry::area_ha(geom);
            if area.is_finite() && area > 0.0 {
                area
            } else {
                diagnostics.push(diagnostic(
                    feature,
                    category,
                    DiagnosticKind::NonPositiveGeometryArea,
                    format!("computed geometry area {area} ha is not positive, counting 0"),
                ));
                0.0
            }
        }
        Field::Invalid(reason) => {
            diagnostics.push(diagnostic(
                feature,
                category,
                DiagnosticKind::InvalidGeometry,
                format!("{reason}, counting 0"),
            ));
            0.0
        }
        Field::Absent => {
            let (kind, message) = match &feature.area_ha {
                Field::Invalid(reason) => (
                    DiagnosticKind::InvalidArea,
                    format!("{reason} and no geometry to fall back on, counting 0"),
                ),
                _ => (
                    DiagnosticKind::MissingAreaAndGeometry,
                    "no area_ha and no geometry, counting 0".to_string(),
                ),
            };
            diagnostics.push(diagnostic(feature, category, kind, message));
            0.0
        }
    }
}

fn diagnostic(
    feature: &GeographicFeature,
    category: CategoryKey,
    kind: DiagnosticKind,
    message: String,
) -> FeatureDiagnostic {
    FeatureDiagnostic {
        feature_index: feature.index,
        feature_name: feature.name.clone(),
        category,
        kind,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tests::{band_area_ha, lonlat_box};
    use approx::assert_relative_eq;
    use geo::{polygon, Geometry};

    fn feature(name: &str) -> GeographicFeature {
        GeographicFeature {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    fn with_area(name: &str, area: f64) -> GeographicFeature {
        GeographicFeature {
            area_ha: Field::Valid(area),
            ..feature(name)
        }
    }

    fn with_year(name: &str, area: f64, year: Field<i32>) -> GeographicFeature {
        GeographicFeature {
            year,
            ..with_area(name, area)
        }
    }

    #[test]
    fn test_area_property_sums_and_ignores_geometry() {
        let mut f1 = with_area("forestUnion", 10.0);
        f1.geometry = Field::Valid(Geometry::Polygon(lonlat_box(0.0, 0.0, 1.0, 1.0)));
        let f2 = with_area("forestunion_b", 2.5);
        let result = resolve_category_area(&[f1, f2], CategoryKey::Forest);
        assert_eq!(result.area_ha, 12.5);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_geometry_fallback_in_hectares() {
        let mut f = feature("wetlandsUnion");
        f.geometry = Field::Valid(Geometry::Polygon(lonlat_box(0.0, 0.0, 0.01, 0.01)));
        let result = resolve_category_area(&[f], CategoryKey::Wetlands);
        assert_relative_eq!(
            result.area_ha,
            band_area_ha(0.0, 0.0, 0.01, 0.01),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_invalid_area_falls_back_to_geometry() {
        let mut f = feature("wetlandsUnion");
        f.area_ha = Field::Invalid("area_ha -1 is negative".into());
        f.geometry = Field::Valid(Geometry::Polygon(lonlat_box(0.0, 0.0, 0.01, 0.01)));
        let result = resolve_category_area(&[f], CategoryKey::Wetlands);
        assert!(result.area_ha > 100.0);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_degenerate_geometry_contributes_zero() {
        let mut f = feature("eligibleAreaFeature");
        f.geometry = Field::Valid(Geometry::Polygon(polygon![
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 1.0),
        ]));
        let result = resolve_category_area(
            &[f, with_area("eligibleAreaFeature", 3.0)],
            CategoryKey::EligibleArea,
        );
        assert_eq!(result.area_ha, 3.0);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].kind,
            DiagnosticKind::NonPositiveGeometryArea
        );
    }

    #[test]
    fn test_missing_area_and_geometry_contributes_zero() {
        let result = resolve_category_area(&[feature("forestUnion")], CategoryKey::Forest);
        assert_eq!(result.area_ha, 0.0);
        assert_eq!(
            result.diagnostics[0].kind,
            DiagnosticKind::MissingAreaAndGeometry
        );
    }

    #[test]
    fn test_invalid_geometry_reported() {
        let mut f = feature("forestUnion");
        f.geometry = Field::Invalid("malformed geometry".into());
        let result = resolve_category_area(&[f], CategoryKey::Forest);
        assert_eq!(result.area_ha, 0.0);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::InvalidGeometry);
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let result = resolve_category_area(
            &[with_area("Deforestedareas_2020", 1.5), with_area("forestUnion", 9.0)],
            CategoryKey::Deforestation,
        );
        assert_eq!(result.area_ha, 1.5);
    }

    #[test]
    fn test_unnamed_features_skipped() {
        let unnamed = GeographicFeature {
            area_ha: Field::Valid(50.0),
            ..Default::default()
        };
        let result = resolve_category_area(&[unnamed], CategoryKey::Forest);
        assert_eq!(result.area_ha, 0.0);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_deforestation_years_normalized_sorted_distinct() {
        let features = vec![
            with_year("deforestedAreas", 1.0, Field::Valid(19)),
            with_year("deforestedAreas", 1.0, Field::Valid(2015)),
            with_year("deforestedAreas", 1.0, Field::Valid(2019)),
            with_year(
                "deforestedAreas",
                1.0,
                Field::Invalid("year 'abc' is not an integer".into()),
            ),
            with_year("deforestedAreas", 1.0, Field::Absent),
        ];
        let result = resolve_category_area(&features, CategoryKey::Deforestation);
        assert_eq!(result.years, vec![2015, 2019]);
        assert_eq!(result.area_ha, 5.0);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::InvalidYear);
    }

    #[test]
    fn test_years_ignored_outside_deforestation() {
        let result = resolve_category_area(
            &[with_year("forestUnion", 1.0, Field::Valid(2020))],
            CategoryKey::Forest,
        );
        assert!(result.years.is_empty());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut f = feature("wetlandsUnion");
        f.geometry = Field::Valid(Geometry::Polygon(lonlat_box(-47.0, -15.0, -46.98, -14.98)));
        let features = vec![f, with_area("wetlandsUnion", 4.0)];
        let first = resolve_category_area(&features, CategoryKey::Wetlands);
        let second = resolve_category_area(&features, CategoryKey::Wetlands);
        assert_eq!(first, second);
    }

    #[test]
    fn test_by_key_unknown_category() {
        assert!(matches!(
            resolve_category_area_by_key(&[], "pasture"),
            Err(GlebaError::UnknownCategory(_))
        ));
        assert!(resolve_category_area_by_key(&[], "ForestUnion").is_ok());
    }

    #[test]
    fn test_normalize_year() {
        assert_eq!(normalize_year(19), 2019);
        assert_eq!(normalize_year(99), 2099);
        assert_eq!(normalize_year(2001), 2001);
    }
}
