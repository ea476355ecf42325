pub mod check;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod format;
pub mod geometry;
pub mod i18n;
pub mod model;
pub mod parsing;
pub mod report;
pub mod session;

use config::schema::EligibilityConfig;
use eligibility::interpret_eligibility;
use error::GlebaError;
use i18n::Locale;
use model::EligibilityDerivedResult;

/// Main API entry point: interpret a raw analysis response.
///
/// Parses the GeoJSON body and runs the eligibility interpreter against the
/// uploaded boundary area. `Ok(None)` means the response does not allow a
/// decision (no features array, or no boundary area to compare against).
pub fn evaluate_response(
    response_json: &str,
    total_uploaded_area_ha: Option<f64>,
    config: &EligibilityConfig,
    locale: Locale,
) -> Result<Option<EligibilityDerivedResult>, GlebaError> {
    let collection = parsing::parse_feature_collection(response_json)?;

    let feature_count = collection.features.as_ref().map_or(0, Vec::len);
    tracing::debug!(features = feature_count, "parsed analysis response");

    Ok(interpret_eligibility(
        &collection,
        total_uploaded_area_ha,
        config,
        locale,
    ))
}
