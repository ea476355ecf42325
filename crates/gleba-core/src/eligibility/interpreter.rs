use crate::config::schema::EligibilityConfig;
use crate::eligibility::resolver::resolve_category_area;
use crate::format::format_area;
use crate::i18n::Locale;
use crate::model::{
    CategoryKey, EligibilityDerivedResult, EligibilityOutcome, FeatureCollection,
    IneligibilityCause,
};

/// Interpret an analysis response against the uploaded boundary area.
///
/// Returns `None` when there is nothing to compare: no features array, or a
/// missing/zero/NaN boundary area. An empty features array still produces a
/// result.
pub fn interpret_eligibility(
    collection: &FeatureCollection,
    total_uploaded_area_ha: Option<f64>,
    config: &EligibilityConfig,
    locale: Locale,
) -> Option<EligibilityDerivedResult> {
    let features = collection.features.as_deref()?;
    let total = total_uploaded_area_ha.filter(|t| *t != 0.0 && !t.is_nan())?;

    let deforestation = resolve_category_area(features, CategoryKey::Deforestation);
    let forest = resolve_category_area(features, CategoryKey::Forest);
    let wetlands = resolve_category_area(features, CategoryKey::Wetlands);
    let eligible = resolve_category_area(features, CategoryKey::EligibleArea);

    let outcome = decide(
        total,
        deforestation.area_ha,
        forest.area_ha,
        wetlands.area_ha,
        eligible.area_ha,
        config,
    );

    let message = compose_message(
        outcome,
        deforestation.area_ha,
        eligible.area_ha,
        config,
        locale,
    );

    tracing::debug!(
        total_ha = total,
        eligible_ha = eligible.area_ha,
        outcome = ?outcome,
        "interpreted eligibility"
    );

    let diagnostics = [&deforestation, &forest, &wetlands, &eligible]
        .into_iter()
        .flat_map(|r| r.diagnostics.iter().cloned())
        .collect();

    Some(EligibilityDerivedResult {
        message,
        total_uploaded_area_ha: total,
        deforestation_area_ha: deforestation.area_ha,
        forest_area_ha: forest.area_ha,
        wetlands_area_ha: wetlands.area_ha,
        eligible_area_ha: eligible.area_ha,
        deforestation_years: deforestation.years,
        outcome,
        diagnostics,
    })
}

/// First match wins. At most one cause is attributed.
fn decide(
    total: f64,
    deforestation: f64,
    forest: f64,
    wetlands: f64,
    eligible: f64,
    config: &EligibilityConfig,
) -> EligibilityOutcome {
    if eligible > 0.0 {
        return EligibilityOutcome::Eligible;
    }
    if total <= 0.0 {
        return EligibilityOutcome::Incomplete;
    }

    let cause = if deforestation > config.deforestation_min_ha {
        Some(IneligibilityCause::Deforestation)
    } else if wetlands > total * config.wetlands_max_ratio {
        Some(IneligibilityCause::HighWetlands)
    } else if forest < total * config.forest_min_ratio {
        Some(IneligibilityCause::LowForest)
    } else {
        None
    };

    EligibilityOutcome::Ineligible { cause }
}

fn compose_message(
    outcome: EligibilityOutcome,
    deforestation: f64,
    eligible: f64,
    config: &EligibilityConfig,
    locale: Locale,
) -> String {
    match outcome {
        EligibilityOutcome::Eligible => locale.eligible(&format_area(eligible, locale)),
        EligibilityOutcome::Ineligible { cause } => {
            let mut lines = vec![locale.no_eligible_area().to_string()];
            match cause {
                Some(IneligibilityCause::Deforestation) => {
                    lines.push(locale.cause_deforestation(&format_area(deforestation, locale)))
                }
                Some(IneligibilityCause::HighWetlands) => {
                    lines.push(locale.cause_high_wetlands(percent(config.wetlands_max_ratio)))
                }
                Some(IneligibilityCause::LowForest) => {
                    lines.push(locale.cause_low_forest(percent(config.forest_min_ratio)))
                }
                None => {}
            }
            lines.join("\n")
        }
        EligibilityOutcome::Incomplete => locale.analysis_incomplete().to_string(),
    }
}

fn percent(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}
