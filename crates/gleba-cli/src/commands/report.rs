use gleba_core::error::GlebaError;
use gleba_core::report::EligibilityReport;
use std::path::PathBuf;

use crate::commands::{load_settings, resolve_locale, total_area};

pub fn run(
    response_file: PathBuf,
    farm_name: &str,
    total_area_ha: Option<f64>,
    boundary_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    locale: Option<String>,
    out: Option<PathBuf>,
) -> Result<(), GlebaError> {
    let config = load_settings(config_file.as_deref())?;
    let locale = resolve_locale(locale.as_deref(), &config)?;
    let total = total_area(total_area_ha, boundary_file)?;

    let response = std::fs::read_to_string(&response_file)?;
    let result = gleba_core::evaluate_response(&response, total, &config, locale)?
        .ok_or_else(|| {
            GlebaError::InvalidFeatureCollection(
                "the response cannot be interpreted: no features array or no total area".into(),
            )
        })?;

    let text = EligibilityReport::build(farm_name, &result, locale).render_text(locale);

    match out {
        Some(path) => {
            std::fs::write(&path, text)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{text}"),
    }

    Ok(())
}
