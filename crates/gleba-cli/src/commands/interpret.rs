use std::path::PathBuf;

use crate::commands::{load_settings, resolve_locale, total_area};
use crate::output;

pub fn run(
    response_file: PathBuf,
    total_area_ha: Option<f64>,
    boundary_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    locale: Option<String>,
    output_format: &str,
    verbose: bool,
) -> Result<(), gleba_core::error::GlebaError> {
    let config = load_settings(config_file.as_deref())?;
    let locale = resolve_locale(locale.as_deref(), &config)?;
    let total = total_area(total_area_ha, boundary_file)?;

    let response = std::fs::read_to_string(&response_file)?;
    let result = gleba_core::evaluate_response(&response, total, &config, locale)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_result(result.as_ref(), locale, verbose),
    }

    Ok(())
}
