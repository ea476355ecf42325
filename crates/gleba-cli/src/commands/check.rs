use gleba_core::check::boundary::Boundary;
use gleba_core::check::collaborators::{FixedCountry, RecordedAnalysis};
use gleba_core::check::{CheckContext, EligibilityCheck};
use std::path::PathBuf;

use crate::commands::{load_settings, resolve_locale};
use crate::output;

pub fn run(
    boundary_file: PathBuf,
    farm_name: &str,
    country: String,
    response_file: PathBuf,
    config_file: Option<PathBuf>,
    locale: Option<String>,
    output_format: &str,
) -> Result<(), gleba_core::error::GlebaError> {
    let config = load_settings(config_file.as_deref())?;
    let locale = resolve_locale(locale.as_deref(), &config)?;
    let boundary = Boundary::from_geojson(&std::fs::read_to_string(&boundary_file)?)?;

    let geocoder = FixedCountry(country);
    let service = RecordedAnalysis::from_file(&response_file)?;
    let ctx = CheckContext {
        geocoder: &geocoder,
        service: &service,
        config: &config,
        locale,
    };

    let mut check = EligibilityCheck::new();
    let result = check.run(&boundary, farm_name, ctx)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => {
            println!("=== {} ===\n", farm_name);
            output::table::print_result(result, locale, true);
        }
    }

    Ok(())
}
