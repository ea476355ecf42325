use gleba_core::eligibility::resolve_category_area;
use gleba_core::error::GlebaError;
use gleba_core::format::format_area;
use gleba_core::model::CategoryKey;
use gleba_core::parsing::parse_feature_collection;
use std::path::PathBuf;

use crate::commands::{load_settings, resolve_locale};
use crate::output;

pub fn run(
    response_file: PathBuf,
    category: &str,
    config_file: Option<PathBuf>,
    locale: Option<String>,
    output_format: &str,
) -> Result<(), GlebaError> {
    let config = load_settings(config_file.as_deref())?;
    let locale = resolve_locale(locale.as_deref(), &config)?;
    let category = CategoryKey::from_key(category)
        .ok_or_else(|| GlebaError::UnknownCategory(category.into()))?;

    let response = std::fs::read_to_string(&response_file)?;
    let collection = parse_feature_collection(&response)?;
    let features = collection.features.unwrap_or_default();

    let result = resolve_category_area(&features, category);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => {
            println!("  Category:  {category}");
            println!("  Features:  {}", category.count_matches(&features));
            println!("  Area:      {}", format_area(result.area_ha, locale));
            if !result.years.is_empty() {
                let years: Vec<String> = result.years.iter().map(|y| y.to_string()).collect();
                println!("  Years:     {}", years.join(", "));
            }
            output::table::print_diagnostics(&result.diagnostics);
        }
    }

    Ok(())
}
