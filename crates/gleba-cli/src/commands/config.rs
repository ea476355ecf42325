use gleba_core::config::builtin;
use std::path::Path;

pub fn list() -> Result<(), gleba_core::error::GlebaError> {
    println!("Available predefined configurations:\n");
    for name in builtin::PRESETS {
        let config = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, config.name, config.version);
        println!(
            "             max boundary {} ha, locale {}",
            config.max_boundary_area_ha, config.default_locale
        );
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), gleba_core::error::GlebaError> {
    let config = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn schema() -> Result<(), gleba_core::error::GlebaError> {
    print!(
        r#"JSON Configuration Schema
=========================

A configuration file sets the limits and thresholds used by
`gleba interpret`, `gleba check` and `gleba report`.

Fields:
  name                   (string, required)  Human-readable name
  version                (string, required)  Version identifier (e.g., "2025.1")
  max_boundary_area_ha   (number, required)  Boundaries larger than this are
                                             rejected before analysis.
  deforestation_min_ha   (number, optional)  Deforestation above this many
                                             hectares is reported as the cause
                                             of ineligibility. Default: 0.01
  wetlands_max_ratio     (number, optional)  Wetlands above this share of the
                                             boundary are reported as the
                                             cause. Default: 0.8
  forest_min_ratio       (number, optional)  Forest below this share of the
                                             boundary is reported as the
                                             cause. Default: 0.1
  analysis_timeout_secs  (integer, optional) Timeout for the remote analysis.
                                             Default: 120
  default_locale         (string, optional)  "en", "pt-BR" or "es".
                                             Default: "en"

Causes are tested in the order deforestation, wetlands, forest; only the
first one that applies is reported.

Example:
{{
  "name": "Cerrado pilot",
  "version": "1.0",
  "max_boundary_area_ha": 5000,
  "deforestation_min_ha": 0.5,
  "default_locale": "pt-BR"
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), gleba_core::error::GlebaError> {
    let config = gleba_core::config::load_config(file)?;

    println!("Configuration '{}' (v{}) is valid.", config.name, config.version);
    println!("  Max boundary area:    {} ha", config.max_boundary_area_ha);
    println!("  Deforestation above:  {} ha", config.deforestation_min_ha);
    println!("  Wetlands above:       {}%", config.wetlands_max_ratio * 100.0);
    println!("  Forest below:         {}%", config.forest_min_ratio * 100.0);
    println!("  Analysis timeout:     {} s", config.analysis_timeout_secs);

    // Values that are legal but probably unintended.
    let mut warnings = Vec::new();
    if config.deforestation_min_ha > 1.0 {
        warnings.push(format!(
            "deforestation_min_ha {} ha hides clearings smaller than one hectare",
            config.deforestation_min_ha
        ));
    }
    if config.forest_min_ratio >= config.wetlands_max_ratio {
        warnings.push("forest_min_ratio is not below wetlands_max_ratio".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
