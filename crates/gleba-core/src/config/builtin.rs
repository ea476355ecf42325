use crate::config::schema::EligibilityConfig;
use crate::error::GlebaError;

const DEFAULT_JSON: &str = include_str!("../../../../config/default.json");

/// Available predefined configurations.
pub const PRESETS: &[&str] = &["default"];

/// Load a predefined configuration by name.
pub fn load_preset(name: &str) -> Result<EligibilityConfig, GlebaError> {
    match name {
        "default" => {
            let config: EligibilityConfig = serde_json::from_str(DEFAULT_JSON)?;
            Ok(config)
        }
        _ => Err(GlebaError::ConfigInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// The default preset, falling back to the compiled-in thresholds.
pub fn default_config() -> EligibilityConfig {
    load_preset("default").unwrap_or_else(|_| EligibilityConfig {
        name: "Default eligibility rules".into(),
        version: "builtin".into(),
        max_boundary_area_ha: 10_000.0,
        deforestation_min_ha: 0.01,
        wetlands_max_ratio: 0.8,
        forest_min_ratio: 0.1,
        analysis_timeout_secs: 120,
        default_locale: Default::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate_config;

    #[test]
    fn test_load_default_preset() {
        let config = load_preset("default").unwrap();
        assert_eq!(config.deforestation_min_ha, 0.01);
        assert_eq!(config.wetlands_max_ratio, 0.8);
        assert_eq!(config.forest_min_ratio, 0.1);
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }

    #[test]
    fn test_default_config_matches_preset() {
        assert_eq!(default_config(), load_preset("default").unwrap());
    }
}
