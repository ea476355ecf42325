pub mod builtin;
pub mod schema;

use crate::error::GlebaError;
use schema::EligibilityConfig;
use std::path::Path;

/// Load a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<EligibilityConfig, GlebaError> {
    let content = std::fs::read_to_string(path).map_err(|e| GlebaError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse a configuration from a JSON string.
pub fn parse_config(json: &str, source: &Path) -> Result<EligibilityConfig, GlebaError> {
    let config: EligibilityConfig =
        serde_json::from_str(json).map_err(|e| GlebaError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a configuration from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<EligibilityConfig, GlebaError> {
    let config: EligibilityConfig = serde_json::from_str(json).map_err(GlebaError::Json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a configuration is usable.
pub fn validate_config(config: &EligibilityConfig) -> Result<(), GlebaError> {
    if config.name.trim().is_empty() {
        return Err(GlebaError::ConfigInvalid("name must not be empty".into()));
    }

    if !(config.max_boundary_area_ha.is_finite() && config.max_boundary_area_ha > 0.0) {
        return Err(GlebaError::ConfigInvalid(format!(
            "max_boundary_area_ha must be a positive number, got {}",
            config.max_boundary_area_ha
        )));
    }

    if !(config.deforestation_min_ha.is_finite() && config.deforestation_min_ha >= 0.0) {
        return Err(GlebaError::ConfigInvalid(format!(
            "deforestation_min_ha must not be negative, got {}",
            config.deforestation_min_ha
        )));
    }

    for (field, ratio) in [
        ("wetlands_max_ratio", config.wetlands_max_ratio),
        ("forest_min_ratio", config.forest_min_ratio),
    ] {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(GlebaError::ConfigInvalid(format!(
                "{field} must be within (0, 1], got {ratio}"
            )));
        }
    }

    if config.analysis_timeout_secs == 0 {
        return Err(GlebaError::ConfigInvalid(
            "analysis_timeout_secs must be greater than zero".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "max_boundary_area_ha": 500
        }"#;
        let config = parse_config_str(json).unwrap();
        assert_eq!(config.max_boundary_area_ha, 500.0);
        assert_eq!(config.deforestation_min_ha, 0.01);
        assert_eq!(config.analysis_timeout_secs, 120);
        assert_eq!(config.default_locale, Locale::En);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "max_boundary_area_ha": 0 }"#;
        assert!(parse_config_str(json).is_err());
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1.0",
            "max_boundary_area_ha": 100, "wetlands_max_ratio": 1.5
        }"#;
        let err = parse_config_str(json).unwrap_err();
        assert!(err.to_string().contains("wetlands_max_ratio"));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1.0",
            "max_boundary_area_ha": 100, "default_locale": "fr"
        }"#;
        assert!(parse_config_str(json).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name": "Site", "version": "2", "max_boundary_area_ha": 2500, "default_locale": "pt-BR" }}"#
        )
        .unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.name, "Site");
        assert_eq!(config.default_locale, Locale::PtBr);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/gleba.json")).unwrap_err();
        assert!(matches!(err, GlebaError::ConfigLoad { .. }));
    }
}
