pub mod area;
pub mod check;
pub mod config;
pub mod interpret;
pub mod report;
pub mod resolve;

use gleba_core::check::boundary::Boundary;
use gleba_core::config::builtin;
use gleba_core::config::schema::EligibilityConfig;
use gleba_core::error::GlebaError;
use gleba_core::i18n::Locale;
use std::path::{Path, PathBuf};

/// Custom configuration file, or the built-in default preset.
pub fn load_settings(config_file: Option<&Path>) -> Result<EligibilityConfig, GlebaError> {
    match config_file {
        Some(path) => gleba_core::config::load_config(path),
        None => builtin::load_preset("default"),
    }
}

/// Explicit locale tag, or the configuration's default.
pub fn resolve_locale(
    tag: Option<&str>,
    config: &EligibilityConfig,
) -> Result<Locale, GlebaError> {
    match tag {
        Some(tag) => {
            Locale::from_tag(tag).ok_or_else(|| GlebaError::UnknownLocale(tag.into()))
        }
        None => Ok(config.default_locale),
    }
}

/// Total uploaded area, given directly or measured from a boundary file.
pub fn total_area(
    total_area: Option<f64>,
    boundary_file: Option<PathBuf>,
) -> Result<Option<f64>, GlebaError> {
    match (total_area, boundary_file) {
        (Some(ha), _) => Ok(Some(ha)),
        (None, Some(path)) => {
            let boundary = Boundary::from_geojson(&std::fs::read_to_string(path)?)?;
            Ok(Some(boundary.area_ha()))
        }
        (None, None) => Ok(None),
    }
}
