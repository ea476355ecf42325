use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GlebaError {
    #[error("invalid feature collection: {0}")]
    InvalidFeatureCollection(String),

    #[error("invalid boundary: {0}")]
    InvalidBoundary(String),

    #[error("boundary area {area_ha:.2} ha exceeds the maximum of {limit_ha:.2} ha allowed for analysis")]
    BoundaryTooLarge { area_ha: f64, limit_ha: f64 },

    #[error("could not determine the country for the farm boundary")]
    CountryNotResolved,

    #[error("geocoding failed: {0}")]
    Geocoding(String),

    #[error("eligibility analysis failed ({backend}): {reason}")]
    Analysis { backend: String, reason: String },

    #[error("eligibility analysis timed out after {secs} s")]
    AnalysisTimeout { secs: u64 },

    #[error("an eligibility check is already running for this farm")]
    CheckInProgress,

    #[error("unknown farm '{0}'")]
    UnknownFarm(String),

    #[error("no farm selected")]
    NoFarmSelected,

    #[error("failed to load configuration from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("unknown locale '{0}'. Available: en, pt-BR, es")]
    UnknownLocale(String),

    #[error("unknown category '{0}'. Available: deforestedareas, forestunion, wetlandsunion, eligibleareafeature")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
