use crate::error::GlebaError;
use geo::Point;
use std::path::Path;
use std::time::Duration;

/// Everything the external analysis needs for one farm.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub file_name: String,
    /// Single-feature GeoJSON FeatureCollection with the boundary.
    pub geojson: String,
    pub country: String,
    pub farm_name: String,
    /// The service should give up after this long and report
    /// `AnalysisTimeout`; later responses are discarded by the check.
    pub timeout: Duration,
}

/// Reverse geocoding backend.
pub trait Geocoder: Send + Sync {
    /// ISO country code for a lon/lat point, `None` if the point is not in
    /// any known country.
    fn country_code(&self, point: Point<f64>) -> Result<Option<String>, GlebaError>;
}

/// Remote eligibility analysis backend.
pub trait AnalysisService: Send + Sync {
    /// Submit a boundary and return the raw GeoJSON response body.
    fn analyze(&self, request: &AnalysisRequest) -> Result<String, GlebaError>;

    /// Name of this backend, attached to `Analysis` errors and log events.
    fn backend_name(&self) -> &str;
}

/// Geocoder that answers with one configured country.
#[derive(Debug, Clone)]
pub struct FixedCountry(pub String);

impl Geocoder for FixedCountry {
    fn country_code(&self, _point: Point<f64>) -> Result<Option<String>, GlebaError> {
        Ok(Some(self.0.clone()).filter(|c| !c.trim().is_empty()))
    }
}

const RECORDED_BACKEND: &str = "recorded";

/// Analysis backend that replays a previously captured response.
#[derive(Debug, Clone)]
pub struct RecordedAnalysis {
    response: String,
}

impl RecordedAnalysis {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    /// Load a captured response body. An unreadable or blank file is an
    /// analysis failure, not an empty result.
    pub fn from_file(path: &Path) -> Result<Self, GlebaError> {
        let failed = |reason: String| GlebaError::Analysis {
            backend: RECORDED_BACKEND.to_string(),
            reason,
        };
        let body = std::fs::read_to_string(path)
            .map_err(|e| failed(format!("cannot read {}: {e}", path.display())))?;
        if body.trim().is_empty() {
            return Err(failed(format!("{} is empty", path.display())));
        }
        Ok(Self::new(body))
    }
}

impl AnalysisService for RecordedAnalysis {
    fn analyze(&self, request: &AnalysisRequest) -> Result<String, GlebaError> {
        tracing::debug!(
            farm = %request.farm_name,
            country = %request.country,
            "replaying recorded analysis response"
        );
        Ok(self.response.clone())
    }

    fn backend_name(&self) -> &str {
        RECORDED_BACKEND
    }
}
