pub mod boundary;
pub mod collaborators;

use crate::config::schema::EligibilityConfig;
use crate::eligibility::interpret_eligibility;
use crate::error::GlebaError;
use crate::i18n::Locale;
use crate::model::{EligibilityDerivedResult, FeatureCollection};
use crate::parsing::parse_feature_collection;
use boundary::{Boundary, BOUNDARY_FILE_NAME};
use collaborators::{AnalysisRequest, AnalysisService, Geocoder};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Collaborators and settings for one eligibility check.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub geocoder: &'a dyn Geocoder,
    pub service: &'a dyn AnalysisService,
    pub config: &'a EligibilityConfig,
    pub locale: Locale,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    #[default]
    Idle,
    Checking,
    Success,
    Failed,
}

/// Eligibility check state for one farm.
///
/// At most one check is in flight; the previous result is dropped as soon as
/// a new check starts.
#[derive(Debug, Default)]
pub struct EligibilityCheck {
    status: CheckStatus,
    result: Option<EligibilityDerivedResult>,
    last_error: Option<String>,
}

impl EligibilityCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn result(&self) -> Option<&EligibilityDerivedResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Mark a check as started. Fails if one is already running.
    pub fn begin(&mut self) -> Result<(), GlebaError> {
        if self.status == CheckStatus::Checking {
            return Err(GlebaError::CheckInProgress);
        }
        self.status = CheckStatus::Checking;
        self.result = None;
        self.last_error = None;
        Ok(())
    }

    /// Record the outcome of the check started with [`begin`](Self::begin).
    pub fn finish(&mut self, outcome: &Result<Option<EligibilityDerivedResult>, GlebaError>) {
        match outcome {
            Ok(result) => {
                self.status = CheckStatus::Success;
                self.result = result.clone();
            }
            Err(e) => {
                self.status = CheckStatus::Failed;
                self.result = None;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Run a full check and keep its result.
    ///
    /// `Ok(None)` means the analysis did not give enough to decide, which is
    /// not a failure.
    pub fn run(
        &mut self,
        boundary: &Boundary,
        farm_name: &str,
        ctx: CheckContext<'_>,
    ) -> Result<Option<&EligibilityDerivedResult>, GlebaError> {
        self.begin()?;
        tracing::info!(farm = farm_name, "eligibility check started");

        let outcome = perform_check(boundary, farm_name, ctx);
        self.finish(&outcome);

        match outcome {
            Ok(_) => {
                tracing::info!(
                    farm = farm_name,
                    status = ?self.status,
                    "eligibility check finished"
                );
                Ok(self.result.as_ref())
            }
            Err(e) => {
                tracing::warn!(farm = farm_name, error = %e, "eligibility check failed");
                Err(e)
            }
        }
    }

    /// Forget any result and return to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validate, submit and interpret one boundary without keeping state.
pub fn perform_check(
    boundary: &Boundary,
    farm_name: &str,
    ctx: CheckContext<'_>,
) -> Result<Option<EligibilityDerivedResult>, GlebaError> {
    let area_ha = boundary.area_ha();
    if area_ha > ctx.config.max_boundary_area_ha {
        return Err(GlebaError::BoundaryTooLarge {
            area_ha,
            limit_ha: ctx.config.max_boundary_area_ha,
        });
    }

    let geojson = boundary.to_feature_collection_json(farm_name)?;

    let centroid = boundary
        .centroid()
        .ok_or_else(|| GlebaError::InvalidBoundary("boundary has no centroid".into()))?;
    let country = ctx
        .geocoder
        .country_code(centroid)
        .map_err(|e| match e {
            GlebaError::Geocoding(_) => e,
            other => GlebaError::Geocoding(other.to_string()),
        })?
        .filter(|c| !c.trim().is_empty())
        .ok_or(GlebaError::CountryNotResolved)?;
    tracing::debug!(
        country = %country,
        lon = centroid.x(),
        lat = centroid.y(),
        "resolved country"
    );

    let request = AnalysisRequest {
        file_name: BOUNDARY_FILE_NAME.to_string(),
        geojson,
        country,
        farm_name: farm_name.to_string(),
        timeout: Duration::from_secs(ctx.config.analysis_timeout_secs),
    };
    let collection = analyze(ctx.service, &request)?;

    Ok(interpret_eligibility(
        &collection,
        Some(area_ha),
        ctx.config,
        ctx.locale,
    ))
}

/// Submit one request and parse the response.
///
/// Backend failures and malformed responses surface as `Analysis` tagged with
/// the backend name. A response arriving after the request timeout is
/// discarded.
fn analyze(
    service: &dyn AnalysisService,
    request: &AnalysisRequest,
) -> Result<FeatureCollection, GlebaError> {
    let backend = service.backend_name();
    let started = Instant::now();

    let outcome = service
        .analyze(request)
        .and_then(|response| {
            if started.elapsed() > request.timeout {
                return Err(GlebaError::AnalysisTimeout {
                    secs: request.timeout.as_secs(),
                });
            }
            parse_feature_collection(&response)
        })
        .map_err(|e| match e {
            GlebaError::Analysis { .. } | GlebaError::AnalysisTimeout { .. } => e,
            other => GlebaError::Analysis {
                backend: backend.to_string(),
                reason: other.to_string(),
            },
        });

    if let Err(e) = &outcome {
        tracing::warn!(backend, error = %e, "analysis request failed");
    }
    outcome
}
