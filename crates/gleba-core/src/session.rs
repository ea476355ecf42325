//! Application state for the signed-in user's farms.
//!
//! Holds the farm list, the selected farm and that farm's eligibility check.
//! Loaded after sign-in, cleared on sign-out.

use crate::check::boundary::Boundary;
use crate::check::{CheckContext, EligibilityCheck};
use crate::error::GlebaError;
use crate::model::EligibilityDerivedResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: String,
    pub name: String,
    /// Uploaded boundary as GeoJSON, if any.
    #[serde(default)]
    pub boundary_geojson: Option<String>,
}

#[derive(Debug, Default)]
pub struct FarmSession {
    farms: Vec<Farm>,
    selected: Option<String>,
    check: EligibilityCheck,
}

impl FarmSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the farm list.
    ///
    /// Keeps the current selection if that farm is still present, otherwise
    /// selects the first farm.
    pub fn load(&mut self, farms: Vec<Farm>) {
        let keep = self
            .selected
            .as_ref()
            .is_some_and(|id| farms.iter().any(|f| &f.id == id));
        if !keep {
            self.selected = farms.first().map(|f| f.id.clone());
            self.check.reset();
        }
        self.farms = farms;
    }

    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    pub fn selected_farm(&self) -> Option<&Farm> {
        let id = self.selected.as_ref()?;
        self.farms.iter().find(|f| &f.id == id)
    }

    /// Select a farm. Switching to another farm discards its check result.
    pub fn select(&mut self, id: &str) -> Result<&Farm, GlebaError> {
        let index = self
            .farms
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| GlebaError::UnknownFarm(id.to_string()))?;

        if self.selected.as_deref() != Some(id) {
            self.selected = Some(id.to_string());
            self.check.reset();
        }
        Ok(&self.farms[index])
    }

    pub fn check(&self) -> &EligibilityCheck {
        &self.check
    }

    /// Run the eligibility check for the selected farm.
    pub fn check_selected(
        &mut self,
        ctx: CheckContext<'_>,
    ) -> Result<Option<&EligibilityDerivedResult>, GlebaError> {
        let farm = self.selected_farm().ok_or(GlebaError::NoFarmSelected)?;
        let json = farm.boundary_geojson.as_deref().ok_or_else(|| {
            GlebaError::InvalidBoundary(format!("farm '{}' has no boundary", farm.name))
        })?;
        let boundary = Boundary::from_geojson(json)?;
        let name = farm.name.clone();

        self.check.run(&boundary, &name, ctx)
    }

    /// Drop everything held for the user.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::collaborators::{FixedCountry, RecordedAnalysis};
    use crate::check::CheckStatus;
    use crate::config::builtin::default_config;
    use crate::i18n::Locale;

    const BOUNDARY: &str = r#"{
        "type": "Polygon",
        "coordinates": [[[-47.0, -15.0], [-46.99, -15.0], [-46.99, -14.99], [-47.0, -14.99], [-47.0, -15.0]]]
    }"#;

    fn farm(id: &str, boundary: Option<&str>) -> Farm {
        Farm {
            id: id.into(),
            name: format!("Farm {id}"),
            boundary_geojson: boundary.map(String::from),
        }
    }

    fn run_check(session: &mut FarmSession) -> Result<bool, GlebaError> {
        let config = default_config();
        let service = RecordedAnalysis::new(
            r#"{ "features": [ { "type": "Feature", "geometry": null,
                 "properties": { "name": "eligibleAreaFeature", "area_ha": 12 } } ] }"#,
        );
        let geocoder = FixedCountry("BR".into());
        let ctx = CheckContext {
            geocoder: &geocoder,
            service: &service,
            config: &config,
            locale: Locale::En,
        };
        Ok(session.check_selected(ctx)?.is_some())
    }

    #[test]
    fn test_load_selects_first_farm() {
        let mut session = FarmSession::new();
        session.load(vec![farm("a", None), farm("b", None)]);
        assert_eq!(session.selected_farm().unwrap().id, "a");
    }

    #[test]
    fn test_reload_keeps_existing_selection() {
        let mut session = FarmSession::new();
        session.load(vec![farm("a", None), farm("b", None)]);
        session.select("b").unwrap();
        session.load(vec![farm("b", None), farm("c", None)]);
        assert_eq!(session.selected_farm().unwrap().id, "b");
    }

    #[test]
    fn test_select_unknown_farm() {
        let mut session = FarmSession::new();
        session.load(vec![farm("a", None)]);
        assert!(matches!(session.select("z"), Err(GlebaError::UnknownFarm(_))));
    }

    #[test]
    fn test_changing_selection_discards_result() {
        let mut session = FarmSession::new();
        session.load(vec![farm("a", Some(BOUNDARY)), farm("b", Some(BOUNDARY))]);
        assert!(run_check(&mut session).unwrap());
        assert_eq!(session.check().status(), CheckStatus::Success);

        session.select("a").unwrap();
        assert!(session.check().result().is_some());

        session.select("b").unwrap();
        assert!(session.check().result().is_none());
        assert_eq!(session.check().status(), CheckStatus::Idle);
    }

    #[test]
    fn test_farm_without_boundary() {
        let mut session = FarmSession::new();
        session.load(vec![farm("a", None)]);
        assert!(matches!(
            run_check(&mut session),
            Err(GlebaError::InvalidBoundary(_))
        ));
    }

    #[test]
    fn test_no_selection() {
        let mut session = FarmSession::new();
        assert!(matches!(
            run_check(&mut session),
            Err(GlebaError::NoFarmSelected)
        ));
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let mut session = FarmSession::new();
        session.load(vec![farm("a", Some(BOUNDARY))]);
        run_check(&mut session).unwrap();
        session.sign_out();
        assert!(session.farms().is_empty());
        assert!(session.selected_farm().is_none());
        assert!(session.check().result().is_none());
    }
}
