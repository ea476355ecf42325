pub mod values;

use crate::error::GlebaError;
use crate::model::{FeatureCollection, Field, GeographicFeature};
use serde_json::{Map, Value};
use values::{parse_area_ha, parse_year};

/// Parse an analysis response into a typed FeatureCollection.
///
/// Only structurally impossible input is an error. Everything that is wrong
/// with an individual feature is kept on the feature as `Field::Invalid` so
/// the resolver can degrade it to a zero contribution.
pub fn parse_feature_collection(json: &str) -> Result<FeatureCollection, GlebaError> {
    let value: Value = serde_json::from_str(json)?;
    parse_feature_collection_value(&value)
}

pub fn parse_feature_collection_value(value: &Value) -> Result<FeatureCollection, GlebaError> {
    let object = value.as_object().ok_or_else(|| {
        GlebaError::InvalidFeatureCollection(format!(
            "expected a JSON object, found {}",
            json_kind(value)
        ))
    })?;

    let features = object.get("features").and_then(Value::as_array).map(|entries| {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_feature(index, entry))
            .collect()
    });

    Ok(FeatureCollection { features })
}

/// Parse a single GeoJSON feature object.
fn parse_feature(index: usize, entry: &Value) -> GeographicFeature {
    let Some(object) = entry.as_object() else {
        return GeographicFeature {
            index,
            ..Default::default()
        };
    };

    let empty = Map::new();
    let properties = object
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let name = properties
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from);

    GeographicFeature {
        index,
        name,
        geometry: parse_geometry(object.get("geometry")),
        area_ha: parse_area_ha(properties.get("area_ha")),
        year: parse_year(properties.get("year")),
    }
}

/// Convert a GeoJSON geometry member into a `geo` geometry.
pub fn parse_geometry(value: Option<&Value>) -> Field<geo::Geometry<f64>> {
    let value = match value {
        None | Some(Value::Null) => return Field::Absent,
        Some(v) => v,
    };

    let geometry = match geojson::Geometry::try_from(value.clone()) {
        Ok(g) => g,
        Err(e) => return Field::Invalid(format!("malformed geometry: {e}")),
    };

    match geo::Geometry::<f64>::try_from(geometry) {
        Ok(g) => Field::Valid(g),
        Err(e) => Field::Invalid(format!("unsupported geometry: {e}")),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
