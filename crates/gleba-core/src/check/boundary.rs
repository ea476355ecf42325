use crate::error::GlebaError;
use crate::geometry::{centroid, multi_polygon_area_ha, polygons_of};
use geo::{MultiPolygon, Point};
use geojson::GeoJson;

/// File name used when submitting the boundary for analysis.
pub const BOUNDARY_FILE_NAME: &str = "boundary.geojson";

/// A farm's uploaded perimeter.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    polygons: MultiPolygon<f64>,
}

impl Boundary {
    pub fn new(polygons: MultiPolygon<f64>) -> Result<Self, GlebaError> {
        if polygons.0.is_empty() {
            return Err(GlebaError::InvalidBoundary(
                "boundary has no polygons".into(),
            ));
        }
        Ok(Self { polygons })
    }

    /// Read a boundary from GeoJSON.
    ///
    /// Accepts a bare geometry, a Feature, or a FeatureCollection whose first
    /// feature with polygonal geometry is taken as the boundary.
    pub fn from_geojson(json: &str) -> Result<Self, GlebaError> {
        let parsed: GeoJson = json
            .parse()
            .map_err(|e: geojson::Error| GlebaError::InvalidBoundary(e.to_string()))?;

        let geometry = match parsed {
            GeoJson::Geometry(g) => Some(g),
            GeoJson::Feature(f) => f.geometry,
            GeoJson::FeatureCollection(fc) => fc.features.into_iter().find_map(|f| {
                f.geometry.filter(|g| {
                    matches!(
                        g.value,
                        geojson::Value::Polygon(_) | geojson::Value::MultiPolygon(_)
                    )
                })
            }),
        }
        .ok_or_else(|| GlebaError::InvalidBoundary("no boundary geometry found".into()))?;

        let geometry = geo::Geometry::<f64>::try_from(geometry)
            .map_err(|e| GlebaError::InvalidBoundary(e.to_string()))?;

        Self::new(polygons_of(&geometry))
    }

    pub fn polygons(&self) -> &MultiPolygon<f64> {
        &self.polygons
    }

    pub fn area_ha(&self) -> f64 {
        multi_polygon_area_ha(&self.polygons)
    }

    pub fn centroid(&self) -> Option<Point<f64>> {
        centroid(&self.polygons)
    }

    /// Serialize as a single-feature FeatureCollection for submission.
    pub fn to_feature_collection_json(&self, farm_name: &str) -> Result<String, GlebaError> {
        let value = match self.polygons.0.as_slice() {
            [single] => geojson::Value::from(single),
            _ => geojson::Value::from(&self.polygons),
        };

        let mut properties = geojson::JsonObject::new();
        properties.insert("name".into(), farm_name.into());
        properties.insert("area_ha".into(), self.area_ha().into());

        let collection = geojson::FeatureCollection {
            bbox: None,
            features: vec![geojson::Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(value)),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }],
            foreign_members: None,
        };

        Ok(serde_json::to_string(&collection)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tests::lonlat_box;
    use approx::assert_relative_eq;

    const POLYGON: &str = r#"{
        "type": "Polygon",
        "coordinates": [[[-47.0, -15.0], [-46.99, -15.0], [-46.99, -14.99], [-47.0, -14.99], [-47.0, -15.0]]]
    }"#;

    #[test]
    fn test_from_bare_polygon() {
        let b = Boundary::from_geojson(POLYGON).unwrap();
        assert_eq!(b.polygons().0.len(), 1);
        assert!(b.area_ha() > 100.0);
    }

    #[test]
    fn test_from_feature_collection_skips_points() {
        let json = format!(
            r#"{{ "type": "FeatureCollection", "features": [
                {{ "type": "Feature", "geometry": {{ "type": "Point", "coordinates": [0, 0] }}, "properties": {{}} }},
                {{ "type": "Feature", "geometry": {POLYGON}, "properties": {{ "name": "Fazenda" }} }}
            ] }}"#
        );
        let b = Boundary::from_geojson(&json).unwrap();
        let c = b.centroid().unwrap();
        assert_relative_eq!(c.x(), -46.995, epsilon = 1e-9);
    }

    #[test]
    fn test_point_is_not_a_boundary() {
        let err = Boundary::from_geojson(r#"{ "type": "Point", "coordinates": [0, 0] }"#)
            .unwrap_err();
        assert!(matches!(err, GlebaError::InvalidBoundary(_)));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(Boundary::from_geojson("{").is_err());
    }

    #[test]
    fn test_serialized_as_single_feature_collection() {
        let b = Boundary::new(MultiPolygon::new(vec![lonlat_box(0.0, 0.0, 0.01, 0.01)])).unwrap();
        let json = b.to_feature_collection_json("Fazenda Boa Vista").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["geometry"]["type"], "Polygon");
        assert_eq!(features[0]["properties"]["name"], "Fazenda Boa Vista");
    }

    #[test]
    fn test_serialized_round_trips_area() {
        let b = Boundary::new(MultiPolygon::new(vec![
            lonlat_box(0.0, 0.0, 0.01, 0.01),
            lonlat_box(1.0, 0.0, 1.01, 0.01),
        ]))
        .unwrap();
        let json = b.to_feature_collection_json("Two parcels").unwrap();
        let back = Boundary::from_geojson(&json).unwrap();
        assert_relative_eq!(back.area_ha(), b.area_ha(), max_relative = 1e-9);
    }
}
