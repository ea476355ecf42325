//! Area helpers for longitude/latitude geometries.
//!
//! Areas are computed on a sphere with the WGS84 equatorial radius
//! (Chamberlain & Duquette), which is what web map tooling reports for
//! drawn farm boundaries.

use geo::{Centroid, ChamberlainDuquetteArea, Geometry, MultiPolygon, Point};

pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Unsigned spherical area of a geometry in square meters.
///
/// Points and lines have zero area. Ring orientation does not matter.
pub fn area_m2(geometry: &Geometry<f64>) -> f64 {
    geometry.chamberlain_duquette_unsigned_area()
}

/// Unsigned spherical area of a geometry in hectares.
pub fn area_ha(geometry: &Geometry<f64>) -> f64 {
    area_m2(geometry) / SQUARE_METERS_PER_HECTARE
}

pub fn multi_polygon_area_ha(boundary: &MultiPolygon<f64>) -> f64 {
    boundary.chamberlain_duquette_unsigned_area() / SQUARE_METERS_PER_HECTARE
}

/// Planar centroid of a boundary, in longitude/latitude.
pub fn centroid(boundary: &MultiPolygon<f64>) -> Option<Point<f64>> {
    boundary.centroid()
}

/// Keep the polygonal part of a geometry.
///
/// Collections contribute every polygon they contain; anything without area
/// yields an empty multipolygon.
pub fn polygons_of(geometry: &Geometry<f64>) -> MultiPolygon<f64> {
    match geometry {
        Geometry::Polygon(p) => MultiPolygon::new(vec![p.clone()]),
        Geometry::MultiPolygon(mp) => mp.clone(),
        Geometry::Rect(r) => MultiPolygon::new(vec![r.to_polygon()]),
        Geometry::Triangle(t) => MultiPolygon::new(vec![t.to_polygon()]),
        Geometry::GeometryCollection(gc) => MultiPolygon::new(
            gc.iter()
                .flat_map(|g| polygons_of(g).0)
                .collect(),
        ),
        _ => MultiPolygon::new(vec![]),
    }
}
