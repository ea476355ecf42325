use gleba_core::check::boundary::Boundary;
use gleba_core::format::format_area;
use std::path::PathBuf;

use crate::commands::load_settings;

pub fn run(
    boundary_file: PathBuf,
    config_file: Option<PathBuf>,
) -> Result<(), gleba_core::error::GlebaError> {
    let config = load_settings(config_file.as_deref())?;
    let boundary = Boundary::from_geojson(&std::fs::read_to_string(&boundary_file)?)?;
    let locale = config.default_locale;

    let area = boundary.area_ha();
    println!("  Polygons:  {}", boundary.polygons().0.len());
    println!("  Area:      {}", format_area(area, locale));
    if let Some(c) = boundary.centroid() {
        println!("  Centroid:  {:.6}, {:.6} (lon, lat)", c.x(), c.y());
    }

    let limit = config.max_boundary_area_ha;
    if area > limit {
        println!(
            "  Limit:     {} -> too large for analysis",
            format_area(limit, locale)
        );
    } else {
        println!("  Limit:     {} -> ok", format_area(limit, locale));
    }

    Ok(())
}
