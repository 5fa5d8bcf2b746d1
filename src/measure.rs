use crate::area;
use crate::error::Result;
use crate::label::LabelFormat;
use crate::point::{PlanarBoundingBox, PlanarPoint};
use crate::polygon::Polygon;
use crate::utm::UtmProjection;
use crate::zone::{select_zone, Zone};

/// Result of one measurement. `zone` is None when the outer ring was too
/// short to pick one.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub zone: Option<Zone>,
    pub area: f64,
    pub label: String,
}

/// Net area in m² of the polygon, all rings projected in the zone of the
/// outer ring's centroid.
pub fn polygon_area(polygon: &Polygon) -> Result<(Option<Zone>, f64)> {
    for w in polygon.rings().flat_map(|r| r.wgs.iter()) {
        w.validate()?;
    }
    if polygon.outer.is_degenerate() {
        log::debug!(
            "measure: outer ring has {} points, area 0",
            polygon.outer.len()
        );
        return Ok((None, 0.0));
    }
    let Some(centroid) = polygon.centroid() else {
        return Ok((None, 0.0));
    };
    let zone = select_zone(&centroid)?;
    let proj = UtmProjection::make(zone)?;
    let planar = polygon
        .rings()
        .map(|r| proj.project_all(&r.wgs))
        .collect::<Result<Vec<Vec<PlanarPoint>>>>()?;
    if let Some(b) = PlanarBoundingBox::of(&planar[0]) {
        log::debug!(
            "measure: planar bbox: {}, width: {:.1}, height: {:.1}",
            b,
            b.width(),
            b.height()
        );
    }
    Ok((Some(zone), area::area(&planar)))
}

pub fn measure_with(polygon: &Polygon, format: &LabelFormat) -> Result<Measurement> {
    let (zone, area) = polygon_area(polygon)?;
    let label = format.format(area)?;
    Ok(Measurement { zone, area, label })
}

pub fn measure(polygon: &Polygon) -> Result<Measurement> {
    measure_with(polygon, &LabelFormat::default())
}
