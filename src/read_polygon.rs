use std::fs;
use std::path::Path;

use crate::error::{AreaError, Result};
use crate::point::GeoPoint;
use crate::polygon::Polygon;

/// Coordinate tree as handed over by a map editor: either a leaf
/// (lat, lon) pair or a list of subtrees, nested to any depth.
#[derive(Clone, Debug, PartialEq)]
pub enum Nested {
    Point(GeoPoint),
    List(Vec<Nested>),
}

/// Flattens a coordinate tree into rings, depth first. A list whose
/// first element is a point is one ring; empty rings are dropped.
/// Closing duplicates are left in place for `Polygon::from_rings`.
pub fn rings_from_nested(value: &Nested) -> Vec<Vec<GeoPoint>> {
    fn flatten(value: &Nested, out: &mut Vec<Vec<GeoPoint>>) {
        match value {
            Nested::Point(w) => out.push(vec![*w]),
            Nested::List(items) => match items.first() {
                None => {}
                Some(Nested::Point(_)) => out.push(
                    items
                        .iter()
                        .filter_map(|i| match i {
                            Nested::Point(w) => Some(*w),
                            Nested::List(_) => None,
                        })
                        .collect(),
                ),
                Some(Nested::List(_)) => {
                    for i in items {
                        flatten(i, out);
                    }
                }
            },
        }
    }
    let mut rings = Vec::new();
    flatten(value, &mut rings);
    rings
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect()
}

/// GeoJSON and KML store (lon, lat).
fn lonlat(p: &[f64]) -> Result<GeoPoint> {
    match p {
        [lon, lat, ..] => Ok(GeoPoint::new(*lat, *lon)),
        _ => Err(AreaError::Read(format!("position with {} values", p.len()))),
    }
}

mod locjson {
    use super::*;
    use geojson::{GeoJson, Geometry, PolygonType, Value};

    pub fn read(content: &str) -> Result<Vec<Polygon>> {
        let geojson: GeoJson = content
            .parse()
            .map_err(|e| AreaError::Read(format!("geojson: {}", e)))?;

        let mut ret = Vec::new();
        match geojson {
            GeoJson::FeatureCollection(collection) => {
                for feature in &collection.features {
                    if let Some(geometry) = &feature.geometry {
                        geometry_to_polygons(geometry, &mut ret)?;
                    }
                }
            }
            GeoJson::Feature(feature) => {
                if let Some(geometry) = &feature.geometry {
                    geometry_to_polygons(geometry, &mut ret)?;
                }
            }
            GeoJson::Geometry(geometry) => geometry_to_polygons(&geometry, &mut ret)?,
        }
        Ok(ret)
    }

    fn polygon(coords: &PolygonType) -> Result<Option<Polygon>> {
        let rings = coords
            .iter()
            .map(|ring| ring.iter().map(|p| lonlat(p)).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::from_rings(rings))
    }

    fn geometry_to_polygons(geometry: &Geometry, out: &mut Vec<Polygon>) -> Result<()> {
        match &geometry.value {
            Value::Polygon(coords) => out.extend(polygon(coords)?),
            Value::MultiPolygon(multi_coords) => {
                for coords in multi_coords {
                    out.extend(polygon(coords)?);
                }
            }
            Value::GeometryCollection(geometries) => {
                for g in geometries {
                    geometry_to_polygons(g, out)?;
                }
            }
            _ => log::debug!("geojson: skipping non-polygon geometry"),
        }
        Ok(())
    }
}

mod lockml {
    use super::*;
    use kml::types::Geometry;
    use kml::Kml;

    fn collect_geometry(geometry: &Geometry, out: &mut Vec<geo::Polygon>) {
        match geometry {
            // Needs the kml crate's geo-types conversion (default feature).
            Geometry::Polygon(p) => out.push(geo::Polygon::from(p.clone())),
            Geometry::MultiGeometry(m) => {
                for g in &m.geometries {
                    collect_geometry(g, out);
                }
            }
            _ => {}
        }
    }

    fn collect_polygons(kml: &Kml, out: &mut Vec<geo::Polygon>) {
        match kml {
            Kml::KmlDocument(doc) => doc.elements.iter().for_each(|e| collect_polygons(e, out)),
            Kml::Document { elements, .. } => elements.iter().for_each(|e| collect_polygons(e, out)),
            Kml::Folder(z) => z.elements.iter().for_each(|e| collect_polygons(e, out)),
            Kml::Placemark(p) => {
                if let Some(g) = &p.geometry {
                    collect_geometry(g, out);
                }
            }
            _ => {}
        }
    }

    fn ring(ls: &geo::LineString) -> Vec<GeoPoint> {
        ls.0.iter().map(|p| GeoPoint::new(p.y, p.x)).collect()
    }

    pub fn read(content: &str) -> Result<Vec<Polygon>> {
        let kml: Kml = content
            .parse()
            .map_err(|e| AreaError::Read(format!("kml: {}", e)))?;
        let mut found = Vec::new();
        collect_polygons(&kml, &mut found);
        Ok(found
            .iter()
            .filter_map(|g| {
                let rings = std::iter::once(g.exterior())
                    .chain(g.interiors())
                    .map(ring)
                    .collect();
                Polygon::from_rings(rings)
            })
            .collect())
    }
}

mod locgpx {
    use super::*;
    use gpx::Gpx;
    use std::io::Cursor;

    /// Each track segment is one outer ring.
    pub fn read(content: &str) -> Result<Vec<Polygon>> {
        let gpx: Gpx = gpx::read(Cursor::new(content))
            .map_err(|e| AreaError::Read(format!("gpx: {}", e)))?;

        Ok(gpx
            .tracks
            .iter()
            .flat_map(|track| {
                track.segments.iter().filter_map(|segment| {
                    let wgs: Vec<GeoPoint> = segment
                        .points
                        .iter()
                        .map(|point| GeoPoint::new(point.point().y(), point.point().x()))
                        .collect();
                    Polygon::from_rings(vec![wgs])
                })
            })
            .collect())
    }
}

pub fn read_str(content: &str, extension: &str) -> Result<Vec<Polygon>> {
    match extension.to_ascii_lowercase().as_str() {
        "geojson" | "json" => locjson::read(content),
        "kml" => lockml::read(content),
        "gpx" => locgpx::read(content),
        other => Err(AreaError::UnsupportedFormat(other.to_string())),
    }
}

pub fn read_polygons(filename: &Path) -> Result<Vec<Polygon>> {
    let extension = filename
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| AreaError::UnsupportedFormat(filename.display().to_string()))?;
    let content = fs::read_to_string(filename)
        .map_err(|e| AreaError::Read(format!("{}: {}", filename.display(), e)))?;
    let polygons = read_str(&content, extension)?;
    log::info!("{}: {} polygons", filename.display(), polygons.len());
    Ok(polygons)
}
