use proj4rs::proj::Proj;

use crate::error::{AreaError, Result};
use crate::point::{GeoPoint, PlanarPoint};
use crate::zone::Zone;

/// WGS84 transverse Mercator projection for one UTM zone.
pub struct UtmProjection {
    zone: Zone,
    wgs84_spec: Proj,
    dst_spec: Proj,
}

impl UtmProjection {
    pub fn make(zone: Zone) -> Result<UtmProjection> {
        let spec = zone.to_utm_proj4();
        log::debug!("projection: {}", spec);
        let dst_spec = Proj::from_proj_string(spec.as_str())
            .map_err(|e| AreaError::Projection(format!("{}: {}", spec, e)))?;

        let spec = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";
        let wgs84_spec = Proj::from_proj_string(spec)
            .map_err(|e| AreaError::Projection(format!("{}: {}", spec, e)))?;
        Ok(UtmProjection {
            zone,
            wgs84_spec,
            dst_spec,
        })
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn project(&self, wgs: &GeoPoint) -> Result<PlanarPoint> {
        wgs.validate()?;
        if !self.zone.contains_lon(wgs.lon) {
            log::trace!("outside zone {}: {}", self.zone, wgs);
        }
        let mut p = (wgs.lon.to_radians(), wgs.lat.to_radians());
        proj4rs::transform::transform(&self.wgs84_spec, &self.dst_spec, &mut p)
            .map_err(|e| {
                AreaError::InvalidInput(format!(
                    "{} outside the domain of zone {}: {}",
                    wgs, self.zone, e
                ))
            })?;
        Ok(PlanarPoint { x: p.0, y: p.1 })
    }

    pub fn project_all(&self, ring: &[GeoPoint]) -> Result<Vec<PlanarPoint>> {
        ring.iter().map(|w| self.project(w)).collect()
    }
}

/// One-shot projection of a single point. Callers projecting many points
/// should build a `UtmProjection` once.
pub fn project(point: &GeoPoint, zone: Zone) -> Result<PlanarPoint> {
    UtmProjection::make(zone)?.project(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::{select_zone, Hemisphere};

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_central_meridian_equator() {
        let zone = Zone {
            number: 31,
            hemisphere: Hemisphere::North,
        };
        let p = project(&GeoPoint::new(0.0, 3.0), zone).unwrap();
        assert!(close(p.x, 500_000.0, 0.01), "{}", p);
        assert!(close(p.y, 0.0, 0.01), "{}", p);
    }

    #[test]
    fn test_false_northing_south() {
        let zone = Zone {
            number: 31,
            hemisphere: Hemisphere::South,
        };
        let p = project(&GeoPoint::new(0.0, 3.0), zone).unwrap();
        assert!(close(p.y, 10_000_000.0, 0.01), "{}", p);
        let q = project(&GeoPoint::new(-10.0, 3.0), zone).unwrap();
        assert!(q.y < 10_000_000.0);
        assert!(q.y > 8_000_000.0);
    }

    #[test]
    fn test_known_point() {
        // Puerta del Sol, Madrid: 30T 440290.5 4474257.4
        let w = GeoPoint::new(40.4168, -3.7038);
        let zone = select_zone(&w).unwrap();
        let p = UtmProjection::make(zone).unwrap().project(&w).unwrap();
        assert!(close(p.x, 440_290.5, 1.0), "{}", p);
        assert!(close(p.y, 4_474_257.4, 1.0), "{}", p);
    }

    #[test]
    fn test_symmetric_about_central_meridian() {
        let proj = UtmProjection::make(Zone {
            number: 30,
            hemisphere: Hemisphere::North,
        })
        .unwrap();
        let east = proj.project(&GeoPoint::new(45.0, -1.0)).unwrap();
        let west = proj.project(&GeoPoint::new(45.0, -5.0)).unwrap();
        assert!(close(east.x - 500_000.0, 500_000.0 - west.x, 1e-3));
        assert!(close(east.y, west.y, 1e-3));
    }

    #[test]
    fn test_invalid_input() {
        let zone = Zone {
            number: 30,
            hemisphere: Hemisphere::North,
        };
        assert!(matches!(
            project(&GeoPoint::new(95.0, -3.0), zone),
            Err(AreaError::InvalidInput(_))
        ));
        assert!(matches!(
            project(&GeoPoint::new(40.0, f64::NAN), zone),
            Err(AreaError::InvalidInput(_))
        ));
    }
}
