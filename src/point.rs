use core::fmt;

use crate::error::{AreaError, Result};

/// A WGS84 coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Fails on non-finite coordinates or coordinates outside
    /// [-90, 90] x [-180, 180].
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(AreaError::InvalidInput(format!(
                "non-finite coordinate: {}",
                self
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(AreaError::InvalidInput(format!(
                "latitude out of range: {}",
                self
            )));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(AreaError::InvalidInput(format!(
                "longitude out of range: {}",
                self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wgs(lat: {:.5}, lon: {:.5})", self.lat, self.lon)
    }
}

/// Easting/northing in meters inside one zone. Points from different
/// zones are not comparable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "planar(x: {:.2}, y: {:.2})", self.x, self.y)
    }
}

#[derive(Clone, Debug)]
pub struct GeoBoundingBox {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl GeoBoundingBox {
    /// None for an empty slice.
    pub fn of(points: &[GeoPoint]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points.iter().fold((first, first), |(min, max), curr| {
            (
                GeoPoint {
                    lat: min.lat.min(curr.lat),
                    lon: min.lon.min(curr.lon),
                },
                GeoPoint {
                    lat: max.lat.max(curr.lat),
                    lon: max.lon.max(curr.lon),
                },
            )
        });
        Some(Self { min, max })
    }
}

impl fmt::Display for GeoBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wgsbbox(min: {}, max: {})", self.min, self.max)
    }
}

#[derive(Clone, Debug)]
pub struct PlanarBoundingBox {
    pub min: PlanarPoint,
    pub max: PlanarPoint,
}

impl PlanarBoundingBox {
    pub fn of(points: &[PlanarPoint]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points.iter().fold((first, first), |(min, max), curr| {
            (
                PlanarPoint {
                    x: min.x.min(curr.x),
                    y: min.y.min(curr.y),
                },
                PlanarPoint {
                    x: max.x.max(curr.x),
                    y: max.y.max(curr.y),
                },
            )
        });
        Some(Self { min, max })
    }
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

impl fmt::Display for PlanarBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "planarbbox(min: {}, max: {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_extremes() {
        assert!(GeoPoint::new(90.0, 180.0).validate().is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).validate().is_ok());
        assert!(GeoPoint::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(matches!(
            GeoPoint::new(90.5, 0.0).validate(),
            Err(AreaError::InvalidInput(_))
        ));
        assert!(matches!(
            GeoPoint::new(0.0, -180.01).validate(),
            Err(AreaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).validate().is_err());
        assert!(GeoPoint::new(f64::NEG_INFINITY, 0.0).validate().is_err());
    }

    #[test]
    fn test_bounding_boxes() {
        assert!(GeoBoundingBox::of(&[]).is_none());
        let b = GeoBoundingBox::of(&[
            GeoPoint::new(40.0, -3.0),
            GeoPoint::new(41.0, -4.0),
            GeoPoint::new(40.5, -2.5),
        ])
        .unwrap();
        assert_eq!(b.min, GeoPoint::new(40.0, -4.0));
        assert_eq!(b.max, GeoPoint::new(41.0, -2.5));

        let p = PlanarBoundingBox::of(&[
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(30.0, 10.0),
            PlanarPoint::new(10.0, -10.0),
        ])
        .unwrap();
        assert_eq!(p.width(), 30.0);
        assert_eq!(p.height(), 20.0);
    }
}
