use core::fmt;

use crate::error::Result;
use crate::point::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

/// A 6 degree wide UTM longitude band plus hemisphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Zone {
    pub number: u8,
    pub hemisphere: Hemisphere,
}

impl Zone {
    pub const WIDTH_DEG: f64 = 6.0;
    pub const COUNT: u8 = 60;

    pub fn central_meridian(&self) -> f64 {
        f64::from(self.number) * Self::WIDTH_DEG - 183.0
    }

    /// Western and eastern edge of the band in degrees.
    pub fn lon_range(&self) -> (f64, f64) {
        let west = f64::from(self.number.saturating_sub(1)) * Self::WIDTH_DEG - 180.0;
        (west, west + Self::WIDTH_DEG)
    }

    pub fn contains_lon(&self, lon: f64) -> bool {
        let (west, east) = self.lon_range();
        west <= lon && lon <= east
    }

    pub fn to_utm_proj4(&self) -> String {
        let south = match self.hemisphere {
            Hemisphere::North => "",
            Hemisphere::South => " +south",
        };
        format!(
            "+proj=utm +zone={}{} +datum=WGS84 +units=m +no_defs +type=crs",
            self.number, south
        )
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.hemisphere {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        };
        write!(f, "{}{}", self.number, h)
    }
}

/// Picks the zone from a representative point, usually a ring centroid.
/// Longitude 180 falls in zone 60.
pub fn select_zone(centroid: &GeoPoint) -> Result<Zone> {
    centroid.validate()?;
    let band = ((centroid.lon + 180.0) / Zone::WIDTH_DEG).floor() as i64 + 1;
    let number = band.clamp(1, i64::from(Zone::COUNT)) as u8;
    let hemisphere = if centroid.lat >= 0.0 {
        Hemisphere::North
    } else {
        Hemisphere::South
    };
    let zone = Zone { number, hemisphere };
    log::debug!("zone: {} for centroid {}", zone, centroid);
    Ok(zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AreaError;

    fn zone_at(lat: f64, lon: f64) -> Zone {
        select_zone(&GeoPoint::new(lat, lon)).unwrap()
    }

    #[test]
    fn test_madrid() {
        let z = zone_at(40.4168, -3.7038);
        assert_eq!(z.number, 30);
        assert_eq!(z.hemisphere, Hemisphere::North);
        assert_eq!(z.central_meridian(), -3.0);
        assert_eq!(z.to_string(), "30N");
    }

    #[test]
    fn test_domrep() {
        assert_eq!(zone_at(18.88, -69.14).number, 19);
    }

    #[test]
    fn test_southern_hemisphere() {
        let z = zone_at(-33.86, 151.21);
        assert_eq!(z.number, 56);
        assert_eq!(z.hemisphere, Hemisphere::South);
        assert!(z.to_utm_proj4().contains("+south"));
        assert!(!zone_at(0.0, 10.0).to_utm_proj4().contains("+south"));
    }

    #[test]
    fn test_equator_is_north() {
        assert_eq!(zone_at(0.0, 0.0).hemisphere, Hemisphere::North);
        assert_eq!(zone_at(-0.0001, 0.0).hemisphere, Hemisphere::South);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(zone_at(0.0, -180.0).number, 1);
        assert_eq!(zone_at(0.0, 180.0).number, 60);
        assert_eq!(zone_at(0.0, 179.999).number, 60);
        for k in 1..60 {
            let edge = -180.0 + 6.0 * k as f64;
            assert_eq!(zone_at(10.0, edge).number, k as u8 + 1, "edge {}", edge);
            assert_eq!(zone_at(10.0, edge - 1e-9).number, k as u8, "edge {}", edge);
        }
    }

    #[test]
    fn test_deterministic() {
        let p = GeoPoint::new(52.52, 13.405);
        assert_eq!(select_zone(&p), select_zone(&p));
    }

    #[test]
    fn test_lon_range() {
        let z = zone_at(0.0, -3.0);
        assert_eq!(z.lon_range(), (-6.0, 0.0));
        assert!(z.contains_lon(-5.5));
        assert!(!z.contains_lon(0.5));
    }

    #[test]
    fn test_zone_zero_does_not_underflow() {
        let z = Zone {
            number: 0,
            hemisphere: Hemisphere::North,
        };
        assert_eq!(z.lon_range(), (-180.0, -174.0));
        assert!(!z.contains_lon(10.0));
    }

    #[test]
    fn test_invalid_centroid() {
        assert!(matches!(
            select_zone(&GeoPoint::new(f64::NAN, 0.0)),
            Err(AreaError::InvalidInput(_))
        ));
        assert!(matches!(
            select_zone(&GeoPoint::new(0.0, f64::INFINITY)),
            Err(AreaError::InvalidInput(_))
        ));
    }
}
