use crate::point::{GeoBoundingBox, GeoPoint};

/// A closed ring stored open: the first vertex implicitly follows the last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring {
    pub wgs: Vec<GeoPoint>,
}

impl Ring {
    /// Drops an explicit closing duplicate of the first vertex.
    pub fn new(wgs: Vec<GeoPoint>) -> Self {
        Ring {
            wgs: normalize_ring(wgs),
        }
    }
    pub fn len(&self) -> usize {
        self.wgs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.wgs.is_empty()
    }
    /// Fewer than 3 vertices: zero area, skipped.
    pub fn is_degenerate(&self) -> bool {
        self.wgs.len() < 3
    }

    /// Arithmetic mean of the vertices, None for an empty ring.
    pub fn centroid(&self) -> Option<GeoPoint> {
        if self.wgs.is_empty() {
            return None;
        }
        let n = self.wgs.len() as f64;
        let (lat, lon) = self
            .wgs
            .iter()
            .fold((0.0, 0.0), |(lat, lon), w| (lat + w.lat, lon + w.lon));
        Some(GeoPoint::new(lat / n, lon / n))
    }
}

pub fn normalize_ring(mut wgs: Vec<GeoPoint>) -> Vec<GeoPoint> {
    if wgs.len() >= 2 && wgs.first() == wgs.last() {
        wgs.pop();
    }
    wgs
}

/// One outer boundary plus holes nested inside it. Containment is not
/// checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub outer: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Polygon { outer, holes }
    }

    /// First ring is the outer boundary, the rest are holes.
    /// None when no rings are given.
    pub fn from_rings(rings: Vec<Vec<GeoPoint>>) -> Option<Self> {
        let mut rings = rings.into_iter().map(Ring::new);
        let outer = rings.next()?;
        Some(Polygon {
            outer,
            holes: rings.collect(),
        })
    }

    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    pub fn centroid(&self) -> Option<GeoPoint> {
        self.outer.centroid()
    }

    pub fn wgsbbox(&self) -> Option<GeoBoundingBox> {
        GeoBoundingBox::of(&self.outer.wgs)
    }

    pub fn info(&self) {
        log::info!(
            "polygon: outer len: {}, holes: {}",
            self.outer.len(),
            self.holes.len()
        );
        for (i, h) in self.holes.iter().enumerate() {
            log::info!("polygon: hole {} len: {}", i, h.len());
        }
        if let Some(b) = self.wgsbbox() {
            log::info!("polygon: wgs bbox: {}", b);
        }
        if let Some(c) = self.centroid() {
            log::info!("polygon: centroid: {}", c);
        }
    }
}
