use crate::point::PlanarPoint;

/// Shoelace sum over consecutive pairs, wrap-around included, halved.
/// Positive for counter-clockwise rings.
pub fn signed_area(ring: &[PlanarPoint]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..ring.len() {
        let p1 = &ring[i];
        let p2 = &ring[(i + 1) % ring.len()];
        twice += p1.x * p2.y - p2.x * p1.y;
    }
    twice / 2.0
}

pub fn ring_area(ring: &[PlanarPoint]) -> f64 {
    signed_area(ring).abs()
}

/// Net area of an outer ring (first) minus its holes (the rest),
/// clamped at zero. Rings of fewer than 3 points contribute nothing.
pub fn area(rings: &[Vec<PlanarPoint>]) -> f64 {
    let Some((outer, holes)) = rings.split_first() else {
        return 0.0;
    };
    if outer.len() < 3 {
        log::debug!("area: outer ring has {} points, skipped", outer.len());
        return 0.0;
    }
    let base = ring_area(outer);
    let mut net = base;
    for (i, hole) in holes.iter().enumerate() {
        if hole.len() < 3 {
            log::debug!("area: hole {} has {} points, skipped", i, hole.len());
            continue;
        }
        net -= ring_area(hole);
    }
    if net < 0.0 {
        log::warn!(
            "area: holes exceed outer boundary ({:.1} m2 left of {:.1} m2), clamped to zero",
            net,
            base
        );
        return 0.0;
    }
    net
}
