//! Planar area of projected rings and way/member aggregates.

use geo::{Area, LineString, Polygon};
use hashbrown::HashSet;
use tracing::debug;

use super::projection::{PlanarPoint, ProjectionDescriptor, UtmProjector};
use crate::error::{Error, Result};
use crate::models::{GeoPoint, Member, Way, WayAggregate, WayFeature};

const M2_PER_KM2: f64 = 1_000_000.0;

/// Area of a single ring in km², failing on degenerate input.
///
/// An open ring is closed implicitly. Orientation does not matter; the
/// unsigned shoelace area is returned.
pub fn checked_ring_area(points: &[PlanarPoint]) -> Result<f64> {
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(Error::DegenerateGeometry { points: 0 });
    }

    let distinct: HashSet<(u64, u64)> = points
        .iter()
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect();
    if distinct.len() < 3 {
        return Err(Error::DegenerateGeometry {
            points: distinct.len(),
        });
    }

    let polygon = Polygon::new(LineString::from(points.to_vec()), vec![]);
    Ok(polygon.unsigned_area() / M2_PER_KM2)
}

/// Area of a single ring in km²; degenerate rings count as zero.
pub fn ring_area(points: &[PlanarPoint]) -> f64 {
    match checked_ring_area(points) {
        Ok(area) => area,
        Err(e) => {
            debug!("Treating ring as empty: {}", e);
            0.0
        }
    }
}

/// Project each way on its own and sum the per-way areas.
///
/// Overlapping ways are counted twice; no union is formed.
pub fn aggregate_area<'a, I>(ways: I, descriptor: ProjectionDescriptor) -> WayAggregate
where
    I: IntoIterator<Item = &'a Way>,
{
    let projector = UtmProjector::new(descriptor);

    let ways: Vec<WayFeature> = ways
        .into_iter()
        .map(|way| {
            let coordinates = way.coordinates();
            let area = ring_area(&projector.project(&coordinates));
            WayFeature {
                way_id: way.id,
                name: way.name().to_string(),
                coordinates,
                area,
            }
        })
        .collect();

    let total_area = ways.iter().map(|w| w.area).sum();

    WayAggregate {
        way_count: ways.len(),
        ways,
        total_area,
    }
}

/// Area of the single ring formed by concatenating every member's geometry.
///
/// Disjoint rings are joined end to start, so multi-ring boundaries can form
/// a self-intersecting ring whose area differs from the union of the rings.
/// Members without embedded geometry add no points.
pub fn aggregate_members_area<'a, I>(members: I, descriptor: ProjectionDescriptor) -> f64
where
    I: IntoIterator<Item = &'a Member>,
{
    let mut skipped = 0usize;
    let coordinates: Vec<GeoPoint> = members
        .into_iter()
        .filter_map(|m| {
            if m.geometry.is_none() {
                skipped += 1;
            }
            m.geometry.as_deref()
        })
        .flatten()
        .copied()
        .collect();

    if skipped > 0 {
        debug!("{} members carried no geometry", skipped);
    }

    ring_area(&UtmProjector::new(descriptor).project(&coordinates))
}
