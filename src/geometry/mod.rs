//! Projection, area and length computations.
//!
//! Areas are computed in a UTM zone chosen once per place; lengths are
//! geodesic on the WGS84 ellipsoid.

mod area;
mod length;
mod projection;

pub use area::{aggregate_area, aggregate_members_area, checked_ring_area, ring_area};
pub use length::path_length;
pub use projection::{
    project, select_projection, Hemisphere, PlanarPoint, ProjectionDescriptor, UtmProjector,
};
