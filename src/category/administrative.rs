//! Administrative boundary overview.

use tracing::info;

use crate::filter::filter_members;
use crate::geometry::aggregate_members_area;
use crate::models::{AdministrativeSummary, EntityBatch, Place, Subareas};

const ROLE_SUBAREA: &str = "subarea";
const ROLE_OUTER: &str = "outer";

/// Summarize the boundary relation(s) of a place.
///
/// The core coordinate is the place's reference point, not derived from the
/// boundary geometry.
pub fn administrative(place: &Place, batch: &EntityBatch) -> AdministrativeSummary {
    let subareas = Subareas::from_ids(
        filter_members(batch.relations(), ROLE_SUBAREA)
            .iter()
            .map(|m| m.reference)
            .collect(),
    );

    let outers = filter_members(batch.relations(), ROLE_OUTER);
    let total_area = aggregate_members_area(outers.iter().copied(), place.projection());

    info!(
        "Administrative {}: {} subareas, {} outer members, {:.3} km²",
        place.name,
        subareas.total_subareas,
        outers.len(),
        total_area
    );

    AdministrativeSummary {
        core: place.reference,
        subareas,
        total_area,
    }
}
