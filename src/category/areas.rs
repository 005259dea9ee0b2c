//! Area buckets for land-use and leisure ways.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::filter::filter_by_tag_value;
use crate::geometry::{aggregate_area, ProjectionDescriptor};
use crate::models::{
    Catalog, EntityBatch, LandUseKind, LandUseSummary, LeisureKind, LeisureSummary, WayAggregate,
};

/// Bucket the batch's ways by catalog value and aggregate each bucket's area.
///
/// Every catalog value gets a bucket, even when no way matches it.
pub fn bucket_ways<C: Catalog>(
    batch: &EntityBatch,
    descriptor: ProjectionDescriptor,
) -> BTreeMap<C, WayAggregate> {
    let buckets: BTreeMap<C, WayAggregate> = C::all()
        .iter()
        .map(|kind| {
            let ways = filter_by_tag_value(batch.ways(), C::KEY, kind.as_str());
            let aggregate = aggregate_area(ways, descriptor);
            if aggregate.way_count > 0 {
                debug!(
                    "{}={}: {} ways, {:.3} km²",
                    C::KEY,
                    kind.as_str(),
                    aggregate.way_count,
                    aggregate.total_area
                );
            }
            (*kind, aggregate)
        })
        .collect();

    info!(
        "{}: {} ways in {} of {} buckets",
        C::KEY,
        buckets.values().map(|b| b.way_count).sum::<usize>(),
        buckets.values().filter(|b| b.way_count > 0).count(),
        buckets.len()
    );

    buckets
}

pub fn land_use(batch: &EntityBatch, descriptor: ProjectionDescriptor) -> LandUseSummary {
    bucket_ways::<LandUseKind>(batch, descriptor)
}

pub fn leisure(batch: &EntityBatch, descriptor: ProjectionDescriptor) -> LeisureSummary {
    bucket_ways::<LeisureKind>(batch, descriptor)
}
