//! Road network lengths.

use tracing::info;

use crate::geometry::path_length;
use crate::models::{EntityBatch, HighwayFeature, HighwaySummary};

/// Measure every way in the batch; no value bucketing.
pub fn highways(batch: &EntityBatch) -> HighwaySummary {
    let highways: Vec<HighwayFeature> = batch
        .ways()
        .map(|way| {
            let coordinates = way.coordinates();
            HighwayFeature {
                way_id: way.id,
                tags: way.tags.clone(),
                length: path_length(&coordinates),
                coordinates,
            }
        })
        .collect();

    let total_length = highways.iter().map(|h| h.length).sum();

    info!("highway: {} ways, {:.3} km", highways.len(), total_length);

    HighwaySummary {
        highway_count: highways.len(),
        highways,
        total_length,
    }
}
