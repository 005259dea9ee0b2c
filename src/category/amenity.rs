//! Amenity buckets, split into point (node) and area (way) features.

use std::collections::BTreeMap;

use tracing::info;

use crate::filter::filter_by_tag_value;
use crate::geometry::{aggregate_area, ProjectionDescriptor};
use crate::models::{
    AmenityKind, AmenitySummary, Catalog, EntityBatch, NodeAggregate, NodeFeature, WayAggregate,
};

pub fn amenities(batch: &EntityBatch, descriptor: ProjectionDescriptor) -> AmenitySummary {
    let mut nodes: BTreeMap<AmenityKind, NodeAggregate> = BTreeMap::new();
    let mut ways: BTreeMap<AmenityKind, WayAggregate> = BTreeMap::new();

    for kind in AmenityKind::all() {
        let matched: Vec<NodeFeature> =
            filter_by_tag_value(batch.nodes(), AmenityKind::KEY, kind.as_str())
                .into_iter()
                .map(|node| NodeFeature {
                    id: node.id,
                    tags: node.tags.clone(),
                    coordinate: node.coordinate,
                })
                .collect();
        nodes.insert(
            *kind,
            NodeAggregate {
                node_count: matched.len(),
                nodes: matched,
            },
        );

        let matched_ways = filter_by_tag_value(batch.ways(), AmenityKind::KEY, kind.as_str());
        ways.insert(*kind, aggregate_area(matched_ways, descriptor));
    }

    info!(
        "amenity: {} nodes, {} ways across {} values",
        nodes.values().map(|b| b.node_count).sum::<usize>(),
        ways.values().map(|b| b.way_count).sum::<usize>(),
        AmenityKind::all().len()
    );

    AmenitySummary { nodes, ways }
}
