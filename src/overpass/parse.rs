//! Validation of raw Overpass elements into tagged entities.

use std::io::Read;

use hashbrown::HashMap;
use tracing::{debug, info, warn};

use super::response::{OverpassResponse, RawElement, RawMember, RawNode, RawPoint, RawRelation, RawWay};
use crate::error::{Error, Result};
use crate::models::{EntityBatch, GeoPoint, Member, Node, Relation, TaggedEntity, Tags, Way};

/// Decode and validate an Overpass JSON response.
pub fn parse_response(json: &str) -> Result<EntityBatch> {
    let response: OverpassResponse = serde_json::from_str(json)?;
    response.into_batch()
}

/// Decode and validate an Overpass JSON response from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<EntityBatch> {
    let response: OverpassResponse = serde_json::from_reader(reader)?;
    response.into_batch()
}

impl OverpassResponse {
    /// Validate every element and resolve way nodes against the nodes of
    /// the same response.
    ///
    /// Element order is preserved. Unknown element types are dropped.
    pub fn into_batch(self) -> Result<EntityBatch> {
        let mut index: HashMap<i64, Node> = HashMap::new();
        for element in &self.elements {
            if let RawElement::Node(raw) = element {
                let node = validate_node(raw)?;
                index.insert(node.id, node);
            }
        }

        let mut entities = Vec::with_capacity(self.elements.len());
        let mut skipped = 0usize;

        for element in self.elements {
            match element {
                RawElement::Node(raw) => match index.get(&raw.id) {
                    Some(node) => entities.push(TaggedEntity::Node(node.clone())),
                    None => return Err(Error::malformed("node", raw.id, "missing from index")),
                },
                RawElement::Way(raw) => entities.push(TaggedEntity::Way(resolve_way(raw, &index)?)),
                RawElement::Relation(raw) => {
                    entities.push(TaggedEntity::Relation(resolve_relation(raw)?))
                }
                RawElement::Other => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} non-entity elements", skipped);
        }

        let batch = EntityBatch::new(entities);
        info!(
            "Parsed {} entities ({} nodes, {} ways, {} relations)",
            batch.len(),
            batch.nodes().count(),
            batch.ways().count(),
            batch.relations().count()
        );

        Ok(batch)
    }
}

fn point(raw: RawPoint) -> Result<GeoPoint> {
    GeoPoint::new(raw.lat, raw.lon)
}

fn validate_node(raw: &RawNode) -> Result<Node> {
    let (lat, lon) = match (raw.lat, raw.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(Error::malformed("node", raw.id, "missing lat/lon")),
    };

    Ok(Node {
        id: raw.id,
        tags: raw.tags.clone(),
        coordinate: GeoPoint::new(lat, lon)?,
    })
}

/// Prefer node references resolved in the response; fall back to inline geometry.
fn resolve_way(raw: RawWay, index: &HashMap<i64, Node>) -> Result<Way> {
    let resolved: Option<Vec<Node>> = if raw.nodes.is_empty() {
        None
    } else {
        raw.nodes.iter().map(|id| index.get(id).cloned()).collect()
    };

    let nodes = match (resolved, raw.geometry) {
        (Some(nodes), _) => nodes,
        (None, Some(geometry)) => nodes_from_geometry(raw.id, &raw.nodes, geometry)?,
        (None, None) if raw.nodes.is_empty() => {
            return Err(Error::malformed("way", raw.id, "no nodes or geometry"))
        }
        (None, None) => {
            let missing = raw
                .nodes
                .iter()
                .find(|id| !index.contains_key(*id))
                .copied()
                .unwrap_or_default();
            return Err(Error::malformed(
                "way",
                raw.id,
                format!("node {} not in response", missing),
            ));
        }
    };

    Ok(Way {
        id: raw.id,
        tags: raw.tags,
        nodes,
    })
}

fn nodes_from_geometry(
    way_id: i64,
    ids: &[i64],
    geometry: Vec<Option<RawPoint>>,
) -> Result<Vec<Node>> {
    if !ids.is_empty() && ids.len() != geometry.len() {
        return Err(Error::malformed(
            "way",
            way_id,
            format!("{} node refs but {} geometry points", ids.len(), geometry.len()),
        ));
    }

    let mut nodes = Vec::with_capacity(geometry.len());
    for (i, raw) in geometry.into_iter().enumerate() {
        let Some(raw) = raw else {
            warn!("Way {}: dropping clipped geometry point {}", way_id, i);
            continue;
        };
        nodes.push(Node {
            id: ids.get(i).copied().unwrap_or_default(),
            tags: Tags::new(),
            coordinate: point(raw)?,
        });
    }
    Ok(nodes)
}

fn resolve_relation(raw: RawRelation) -> Result<Relation> {
    let members = raw
        .members
        .into_iter()
        .map(|m| resolve_member(raw.id, m))
        .collect::<Result<Vec<_>>>()?;

    Ok(Relation {
        id: raw.id,
        tags: raw.tags,
        members,
    })
}

fn resolve_member(relation_id: i64, raw: RawMember) -> Result<Member> {
    let geometry = match raw.geometry {
        Some(points) => {
            let total = points.len();
            let points = points
                .into_iter()
                .flatten()
                .map(point)
                .collect::<Result<Vec<_>>>()?;
            if points.len() < total {
                warn!(
                    "Relation {} member {}: dropped {} clipped geometry points",
                    relation_id,
                    raw.reference,
                    total - points.len()
                );
            }
            Some(points)
        }
        None => None,
    };

    Ok(Member {
        kind: raw.kind,
        role: raw.role,
        reference: raw.reference,
        geometry,
    })
}
