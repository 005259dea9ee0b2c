//! Tagged OSM entities as handed over by the query collaborator.

use std::collections::BTreeMap;

use serde::Serialize;

use super::place::{GeoPoint, OsmType};

/// OSM tag mapping
pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: i64,
    pub tags: Tags,
    pub coordinate: GeoPoint,
}

/// Ordered path of nodes; a ring when the first and last node coincide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Way {
    pub id: i64,
    pub tags: Tags,
    pub nodes: Vec<Node>,
}

impl Way {
    /// Node coordinates in path order
    pub fn coordinates(&self) -> Vec<GeoPoint> {
        self.nodes.iter().map(|n| n.coordinate).collect()
    }

    /// The `name` tag, or "unknown"
    pub fn name(&self) -> &str {
        self.tags.get("name").map(String::as_str).unwrap_or("unknown")
    }

    pub fn is_closed(&self) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => self.nodes.len() > 2 && first.coordinate == last.coordinate,
            _ => false,
        }
    }
}

/// Relation member reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub kind: OsmType,
    pub role: String,
    pub reference: i64,
    /// Embedded geometry, present when the member is itself a way
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Vec<GeoPoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    pub id: i64,
    pub tags: Tags,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaggedEntity {
    Node(Node),
    Way(Way),
    Relation(Relation),
}

impl TaggedEntity {
    pub fn id(&self) -> i64 {
        match self {
            TaggedEntity::Node(n) => n.id,
            TaggedEntity::Way(w) => w.id,
            TaggedEntity::Relation(r) => r.id,
        }
    }

    pub fn osm_type(&self) -> OsmType {
        match self {
            TaggedEntity::Node(_) => OsmType::Node,
            TaggedEntity::Way(_) => OsmType::Way,
            TaggedEntity::Relation(_) => OsmType::Relation,
        }
    }

    pub fn tags(&self) -> &Tags {
        match self {
            TaggedEntity::Node(n) => &n.tags,
            TaggedEntity::Way(w) => &w.tags,
            TaggedEntity::Relation(r) => &r.tags,
        }
    }
}

/// One query response worth of entities, in response order.
///
/// The engine only ever borrows a batch, so the same batch can feed several
/// category computations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityBatch {
    entities: Vec<TaggedEntity>,
}

impl EntityBatch {
    pub fn new(entities: Vec<TaggedEntity>) -> Self {
        Self { entities }
    }

    pub fn entities(&self) -> &[TaggedEntity] {
        &self.entities
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.entities.iter().filter_map(|e| match e {
            TaggedEntity::Node(n) => Some(n),
            _ => None,
        })
    }

    pub fn ways(&self) -> impl Iterator<Item = &Way> {
        self.entities.iter().filter_map(|e| match e {
            TaggedEntity::Way(w) => Some(w),
            _ => None,
        })
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.entities.iter().filter_map(|e| match e {
            TaggedEntity::Relation(r) => Some(r),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<TaggedEntity> for EntityBatch {
    fn from_iter<I: IntoIterator<Item = TaggedEntity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: i64, lat: f64, lon: f64) -> Node {
        Node {
            id,
            tags: Tags::new(),
            coordinate: GeoPoint { lat, lon },
        }
    }

    #[test]
    fn test_way_name_defaults_to_unknown() {
        let mut way = Way {
            id: 1,
            tags: Tags::new(),
            nodes: vec![],
        };
        assert_eq!(way.name(), "unknown");
        way.tags.insert("name".into(), "Marka".into());
        assert_eq!(way.name(), "Marka");
    }

    #[test]
    fn test_way_is_closed() {
        let open = Way {
            id: 1,
            tags: Tags::new(),
            nodes: vec![node(1, 0.0, 0.0), node(2, 0.0, 1.0), node(3, 1.0, 1.0)],
        };
        assert!(!open.is_closed());

        let mut closed = open.clone();
        closed.nodes.push(node(1, 0.0, 0.0));
        assert!(closed.is_closed());
    }

    #[test]
    fn test_batch_accessors_split_by_variant() {
        let batch: EntityBatch = vec![
            TaggedEntity::Node(node(1, 0.0, 0.0)),
            TaggedEntity::Way(Way {
                id: 2,
                tags: Tags::new(),
                nodes: vec![],
            }),
            TaggedEntity::Relation(Relation {
                id: 3,
                tags: Tags::new(),
                members: vec![],
            }),
            TaggedEntity::Node(node(4, 0.0, 0.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(batch.len(), 4);
        assert_eq!(batch.nodes().map(|n| n.id).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(batch.ways().count(), 1);
        assert_eq!(batch.relations().next().map(|r| r.id), Some(3));
    }
}
