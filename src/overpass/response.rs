//! Raw Overpass API JSON response structure.
//!
//! Mirrors the `[out:json]` output of `out body`, `out geom` and `out geom qt`
//! statements. Nothing here is validated; see `parse` for that.

use serde::Deserialize;

use crate::models::{OsmType, Tags};

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawElement {
    Node(RawNode),
    Way(RawWay),
    Relation(RawRelation),
    /// `area`, `count` and other derived element types
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWay {
    pub id: i64,
    #[serde(default)]
    pub nodes: Vec<i64>,
    /// Inline node coordinates (`out geom`); entries are null for nodes
    /// clipped by a bounding box
    pub geometry: Option<Vec<Option<RawPoint>>>,
    #[serde(default)]
    pub tags: Tags,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    #[serde(rename = "type")]
    pub kind: OsmType,
    #[serde(rename = "ref")]
    pub reference: i64,
    #[serde(default)]
    pub role: String,
    pub geometry: Option<Vec<Option<RawPoint>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRelation {
    pub id: i64,
    #[serde(default)]
    pub members: Vec<RawMember>,
    #[serde(default)]
    pub tags: Tags,
}
