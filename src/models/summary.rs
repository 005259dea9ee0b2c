//! Per-category result structures.
//!
//! Areas are in km², lengths in km, coordinates `[lat, lon]`.

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::{AmenityKind, LandUseKind, LeisureKind};
use super::entity::Tags;
use super::place::GeoPoint;

/// A single way with its projected area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WayFeature {
    pub way_id: i64,
    pub name: String,
    pub coordinates: Vec<GeoPoint>,
    pub area: f64,
}

/// Ways of one bucket with their summed area
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WayAggregate {
    pub ways: Vec<WayFeature>,
    pub way_count: usize,
    pub total_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeFeature {
    pub id: i64,
    pub tags: Tags,
    pub coordinate: GeoPoint,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeAggregate {
    pub nodes: Vec<NodeFeature>,
    pub node_count: usize,
}

/// Amenities bucketed by value, separately for nodes and ways
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AmenitySummary {
    pub nodes: BTreeMap<AmenityKind, NodeAggregate>,
    pub ways: BTreeMap<AmenityKind, WayAggregate>,
}

pub type LandUseSummary = BTreeMap<LandUseKind, WayAggregate>;

pub type LeisureSummary = BTreeMap<LeisureKind, WayAggregate>;

/// A road segment with its geodesic length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighwayFeature {
    pub way_id: i64,
    pub tags: Tags,
    pub coordinates: Vec<GeoPoint>,
    pub length: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HighwaySummary {
    pub highways: Vec<HighwayFeature>,
    pub highway_count: usize,
    pub total_length: f64,
}
