//! Core data models for the aggregation engine.

pub mod admin;
pub mod catalog;
pub mod entity;
pub mod place;
pub mod summary;

pub use admin::{AdministrativeSummary, Subareas};
pub use catalog::{AmenityKind, Catalog, LandUseKind, LeisureKind};
pub use entity::{EntityBatch, Member, Node, Relation, TaggedEntity, Tags, Way};
pub use place::{GeoPoint, OsmType, Place};
pub use summary::{
    AmenitySummary, HighwayFeature, HighwaySummary, LandUseSummary, LeisureSummary,
    NodeAggregate, NodeFeature, WayAggregate, WayFeature,
};
