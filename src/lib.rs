//! osmlf - OpenStreetMap location features
//!
//! Aggregates tagged OSM entities for a place into per-category summaries:
//! administrative boundary area and subareas, amenities, land use, leisure
//! areas and road network length.

pub mod category;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod models;
pub mod overpass;
pub mod report;
pub mod source;

pub use category::Category;
pub use error::{Error, Result};
pub use models::{EntityBatch, GeoPoint, Place, TaggedEntity};
pub use report::{build_report, summarize_place, PlaceReport};
pub use source::{EntitySource, FileSource};
