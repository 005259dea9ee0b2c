//! Per-domain aggregation over one entity batch.
//!
//! Every function borrows the batch and returns an owned summary. Bucketed
//! categories always contain every catalog value, empty or not.

mod administrative;
mod amenity;
mod areas;
mod highway;

pub use administrative::administrative;
pub use amenity::amenities;
pub use areas::{bucket_ways, land_use, leisure};
pub use highway::highways;

use serde::{Deserialize, Serialize};

/// The query categories a place report is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Administrative,
    Amenity,
    Landuse,
    Leisure,
    Highway,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Administrative,
            Category::Amenity,
            Category::Landuse,
            Category::Leisure,
            Category::Highway,
        ]
    }

    /// OSM tag key queried for the category; `None` for the boundary relation itself
    pub fn osm_key(&self) -> Option<&'static str> {
        match self {
            Category::Administrative => None,
            Category::Amenity => Some("amenity"),
            Category::Landuse => Some("landuse"),
            Category::Leisure => Some("leisure"),
            Category::Highway => Some("highway"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Administrative => "administrative",
            Category::Amenity => "amenity",
            Category::Landuse => "landuse",
            Category::Leisure => "leisure",
            Category::Highway => "highway",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
