//! Administrative boundary summary types.

use serde::Serialize;

use super::place::GeoPoint;

/// Subarea relations referenced by the place boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Subareas {
    pub total_subareas: usize,
    /// Member reference IDs, ascending
    pub subarea_relation_ids: Vec<i64>,
}

impl Subareas {
    pub fn from_ids(mut ids: Vec<i64>) -> Self {
        ids.sort();
        Self {
            total_subareas: ids.len(),
            subarea_relation_ids: ids,
        }
    }
}

/// Administrative overview of a place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdministrativeSummary {
    /// Core (downtown) coordinate, passed through from the geocoder
    pub core: GeoPoint,

    pub subareas: Subareas,

    /// Area of the "outer" boundary members in km²
    pub total_area: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subareas_sorted_with_duplicates() {
        let subareas = Subareas::from_ids(vec![30, 10, 20, 10]);
        assert_eq!(subareas.total_subareas, 4);
        assert_eq!(subareas.subarea_relation_ids, vec![10, 10, 20, 30]);
    }

    #[test]
    fn test_summary_serialization_shape() {
        let summary = AdministrativeSummary {
            core: GeoPoint { lat: 1.5, lon: 2.5 },
            subareas: Subareas::from_ids(vec![2, 1]),
            total_area: 3.0,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["core"], serde_json::json!([1.5, 2.5]));
        assert_eq!(json["subareas"]["total_subareas"], 2);
        assert_eq!(json["subareas"]["subarea_relation_ids"], serde_json::json!([1, 2]));
        assert_eq!(json["total_area"], 3.0);
    }
}
