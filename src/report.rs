//! Full place report across every available category.

use serde::Serialize;
use tracing::info;

use crate::category::{self, Category};
use crate::error::Result;
use crate::models::{
    AdministrativeSummary, AmenitySummary, EntityBatch, HighwaySummary, LandUseSummary,
    LeisureSummary, Place,
};
use crate::source::EntitySource;

/// Nested result for one place. Categories without a batch are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceReport {
    pub place: Place,
    /// PROJ definition of the UTM zone used for areas
    pub projection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative: Option<AdministrativeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenity: Option<AmenitySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landuse: Option<LandUseSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leisure: Option<LeisureSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highway: Option<HighwaySummary>,
}

/// Pre-fetched batches, one optional batch per category
#[derive(Debug, Clone, Default)]
pub struct Batches {
    pub administrative: Option<EntityBatch>,
    pub amenity: Option<EntityBatch>,
    pub landuse: Option<EntityBatch>,
    pub leisure: Option<EntityBatch>,
    pub highway: Option<EntityBatch>,
}

impl Batches {
    /// Fetch every category the source can answer
    pub fn fetch(place: &Place, source: &dyn EntitySource) -> Result<Self> {
        let mut batches = Self::default();
        for category in source.categories() {
            let batch = Some(source.fetch(place, category)?);
            match category {
                Category::Administrative => batches.administrative = batch,
                Category::Amenity => batches.amenity = batch,
                Category::Landuse => batches.landuse = batch,
                Category::Leisure => batches.leisure = batch,
                Category::Highway => batches.highway = batch,
            }
        }
        Ok(batches)
    }
}

/// Aggregate every present batch.
///
/// Categories are independent and share only the projection, so they run on
/// the rayon pool.
pub fn build_report(place: &Place, batches: &Batches) -> PlaceReport {
    let projection = place.projection();
    info!("Building report for {} using {}", place.name, projection);

    let ((administrative, amenity), (landuse, (leisure, highway))) = rayon::join(
        || {
            rayon::join(
                || {
                    batches
                        .administrative
                        .as_ref()
                        .map(|b| category::administrative(place, b))
                },
                || {
                    batches
                        .amenity
                        .as_ref()
                        .map(|b| category::amenities(b, projection))
                },
            )
        },
        || {
            rayon::join(
                || {
                    batches
                        .landuse
                        .as_ref()
                        .map(|b| category::land_use(b, projection))
                },
                || {
                    rayon::join(
                        || {
                            batches
                                .leisure
                                .as_ref()
                                .map(|b| category::leisure(b, projection))
                        },
                        || batches.highway.as_ref().map(category::highways),
                    )
                },
            )
        },
    );

    PlaceReport {
        place: place.clone(),
        projection: projection.to_string(),
        administrative,
        amenity,
        landuse,
        leisure,
        highway,
    }
}

/// Fetch and aggregate in one step
pub fn summarize_place(place: &Place, source: &dyn EntitySource) -> Result<PlaceReport> {
    let batches = Batches::fetch(place, source)?;
    Ok(build_report(place, &batches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::fixtures::{node, square_way, tags};
    use crate::error::Error;
    use crate::models::{GeoPoint, Member, OsmType, Relation, TaggedEntity, Way};

    struct StaticSource;

    impl EntitySource for StaticSource {
        fn categories(&self) -> Vec<Category> {
            vec![Category::Administrative, Category::Amenity, Category::Highway]
        }

        fn fetch(&self, _place: &Place, category: Category) -> Result<EntityBatch> {
            Ok(match category {
                Category::Administrative => EntityBatch::new(vec![TaggedEntity::Relation(Relation {
                    id: 1,
                    tags: tags(&[("boundary", "administrative")]),
                    members: vec![Member {
                        kind: OsmType::Relation,
                        role: "subarea".into(),
                        reference: 42,
                        geometry: None,
                    }],
                })]),
                Category::Amenity => EntityBatch::new(vec![
                    TaggedEntity::Node(node(1, 63.43, 10.39, &[("amenity", "pub")])),
                    TaggedEntity::Way(square_way(2, 63.42, 10.38, 0.001, &[("amenity", "parking")])),
                ]),
                Category::Highway => EntityBatch::new(vec![TaggedEntity::Way(Way {
                    id: 3,
                    tags: tags(&[("highway", "residential")]),
                    nodes: vec![node(4, 63.43, 10.39, &[]), node(5, 63.44, 10.39, &[])],
                })]),
                _ => EntityBatch::default(),
            })
        }
    }

    struct FailingSource;

    impl EntitySource for FailingSource {
        fn categories(&self) -> Vec<Category> {
            vec![Category::Landuse]
        }

        fn fetch(&self, _place: &Place, _category: Category) -> Result<EntityBatch> {
            Err(Error::malformed("way", 9, "broken"))
        }
    }

    fn place() -> Place {
        Place::new(406068, "Trondheim", GeoPoint { lat: 63.43, lon: 10.39 }).unwrap()
    }

    #[test]
    fn test_summarize_place_present_categories() {
        let report = summarize_place(&place(), &StaticSource).unwrap();

        let admin = report.administrative.as_ref().unwrap();
        assert_eq!(admin.subareas.subarea_relation_ids, vec![42]);
        assert_eq!(admin.core, place().reference);

        let amenity = report.amenity.as_ref().unwrap();
        assert_eq!(amenity.nodes[&crate::models::AmenityKind::Pub].node_count, 1);
        assert_eq!(amenity.ways[&crate::models::AmenityKind::Parking].way_count, 1);

        let highway = report.highway.as_ref().unwrap();
        assert_eq!(highway.highway_count, 1);
        assert!((highway.total_length - 1.11).abs() < 0.02);

        assert!(report.landuse.is_none());
        assert!(report.leisure.is_none());
    }

    #[test]
    fn test_report_json_omits_missing_categories() {
        let report = summarize_place(&place(), &StaticSource).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["place"]["osm_id"], 406068);
        assert_eq!(json["place"]["reference"], serde_json::json!([63.43, 10.39]));
        assert!(json["projection"].as_str().unwrap().contains("+zone=32 +north"));
        assert!(json.get("landuse").is_none());
        assert!(json["administrative"]["total_area"].is_number());
    }

    #[test]
    fn test_summarize_place_propagates_source_errors() {
        assert!(matches!(
            summarize_place(&place(), &FailingSource),
            Err(Error::MalformedEntity { id: 9, .. })
        ));
    }
}
