//! Place and coordinate types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{select_projection, ProjectionDescriptor};

/// Type of OSM object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmType {
    Node,
    Way,
    Relation,
}

impl OsmType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsmType::Node => "node",
            OsmType::Way => "way",
            OsmType::Relation => "relation",
        }
    }
}

impl std::fmt::Display for OsmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic point (lat/lon) in WGS84 degrees.
///
/// Serialized as a `[lat, lon]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point, rejecting coordinates outside the WGS84 range
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let point = Self { lat, lon };
        point.validate()?;
        Ok(point)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }

    /// Convert to a `geo` point (x = lon, y = lat)
    pub fn to_geo(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lon)
    }
}

/// A resolved place: what the geocoding collaborator hands to the engine.
///
/// The projection is selected once from the reference point and reused by
/// every category computed for this place.
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    /// OSM relation ID of the place boundary
    pub osm_id: i64,

    /// Display name
    pub name: String,

    /// Reference (downtown) coordinate
    pub reference: GeoPoint,

    #[serde(skip)]
    projection: ProjectionDescriptor,
}

impl Place {
    pub fn new(osm_id: i64, name: impl Into<String>, reference: GeoPoint) -> Result<Self> {
        let projection = select_projection(reference.lat, reference.lon)?;
        Ok(Self {
            osm_id,
            name: name.into(),
            reference,
            projection,
        })
    }

    pub fn projection(&self) -> ProjectionDescriptor {
        self.projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Hemisphere;

    #[test]
    fn test_geo_point_range() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(matches!(
            GeoPoint::new(90.5, 0.0),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_geo_point_serializes_as_pair() {
        let point = GeoPoint::new(63.43, 10.39).unwrap();
        assert_eq!(serde_json::to_string(&point).unwrap(), "[63.43,10.39]");
        let back: GeoPoint = serde_json::from_str("[63.43,10.39]").unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn test_place_selects_projection() {
        let place = Place::new(406068, "Trondheim", GeoPoint::new(63.43, 10.39).unwrap()).unwrap();
        assert_eq!(place.projection().zone_number(), 32);
        assert_eq!(place.projection().hemisphere(), Hemisphere::North);
    }
}
