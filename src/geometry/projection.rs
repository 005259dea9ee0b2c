//! UTM zone selection and WGS84 -> UTM projection.

use geo_types::Coord;

use crate::error::{Error, Result};
use crate::models::GeoPoint;

/// Planar point in meters (x = easting, y = northing) within one UTM zone.
pub type PlanarPoint = Coord<f64>;

/// WGS84 semi-major axis (m)
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// UTM central scale factor
const UTM_K0: f64 = 0.9996;
const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::North => "north",
            Hemisphere::South => "south",
        }
    }
}

/// UTM zone and hemisphere used to project one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectionDescriptor {
    zone_number: u8,
    hemisphere: Hemisphere,
}

impl ProjectionDescriptor {
    /// Returns `None` for zones outside 1..=60
    pub fn new(zone_number: u8, hemisphere: Hemisphere) -> Option<Self> {
        (1..=60).contains(&zone_number).then_some(Self {
            zone_number,
            hemisphere,
        })
    }

    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Longitude of the zone's central meridian in degrees
    pub fn central_meridian(&self) -> f64 {
        6.0 * f64::from(self.zone_number) - 183.0
    }

    /// EPSG code of the WGS84 UTM zone (326xx north, 327xx south)
    pub fn epsg(&self) -> u32 {
        let base = match self.hemisphere {
            Hemisphere::North => 32600,
            Hemisphere::South => 32700,
        };
        base + u32::from(self.zone_number)
    }
}

/// PROJ definition string
impl std::fmt::Display for ProjectionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "+proj=utm +zone={} +{} +ellps=WGS84 +datum=WGS84 +units=m +no_defs",
            self.zone_number,
            self.hemisphere.as_str()
        )
    }
}

/// Select the UTM zone and hemisphere for a reference coordinate.
pub fn select_projection(lat: f64, lon: f64) -> Result<ProjectionDescriptor> {
    GeoPoint { lat, lon }.validate()?;

    let zone = (((lon + 180.0) / 6.0).floor() as i64 + 1).clamp(1, 60);
    let hemisphere = if lat >= 0.0 {
        Hemisphere::North
    } else {
        Hemisphere::South
    };

    ProjectionDescriptor::new(zone as u8, hemisphere).ok_or(Error::InvalidCoordinate { lat, lon })
}

/// Transverse Mercator projector for a single UTM zone.
///
/// Uses the Krüger series to fourth order in the third flattening, which is
/// accurate to well below a millimetre within a zone.
#[derive(Debug, Clone)]
pub struct UtmProjector {
    descriptor: ProjectionDescriptor,
    lon0: f64,
    false_northing: f64,
    eccentricity: f64,
    /// k0 * A, the scaled rectifying radius
    k0_a: f64,
    alpha: [f64; 4],
}

impl UtmProjector {
    pub fn new(descriptor: ProjectionDescriptor) -> Self {
        let n = WGS84_F / (2.0 - WGS84_F);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;

        let rectifying_radius = WGS84_A / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);
        let alpha = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0,
            49561.0 * n4 / 161280.0,
        ];

        let false_northing = match descriptor.hemisphere() {
            Hemisphere::North => 0.0,
            Hemisphere::South => FALSE_NORTHING_SOUTH,
        };

        Self {
            descriptor,
            lon0: descriptor.central_meridian().to_radians(),
            false_northing,
            eccentricity: (WGS84_F * (2.0 - WGS84_F)).sqrt(),
            k0_a: UTM_K0 * rectifying_radius,
            alpha,
        }
    }

    pub fn descriptor(&self) -> ProjectionDescriptor {
        self.descriptor
    }

    pub fn project_point(&self, point: GeoPoint) -> PlanarPoint {
        let phi = point.lat.to_radians();
        let lambda = point.lon.to_radians() - self.lon0;
        let e = self.eccentricity;

        // Conformal latitude via tan(chi) = sinh(psi)
        let psi = phi.tan().asinh() - e * (e * phi.sin()).atanh();
        let t = psi.sinh();

        let xi_prime = t.atan2(lambda.cos());
        let eta_prime = (lambda.sin() / (1.0 + t * t).sqrt()).atanh();

        let mut xi = xi_prime;
        let mut eta = eta_prime;
        for (j, alpha) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            xi += alpha * (k * xi_prime).sin() * (k * eta_prime).cosh();
            eta += alpha * (k * xi_prime).cos() * (k * eta_prime).sinh();
        }

        Coord {
            x: FALSE_EASTING + self.k0_a * eta,
            y: self.false_northing + self.k0_a * xi,
        }
    }

    pub fn project(&self, points: &[GeoPoint]) -> Vec<PlanarPoint> {
        points.iter().map(|p| self.project_point(*p)).collect()
    }
}

/// Project geographic points into the planar frame of `descriptor`.
///
/// Builds a fresh projector for every call, so results never depend on a
/// previously used descriptor.
pub fn project(points: &[GeoPoint], descriptor: ProjectionDescriptor) -> Vec<PlanarPoint> {
    UtmProjector::new(descriptor).project(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint { lat, lon }
    }

    #[test]
    fn test_select_zone_boundaries() {
        assert_eq!(select_projection(0.0, -180.0).unwrap().zone_number(), 1);
        assert_eq!(select_projection(0.0, 174.0).unwrap().zone_number(), 60);
        assert_eq!(select_projection(0.0, 173.9).unwrap().zone_number(), 59);
        assert_eq!(select_projection(0.0, 179.9).unwrap().zone_number(), 60);
        assert_eq!(select_projection(0.0, 180.0).unwrap().zone_number(), 60);
        assert_eq!(select_projection(0.0, 0.0).unwrap().zone_number(), 31);
        assert_eq!(select_projection(0.0, -0.1).unwrap().zone_number(), 30);
    }

    #[test]
    fn test_select_hemisphere() {
        assert_eq!(select_projection(0.0, 10.0).unwrap().hemisphere(), Hemisphere::North);
        assert_eq!(select_projection(63.4, 10.4).unwrap().hemisphere(), Hemisphere::North);
        assert_eq!(select_projection(-0.001, 10.0).unwrap().hemisphere(), Hemisphere::South);
    }

    #[test]
    fn test_select_zone_always_in_range() {
        let mut lon = -180.0;
        while lon <= 180.0 {
            let zone = select_projection(45.0, lon).unwrap().zone_number();
            assert!((1..=60).contains(&zone), "lon {} gave zone {}", lon, zone);
            lon += 0.7;
        }
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        assert!(matches!(
            select_projection(91.0, 0.0),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(select_projection(0.0, 180.5).is_err());
        assert!(select_projection(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_descriptor_display_and_epsg() {
        let north = select_projection(63.4, 10.4).unwrap();
        assert_eq!(
            north.to_string(),
            "+proj=utm +zone=32 +north +ellps=WGS84 +datum=WGS84 +units=m +no_defs"
        );
        assert_eq!(north.epsg(), 32632);

        let south = select_projection(-33.9, 151.2).unwrap();
        assert_eq!(south.epsg(), 32756);
        assert!(ProjectionDescriptor::new(0, Hemisphere::North).is_none());
        assert!(ProjectionDescriptor::new(61, Hemisphere::North).is_none());
    }

    #[test]
    fn test_project_central_meridian_on_equator() {
        let descriptor = select_projection(0.0, 3.0).unwrap();
        let p = UtmProjector::new(descriptor).project_point(pt(0.0, 3.0));
        assert!((p.x - 500_000.0).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn test_project_southern_false_northing() {
        let descriptor = ProjectionDescriptor::new(31, Hemisphere::South).unwrap();
        let p = UtmProjector::new(descriptor).project_point(pt(0.0, 3.0));
        assert!((p.y - 10_000_000.0).abs() < 1e-6);

        let below = UtmProjector::new(descriptor).project_point(pt(-1.0, 3.0));
        assert!(below.y < 10_000_000.0);
    }

    #[test]
    fn test_project_known_point() {
        // One degree north on the central meridian of zone 31 is ~110.6 km of
        // meridian arc, scaled by k0.
        let descriptor = ProjectionDescriptor::new(31, Hemisphere::North).unwrap();
        let p = UtmProjector::new(descriptor).project_point(pt(1.0, 3.0));
        assert!((p.x - 500_000.0).abs() < 1e-6);
        assert!((p.y - 110_574.389 * UTM_K0).abs() < 1.0, "northing {}", p.y);

        // East of the central meridian easting grows
        let east = UtmProjector::new(descriptor).project_point(pt(1.0, 4.0));
        assert!(east.x > 500_000.0);
    }

    #[test]
    fn test_project_is_one_to_one_and_reproducible() {
        let points = vec![pt(63.42, 10.39), pt(63.43, 10.40), pt(63.44, 10.38)];
        let descriptor = select_projection(63.43, 10.39).unwrap();
        let first = project(&points, descriptor);
        let other = project(&points, ProjectionDescriptor::new(33, Hemisphere::North).unwrap());
        let second = project(&points, descriptor);

        assert_eq!(first.len(), points.len());
        assert_eq!(first, second);
        assert_ne!(first, other);
    }
}
