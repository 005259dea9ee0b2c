//! Closed tag-value catalogs for the bucketed categories.
//!
//! See:
//! - https://wiki.openstreetmap.org/wiki/Key:amenity
//! - https://wiki.openstreetmap.org/wiki/Key:landuse
//! - https://wiki.openstreetmap.org/wiki/Key:leisure

use serde::Serialize;

/// A closed set of values for one OSM tag key.
pub trait Catalog: Copy + Ord + Send + Sync + 'static {
    /// The OSM tag key the values belong to
    const KEY: &'static str;

    /// All values in catalog order
    fn all() -> &'static [Self];

    /// The OSM tag value
    fn as_str(&self) -> &'static str;

    fn from_osm_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == value)
    }
}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident, $key:literal {
            $($variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl Catalog for $name {
            const KEY: &'static str = $key;

            fn all() -> &'static [Self] {
                &[$($name::$variant,)+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

catalog! {
    /// `amenity=*` values grouped as on the OSM wiki (sustenance, education,
    /// transportation, financial, healthcare, entertainment, public service,
    /// facilities, waste, other).
    AmenityKind, "amenity" {
        Bar => "bar",
        Biergarten => "biergarten",
        Cafe => "cafe",
        FastFood => "fast_food",
        FoodCourt => "food_court",
        IceCream => "ice_cream",
        Pub => "pub",
        Restaurant => "restaurant",
        College => "college",
        DrivingSchool => "driving_school",
        Kindergarten => "kindergarten",
        Library => "library",
        School => "school",
        University => "university",
        BicycleParking => "bicycle_parking",
        BicycleRental => "bicycle_rental",
        BusStation => "bus_station",
        CarRental => "car_rental",
        CarWash => "car_wash",
        ChargingStation => "charging_station",
        FerryTerminal => "ferry_terminal",
        Fuel => "fuel",
        Parking => "parking",
        Taxi => "taxi",
        Atm => "atm",
        Bank => "bank",
        BureauDeChange => "bureau_de_change",
        Clinic => "clinic",
        Dentist => "dentist",
        Doctors => "doctors",
        Hospital => "hospital",
        Pharmacy => "pharmacy",
        Veterinary => "veterinary",
        ArtsCentre => "arts_centre",
        Cinema => "cinema",
        CommunityCentre => "community_centre",
        Nightclub => "nightclub",
        Theatre => "theatre",
        Courthouse => "courthouse",
        FireStation => "fire_station",
        Police => "police",
        PostOffice => "post_office",
        Townhall => "townhall",
        DrinkingWater => "drinking_water",
        Shelter => "shelter",
        Toilets => "toilets",
        Recycling => "recycling",
        WasteDisposal => "waste_disposal",
        Marketplace => "marketplace",
        PlaceOfWorship => "place_of_worship",
        Crematorium => "crematorium",
        GraveYard => "grave_yard",
    }
}

catalog! {
    /// `landuse=*` values (developed, rural and other land).
    LandUseKind, "landuse" {
        Commercial => "commercial",
        Construction => "construction",
        Education => "education",
        Industrial => "industrial",
        Residential => "residential",
        Retail => "retail",
        Institutional => "institutional",
        Allotments => "allotments",
        Farmland => "farmland",
        Farmyard => "farmyard",
        Forest => "forest",
        Meadow => "meadow",
        Orchard => "orchard",
        Vineyard => "vineyard",
        Basin => "basin",
        Brownfield => "brownfield",
        Cemetery => "cemetery",
        Garages => "garages",
        Grass => "grass",
        Greenfield => "greenfield",
        Landfill => "landfill",
        Military => "military",
        Quarry => "quarry",
        Railway => "railway",
        RecreationGround => "recreation_ground",
        Religious => "religious",
        VillageGreen => "village_green",
    }
}

catalog! {
    /// `leisure=*` values.
    LeisureKind, "leisure" {
        DogPark => "dog_park",
        FitnessCentre => "fitness_centre",
        Garden => "garden",
        GolfCourse => "golf_course",
        IceRink => "ice_rink",
        Marina => "marina",
        MiniatureGolf => "miniature_golf",
        NatureReserve => "nature_reserve",
        Park => "park",
        Pitch => "pitch",
        Playground => "playground",
        SportsCentre => "sports_centre",
        Stadium => "stadium",
        SwimmingPool => "swimming_pool",
        Track => "track",
        WaterPark => "water_park",
    }
}
