use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use osmlf::{Category, FileSource, GeoPoint, Place};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub place: PlaceConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Geocoded place, as resolved ahead of time
#[derive(Debug, Deserialize, Clone)]
pub struct PlaceConfig {
    pub name: String,
    pub osm_id: i64,
    pub lat: f64,
    pub lon: f64,
}

/// Saved Overpass responses per category
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SourcesConfig {
    pub administrative: Option<PathBuf>,
    pub amenity: Option<PathBuf>,
    pub landuse: Option<PathBuf>,
    pub leisure: Option<PathBuf>,
    pub highway: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let mut config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        if let Some(base) = path.parent() {
            config.sources.resolve_relative_to(base);
        }
        Ok(config)
    }

    pub fn place(&self) -> Result<Place> {
        let reference = GeoPoint::new(self.place.lat, self.place.lon)
            .with_context(|| format!("Invalid reference point for {}", self.place.name))?;
        Ok(Place::new(self.place.osm_id, &self.place.name, reference)?)
    }

    pub fn file_source(&self) -> FileSource {
        self.sources
            .entries()
            .into_iter()
            .fold(FileSource::new(), |source, (category, path)| {
                source.with_file(category, path)
            })
    }
}

impl SourcesConfig {
    fn entries(&self) -> Vec<(Category, &PathBuf)> {
        [
            (Category::Administrative, &self.administrative),
            (Category::Amenity, &self.amenity),
            (Category::Landuse, &self.landuse),
            (Category::Leisure, &self.leisure),
            (Category::Highway, &self.highway),
        ]
        .into_iter()
        .filter_map(|(category, path)| path.as_ref().map(|p| (category, p)))
        .collect()
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.administrative,
            &mut self.amenity,
            &mut self.landuse,
            &mut self.leisure,
            &mut self.highway,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
