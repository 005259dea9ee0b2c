//! Entity sources: where per-category batches come from.
//!
//! Running queries against a live Overpass endpoint is out of the engine's
//! hands; callers hand it an `EntitySource` instead.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::info;

use crate::category::Category;
use crate::error::Result;
use crate::models::{EntityBatch, Place};
use crate::overpass::parse_reader;

/// Supplies the entity batch of one category for a place.
pub trait EntitySource: Sync {
    /// Categories this source can answer
    fn categories(&self) -> Vec<Category>;

    fn fetch(&self, place: &Place, category: Category) -> Result<EntityBatch>;
}

/// Reads previously saved Overpass JSON responses, one file per category.
///
/// Files ending in `.gz` are decompressed on the fly.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    files: BTreeMap<Category, PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, category: Category, path: impl Into<PathBuf>) -> Self {
        self.files.insert(category, path.into());
        self
    }

    pub fn path(&self, category: Category) -> Option<&Path> {
        self.files.get(&category).map(PathBuf::as_path)
    }
}

impl EntitySource for FileSource {
    fn categories(&self) -> Vec<Category> {
        self.files.keys().copied().collect()
    }

    fn fetch(&self, place: &Place, category: Category) -> Result<EntityBatch> {
        let path = self.files.get(&category).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no {} response configured for {}", category, place.name),
            )
        })?;

        info!("Loading {} response from {}", category, path.display());
        load_batch(path)
    }
}

/// Load an Overpass JSON response from disk, gzip-compressed or not
pub fn load_batch(path: &Path) -> Result<EntityBatch> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|e| e == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    parse_reader(BufReader::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::GeoPoint;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const RESPONSE: &str = r#"{"elements": [
        {"type": "node", "id": 1, "lat": 63.43, "lon": 10.39, "tags": {"amenity": "cafe"}}
    ]}"#;

    fn place() -> Place {
        Place::new(1, "Trondheim", GeoPoint { lat: 63.43, lon: 10.39 }).unwrap()
    }

    #[test]
    fn test_file_source_plain_and_gzip() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("amenity.json");
        std::fs::write(&plain, RESPONSE).unwrap();

        let gz = dir.path().join("leisure.json.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(RESPONSE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let source = FileSource::new()
            .with_file(Category::Amenity, &plain)
            .with_file(Category::Leisure, &gz);

        assert_eq!(source.categories(), vec![Category::Amenity, Category::Leisure]);
        assert_eq!(source.fetch(&place(), Category::Amenity).unwrap().len(), 1);
        assert_eq!(
            source.fetch(&place(), Category::Leisure).unwrap(),
            source.fetch(&place(), Category::Amenity).unwrap()
        );
    }

    #[test]
    fn test_file_source_missing_category() {
        let source = FileSource::new();
        assert!(matches!(
            source.fetch(&place(), Category::Highway),
            Err(Error::Io(_))
        ));
    }
}
