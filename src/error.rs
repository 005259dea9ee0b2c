//! Error types shared by the aggregation engine.

use thiserror::Error;

/// Errors surfaced by the aggregation engine and its boundary parser.
#[derive(Debug, Error)]
pub enum Error {
    /// Latitude/longitude outside the WGS84 range (or not finite)
    #[error("invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// An entity is missing structure a filter or aggregate step depends on
    #[error("malformed {kind} {id}: {reason}")]
    MalformedEntity {
        kind: &'static str,
        id: i64,
        reason: String,
    },

    /// A ring with fewer than three distinct points.
    ///
    /// Only produced by the checked area functions; aggregation absorbs it as zero area.
    #[error("degenerate ring with {points} distinct points")]
    DegenerateGeometry { points: usize },

    #[error("failed to read entity batch: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode entity batch: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(kind: &'static str, id: i64, reason: impl Into<String>) -> Self {
        Error::MalformedEntity {
            kind,
            id,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
