//! Error types used by the crate.

use cairn_types::error::CairnTypesError;
use thiserror::Error;

/// Cairn error type.
#[derive(Debug, Error)]
pub enum CairnError {
    /// Geometry could not be converted into the internal representation.
    #[error(transparent)]
    Types(#[from] CairnTypesError),
    /// GeoJSON document contains a geometry type that the editor does not know.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),
    /// GeoJSON document is malformed.
    #[error("invalid GeoJSON: {0}")]
    GeoJson(String),
    /// Failed to serialize the output document.
    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),
    /// Item not found.
    #[error("item not found")]
    NotFound,
}

impl From<geojson::Error> for CairnError {
    fn from(value: geojson::Error) -> Self {
        match value {
            geojson::Error::GeometryUnknownType(kind) => Self::UnsupportedGeometryType(kind),
            other => Self::GeoJson(other.to_string()),
        }
    }
}
