//! Reading and writing of the persisted editor content.

pub mod geojson;
