//! Layers hold the features shown and edited on a map.
//!
//! The only layer of this crate is the [`EditLayer`]: it holds the user drawn geometries and keeps them reconciled.

mod edit_layer;
pub mod feature;

pub use edit_layer::{
    EditLayer, EditLayerBuilder, EditLayerOptions, FeatureContainerMut, FeatureStore, FeatureUpdate,
};
pub use feature::{EditFeature, Feature};
