//! Features stored in an editable layer.

use cairn_types::cartesian::Point2d;
use cairn_types::Geom;
use serde::{Deserialize, Serialize};

/// A feature is an object with a geometry that can be stored in a layer.
pub trait Feature {
    /// Type of the geometry the feature returns.
    type Geom;
    /// Returns the geometry of the feature.
    fn geometry(&self) -> &Self::Geom;
}

/// Feature of an [`EditLayer`](super::EditLayer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditFeature {
    /// Geometry of the feature.
    pub geometry: Geom<Point2d>,
    /// Whether the editing surface lets the user drag this feature around. Only set for points.
    pub draggable: bool,
}

impl EditFeature {
    /// Creates a feature that cannot be dragged.
    pub fn new(geometry: Geom<Point2d>) -> Self {
        Self {
            geometry,
            draggable: false,
        }
    }
}

impl Feature for EditFeature {
    type Geom = Geom<Point2d>;

    fn geometry(&self) -> &Self::Geom {
        &self.geometry
    }
}

impl From<Geom<Point2d>> for EditFeature {
    fn from(geometry: Geom<Point2d>) -> Self {
        Self::new(geometry)
    }
}
