//! Events that drive an editable layer.
//!
//! The editing surface (map widget, drawing tools, file loaders) does not call the layer methods directly. It converts
//! whatever happened on its side into an [`EditEvent`] and gives it to an [`EditEventHandler`], usually an
//! [`EditLayer`](crate::layer::EditLayer). Every handled event results in exactly one reconciliation pass.

use crate::error::CairnError;
use cairn_types::cartesian::Point2d;
use cairn_types::Geom;

/// Handler of editing events.
pub trait EditEventHandler {
    /// Handle the event.
    fn handle(&mut self, event: &EditEvent) -> Result<EventPropagation, CairnError>;
}

/// Editing event.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    /// Initial content was loaded into the layer.
    Load,
    /// User finished drawing a new geometry.
    DrawEnd(Geom<Point2d>),
    /// User finished modifying existing features in place.
    ModifyEnd {
        /// Vertex the user asked to delete. Lines going through it are split there.
        cut: Option<Point2d>,
    },
    /// Geometries were added from outside, e.g. a track loaded from a file.
    FeaturesAdded(Vec<Geom<Point2d>>),
    /// User deleted the feature with the given index.
    RemoveFeature(usize),
}

/// Value returned by an [`EditEventHandler`] to indicate the status of the event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventPropagation {
    /// Event should be propagated to the next handler.
    Propagate,
    /// Event should not be propagated to the next handler.
    Stop,
}
