//! [`EditLayer`] keeps the features of an editing session in a canonical state.

use crate::control::{EditEvent, EditEventHandler, EventPropagation};
use crate::error::CairnError;
use crate::io::geojson::{write_geometries, DEFAULT_PRECISION};
use crate::layer::feature::{EditFeature, Feature};
use crate::messenger::Messenger;
use crate::reconcile::{reconcile, ReconcileOptions, Reconciliation};
use cairn_types::cartesian::{Point2d, Rect};
use cairn_types::Geom;
use serde::{Deserialize, Serialize};

mod builder;
mod feature_store;

pub use builder::EditLayerBuilder;
pub use feature_store::{FeatureContainerMut, FeatureStore, FeatureUpdate};

/// Settings of an [`EditLayer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLayerOptions {
    /// Options of every reconciliation pass.
    pub reconcile: ReconcileOptions,
    /// The layer holds a single point only.
    pub single_point: bool,
    /// Point features can be dragged.
    pub draggable_points: bool,
    /// Point used in the single point mode when there is no point in the content.
    pub fallback_center: Option<Point2d>,
    /// Number of decimals of the written coordinates.
    pub precision: Option<u32>,
}

impl Default for EditLayerOptions {
    fn default() -> Self {
        Self {
            reconcile: ReconcileOptions::default(),
            single_point: false,
            draggable_points: false,
            fallback_center: None,
            precision: Some(DEFAULT_PRECISION),
        }
    }
}

/// Layer of features edited by the user.
///
/// The editing surface changes the features (draws new ones, moves vertices, deletes features) and reports it to the
/// layer, either by calling the `on_*` methods or through [`EditEventHandler::handle`]. Every report runs a
/// reconciliation pass over all the features: lines sharing ends are merged, closed lines become polygons, polygons
/// inside other polygons become holes. The features are then replaced with the reconciled geometries, and the GeoJSON
/// text returned by [`EditLayer::to_geojson`] is updated.
///
/// The messenger is notified twice per pass: after the features are cleared and after the new ones are added.
pub struct EditLayer {
    features: FeatureStore<EditFeature>,
    options: EditLayerOptions,
    reconciliation: Reconciliation<Point2d>,
    geojson: String,
    messenger: Option<Box<dyn Messenger>>,
}

impl std::fmt::Debug for EditLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditLayer")
            .field("features", &self.features)
            .field("options", &self.options)
            .field("reconciliation", &self.reconciliation)
            .field("has_messenger", &self.messenger.is_some())
            .finish_non_exhaustive()
    }
}

impl EditLayer {
    /// Layer settings.
    pub fn options(&self) -> &EditLayerOptions {
        &self.options
    }

    /// Features of the layer.
    pub fn features(&self) -> &FeatureStore<EditFeature> {
        &self.features
    }

    /// Mutable features of the layer. Changes made through it are reconciled on the next
    /// [`EditLayer::on_modify_end`].
    pub fn features_mut(&mut self) -> &mut FeatureStore<EditFeature> {
        &mut self.features
    }

    /// Sets the receiver of change notifications.
    pub fn set_messenger(&mut self, messenger: impl Messenger + 'static) {
        self.messenger = Some(Box::new(messenger));
    }

    /// Reconciles the initial content of the layer.
    pub fn load(&mut self) -> Result<(), CairnError> {
        log::debug!("Loading {} features", self.features.len());
        self.update(None)
    }

    /// Adds a drawn geometry.
    pub fn on_draw_end(&mut self, geometry: Geom<Point2d>) -> Result<(), CairnError> {
        log::debug!("Drawn {:?} added", geometry.kind());
        self.features.insert(EditFeature::new(geometry));
        self.update(None)
    }

    /// Reconciles the features after they were modified in place.
    ///
    /// If `cut` is given, lines and rings going through that vertex are split there and the vertex is removed.
    pub fn on_modify_end(&mut self, cut: Option<Point2d>) -> Result<(), CairnError> {
        log::debug!("Features modified, cut at {cut:?}");
        self.update(cut.as_ref())
    }

    /// Adds geometries coming from outside of the editing surface, e.g. a loaded track.
    pub fn add_features(
        &mut self,
        geometries: impl IntoIterator<Item = Geom<Point2d>>,
    ) -> Result<(), CairnError> {
        let count = self.features.len();
        self.features
            .extend(geometries.into_iter().map(EditFeature::new));
        log::debug!("Added {} features", self.features.len() - count);
        self.update(None)
    }

    /// Removes the feature with the given index and returns it.
    ///
    /// Returns [`CairnError::NotFound`] and leaves the layer unchanged if there is no such feature.
    pub fn remove_feature(&mut self, index: usize) -> Result<EditFeature, CairnError> {
        let feature = self.features.remove(index).ok_or(CairnError::NotFound)?;
        log::debug!("Feature {index} removed");
        self.update(None)?;
        Ok(feature)
    }

    /// Moves every point feature to the given position, e.g. when the user types in the marker coordinates.
    pub fn set_point(&mut self, point: Point2d) -> Result<(), CairnError> {
        for index in 0..self.features.len() {
            if let Some(mut feature) = self.features.get_mut(index) {
                if matches!(feature.as_ref().geometry, Geom::Point(_)) {
                    feature.as_mut().geometry = Geom::Point(point);
                }
            }
        }

        self.update(None)
    }

    /// First point of the layer, for displaying its coordinates.
    pub fn first_point(&self) -> Option<Point2d> {
        self.features.iter().find_map(|feature| match feature.geometry() {
            Geom::Point(point) => Some(*point),
            _ => None,
        })
    }

    /// Extent of all features. `None` if the layer has no points at all.
    pub fn extent(&self) -> Option<Rect> {
        self.features
            .iter()
            .filter_map(|feature| feature.geometry().bounding_rectangle())
            .collect()
    }

    /// Result of the last reconciliation pass.
    pub fn reconciliation(&self) -> &Reconciliation<Point2d> {
        &self.reconciliation
    }

    /// Layer content as GeoJSON text, as of the last reconciliation pass.
    pub fn to_geojson(&self) -> &str {
        &self.geojson
    }

    fn update(&mut self, cut: Option<&Point2d>) -> Result<(), CairnError> {
        let reconciliation = reconcile(
            self.features.iter().map(Feature::geometry),
            &self.options.reconcile,
            cut,
        );

        self.features.clear();
        self.request_redraw();

        let draggable = self.options.draggable_points;
        if self.options.single_point {
            match reconciliation
                .points
                .first()
                .copied()
                .or(self.options.fallback_center)
            {
                Some(point) => self.features.insert(EditFeature {
                    geometry: Geom::Point(point),
                    draggable,
                }),
                None => log::warn!("Single point layer has no point and no fallback center"),
            }
        } else {
            for geometry in reconciliation.geometries() {
                let draggable = draggable && matches!(geometry, Geom::Point(_));
                self.features.insert(EditFeature {
                    geometry,
                    draggable,
                });
            }
        }

        self.geojson = write_geometries(
            self.features.iter().map(Feature::geometry),
            self.options.precision,
        )?;
        self.reconciliation = reconciliation;
        self.request_redraw();

        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.request_redraw();
        }
    }
}

impl EditEventHandler for EditLayer {
    fn handle(&mut self, event: &EditEvent) -> Result<EventPropagation, CairnError> {
        match event {
            EditEvent::Load => self.load()?,
            EditEvent::DrawEnd(geometry) => self.on_draw_end(geometry.clone())?,
            EditEvent::ModifyEnd { cut } => self.on_modify_end(*cut)?,
            EditEvent::FeaturesAdded(geometries) => self.add_features(geometries.iter().cloned())?,
            EditEvent::RemoveFeature(index) => {
                self.remove_feature(*index)?;
            }
        }

        Ok(EventPropagation::Stop)
    }
}
