use super::{EditLayer, EditLayerOptions};
use crate::error::CairnError;
use crate::io::geojson::read_geometries;
use crate::layer::feature::EditFeature;
use crate::layer::edit_layer::feature_store::FeatureStore;
use crate::messenger::Messenger;
use crate::reconcile::{ReconcileOptions, Reconciliation};
use cairn_types::cartesian::Point2d;

/// Constructor for an [`EditLayer`].
///
/// ```
/// use cairn::layer::EditLayerBuilder;
///
/// let mut layer = EditLayerBuilder::new()
///     .with_geojson(r#"{"type": "LineString", "coordinates": [[0, 0], [1, 1]]}"#)
///     .with_polygons(false)
///     .with_precision(Some(6))
///     .build()?;
/// layer.load()?;
/// # Ok::<(), cairn::error::CairnError>(())
/// ```
#[derive(Default)]
pub struct EditLayerBuilder {
    options: EditLayerOptions,
    geojson: Option<String>,
    messenger: Option<Box<dyn Messenger>>,
}

impl EditLayerBuilder {
    /// Initializes a builder for an empty layer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all the layer options.
    pub fn with_options(mut self, options: EditLayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the options of the reconciliation passes.
    pub fn with_reconcile_options(mut self, options: ReconcileOptions) -> Self {
        self.options.reconcile = options;
        self
    }

    /// Sets whether open lines can be kept. If not, every line is closed into a polygon.
    pub fn with_lines(mut self, allow: bool) -> Self {
        self.options.reconcile.allow_lines = allow;
        self
    }

    /// Sets whether closed lines are turned into polygons.
    pub fn with_polygons(mut self, allow: bool) -> Self {
        self.options.reconcile.allow_polygons = allow;
        self
    }

    /// Sets the single point mode: the layer then holds exactly one point (a marker).
    ///
    /// See also [`EditLayerBuilder::with_fallback_center`].
    pub fn with_single_point(mut self, single_point: bool) -> Self {
        self.options.single_point = single_point;
        self
    }

    /// Marks the point features as draggable.
    pub fn with_draggable_points(mut self, draggable: bool) -> Self {
        self.options.draggable_points = draggable;
        self
    }

    /// Position of the marker in the single point mode when the layer content has no points, usually the center of
    /// the map view.
    pub fn with_fallback_center(mut self, center: Point2d) -> Self {
        self.options.fallback_center = Some(center);
        self
    }

    /// Number of decimals of the coordinates in the GeoJSON output. `None` writes them as they are.
    pub fn with_precision(mut self, precision: Option<u32>) -> Self {
        self.options.precision = precision;
        self
    }

    /// Initial content of the layer as GeoJSON text.
    ///
    /// The content is parsed when the layer is built, and reconciled on [`EditLayer::load`].
    pub fn with_geojson(mut self, text: impl Into<String>) -> Self {
        self.geojson = Some(text.into());
        self
    }

    /// Sets the receiver of change notifications.
    pub fn with_messenger(mut self, messenger: impl Messenger + 'static) -> Self {
        self.messenger = Some(Box::new(messenger));
        self
    }

    /// Consumes the builder and constructs the layer.
    ///
    /// Returns an error if the initial content cannot be read.
    pub fn build(self) -> Result<EditLayer, CairnError> {
        let Self {
            options,
            geojson,
            messenger,
        } = self;

        let geometries = match geojson {
            Some(text) => read_geometries(&text)?,
            None => vec![],
        };
        log::debug!(
            "Building edit layer with {} initial geometries",
            geometries.len()
        );

        Ok(EditLayer {
            features: FeatureStore::new(geometries.into_iter().map(EditFeature::new)),
            options,
            reconciliation: Reconciliation::default(),
            geojson: String::new(),
            messenger,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn options_from_builder_methods() {
        let layer = EditLayerBuilder::new()
            .with_lines(false)
            .with_single_point(true)
            .with_draggable_points(true)
            .with_fallback_center(Point2d::new(1.0, 2.0))
            .with_precision(None)
            .build()
            .expect("builds");

        let options = layer.options();
        assert!(!options.reconcile.allow_lines);
        assert!(options.reconcile.allow_polygons);
        assert!(options.single_point);
        assert!(options.draggable_points);
        assert_eq!(options.fallback_center, Some(Point2d::new(1.0, 2.0)));
        assert_eq!(options.precision, None);
    }

    #[test]
    fn options_from_json() {
        let options: EditLayerOptions =
            serde_json::from_str(r#"{"single_point": true, "reconcile": {"make_holes": false}}"#)
                .expect("valid options");

        let layer = EditLayerBuilder::new()
            .with_options(options)
            .build()
            .expect("builds");
        assert!(layer.options().single_point);
        assert!(!layer.options().reconcile.make_holes);
        assert!(layer.options().reconcile.merge_lines);
        assert_eq!(layer.options().precision, Some(5));
    }

    #[test]
    fn initial_content_is_parsed() {
        let layer = EditLayerBuilder::new()
            .with_geojson(r#"{"type": "MultiPoint", "coordinates": [[0, 0], [1, 1]]}"#)
            .build()
            .expect("builds");
        assert_eq!(layer.features().len(), 1);

        let result = EditLayerBuilder::new()
            .with_geojson(r#"{"type": "Circle", "coordinates": [0, 0]}"#)
            .build();
        assert_matches!(result, Err(CairnError::UnsupportedGeometryType(_)));
    }
}
