/// Receiver of change notifications of a layer.
///
/// A layer calls [`Messenger::request_redraw`] every time its features change, so that the application can display
/// the new state and pick up the new serialized content.
pub trait Messenger: Send + Sync {
    /// Notifies that the layer content changed.
    fn request_redraw(&self);
}
