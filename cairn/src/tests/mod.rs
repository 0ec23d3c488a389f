use cairn_types::cartesian::Point2d;
use cairn_types::{ClosedContour, Contour};

use crate::messenger::Messenger;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn pt(x: f64, y: f64) -> Point2d {
    Point2d::new(x, y)
}

pub fn line(points: &[(f64, f64)]) -> Contour<Point2d> {
    Contour::new(points.iter().map(|&(x, y)| pt(x, y)).collect())
}

pub fn ring(points: &[(f64, f64)]) -> ClosedContour<Point2d> {
    ClosedContour::new(points.iter().map(|&(x, y)| pt(x, y)).collect())
}

/// Counter-clockwise closed square with the lower left corner at `(x, y)`.
pub fn square(x: f64, y: f64, size: f64) -> ClosedContour<Point2d> {
    ring(&[
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ])
}

/// Messenger that counts notifications.
#[derive(Clone, Default)]
pub struct CountingMessenger {
    count: Arc<AtomicUsize>,
}

impl CountingMessenger {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl Messenger for CountingMessenger {
    fn request_redraw(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}
