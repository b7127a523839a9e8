//! Drag and resize geometry.
//!
//! Pure helpers computing next bounds from pointer deltas. The actual
//! pointer-event state machine lives in the view layer; it feeds the
//! resulting patches into [`WindowStore::update_bounds`].
//!
//! [`WindowStore::update_bounds`]: crate::window::WindowStore::update_bounds

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundsPatch, WindowBounds};

/// Distance in pixels within which a window snaps to the screen edge.
pub const SNAP_THRESHOLD: f64 = 8.0;

/// Smallest width a window can be resized to.
pub const MIN_WINDOW_WIDTH: f64 = 320.0;

/// Smallest height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: f64 = 200.0;

/// Pointer coordinates for an in-flight drag or resize gesture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerTrack {
    pub start_x: f64,
    pub start_y: f64,
    pub current_x: f64,
    pub current_y: f64,
}

impl PointerTrack {
    /// Horizontal pointer movement since the gesture started.
    pub fn delta_x(&self) -> f64 {
        self.current_x - self.start_x
    }

    /// Vertical pointer movement since the gesture started.
    pub fn delta_y(&self) -> f64 {
        self.current_y - self.start_y
    }
}

/// Position patch for a dragged window.
///
/// The top edge is clamped to the viewport, and positions within
/// [`SNAP_THRESHOLD`] of the origin snap to it on each axis.
pub fn dragged_position(bounds: WindowBounds, pointer: PointerTrack) -> BoundsPatch {
    let mut x = bounds.x + pointer.delta_x();
    let mut y = bounds.y + pointer.delta_y();

    if y < 0.0 {
        y = 0.0;
    }
    if x.abs() < SNAP_THRESHOLD {
        x = 0.0;
    }
    if y.abs() < SNAP_THRESHOLD {
        y = 0.0;
    }

    BoundsPatch::position(x, y)
}

/// Size patch for a resized window, clamped to the minimum size.
pub fn resized_size(bounds: WindowBounds, pointer: PointerTrack) -> BoundsPatch {
    BoundsPatch::size(
        (bounds.width + pointer.delta_x()).max(MIN_WINDOW_WIDTH),
        (bounds.height + pointer.delta_y()).max(MIN_WINDOW_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(start: (f64, f64), current: (f64, f64)) -> PointerTrack {
        PointerTrack {
            start_x: start.0,
            start_y: start.1,
            current_x: current.0,
            current_y: current.1,
        }
    }

    #[test]
    fn test_drag_moves_by_delta() {
        let bounds = WindowBounds::new(100.0, 100.0, 600.0, 400.0);
        let patch = dragged_position(bounds, track((10.0, 10.0), (40.0, 25.0)));

        assert_eq!(patch, BoundsPatch::position(130.0, 115.0));
    }

    #[test]
    fn test_drag_clamps_top_edge() {
        let bounds = WindowBounds::new(100.0, 20.0, 600.0, 400.0);
        let patch = dragged_position(bounds, track((0.0, 0.0), (0.0, -200.0)));

        assert_eq!(patch.y, Some(0.0));
    }

    #[test]
    fn test_drag_snaps_near_origin() {
        let bounds = WindowBounds::new(10.0, 10.0, 600.0, 400.0);
        let patch = dragged_position(bounds, track((0.0, 0.0), (-5.0, -4.0)));

        // 5 and 6 are inside the 8 px snap band.
        assert_eq!(patch, BoundsPatch::position(0.0, 0.0));

        let patch = dragged_position(bounds, track((0.0, 0.0), (5.0, 5.0)));
        assert_eq!(patch, BoundsPatch::position(15.0, 15.0));
    }

    #[test]
    fn test_resize_enforces_minimum() {
        let bounds = WindowBounds::new(0.0, 0.0, 400.0, 300.0);
        let patch = resized_size(bounds, track((0.0, 0.0), (-300.0, -300.0)));

        assert_eq!(patch, BoundsPatch::size(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn test_resize_grows_by_delta() {
        let bounds = WindowBounds::new(0.0, 0.0, 400.0, 300.0);
        let patch = resized_size(bounds, track((0.0, 0.0), (50.0, 80.0)));

        assert_eq!(patch, BoundsPatch::size(450.0, 380.0));
    }
}
