//! Geometry types for window placement.

use serde::{Deserialize, Serialize};

/// Window position and size in UI pixels, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowBounds {
    /// Create bounds from position and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Apply a partial update, keeping unspecified fields.
    pub fn merged(&self, patch: BoundsPatch) -> Self {
        Self {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
        }
    }
}

/// Partial bounds update; `None` fields are left unchanged.
///
/// Drag produces position-only patches, resize size-only patches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundsPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl BoundsPatch {
    /// Position-only patch.
    pub const fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: None,
            height: None,
        }
    }

    /// Size-only patch.
    pub const fn size(width: f64, height: f64) -> Self {
        Self {
            x: None,
            y: None,
            width: Some(width),
            height: Some(height),
        }
    }
}

/// Display surface dimensions, sampled at call time for maximize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
