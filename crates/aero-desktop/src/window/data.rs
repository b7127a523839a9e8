//! Per-window data and application definitions.

use serde::{Deserialize, Serialize};

use crate::geometry::WindowBounds;

/// Per-window state flags.
///
/// Minimized and maximized are independent, but a minimized window is
/// never the focused one, and `previous_bounds` is populated only
/// while maximized so restore can be exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub is_focused: bool,
    pub previous_bounds: Option<WindowBounds>,
}

/// A registered application that can be opened as a window.
///
/// `renderable` is an opaque handle the view layer maps to an actual
/// surface; the window manager never interprets it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppDefinition {
    pub id: String,
    pub title: String,
    pub renderable: String,
    pub default_bounds: Option<WindowBounds>,
}

/// One open window.
///
/// Keyed by the owning application's id: re-opening the same app
/// refocuses the existing window rather than duplicating it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowData {
    pub id: String,
    pub title: String,
    pub renderable: String,
    pub bounds: WindowBounds,
    pub state: WindowState,
}
