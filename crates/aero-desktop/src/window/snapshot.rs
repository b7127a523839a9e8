//! Pure window-state transitions.
//!
//! Every transition takes the current [`WindowSnapshot`] by reference
//! and returns a structurally new one; nothing here has side effects.
//! Unknown window ids degrade to no-ops instead of erroring, since UI
//! races (a close followed by a drag on the same id) are expected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundsPatch, Viewport, WindowBounds};
use crate::window::data::{AppDefinition, WindowData, WindowState};

/// Bounds used when an app declares no default.
pub const DEFAULT_BOUNDS: WindowBounds = WindowBounds::new(150.0, 150.0, 600.0, 400.0);

/// z-index for windows not present in the order list.
const Z_INDEX_BASE: i32 = 10;

/// The entire window-manager state at one instant.
///
/// `window_order` is back-to-front: the last id is the front-most
/// window. At most one window is focused, and it matches
/// `focused_window_id` whenever that is non-`None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub windows: BTreeMap<String, WindowData>,
    pub window_order: Vec<String>,
    pub focused_window_id: Option<String>,
}

impl WindowSnapshot {
    /// An empty snapshot with no open windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a window by id.
    pub fn window(&self, id: &str) -> Option<&WindowData> {
        self.windows.get(id)
    }

    /// Windows in back-to-front z-order.
    pub fn ordered_windows(&self) -> Vec<&WindowData> {
        self.window_order
            .iter()
            .filter_map(|id| self.windows.get(id))
            .collect()
    }

    /// Open a window for `app`, or refocus it if already open.
    ///
    /// A re-opened window is un-minimized and brought to the front; a
    /// new window starts at the app's default bounds, focused.
    #[must_use]
    pub fn open_window(&self, app: &AppDefinition) -> Self {
        let mut windows = self.windows.clone();

        if windows.contains_key(&app.id) {
            clear_focused(&mut windows, self.focused_window_id.as_deref());
            if let Some(win) = windows.get_mut(&app.id) {
                win.state.is_minimized = false;
                win.state.is_focused = true;
            }

            return Self {
                windows,
                window_order: bring_to_front(&self.window_order, &app.id),
                focused_window_id: Some(app.id.clone()),
            };
        }

        clear_focused(&mut windows, self.focused_window_id.as_deref());
        windows.insert(
            app.id.clone(),
            WindowData {
                id: app.id.clone(),
                title: app.title.clone(),
                renderable: app.renderable.clone(),
                bounds: app.default_bounds.unwrap_or(DEFAULT_BOUNDS),
                state: WindowState {
                    is_minimized: false,
                    is_maximized: false,
                    is_focused: true,
                    previous_bounds: None,
                },
            },
        );

        let mut window_order = self.window_order.clone();
        window_order.push(app.id.clone());

        Self {
            windows,
            window_order,
            focused_window_id: Some(app.id.clone()),
        }
    }

    /// Close a window. If it was focused, the front-most remaining
    /// non-minimized window (if any) takes focus.
    #[must_use]
    pub fn close_window(&self, id: &str) -> Self {
        if !self.windows.contains_key(id) {
            return self.clone();
        }

        let mut windows = self.windows.clone();
        windows.remove(id);

        let window_order: Vec<String> = self
            .window_order
            .iter()
            .filter(|window_id| *window_id != id)
            .cloned()
            .collect();

        // Minimized windows are skipped; closing the only visible
        // window leaves nothing focused.
        let focused_window_id = if self.focused_window_id.as_deref() == Some(id) {
            window_order
                .iter()
                .rev()
                .find(|window_id| {
                    windows
                        .get(*window_id)
                        .is_some_and(|win| !win.state.is_minimized)
                })
                .cloned()
        } else {
            self.focused_window_id.clone()
        };

        if let Some(focused) = focused_window_id
            .as_ref()
            .and_then(|fid| windows.get_mut(fid))
        {
            focused.state.is_focused = true;
        }

        Self {
            windows,
            window_order,
            focused_window_id,
        }
    }

    /// Focus a window, un-minimizing it and bringing it to the front.
    ///
    /// Focusing the already-focused window returns an equal snapshot,
    /// with no spurious reorder.
    #[must_use]
    pub fn focus_window(&self, id: &str) -> Self {
        if self.focused_window_id.as_deref() == Some(id) || !self.windows.contains_key(id) {
            return self.clone();
        }

        let mut windows = self.windows.clone();
        clear_focused(&mut windows, self.focused_window_id.as_deref());
        if let Some(win) = windows.get_mut(id) {
            win.state.is_focused = true;
            win.state.is_minimized = false;
        }

        Self {
            windows,
            window_order: bring_to_front(&self.window_order, id),
            focused_window_id: Some(String::from(id)),
        }
    }

    /// Flip a window's minimized flag.
    ///
    /// Minimizing drops focus and promotes the top-most remaining
    /// non-minimized window; un-minimizing behaves like
    /// [`focus_window`](Self::focus_window).
    #[must_use]
    pub fn toggle_minimize(&self, id: &str) -> Self {
        let Some(target) = self.windows.get(id) else {
            return self.clone();
        };

        let minimizing = !target.state.is_minimized;
        let mut windows = self.windows.clone();
        if let Some(win) = windows.get_mut(id) {
            win.state.is_minimized = minimizing;
            win.state.is_focused = !minimizing;
        }

        if !minimizing {
            clear_focused(&mut windows, self.focused_window_id.as_deref());
            if let Some(win) = windows.get_mut(id) {
                win.state.is_focused = true;
            }

            return Self {
                windows,
                window_order: bring_to_front(&self.window_order, id),
                focused_window_id: Some(String::from(id)),
            };
        }

        // Scan the order from the top down for the next focus target.
        let next_focused = self
            .window_order
            .iter()
            .rev()
            .find(|window_id| {
                *window_id != id
                    && windows
                        .get(*window_id)
                        .is_some_and(|win| !win.state.is_minimized)
            })
            .cloned();

        if let Some(next) = next_focused.as_ref().and_then(|nid| windows.get_mut(nid)) {
            next.state.is_focused = true;
        }

        Self {
            windows,
            window_order: self.window_order.clone(),
            focused_window_id: next_focused,
        }
    }

    /// Flip a window's maximized flag.
    ///
    /// Maximizing stores the current bounds and fills the viewport;
    /// restoring brings back the stored bounds exactly.
    #[must_use]
    pub fn toggle_maximize(&self, id: &str, viewport: Viewport) -> Self {
        let Some(target) = self.windows.get(id) else {
            return self.clone();
        };

        let maximizing = !target.state.is_maximized;
        let mut windows = self.windows.clone();
        if let Some(win) = windows.get_mut(id) {
            if maximizing {
                win.state.is_maximized = true;
                win.state.previous_bounds = Some(win.bounds);
                win.bounds = WindowBounds::new(0.0, 0.0, viewport.width, viewport.height);
            } else {
                win.state.is_maximized = false;
                win.bounds = win.state.previous_bounds.take().unwrap_or(win.bounds);
            }
        }

        Self {
            windows,
            ..self.clone()
        }
    }

    /// Merge a partial bounds update into a window.
    ///
    /// Bounds are locked while maximized; the call is then a no-op.
    #[must_use]
    pub fn update_bounds(&self, id: &str, patch: BoundsPatch) -> Self {
        let Some(target) = self.windows.get(id) else {
            return self.clone();
        };
        if target.state.is_maximized {
            return self.clone();
        }

        let mut windows = self.windows.clone();
        if let Some(win) = windows.get_mut(id) {
            win.bounds = win.bounds.merged(patch);
        }

        Self {
            windows,
            ..self.clone()
        }
    }
}

/// Move `id` to the end of the order (front-most).
///
/// The id appears exactly once afterwards, whether or not it was
/// already in the order.
pub fn bring_to_front(order: &[String], id: &str) -> Vec<String> {
    let mut next: Vec<String> = order
        .iter()
        .filter(|window_id| *window_id != id)
        .cloned()
        .collect();
    next.push(String::from(id));
    next
}

/// z-index for a window: `10 + position in order`, baseline 10 when
/// the id is not in the order.
pub fn z_index_of(order: &[String], id: &str) -> i32 {
    match order.iter().position(|window_id| window_id == id) {
        Some(index) => Z_INDEX_BASE + index as i32,
        None => Z_INDEX_BASE,
    }
}

fn clear_focused(windows: &mut BTreeMap<String, WindowData>, focused: Option<&str>) {
    if let Some(win) = focused.and_then(|id| windows.get_mut(id)) {
        win.state.is_focused = false;
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
