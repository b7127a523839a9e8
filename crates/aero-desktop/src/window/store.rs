//! Stateful container around the pure snapshot transitions.
//!
//! The store owns the current [`WindowSnapshot`], applies transitions
//! in response to UI intents, and notifies subscribers with the new
//! snapshot. It is constructed explicitly and passed to whoever owns
//! the composition root; there is no process-wide instance.

use tracing::debug;

use crate::geometry::{BoundsPatch, Viewport};
use crate::window::data::AppDefinition;
use crate::window::snapshot::{z_index_of, WindowSnapshot};

/// Handle returned by [`WindowStore::subscribe`].
pub type SubscriptionId = u64;

type Subscriber = Box<dyn FnMut(&WindowSnapshot)>;

/// Holds the current window snapshot and broadcasts replacements.
pub struct WindowStore {
    snapshot: WindowSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl WindowStore {
    /// Create a store with no open windows.
    pub fn new() -> Self {
        Self {
            snapshot: WindowSnapshot::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a store with the given apps already open, in order.
    ///
    /// Each open focuses the new window, so the last app starts
    /// focused and front-most.
    pub fn with_apps(apps: &[AppDefinition]) -> Self {
        let mut store = Self::new();
        for app in apps {
            store.open_window(app);
        }
        store
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &WindowSnapshot {
        &self.snapshot
    }

    /// Register a callback invoked with every new snapshot.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&WindowSnapshot) + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Open or refocus a window for `app`.
    pub fn open_window(&mut self, app: &AppDefinition) {
        debug!(app_id = %app.id, "open window");
        self.apply(self.snapshot.open_window(app));
    }

    /// Close a window.
    pub fn close_window(&mut self, id: &str) {
        debug!(window_id = %id, "close window");
        self.apply(self.snapshot.close_window(id));
    }

    /// Focus a window (pointer-down over any window surface).
    pub fn focus_window(&mut self, id: &str) {
        self.apply(self.snapshot.focus_window(id));
    }

    /// Flip a window's minimized flag.
    pub fn toggle_minimize(&mut self, id: &str) {
        debug!(window_id = %id, "toggle minimize");
        self.apply(self.snapshot.toggle_minimize(id));
    }

    /// Flip a window's maximized flag against the viewport sampled at
    /// call time.
    pub fn toggle_maximize(&mut self, id: &str, viewport: Viewport) {
        debug!(window_id = %id, "toggle maximize");
        self.apply(self.snapshot.toggle_maximize(id, viewport));
    }

    /// Merge a partial bounds update (called at pointer-move rate
    /// during drag and resize).
    pub fn update_bounds(&mut self, id: &str, patch: BoundsPatch) {
        self.apply(self.snapshot.update_bounds(id, patch));
    }

    /// z-index for a window id.
    pub fn z_index(&self, id: &str) -> i32 {
        z_index_of(&self.snapshot.window_order, id)
    }

    fn apply(&mut self, next: WindowSnapshot) {
        self.snapshot = next;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.snapshot);
        }
    }
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new()
    }
}
