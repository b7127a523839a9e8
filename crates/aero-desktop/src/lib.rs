//! Window Manager for Aero OS
//!
//! This crate provides the core desktop window management:
//! - Window lifecycle (open, close, focus, z-order)
//! - Minimize/maximize state with exact restore
//! - Drag and resize geometry with edge snapping
//! - A subscriber-notifying store around the pure transitions
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`geometry`]: Bounds, patches, and viewport types
//! - [`window`]: Snapshot value type, pure transitions, and the store
//! - [`input`]: Pointer-delta geometry for drag and resize
//! - [`registry`]: Built-in application definitions
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every state change is a function from one
//!    immutable snapshot to a new one, testable without any UI runtime
//! 2. **No-op degradation**: operations on unknown window ids return
//!    the snapshot unchanged instead of erroring, since UI races are
//!    expected
//! 3. **Explicit store**: the [`WindowStore`] is constructed and owned
//!    by the composition root; tests build a fresh one per case

pub mod geometry;
pub mod input;
pub mod registry;
pub mod window;

// Re-export core types for convenience
pub use geometry::{BoundsPatch, Viewport, WindowBounds};
pub use input::{
    dragged_position, resized_size, PointerTrack, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    SNAP_THRESHOLD,
};
pub use registry::default_apps;
pub use window::{
    bring_to_front, z_index_of, AppDefinition, SubscriptionId, WindowData, WindowSnapshot,
    WindowState, WindowStore, DEFAULT_BOUNDS,
};
