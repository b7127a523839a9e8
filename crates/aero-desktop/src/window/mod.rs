//! Window management module
//!
//! Provides window lifecycle, focus and z-order, and the stateful
//! store wrapping the pure transitions.

mod data;
mod snapshot;
mod store;

pub use data::{AppDefinition, WindowData, WindowState};
pub use snapshot::{bring_to_front, z_index_of, WindowSnapshot, DEFAULT_BOUNDS};
pub use store::{SubscriptionId, WindowStore};
