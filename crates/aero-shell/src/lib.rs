//! Aero OS File Manager Shell
//!
//! View-state layer between the UI and the virtual filesystem:
//!
//! - **Navigation**: browser-style location history
//! - **View**: listing filters (hidden entries, search) and sort order
//! - **FileManager**: selection, error banners, and CRUD glue
//!
//! The shell never caches filesystem truth beyond the current listing,
//! and it re-reads that listing after every write attempt (success or
//! failure) so derived state cannot drift. VFS errors are captured as
//! `{code, message}` banners for the view layer rather than panicking
//! or propagating.

pub mod file_manager;
pub mod navigation;
pub mod view;

// Re-export main types
pub use file_manager::FileManagerState;
pub use navigation::Navigation;
pub use view::{visible_items, ViewMode};
