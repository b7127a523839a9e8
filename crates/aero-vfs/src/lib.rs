//! Aero OS Virtual Filesystem
//!
//! An in-memory hierarchical filesystem simulating a Unix-like disk
//! without touching the host:
//!
//! - **Node**: arena entries with ordered children and permission bits
//! - **Path**: lexical normalization and resolution helpers
//! - **Vfs**: the arena core with path-addressed CRUD operations
//! - **Bootstrap**: fixed directory tree seeded on first boot
//! - **Clock**: injected monotonic timestamps for deterministic tests
//!
//! # Design Principles
//!
//! 1. **Single owner**: the [`Vfs`] exclusively owns the node arena;
//!    reads return owned clones and callers re-resolve after writes
//! 2. **Validate before mutate**: every operation checks its
//!    preconditions first, so no rollback is ever needed
//! 3. **POSIX-style failures**: errors carry one of
//!    `ENOENT, EEXIST, EPERM, ENOTDIR, EISDIR, EINVAL` plus a message
//! 4. **Protected subtrees**: `/etc`, `/bin`, `/usr`, `/var` reject
//!    writes unless the caller passes `system_override`

pub mod bootstrap;
pub mod clock;
pub mod error;
pub mod node;
pub mod path;
pub mod vfs;

// Re-export main types
pub use clock::MonotonicClock;
pub use error::{ErrorCode, VfsError};
pub use node::{NodeId, VfsNode, VfsNodeType, DIR_SIZE};
pub use path::{file_name, join_path, normalize_path, parent_path};
pub use vfs::Vfs;
