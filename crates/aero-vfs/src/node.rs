//! Node types for the VFS arena.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Size reported for every directory, matching ext-style filesystems.
pub const DIR_SIZE: u64 = 4096;

/// Default mode bits for directories.
pub const DIR_MODE: u32 = 0o755;

/// Default mode bits for regular files.
pub const FILE_MODE: u32 = 0o644;

/// Opaque, unique node identifier.
///
/// Ids are never reused after deletion.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of a VFS node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VfsNodeType {
    /// Directory
    #[serde(rename = "DIR")]
    Dir,

    /// Regular file
    #[serde(rename = "FILE")]
    File,

    /// Symbolic link
    #[serde(rename = "SYMLINK")]
    Symlink,
}

/// A single entry in the VFS arena.
///
/// Directories keep an ordered `children_ids` list; every child's
/// `parent_id` points back at the directory. The [`Vfs`](crate::Vfs)
/// arena maintains that pair on every mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfsNode {
    /// Unique, immutable id
    pub id: NodeId,
    /// Node kind
    #[serde(rename = "type")]
    pub node_type: VfsNodeType,
    /// Entry name within the parent directory
    pub name: String,
    /// Parent directory id; `None` only for the root
    pub parent_id: Option<NodeId>,
    /// Logical creation timestamp
    pub created_at: u64,
    /// Logical last-modification timestamp
    pub modified_at: u64,
    /// Owning user
    pub owner: String,
    /// Owning group
    pub group: String,
    /// Permission bits, e.g. `0o755`
    pub mode: u32,
    /// Byte size; fixed at [`DIR_SIZE`] for directories
    pub size: u64,
    /// MIME type
    pub mime: String,
    /// File content; empty for directories
    pub content: String,
    /// Ordered child ids (directories only)
    pub children_ids: Vec<NodeId>,
}

impl VfsNode {
    /// Whether this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.node_type == VfsNodeType::Dir
    }

    /// Whether this node is a regular file.
    pub fn is_file(&self) -> bool {
        self.node_type == VfsNodeType::File
    }

    /// Whether this node is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.node_type == VfsNodeType::Symlink
    }

    /// Dotfile convention: names starting with `.` are hidden.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
