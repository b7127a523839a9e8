//! Arena-based VFS core.
//!
//! All nodes live in a flat map keyed by [`NodeId`]; the tree shape is
//! expressed through `parent_id` / `children_ids` references. Deletion
//! is a sweep over the arena, so there are no nested object graphs to
//! keep alive.
//!
//! Every operation validates before it mutates. An `Err` return means
//! the arena is exactly as it was before the call.

use std::collections::BTreeMap;

use crate::clock::MonotonicClock;
use crate::error::VfsError;
use crate::node::{NodeId, VfsNode, VfsNodeType, DIR_MODE, DIR_SIZE, FILE_MODE};
use crate::path::{join_path, normalize_path, segments};

/// Subtrees writable only with `system_override`.
const SYSTEM_PATHS: [&str; 4] = ["/etc", "/bin", "/usr", "/var"];

/// MIME type reported for directories.
const DIR_MIME: &str = "inode/directory";

/// Fallback MIME type for files created without one.
const DEFAULT_FILE_MIME: &str = "text/plain";

/// The virtual filesystem core.
///
/// Owns the node arena exclusively. Read operations return owned
/// clones; callers must re-resolve by path or id after any mutation
/// rather than holding onto stale copies.
pub struct Vfs {
    nodes: BTreeMap<NodeId, VfsNode>,
    root_id: NodeId,
    clock: MonotonicClock,
}

impl Vfs {
    /// Create an empty filesystem containing only the root directory.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }

    /// Create an empty filesystem with an injected timestamp source.
    pub fn with_clock(clock: MonotonicClock) -> Self {
        let root_id = NodeId::generate();
        let now = clock.now();

        let root = VfsNode {
            id: root_id,
            node_type: VfsNodeType::Dir,
            name: String::from("/"),
            parent_id: None,
            created_at: now,
            modified_at: now,
            owner: String::from("root"),
            group: String::from("root"),
            mode: DIR_MODE,
            size: DIR_SIZE,
            mime: String::from(DIR_MIME),
            content: String::new(),
            children_ids: Vec::new(),
        };

        let mut nodes = BTreeMap::new();
        nodes.insert(root_id, root);

        Self {
            nodes,
            root_id,
            clock,
        }
    }

    /// Id of the root directory.
    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    /// Total number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a node by id.
    pub fn node_by_id(&self, id: NodeId) -> Option<VfsNode> {
        self.nodes.get(&id).cloned()
    }

    /// Whether a path resolves to an existing node.
    pub fn exists(&self, path: &str) -> bool {
        self.resolve_id(path).is_ok()
    }

    /// Resolve a path to its node.
    ///
    /// Fails with `ENOTDIR` if an intermediate segment is not a
    /// directory and `ENOENT` if any segment is missing.
    pub fn resolve_path(&self, path: &str) -> Result<VfsNode, VfsError> {
        let id = self.resolve_id(path)?;
        self.nodes
            .get(&id)
            .cloned()
            .ok_or_else(|| VfsError::not_found(normalize_path(path)))
    }

    /// Create a directory, file, or symlink under `parent_path`.
    ///
    /// `content` and `mime` apply to files only; directories get a fixed
    /// size of [`DIR_SIZE`] and an empty child list. Returns the new node.
    pub fn create_node(
        &mut self,
        parent_path: &str,
        name: &str,
        node_type: VfsNodeType,
        content: &str,
        mime: &str,
        system_override: bool,
    ) -> Result<VfsNode, VfsError> {
        validate_name(name)?;

        let parent_id = self.resolve_id(parent_path)?;
        let parent = self
            .nodes
            .get(&parent_id)
            .ok_or_else(|| VfsError::not_found(normalize_path(parent_path)))?;
        if !parent.is_dir() {
            return Err(VfsError::new(
                crate::error::ErrorCode::Enotdir,
                format!("Parent is not a directory: {}", parent_path),
            ));
        }

        let full_path = join_path(parent_path, name);
        if !system_override {
            self.check_write_permission(&full_path)?;
        }

        if self.child_exists(parent_id, name) {
            return Err(VfsError::exists(name));
        }

        let now = self.clock.now();
        let is_dir = node_type == VfsNodeType::Dir;
        let node = VfsNode {
            id: NodeId::generate(),
            node_type,
            name: String::from(name),
            parent_id: Some(parent_id),
            created_at: now,
            modified_at: now,
            owner: String::from("user"),
            group: String::from("user"),
            mode: if is_dir { DIR_MODE } else { FILE_MODE },
            size: if is_dir {
                DIR_SIZE
            } else {
                content.len() as u64
            },
            mime: if is_dir {
                String::from(DIR_MIME)
            } else if mime.is_empty() {
                String::from(DEFAULT_FILE_MIME)
            } else {
                String::from(mime)
            },
            content: if is_dir {
                String::new()
            } else {
                String::from(content)
            },
            children_ids: Vec::new(),
        };

        let new_id = node.id;
        self.nodes.insert(new_id, node);
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children_ids.push(new_id);
            parent.modified_at = now;
        }

        self.nodes
            .get(&new_id)
            .cloned()
            .ok_or_else(|| VfsError::not_found(name))
    }

    /// Rename a node in place, keeping its parent.
    ///
    /// The root cannot be renamed (`EINVAL`). Write permission is
    /// checked on both the current path and the synthesized new path.
    pub fn rename(
        &mut self,
        path: &str,
        new_name: &str,
        system_override: bool,
    ) -> Result<VfsNode, VfsError> {
        let id = self.resolve_id(path)?;
        if id == self.root_id {
            return Err(VfsError::invalid("Cannot rename root"));
        }
        validate_name(new_name)?;

        if !system_override {
            self.check_write_permission(path)?;
        }

        let parent_id = self
            .nodes
            .get(&id)
            .and_then(|n| n.parent_id)
            .ok_or_else(|| VfsError::invalid("Cannot rename root"))?;

        let new_path = join_path(&self.get_path(parent_id)?, new_name);
        if !system_override {
            self.check_write_permission(&new_path)?;
        }

        if self.child_exists(parent_id, new_name) {
            return Err(VfsError::exists(new_name));
        }

        let now = self.clock.now();
        if let Some(node) = self.nodes.get_mut(&id) {
            node.name = String::from(new_name);
            node.modified_at = now;
        }
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.modified_at = now;
        }

        self.nodes
            .get(&id)
            .cloned()
            .ok_or_else(|| VfsError::not_found(new_path))
    }

    /// Delete a node, recursively removing a directory's entire subtree.
    ///
    /// The root cannot be deleted (`EPERM`).
    pub fn delete(&mut self, path: &str, system_override: bool) -> Result<(), VfsError> {
        let id = self.resolve_id(path)?;
        if id == self.root_id {
            return Err(VfsError::not_permitted("Cannot delete root"));
        }

        if !system_override {
            self.check_write_permission(path)?;
        }

        let parent_id = self.nodes.get(&id).and_then(|n| n.parent_id);
        if let Some(parent_id) = parent_id {
            let now = self.clock.now();
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children_ids.retain(|child| *child != id);
                parent.modified_at = now;
            }
        }

        // Pre-order sweep over the arena; children are unreachable once
        // the node is detached from its parent.
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                pending.extend(node.children_ids);
            }
        }

        Ok(())
    }

    /// List a directory's children in insertion order.
    ///
    /// Sorting is a view-layer concern; the arena never reorders.
    pub fn read_dir(&self, path: &str) -> Result<Vec<VfsNode>, VfsError> {
        let id = self.resolve_id(path)?;
        let node = self
            .nodes
            .get(&id)
            .ok_or_else(|| VfsError::not_found(normalize_path(path)))?;
        if !node.is_dir() {
            return Err(VfsError::not_a_directory(path));
        }

        Ok(node
            .children_ids
            .iter()
            .filter_map(|child_id| self.nodes.get(child_id).cloned())
            .collect())
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &str) -> Result<String, VfsError> {
        let node = self.resolve_path(path)?;
        if node.is_dir() {
            return Err(VfsError::is_a_directory(path));
        }
        Ok(node.content)
    }

    /// Overwrite a file's content, recomputing size and timestamps.
    pub fn write_file(
        &mut self,
        path: &str,
        content: &str,
        system_override: bool,
    ) -> Result<(), VfsError> {
        let id = self.resolve_id(path)?;
        let node = self
            .nodes
            .get(&id)
            .ok_or_else(|| VfsError::not_found(normalize_path(path)))?;
        if node.is_dir() {
            return Err(VfsError::is_a_directory(path));
        }

        if !system_override {
            self.check_write_permission(path)?;
        }

        let now = self.clock.now();
        if let Some(node) = self.nodes.get_mut(&id) {
            node.size = content.len() as u64;
            node.content = String::from(content);
            node.modified_at = now;
        }

        Ok(())
    }

    /// Absolute path of a node, reconstructed by walking `parent_id`
    /// links up to the root. Fails with `ENOENT` for an unknown id.
    pub fn get_path(&self, id: NodeId) -> Result<String, VfsError> {
        let mut node = self
            .nodes
            .get(&id)
            .ok_or_else(|| VfsError::new(crate::error::ErrorCode::Enoent, "Node not found"))?;

        if node.id == self.root_id {
            return Ok(String::from("/"));
        }

        let mut parts = Vec::new();
        loop {
            parts.push(node.name.clone());
            match node.parent_id {
                Some(parent_id) => {
                    node = self.nodes.get(&parent_id).ok_or_else(|| {
                        VfsError::new(crate::error::ErrorCode::Enoent, "Node not found")
                    })?;
                    if node.id == self.root_id {
                        break;
                    }
                }
                None => break,
            }
        }

        parts.reverse();
        Ok(format!("/{}", parts.join("/")))
    }

    /// Whether a path falls under a protected system subtree.
    pub fn is_system_path(&self, path: &str) -> bool {
        let normalized = normalize_path(path);
        SYSTEM_PATHS
            .iter()
            .any(|sys| normalized == *sys || normalized.starts_with(&format!("{}/", sys)))
    }

    /// Reject writes under protected system paths with `EPERM`.
    fn check_write_permission(&self, path: &str) -> Result<(), VfsError> {
        if self.is_system_path(path) {
            return Err(VfsError::not_permitted(format!(
                "Operation not permitted on system path: {}",
                path
            )));
        }
        Ok(())
    }

    fn resolve_id(&self, path: &str) -> Result<NodeId, VfsError> {
        let normalized = normalize_path(path);
        let mut current = self.root_id;

        for segment in segments(&normalized) {
            let node = self
                .nodes
                .get(&current)
                .ok_or_else(|| VfsError::not_found(&normalized))?;
            if !node.is_dir() {
                return Err(VfsError::not_a_directory(segment));
            }

            current = node
                .children_ids
                .iter()
                .copied()
                .find(|child_id| {
                    self.nodes
                        .get(child_id)
                        .is_some_and(|child| child.name == segment)
                })
                .ok_or_else(|| VfsError::not_found(&normalized))?;
        }

        Ok(current)
    }

    fn child_exists(&self, parent_id: NodeId, name: &str) -> bool {
        self.nodes
            .get(&parent_id)
            .map(|parent| {
                parent.children_ids.iter().any(|child_id| {
                    self.nodes
                        .get(child_id)
                        .is_some_and(|child| child.name == name)
                })
            })
            .unwrap_or(false)
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<(), VfsError> {
    if name.is_empty() || name.contains('/') {
        return Err(VfsError::invalid(format!("Invalid name: {:?}", name)));
    }
    Ok(())
}

#[cfg(test)]
#[path = "vfs_tests.rs"]
mod vfs_tests;
