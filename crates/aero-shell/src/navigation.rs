//! Location history for the file manager.
//!
//! The history works like a browser's: navigating somewhere new
//! truncates any forward entries, while back/forward step the index
//! without touching the list.

use serde::{Deserialize, Serialize};

use aero_vfs::{normalize_path, Vfs, VfsError};

/// Current location plus back/forward history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub current_path: String,
    pub history: Vec<String>,
    pub history_index: usize,
    pub search_query: String,
}

impl Navigation {
    /// Start at the given path with a single-entry history.
    pub fn starting_at(path: &str) -> Self {
        let normalized = normalize_path(path);
        Self {
            current_path: normalized.clone(),
            history: vec![normalized],
            history_index: 0,
            search_query: String::new(),
        }
    }

    /// Navigate to a directory, pushing it onto the history.
    ///
    /// Forward entries beyond the current index are discarded, and any
    /// active search is reset. Navigating to the current path returns
    /// an unchanged clone. Fails if the target is not a directory.
    pub fn navigate_to(&self, vfs: &Vfs, path: &str) -> Result<Self, VfsError> {
        let normalized = normalize_path(path);
        if normalized == self.current_path {
            return Ok(self.clone());
        }

        let node = vfs.resolve_path(&normalized)?;
        if !node.is_dir() {
            return Err(VfsError::not_a_directory(&normalized));
        }

        let mut history: Vec<String> = self.history[..=self.history_index].to_vec();
        history.push(normalized.clone());

        Ok(Self {
            current_path: normalized,
            history_index: history.len() - 1,
            history,
            search_query: String::new(),
        })
    }

    /// Step back (-1) or forward (+1) through the history.
    ///
    /// Returns `None` when the step would leave the history bounds.
    pub fn step(&self, direction: isize) -> Option<Self> {
        let next_index = self.history_index.checked_add_signed(direction)?;
        if next_index >= self.history.len() {
            return None;
        }

        Some(Self {
            current_path: self.history[next_index].clone(),
            history: self.history.clone(),
            history_index: next_index,
            search_query: String::new(),
        })
    }

    /// Parent of the current location, or `None` at the root.
    pub fn parent_path(&self, vfs: &Vfs) -> Result<Option<String>, VfsError> {
        if self.current_path == "/" {
            return Ok(None);
        }

        let node = vfs.resolve_path(&self.current_path)?;
        match node.parent_id {
            Some(parent_id) => Ok(Some(vfs.get_path(parent_id)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aero_vfs::bootstrap;

    #[test]
    fn test_navigate_pushes_history() {
        let vfs = bootstrap::seeded().unwrap();
        let nav = Navigation::starting_at("/home/user");

        let nav = nav.navigate_to(&vfs, "/home/user/Documents").unwrap();
        assert_eq!(nav.current_path, "/home/user/Documents");
        assert_eq!(nav.history, ["/home/user", "/home/user/Documents"]);
        assert_eq!(nav.history_index, 1);
    }

    #[test]
    fn test_navigate_same_path_is_noop() {
        let vfs = bootstrap::seeded().unwrap();
        let nav = Navigation::starting_at("/home/user");

        let same = nav.navigate_to(&vfs, "/home/user/../user").unwrap();
        assert_eq!(same, nav);
    }

    #[test]
    fn test_navigate_to_file_fails() {
        let vfs = bootstrap::seeded().unwrap();
        let nav = Navigation::starting_at("/home/user");

        let err = nav
            .navigate_to(&vfs, "/home/user/Documents/readme.txt")
            .unwrap_err();
        assert_eq!(err.code, aero_vfs::ErrorCode::Enotdir);
    }

    #[test]
    fn test_back_and_forward() {
        let vfs = bootstrap::seeded().unwrap();
        let nav = Navigation::starting_at("/home/user")
            .navigate_to(&vfs, "/home/user/Documents")
            .unwrap();

        let back = nav.step(-1).unwrap();
        assert_eq!(back.current_path, "/home/user");

        let forward = back.step(1).unwrap();
        assert_eq!(forward.current_path, "/home/user/Documents");

        assert!(forward.step(1).is_none());
        assert!(nav.step(-1).unwrap().step(-1).is_none());
    }

    #[test]
    fn test_navigate_truncates_forward_entries() {
        let vfs = bootstrap::seeded().unwrap();
        let nav = Navigation::starting_at("/home/user")
            .navigate_to(&vfs, "/home/user/Documents")
            .unwrap()
            .step(-1)
            .unwrap()
            .navigate_to(&vfs, "/home/user/Pictures")
            .unwrap();

        assert_eq!(nav.history, ["/home/user", "/home/user/Pictures"]);
        assert!(nav.step(1).is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let vfs = bootstrap::seeded().unwrap();
        let nav = Navigation::starting_at("/home/user")
            .navigate_to(&vfs, "/home/user/Documents")
            .unwrap();

        let json = serde_json::to_string(&nav).unwrap();
        let restored: Navigation = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, nav);
    }

    #[test]
    fn test_parent_path() {
        let vfs = bootstrap::seeded().unwrap();

        let nav = Navigation::starting_at("/home/user");
        assert_eq!(
            nav.parent_path(&vfs).unwrap(),
            Some(String::from("/home"))
        );

        let root = Navigation::starting_at("/");
        assert_eq!(root.parent_path(&vfs).unwrap(), None);
    }
}
