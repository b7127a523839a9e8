//! File-manager view state.
//!
//! Holds the navigation, selection, and cached listing the file pane
//! renders from. The VFS is passed into each method rather than held;
//! the composition root owns both and decides who borrows what.
//!
//! Every mutating call re-reads the listing afterwards, success or
//! not, so the cached items never drift from the filesystem.

use tracing::debug;

use aero_vfs::{NodeId, Vfs, VfsError, VfsNode, VfsNodeType};

use crate::navigation::Navigation;
use crate::view::{visible_items, ViewMode};

/// Where a fresh file manager opens.
const HOME_PATH: &str = "/home/user";

/// View state for one file-manager window.
pub struct FileManagerState {
    nav: Navigation,
    view_mode: ViewMode,
    selected_ids: Vec<NodeId>,
    show_hidden: bool,
    items: Vec<VfsNode>,
    error: Option<VfsError>,
}

impl FileManagerState {
    /// Open at the user's home directory.
    pub fn new(vfs: &Vfs) -> Self {
        Self::opened_at(vfs, HOME_PATH)
    }

    /// Open at an arbitrary directory.
    pub fn opened_at(vfs: &Vfs, path: &str) -> Self {
        let mut state = Self {
            nav: Navigation::starting_at(path),
            view_mode: ViewMode::default(),
            selected_ids: Vec::new(),
            show_hidden: false,
            items: Vec::new(),
            error: None,
        };
        state.reload(vfs);
        state
    }

    // ========== Read accessors ==========

    /// Directory currently shown.
    pub fn current_path(&self) -> &str {
        &self.nav.current_path
    }

    /// Cached listing, filtered and sorted for display.
    pub fn items(&self) -> &[VfsNode] {
        &self.items
    }

    /// Last error banner, if any.
    pub fn error(&self) -> Option<&VfsError> {
        self.error.as_ref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn selected_ids(&self) -> &[NodeId] {
        &self.selected_ids
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn search_query(&self) -> &str {
        &self.nav.search_query
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.nav.history_index + 1 < self.nav.history.len()
    }

    // ========== Navigation ==========

    /// Navigate to a directory, clearing selection and any search.
    pub fn navigate(&mut self, vfs: &Vfs, path: &str) {
        match self.nav.navigate_to(vfs, path) {
            Ok(nav) => {
                self.nav = nav;
                self.selected_ids.clear();
                self.error = None;
                self.reload(vfs);
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// Step back through the history.
    pub fn go_back(&mut self, vfs: &Vfs) {
        self.step(vfs, -1);
    }

    /// Step forward through the history.
    pub fn go_forward(&mut self, vfs: &Vfs) {
        self.step(vfs, 1);
    }

    /// Navigate to the parent directory, a no-op at the root.
    pub fn go_up(&mut self, vfs: &Vfs) {
        match self.nav.parent_path(vfs) {
            Ok(Some(parent)) => self.navigate(vfs, &parent),
            Ok(None) => {}
            Err(err) => self.error = Some(err),
        }
    }

    fn step(&mut self, vfs: &Vfs, direction: isize) {
        if let Some(nav) = self.nav.step(direction) {
            self.nav = nav;
            self.selected_ids.clear();
            self.error = None;
            self.reload(vfs);
        }
    }

    // ========== View controls ==========

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_hidden(&mut self, vfs: &Vfs) {
        self.show_hidden = !self.show_hidden;
        self.reload(vfs);
    }

    pub fn set_search_query(&mut self, vfs: &Vfs, query: &str) {
        self.nav.search_query = String::from(query);
        self.reload(vfs);
    }

    // ========== Selection ==========

    /// Select an entry. `multi` toggles membership, `range` adds
    /// without toggling, otherwise the selection is replaced.
    pub fn select_item(&mut self, id: NodeId, multi: bool, range: bool) {
        if multi {
            match self.selected_ids.iter().position(|sel| *sel == id) {
                Some(index) => {
                    self.selected_ids.remove(index);
                }
                None => self.selected_ids.push(id),
            }
            return;
        }

        if range {
            if !self.selected_ids.contains(&id) {
                self.selected_ids.push(id);
            }
            return;
        }

        self.selected_ids = vec![id];
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    // ========== Mutations ==========

    /// Create a directory in the current location.
    pub fn create_folder(&mut self, vfs: &mut Vfs, name: &str) {
        let result = vfs.create_node(
            &self.nav.current_path,
            name,
            VfsNodeType::Dir,
            "",
            "",
            false,
        );
        self.finish_write(vfs, result.map(|_| ()));
    }

    /// Create a file in the current location.
    pub fn create_file(&mut self, vfs: &mut Vfs, name: &str, content: &str) {
        let result = vfs.create_node(
            &self.nav.current_path,
            name,
            VfsNodeType::File,
            content,
            "",
            false,
        );
        self.finish_write(vfs, result.map(|_| ()));
    }

    /// Rename an entry by id. Unknown ids are ignored.
    pub fn rename_item(&mut self, vfs: &mut Vfs, id: NodeId, new_name: &str) {
        if vfs.node_by_id(id).is_none() {
            return;
        }

        let result = vfs
            .get_path(id)
            .and_then(|path| vfs.rename(&path, new_name, false).map(|_| ()));
        self.finish_write(vfs, result);
    }

    /// Delete a set of entries, best effort.
    ///
    /// Every id is attempted independently; a missing or protected
    /// node does not abort the rest, and individual failures are not
    /// surfaced.
    pub fn delete_items(&mut self, vfs: &mut Vfs, ids: &[NodeId]) {
        for id in ids {
            let outcome = vfs
                .get_path(*id)
                .and_then(|path| vfs.delete(&path, false));
            if let Err(err) = outcome {
                debug!(node_id = %id, %err, "skipping failed delete in batch");
            }
        }

        self.selected_ids.clear();
        self.finish_write(vfs, Ok(()));
    }

    /// Re-read the current listing, clearing any error banner.
    pub fn refresh(&mut self, vfs: &Vfs) {
        self.error = None;
        self.reload(vfs);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Record the write outcome, then resynchronize the listing
    /// whether or not the write succeeded.
    fn finish_write(&mut self, vfs: &Vfs, result: Result<(), VfsError>) {
        match result {
            Ok(()) => self.error = None,
            Err(err) => self.error = Some(err),
        }
        self.reload(vfs);
    }

    fn reload(&mut self, vfs: &Vfs) {
        match visible_items(
            vfs,
            &self.nav.current_path,
            &self.nav.search_query,
            self.show_hidden,
        ) {
            Ok(items) => self.items = items,
            Err(err) => {
                self.items.clear();
                self.error = Some(err);
            }
        }
    }
}
