//! Derived directory listings.
//!
//! The VFS returns children in insertion order; presentation order
//! (directories first, names case-folded) is decided here.

use serde::{Deserialize, Serialize};

use aero_vfs::{Vfs, VfsError, VfsNode};

/// How the file pane renders its entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Icons,
    Details,
}

/// The entries shown for a directory after filtering and sorting.
///
/// Hidden entries (dotfiles) are dropped unless `show_hidden`; a
/// non-empty `search_query` keeps only case-insensitive name matches.
/// Directories sort before files, then by case-folded name.
pub fn visible_items(
    vfs: &Vfs,
    path: &str,
    search_query: &str,
    show_hidden: bool,
) -> Result<Vec<VfsNode>, VfsError> {
    let query = search_query.to_lowercase();

    let mut items: Vec<VfsNode> = vfs
        .read_dir(path)?
        .into_iter()
        .filter(|node| show_hidden || !node.is_hidden())
        .filter(|node| query.is_empty() || node.name.to_lowercase().contains(&query))
        .collect();

    items.sort_by(|left, right| {
        right
            .is_dir()
            .cmp(&left.is_dir())
            .then_with(|| left.name.to_lowercase().cmp(&right.name.to_lowercase()))
    });

    Ok(items)
}
