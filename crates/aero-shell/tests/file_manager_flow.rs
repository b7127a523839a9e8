//! End-to-end tests for the file manager against a seeded filesystem.

use aero_shell::{FileManagerState, ViewMode};
use aero_vfs::{bootstrap, ErrorCode, NodeId, Vfs};

fn seeded() -> Vfs {
    bootstrap::seeded().unwrap()
}

fn item_id(state: &FileManagerState, name: &str) -> NodeId {
    state
        .items()
        .iter()
        .find(|node| node.name == name)
        .unwrap_or_else(|| panic!("no item named {}", name))
        .id
}

#[test]
fn test_opens_at_home_with_listing() {
    let vfs = seeded();
    let state = FileManagerState::new(&vfs);

    assert_eq!(state.current_path(), "/home/user");
    assert!(state.error().is_none());

    let names: Vec<&str> = state.items().iter().map(|n| n.name.as_str()).collect();
    // Dotfiles are hidden by default; directories come sorted first.
    assert_eq!(names, ["Desktop", "Documents", "Downloads", "Pictures"]);
}

#[test]
fn test_toggle_hidden_reveals_dotfiles() {
    let vfs = seeded();
    let mut state = FileManagerState::new(&vfs);

    state.toggle_hidden(&vfs);
    let names: Vec<&str> = state.items().iter().map(|n| n.name.as_str()).collect();
    assert!(names.contains(&".config"));
    assert!(names.contains(&".bashrc"));
}

#[test]
fn test_create_rename_delete_flow() {
    let mut vfs = seeded();
    let mut state = FileManagerState::new(&vfs);

    state.create_folder(&mut vfs, "Projects");
    assert!(state.error().is_none());

    state.create_file(&mut vfs, "notes.txt", "todo");
    assert!(state.error().is_none());
    assert_eq!(vfs.read_file("/home/user/notes.txt").unwrap(), "todo");

    let id = item_id(&state, "notes.txt");
    state.rename_item(&mut vfs, id, "done.txt");
    assert!(state.error().is_none());
    assert!(vfs.exists("/home/user/done.txt"));
    assert!(!vfs.exists("/home/user/notes.txt"));

    state.delete_items(&mut vfs, &[id]);
    assert!(!vfs.exists("/home/user/done.txt"));
    assert!(state.selected_ids().is_empty());
}

#[test]
fn test_failed_create_sets_banner_and_resyncs() {
    let mut vfs = seeded();
    let mut state = FileManagerState::new(&vfs);

    state.create_folder(&mut vfs, "Documents");
    let err = state.error().expect("expected EEXIST banner");
    assert_eq!(err.code, ErrorCode::Eexist);

    // The listing was still re-read and matches the filesystem.
    let names: Vec<&str> = state.items().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names.iter().filter(|n| **n == "Documents").count(), 1);

    state.clear_error();
    assert!(state.error().is_none());
}

#[test]
fn test_batch_delete_continues_past_failures() {
    let mut vfs = seeded();
    let mut state = FileManagerState::new(&vfs);

    state.create_file(&mut vfs, "a.txt", "");
    state.create_file(&mut vfs, "b.txt", "");

    let a = item_id(&state, "a.txt");
    let b = item_id(&state, "b.txt");

    // Delete a out from under the batch so its id no longer resolves.
    vfs.delete("/home/user/a.txt", false).unwrap();

    state.delete_items(&mut vfs, &[a, b]);

    // The missing id did not abort the rest.
    assert!(!vfs.exists("/home/user/b.txt"));
    assert!(state.error().is_none());
}

#[test]
fn test_batch_delete_skips_protected_paths() {
    let mut vfs = seeded();
    let mut state = FileManagerState::opened_at(&vfs, "/etc");

    let hosts = item_id(&state, "hosts");
    state.create_file(&mut vfs, "scratch.txt", "");
    // /etc is protected, so the create failed.
    assert_eq!(state.error().unwrap().code, ErrorCode::Eperm);

    state.delete_items(&mut vfs, &[hosts]);
    // Best effort: the protected file survives, no banner raised.
    assert!(vfs.exists("/etc/hosts"));
}

#[test]
fn test_navigation_flow() {
    let vfs = seeded();
    let mut state = FileManagerState::new(&vfs);

    state.navigate(&vfs, "/home/user/Documents");
    assert_eq!(state.current_path(), "/home/user/Documents");
    assert!(state.can_go_back());
    assert!(!state.can_go_forward());

    state.go_back(&vfs);
    assert_eq!(state.current_path(), "/home/user");
    assert!(state.can_go_forward());

    state.go_forward(&vfs);
    assert_eq!(state.current_path(), "/home/user/Documents");

    state.go_up(&vfs);
    state.go_up(&vfs);
    assert_eq!(state.current_path(), "/home");
}

#[test]
fn test_navigate_to_missing_path_sets_banner() {
    let vfs = seeded();
    let mut state = FileManagerState::new(&vfs);

    state.navigate(&vfs, "/home/user/Nope");
    assert_eq!(state.error().unwrap().code, ErrorCode::Enoent);
    // Still at the old location with its listing intact.
    assert_eq!(state.current_path(), "/home/user");
    assert!(!state.items().is_empty());
}

#[test]
fn test_search_filters_listing() {
    let mut vfs = seeded();
    let mut state = FileManagerState::new(&vfs);
    state.create_file(&mut vfs, "report.txt", "");

    state.set_search_query(&vfs, "REPORT");
    let names: Vec<&str> = state.items().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["report.txt"]);

    // Navigating clears the query.
    state.navigate(&vfs, "/home/user/Documents");
    assert_eq!(state.search_query(), "");
}

#[test]
fn test_selection_modes() {
    let mut vfs = seeded();
    let mut state = FileManagerState::new(&vfs);
    state.create_file(&mut vfs, "a.txt", "");
    state.create_file(&mut vfs, "b.txt", "");

    let a = item_id(&state, "a.txt");
    let b = item_id(&state, "b.txt");

    state.select_item(a, false, false);
    assert_eq!(state.selected_ids(), [a]);

    state.select_item(b, true, false);
    assert_eq!(state.selected_ids(), [a, b]);

    // Multi toggles off an already-selected entry.
    state.select_item(a, true, false);
    assert_eq!(state.selected_ids(), [b]);

    // Range adds without toggling.
    state.select_item(b, false, true);
    assert_eq!(state.selected_ids(), [b]);

    state.select_item(a, false, false);
    assert_eq!(state.selected_ids(), [a]);

    state.clear_selection();
    assert!(state.selected_ids().is_empty());

    state.set_view_mode(ViewMode::Details);
    assert_eq!(state.view_mode(), ViewMode::Details);
}
