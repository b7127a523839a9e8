//! Filesystem seeding on first boot.
//!
//! Builds the fixed directory tree the rest of the system expects:
//! protected system paths, the user home skeleton, and a handful of
//! starter files. All seeding runs with `system_override` since it
//! creates entries under `/etc` and `/var`.

use crate::error::{ErrorCode, VfsError};
use crate::node::VfsNodeType;
use crate::path::{file_name, parent_path};
use crate::vfs::Vfs;

/// Create a directory and any missing ancestors.
///
/// Existing directories along the way are left untouched.
pub fn mkdir_p(vfs: &mut Vfs, path: &str) -> Result<(), VfsError> {
    let mut current = String::from("/");

    for segment in crate::path::segments(&crate::path::normalize_path(path))
        .map(String::from)
        .collect::<Vec<_>>()
    {
        let next = crate::path::join_path(&current, &segment);
        if !vfs.exists(&next) {
            vfs.create_node(&current, &segment, VfsNodeType::Dir, "", "", true)?;
        }
        current = next;
    }

    Ok(())
}

/// Create a file with the given content, creating parent directories
/// as needed. An already existing file is left as-is.
pub fn touch(vfs: &mut Vfs, path: &str, content: &str) -> Result<(), VfsError> {
    let parent = parent_path(path)
        .ok_or_else(|| VfsError::invalid(format!("Cannot touch root: {}", path)))?;
    let name = file_name(path)
        .ok_or_else(|| VfsError::invalid(format!("Cannot touch root: {}", path)))?;

    mkdir_p(vfs, &parent)?;

    match vfs.create_node(&parent, &name, VfsNodeType::File, content, "", true) {
        Ok(_) => Ok(()),
        Err(err) if err.code == ErrorCode::Eexist => Ok(()),
        Err(err) => Err(err),
    }
}

/// Seed the standard tree into an existing filesystem.
pub fn seed(vfs: &mut Vfs) -> Result<(), VfsError> {
    // System paths
    mkdir_p(vfs, "/etc")?;
    touch(vfs, "/etc/hosts", "127.0.0.1 localhost\n::1 localhost")?;

    mkdir_p(vfs, "/var/log")?;
    touch(
        vfs,
        "/var/log/system.log",
        "Kernel started...\nVFS initialized.\n",
    )?;

    // User space
    mkdir_p(vfs, "/home/user/Desktop")?;
    mkdir_p(vfs, "/home/user/Documents")?;
    mkdir_p(vfs, "/home/user/Downloads")?;
    mkdir_p(vfs, "/home/user/Pictures")?;
    mkdir_p(vfs, "/home/user/.config/aero")?;

    touch(
        vfs,
        "/home/user/Documents/readme.txt",
        "Welcome to Aero OS!\nEnjoy the deterministic filesystem.",
    )?;
    touch(
        vfs,
        "/home/user/.bashrc",
        "# ~/.bashrc\nexport PS1=\"\\u@aero:\\w\\$ \"",
    )?;
    touch(
        vfs,
        "/home/user/.config/aero/settings.json",
        "{\n  \"theme\": \"dark\"\n}",
    )?;

    // Secondary data mount
    mkdir_p(vfs, "/data")?;

    Ok(())
}

/// Build a freshly seeded filesystem.
pub fn seeded() -> Result<Vfs, VfsError> {
    let mut vfs = Vfs::new();
    seed(&mut vfs)?;
    Ok(vfs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mkdir_p() {
        let mut vfs = Vfs::new();
        mkdir_p(&mut vfs, "/home/user/Documents").unwrap();

        assert!(vfs.exists("/home"));
        assert!(vfs.exists("/home/user"));
        assert!(vfs.exists("/home/user/Documents"));

        // Idempotent
        mkdir_p(&mut vfs, "/home/user/Documents").unwrap();
    }

    #[test]
    fn test_touch_creates_parents() {
        let mut vfs = Vfs::new();
        touch(&mut vfs, "/a/b/c.txt", "hi").unwrap();

        assert_eq!(vfs.read_file("/a/b/c.txt").unwrap(), "hi");

        // Existing file is not overwritten.
        touch(&mut vfs, "/a/b/c.txt", "other").unwrap();
        assert_eq!(vfs.read_file("/a/b/c.txt").unwrap(), "hi");
    }

    #[test]
    fn test_seeded_tree() {
        let vfs = seeded().unwrap();

        for path in [
            "/etc/hosts",
            "/var/log/system.log",
            "/home/user/Desktop",
            "/home/user/Documents/readme.txt",
            "/home/user/.bashrc",
            "/home/user/.config/aero/settings.json",
            "/data",
        ] {
            assert!(vfs.exists(path), "missing {}", path);
        }

        assert!(vfs
            .read_file("/home/user/Documents/readme.txt")
            .unwrap()
            .starts_with("Welcome to Aero OS!"));
    }

    #[test]
    fn test_seeded_system_paths_stay_protected() {
        let mut vfs = seeded().unwrap();
        let err = vfs
            .create_node("/etc", "x", VfsNodeType::File, "", "", false)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Eperm);
    }
}
