//! Path normalization and helpers.
//!
//! Paths are Unix-style absolute paths. Normalization is purely
//! lexical: it never consults the node arena.

/// Canonicalize a path into an absolute form starting with `/`.
///
/// A missing leading `/` is supplied, empty and `.` segments are
/// dropped, and `..` pops the last resolved segment. Popping past the
/// root is a silent no-op, so `/../..` normalizes to `/`.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }

    format!("/{}", resolved.join("/"))
}

/// Split a normalized path into segments, skipping the root.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Parent of a normalized path, or `None` for the root.
pub fn parent_path(path: &str) -> Option<String> {
    let normalized = normalize_path(path);
    if normalized == "/" {
        return None;
    }

    let parts: Vec<&str> = segments(&normalized).collect();
    Some(format!("/{}", parts[..parts.len() - 1].join("/")))
}

/// Final segment of a normalized path, or `None` for the root.
pub fn file_name(path: &str) -> Option<String> {
    let normalized = normalize_path(path);
    segments(&normalized).last().map(String::from)
}

/// Join a directory path and an entry name, normalizing the result.
pub fn join_path(dir: &str, name: &str) -> String {
    normalize_path(&format!("{}/{}", dir, name))
}
