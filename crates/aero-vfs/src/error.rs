//! Error types for the VFS layer.

use serde::{Deserialize, Serialize};

/// POSIX-style error codes raised by VFS operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// No such file or directory
    #[serde(rename = "ENOENT")]
    Enoent,

    /// File exists
    #[serde(rename = "EEXIST")]
    Eexist,

    /// Operation not permitted
    #[serde(rename = "EPERM")]
    Eperm,

    /// Not a directory
    #[serde(rename = "ENOTDIR")]
    Enotdir,

    /// Is a directory
    #[serde(rename = "EISDIR")]
    Eisdir,

    /// Invalid argument
    #[serde(rename = "EINVAL")]
    Einval,
}

impl ErrorCode {
    /// The canonical POSIX name for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enoent => "ENOENT",
            Self::Eexist => "EEXIST",
            Self::Eperm => "EPERM",
            Self::Enotdir => "ENOTDIR",
            Self::Eisdir => "EISDIR",
            Self::Einval => "EINVAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A VFS error: a code plus a human-readable message.
///
/// Validation always precedes mutation, so an error never leaves the
/// node arena in a partially updated state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfsError {
    /// POSIX-style error code
    pub code: ErrorCode,
    /// Human-readable message for user-facing surfacing
    pub message: String,
}

impl VfsError {
    /// Create an error with an explicit code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// `ENOENT` for a missing path or unknown node id.
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::Enoent,
            format!("No such file or directory: {}", what),
        )
    }

    /// `EEXIST` for a duplicate sibling name.
    pub fn exists(name: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::Eexist, format!("File exists: {}", name))
    }

    /// `EPERM` for a forbidden operation.
    pub fn not_permitted(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Eperm, message)
    }

    /// `ENOTDIR` for a non-directory where one is required.
    pub fn not_a_directory(what: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::Enotdir, format!("Not a directory: {}", what))
    }

    /// `EISDIR` for a directory where a file is required.
    pub fn is_a_directory(what: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::Eisdir, format!("Is a directory: {}", what))
    }

    /// `EINVAL` for an invalid argument.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Einval, message)
    }
}

impl std::fmt::Display for VfsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for VfsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VfsError::not_found("/home/missing");
        assert_eq!(
            err.to_string(),
            "[ENOENT] No such file or directory: /home/missing"
        );

        let err = VfsError::exists("readme.txt");
        assert_eq!(err.to_string(), "[EEXIST] File exists: readme.txt");
    }

    #[test]
    fn test_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::Enotdir).unwrap();
        assert_eq!(json, "\"ENOTDIR\"");

        let code: ErrorCode = serde_json::from_str("\"EPERM\"").unwrap();
        assert_eq!(code, ErrorCode::Eperm);
    }

    #[test]
    fn test_error_equality() {
        let err1 = VfsError::exists("a");
        let err2 = VfsError::exists("a");
        let err3 = VfsError::exists("b");

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
