use std::path::PathBuf;
use thiserror::Error;

/// Errors opening or re-listing a directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Path does not exist
    #[error("Directory does not exist: {0}")]
    NotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Storage is not accessible (permissions, read-only or unmounted medium)
    #[error("Directory is not accessible: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl DirectoryError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::NotADirectory => Self::NotADirectory(path),
            _ => Self::Unreadable {
                path,
                source: Some(err),
            },
        }
    }
}

/// Errors selecting an entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Index {index} is out of range (directory has {len} files)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No file selected")]
    NoSelection,
}

/// Errors deleting the selected entry
#[derive(Error, Debug)]
pub enum DeleteError {
    #[error("No file selected")]
    NoSelection,

    #[error("Permission denied deleting {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to delete {path}: {source}")]
    IoFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DeleteError {
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoFailure { path, source: err },
        }
    }
}
