use crate::chooser::DirectoryError;
use crate::file::naming::{ExtensionProblem, NameProblem};
use std::path::PathBuf;
use thiserror::Error;

/// Errors starting or committing a save
#[derive(Error, Debug)]
pub enum SaveError {
    /// No allowed extension to fall back on
    #[error("No file extensions configured")]
    NoExtensions,

    #[error("Invalid file name '{name}': {problem}")]
    InvalidName { name: String, problem: NameProblem },

    #[error("Invalid file extension '{extension}': {problem}")]
    InvalidExtension {
        extension: String,
        problem: ExtensionProblem,
    },

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors driving a save handle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Save decision was already made")]
    AlreadyResolved,

    #[error("Save is still waiting for an overwrite decision")]
    StillPending,
}

impl SaveError {
    pub fn invalid_name(name: impl Into<String>, problem: NameProblem) -> Self {
        Self::InvalidName {
            name: name.into(),
            problem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SaveError::invalid_name("a/b", NameProblem::Separator);
        assert_eq!(
            err.to_string(),
            "Invalid file name 'a/b': name contains a path separator"
        );

        let err = SaveError::InvalidExtension {
            extension: "tar.gz".to_string(),
            problem: ExtensionProblem::Malformed,
        };
        assert_eq!(
            err.to_string(),
            "Invalid file extension 'tar.gz': extension must not contain dots or path separators"
        );

        let err = SaveError::from(DirectoryError::NotFound(PathBuf::from("/dumps")));
        assert_eq!(err.to_string(), "Directory does not exist: /dumps");
    }
}
