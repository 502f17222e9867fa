use crate::chooser::{DeleteError, DirectoryError, SelectionError};
use crate::save::SaveError;

// Exit codes for CLI automation. 1-4 keep the chooser's historical result codes.
pub const SUCCESS: i32 = 0;
pub const DIRECTORY_NOT_FOUND: i32 = 1;
pub const NO_DIRECTORY: i32 = 2;
pub const STORAGE_UNAVAILABLE: i32 = 3;
pub const NOT_A_DIRECTORY: i32 = 4;
pub const INVALID_INPUT: i32 = 5;
pub const CANCELLED: i32 = 6;
pub const ERROR: i32 = 7;

pub fn directory_exit_code(err: &DirectoryError) -> i32 {
    match err {
        DirectoryError::NotFound(_) => DIRECTORY_NOT_FOUND,
        DirectoryError::NotADirectory(_) => NOT_A_DIRECTORY,
        DirectoryError::Unreadable { .. } => STORAGE_UNAVAILABLE,
    }
}

pub fn selection_exit_code(err: &SelectionError) -> i32 {
    match err {
        SelectionError::IndexOutOfRange { .. } | SelectionError::NoSelection => INVALID_INPUT,
    }
}

pub fn delete_exit_code(err: &DeleteError) -> i32 {
    match err {
        DeleteError::NoSelection => INVALID_INPUT,
        DeleteError::PermissionDenied(_) => STORAGE_UNAVAILABLE,
        DeleteError::IoFailure { .. } => ERROR,
    }
}

pub fn save_exit_code(err: &SaveError) -> i32 {
    match err {
        SaveError::NoExtensions
        | SaveError::InvalidName { .. }
        | SaveError::InvalidExtension { .. } => INVALID_INPUT,
        SaveError::Directory(e) => directory_exit_code(e),
        SaveError::Write { .. } => ERROR,
    }
}

/// Map an error bubbled up through anyhow onto an exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<DirectoryError>() {
        directory_exit_code(e)
    } else if let Some(e) = err.downcast_ref::<SelectionError>() {
        selection_exit_code(e)
    } else if let Some(e) = err.downcast_ref::<DeleteError>() {
        delete_exit_code(e)
    } else if let Some(e) = err.downcast_ref::<SaveError>() {
        save_exit_code(e)
    } else {
        ERROR
    }
}
