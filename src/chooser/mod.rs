//! Directory lister
//!
//! A [`DirectoryView`] is a sorted snapshot of the regular files in one
//! directory plus a selection index. It never watches the directory: call
//! [`DirectoryView::refresh`] after anything outside the view touches it.

pub mod error;

pub use error::{DeleteError, DirectoryError, SelectionError};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// File picked from a view: full path plus bare filename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChosenFile {
    pub path: PathBuf,
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryView {
    directory: PathBuf,
    entries: Vec<String>,
    selected: Option<usize>,
}

impl DirectoryView {
    /// List `directory` and select its first file.
    pub fn open(directory: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let directory = directory.as_ref();
        stat_directory(directory)?;

        let directory =
            std::path::absolute(directory).map_err(|e| DirectoryError::from_io(directory, e))?;

        let mut view = Self {
            directory,
            entries: Vec::new(),
            selected: None,
        };
        view.refresh()?;
        Ok(view)
    }

    /// Re-list the directory. Selection goes back to the first file.
    ///
    /// On error the previous snapshot is kept.
    pub fn refresh(&mut self) -> Result<(), DirectoryError> {
        let entries = list_files(&self.directory)?;
        tracing::debug!(
            "Listed {} files in {:?}",
            entries.len(),
            self.directory
        );
        self.selected = if entries.is_empty() { None } else { Some(0) };
        self.entries = entries;
        Ok(())
    }

    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.entries.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Select an entry by its filename
    pub fn select_name(&mut self, name: &str) -> Result<(), SelectionError> {
        let index = self
            .entries
            .binary_search_by(|entry| entry.as_str().cmp(name))
            .map_err(|_| SelectionError::NoSelection)?;
        self.select(index)
    }

    /// Delete the selected file from disk, then re-list.
    ///
    /// Returns the deleted filename. A failed delete leaves the view as it was.
    pub fn delete_selected(&mut self) -> Result<String, DeleteError> {
        let index = self.selected.ok_or(DeleteError::NoSelection)?;
        let name = self.entries[index].clone();
        let path = self.directory.join(&name);

        fs::remove_file(&path).map_err(|e| {
            tracing::warn!("Failed to delete {:?}: {}", path, e);
            DeleteError::from_io(&path, e)
        })?;
        tracing::info!("Deleted {:?}", path);

        if let Err(e) = self.refresh() {
            // The file is gone either way; keep the snapshot in step with disk
            tracing::warn!("Re-listing after delete failed: {}", e);
            self.entries.remove(index);
            self.selected = if self.entries.is_empty() { None } else { Some(0) };
        }
        Ok(name)
    }

    pub fn chosen_path(&self) -> Result<PathBuf, SelectionError> {
        self.selected_name()
            .map(|name| self.directory.join(name))
            .ok_or(SelectionError::NoSelection)
    }

    pub fn chosen(&self) -> Result<ChosenFile, SelectionError> {
        let filename = self
            .selected_name()
            .ok_or(SelectionError::NoSelection)?
            .to_string();
        Ok(ChosenFile {
            path: self.directory.join(&filename),
            filename,
        })
    }

    pub fn ensure_writable(&self) -> Result<(), DirectoryError> {
        ensure_writable(&self.directory)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.map(|i| self.entries[i].as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check that `directory` exists, is a directory and can be listed.
pub fn check_directory(directory: &Path) -> Result<(), DirectoryError> {
    stat_directory(directory)?;
    fs::read_dir(directory).map_err(|e| DirectoryError::from_io(directory, e))?;
    Ok(())
}

/// Check that a file can be created in `directory`.
///
/// Fails with `Unreadable` if the directory is marked read-only, or if a
/// scratch file cannot be created in it (read-only mount, no write access).
/// The scratch file is removed again before returning.
pub fn ensure_writable(directory: &Path) -> Result<(), DirectoryError> {
    let metadata = stat_directory(directory)?;
    if metadata.permissions().readonly() {
        return Err(DirectoryError::Unreadable {
            path: directory.to_path_buf(),
            source: None,
        });
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    let scratch = directory.join(format!(
        ".dumpchooser-write-check-{}-{}",
        std::process::id(),
        nanos
    ));
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&scratch)
        .map_err(|e| {
            tracing::debug!("Cannot create files in {:?}: {}", directory, e);
            DirectoryError::Unreadable {
                path: directory.to_path_buf(),
                source: Some(e),
            }
        })?;
    if let Err(e) = fs::remove_file(&scratch) {
        tracing::warn!("Failed to remove scratch file {:?}: {}", scratch, e);
    }
    Ok(())
}

/// Metadata of an existing directory.
///
/// A path below a regular file does not exist, so it is `NotFound`;
/// `NotADirectory` is only for a path that exists and is not a directory.
fn stat_directory(directory: &Path) -> Result<fs::Metadata, DirectoryError> {
    let metadata = fs::metadata(directory).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotADirectory => DirectoryError::NotFound(directory.to_path_buf()),
        _ => DirectoryError::from_io(directory, e),
    })?;
    if !metadata.is_dir() {
        return Err(DirectoryError::NotADirectory(directory.to_path_buf()));
    }
    Ok(metadata)
}

/// Sorted names of the regular files in `directory`.
///
/// Byte-wise ordering on UTF-8 names, so the order is the same on every
/// platform and locale. Subdirectories and non-UTF-8 names are skipped.
fn list_files(directory: &Path) -> Result<Vec<String>, DirectoryError> {
    let read_dir = fs::read_dir(directory).map_err(|e| DirectoryError::from_io(directory, e))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| DirectoryError::from_io(directory, e))?;

        // Follows symlinks, so a link to a file is listed and a dangling one is not
        let is_file = fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!("Skipping non UTF-8 filename {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}
