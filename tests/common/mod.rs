use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Initialize logging once for all tests
#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Create a scratch directory holding `files`, each with a small payload
pub fn create_dump_dir(files: &[&str]) -> TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    for name in files {
        write_dump(temp_dir.path(), name, name.as_bytes());
    }
    temp_dir
}

/// Write a dump file and return its path
pub fn write_dump(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Sorted names of regular files currently on disk
#[allow(dead_code)]
pub fn files_on_disk(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

#[allow(dead_code)]
pub fn extensions(list: &[&str]) -> Vec<String> {
    list.iter().map(|ext| ext.to_string()).collect()
}
