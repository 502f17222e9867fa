use super::{SaveDecision, SaveError};
use std::path::PathBuf;

/// Write `contents` according to `decision`.
///
/// Returns the written path on `Proceed` and `None` on `Cancelled`; nothing
/// touches the disk in the cancelled case.
pub fn commit(decision: &SaveDecision, contents: &[u8]) -> Result<Option<PathBuf>, SaveError> {
    let Some(path) = decision.resolved_path() else {
        tracing::info!("Save cancelled, nothing written");
        return Ok(None);
    };

    std::fs::write(path, contents).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Saved {} bytes to {:?}", contents.len(), path);
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_commit_proceed_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("card.mfd");
        let decision = SaveDecision::Proceed { path: path.clone() };

        let written = commit(&decision, b"\x01\x02").unwrap();
        assert_eq!(written, Some(path.clone()));
        assert_eq!(std::fs::read(&path).unwrap(), b"\x01\x02");
    }

    #[test]
    fn test_commit_cancelled_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let written = commit(&SaveDecision::Cancelled, b"data").unwrap();

        assert_eq!(written, None);
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_commit_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let decision = SaveDecision::Proceed {
            path: temp_dir.path().join("gone").join("card.mfd"),
        };

        assert!(matches!(
            commit(&decision, b"data"),
            Err(SaveError::Write { .. })
        ));
    }
}
