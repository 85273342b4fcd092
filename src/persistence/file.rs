//! JSON file keeper for the native build
//!
//! Writes go to a sibling `.tmp` file first and are renamed over the real
//! file, so a crash mid-write leaves the previous best score intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Scorekeeper, StorageError};

/// Default file name, relative to the working directory
pub const DEFAULT_SCORE_FILE: &str = "simon-best-score.json";

/// Environment variable overriding the score file path
pub const SCORE_FILE_ENV: &str = "SIMON_SCORE_FILE";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BestScoreDocument {
    best_score: u64,
}

/// Stores `{"best_score": N}` in a file
#[derive(Debug, Clone)]
pub struct FileScorekeeper {
    path: PathBuf,
}

impl FileScorekeeper {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Keeper at `$SIMON_SCORE_FILE`, or `simon-best-score.json`
    pub fn from_env() -> Self {
        let path = std::env::var_os(SCORE_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORE_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Scorekeeper for FileScorekeeper {
    fn load_best_score(&self) -> Result<u64, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let doc: BestScoreDocument =
            serde_json::from_str(&json).map_err(|e| StorageError::Malformed(e.to_string()))?;
        log::info!("Loaded best score {} from {}", doc.best_score, self.path.display());
        Ok(doc.best_score)
    }

    fn save_best_score(&mut self, score: u64) -> Result<(), StorageError> {
        let json = serde_json::to_string(&BestScoreDocument { best_score: score })
            .map_err(|e| StorageError::Rejected(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Best score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_zero() {
        let dir = tempfile::tempdir().unwrap();
        let keeper = FileScorekeeper::new(dir.path().join("best.json"));
        assert_eq!(keeper.load_best_score().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.json");
        let mut keeper = FileScorekeeper::new(&path);
        keeper.save_best_score(150).unwrap();

        let reopened = FileScorekeeper::new(&path);
        assert_eq!(reopened.load_best_score().unwrap(), 150);
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"best_score":150}"#);
    }

    #[test]
    fn test_garbage_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.json");
        fs::write(&path, "not json").unwrap();
        let keeper = FileScorekeeper::new(&path);
        assert!(matches!(keeper.load_best_score(), Err(StorageError::Malformed(_))));
    }

    #[test]
    fn test_unwritable_location_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut keeper = FileScorekeeper::new(dir.path().join("missing-dir").join("best.json"));
        assert!(matches!(keeper.save_best_score(10), Err(StorageError::Io(_))));
    }
}
