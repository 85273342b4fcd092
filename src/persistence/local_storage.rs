//! LocalStorage keeper for the browser build

use super::{Scorekeeper, StorageError, parse_best_score};

/// Stores the best score as a bare integer string
#[derive(Debug, Clone)]
pub struct LocalStorageScorekeeper {
    key: String,
}

impl Default for LocalStorageScorekeeper {
    fn default() -> Self {
        Self::new(Self::STORAGE_KEY)
    }
}

impl LocalStorageScorekeeper {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "simon-best-score";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl Scorekeeper for LocalStorageScorekeeper {
    fn load_best_score(&self) -> Result<u64, StorageError> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(raw)) => parse_best_score(&raw),
            Ok(None) => Ok(0),
            Err(_) => Err(StorageError::Unavailable),
        }
    }

    fn save_best_score(&mut self, score: u64) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        storage
            .set_item(&self.key, &score.to_string())
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))?;
        log::info!("Best score {} saved", score);
        Ok(())
    }
}
