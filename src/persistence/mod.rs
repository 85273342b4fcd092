//! Best-score persistence
//!
//! Features:
//! - `Scorekeeper` seam the game core saves through
//! - In-memory keeper for tests and as a fallback
//! - JSON file keeper (native)
//! - LocalStorage keeper (wasm32)
//!
//! A failing keeper never stops the game: the core logs the error and keeps
//! the best score for the session only.

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileScorekeeper;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageScorekeeper;

/// Errors raised by a best-score store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("The best-score store is not available")]
    Unavailable,
    #[error("The stored best score is malformed: {0}")]
    Malformed(String),
    #[error("The best-score store rejected the write: {0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Durable storage for the single best score
pub trait Scorekeeper {
    /// Stored best score, 0 when nothing has been stored yet
    fn load_best_score(&self) -> Result<u64, StorageError>;
    fn save_best_score(&mut self, score: u64) -> Result<(), StorageError>;
}

/// Process-local keeper
#[derive(Debug, Clone, Default)]
pub struct MemoryScorekeeper {
    best: u64,
    saves: usize,
    unavailable: bool,
}

impl MemoryScorekeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeper that already holds a best score
    pub fn with_best(best: u64) -> Self {
        Self {
            best,
            ..Self::default()
        }
    }

    /// Keeper whose every call fails, for exercising degraded play
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Last saved value
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Scorekeeper for MemoryScorekeeper {
    fn load_best_score(&self) -> Result<u64, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.best)
    }

    fn save_best_score(&mut self, score: u64) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.best = score;
        self.saves += 1;
        Ok(())
    }
}

/// Parse a best score stored as a bare integer. Blank means nothing stored.
pub fn parse_best_score(raw: &str) -> Result<u64, StorageError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u64>()
        .map_err(|e| StorageError::Malformed(format!("{:?}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_keeper_defaults_to_zero() {
        let keeper = MemoryScorekeeper::new();
        assert_eq!(keeper.load_best_score().unwrap(), 0);
        assert_eq!(keeper.saves(), 0);
    }

    #[test]
    fn test_memory_keeper_round_trips() {
        let mut keeper = MemoryScorekeeper::with_best(10);
        keeper.save_best_score(70).unwrap();
        assert_eq!(keeper.load_best_score().unwrap(), 70);
        assert_eq!(keeper.saves(), 1);
    }

    #[test]
    fn test_unavailable_keeper_fails_both_ways() {
        let mut keeper = MemoryScorekeeper::unavailable();
        assert!(matches!(keeper.load_best_score(), Err(StorageError::Unavailable)));
        assert!(matches!(keeper.save_best_score(5), Err(StorageError::Unavailable)));
        assert_eq!(keeper.saves(), 0);
    }

    #[test]
    fn test_parse_best_score() {
        assert_eq!(parse_best_score("").unwrap(), 0);
        assert_eq!(parse_best_score(" 120\n").unwrap(), 120);
        assert!(matches!(parse_best_score("-4"), Err(StorageError::Malformed(_))));
        assert!(matches!(parse_best_score("abc"), Err(StorageError::Malformed(_))));
    }
}
