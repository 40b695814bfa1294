use std::io;

use thiserror::Error;

/// Failure reading or writing the streak store
#[derive(Debug, Error)]
pub enum StreakStoreError {
    #[error("error accessing streak store")]
    Io(#[from] io::Error),
    #[error("streak store is corrupt")]
    Corrupt(#[from] serde_json::Error),
}

impl From<tempfile::PersistError> for StreakStoreError {
    fn from(error: tempfile::PersistError) -> Self {
        StreakStoreError::Io(error.error)
    }
}
