use crate::core::types::Grade;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeikoError {
    #[error("Unknown technique: {0}")]
    UnknownTechnique(String),

    #[error("Unknown grade: {0}")]
    UnknownGrade(String),

    #[error("Invalid mastery level: {0}")]
    InvalidLevel(String),

    #[error("Roster index {index} out of range for {grade:?} ({len} techniques)")]
    IndexOutOfRange {
        grade: Grade,
        index: usize,
        len: usize,
    },

    #[error("Invalid progression config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeikoError>;
