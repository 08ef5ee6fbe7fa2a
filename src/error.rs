use std::path::PathBuf;

use crate::model::Attribute;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("schema mismatch: athlete {athlete} has no rating for {attribute}")]
    SchemaMismatch { athlete: String, attribute: Attribute },

    #[error("rank observation has no usable entries")]
    EmptyObservation,

    #[error("learned weights cannot be normalized (sum {sum})")]
    DegenerateWeights { sum: f64 },

    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("failed to persist weight history to {}: {reason}", .path.display())]
    PersistenceError { path: PathBuf, reason: String },

    #[error("weight history at {} is corrupt: {reason}", .path.display())]
    CorruptHistory { path: PathBuf, reason: String },

    #[error("unknown stage: {0}")]
    UnknownStage(String),

    #[error("duplicate athlete: {0}")]
    DuplicateAthlete(String),

    #[error("invalid rating {value} for {athlete}/{attribute}")]
    InvalidRating {
        athlete: String,
        attribute: Attribute,
        value: f64,
    },

    #[error("invalid input {}: {reason}", .path.display())]
    Input { path: PathBuf, reason: String },

    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}
