//! Error types for u-judging

use thiserror::Error;

use crate::models::{JudgeId, TeamId};
use crate::store::StoreError;
use crate::validation::{join, ValidationError};

/// Errors surfaced by the judging core.
///
/// Nothing is retried internally; every error leaves in-memory state
/// untouched except `Unpersisted`, which is raised after the batch
/// transition has already been committed.
#[derive(Error, Debug)]
pub enum JudgingError {
    /// Invalid team, judge, room, or group configuration.
    #[error("Invalid configuration: {}", join(.0))]
    Configuration(Vec<ValidationError>),

    /// A submission was rejected; no state was changed.
    #[error("Submission rejected: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// The judge is not part of the current roster.
    #[error("Unknown judge: {0}")]
    UnknownJudge(JudgeId),

    /// A judge with this id is already in the roster.
    #[error("Judge already exists: {0}")]
    DuplicateJudge(JudgeId),

    /// Configuration text could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The persistence collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A submission was accepted and the judge moved on, but `failed` of its
    /// scores did not reach the store. `JudgingEvent::persist_history`
    /// re-sends them.
    #[error("Judge {judge}: {failed} score(s) not persisted: {source}")]
    Unpersisted {
        judge: JudgeId,
        failed: usize,
        next_batch: Vec<TeamId>,
        source: StoreError,
    },
}

/// Result alias for judging operations.
pub type Result<T> = std::result::Result<T, JudgingError>;

impl JudgingError {
    /// Validation issues carried by `Configuration` or `Validation`.
    pub fn issues(&self) -> &[ValidationError] {
        match self {
            Self::Configuration(errors) | Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}
