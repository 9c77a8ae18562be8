//! Error types for the timetrace core.
//!
//! Store, backup, collision and tracker operations all return
//! [`Result<T>`] with the [`Error`] enum below. The command layer converts
//! these into `anyhow::Error` through `?` and renders them with the message
//! macros.

use std::fmt;
use thiserror::Error;

/// The kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Project,
    Record,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Project => write!(f, "project"),
            Entity::Record => write!(f, "record"),
        }
    }
}

/// Main error type for store and tracking operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The live file of a project or record does not exist.
    #[error("{entity} {key} not found")]
    NotFound { entity: Entity, key: String },

    /// No backup generation exists for the given entity.
    #[error("backup of {entity} {key} not found")]
    BackupNotFound { entity: Entity, key: String },

    /// Saving without `force` would overwrite an existing file.
    #[error("{entity} {key} already exists")]
    AlreadyExists { entity: Entity, key: String },

    #[error("no parent project for module {0} exists, please create parent first")]
    ParentlessModule(String),

    #[error("project key must not be empty")]
    EmptyProjectKey,

    /// A record is still running while a new one should be started.
    #[error("no end time for last record")]
    NoEndTime,

    #[error("start tracking first")]
    TrackingNotStarted,

    /// Record directories exist but none of them holds a record.
    #[error("all directories empty")]
    AllDirectoriesEmpty,

    #[error("end time is before start time of record")]
    EndBeforeStart,

    #[error("record is still in progress")]
    RecordInProgress,

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("invalid record key: {0}")]
    InvalidRecordKey(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("at most 3 tags are allowed, got {0} tags")]
    TooManyTags(usize),

    #[error("'{0}' is not a valid tag, tags must start with +")]
    InvalidTag(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn not_found(entity: Entity, key: impl Into<String>) -> Self {
        Error::NotFound { entity, key: key.into() }
    }

    pub fn backup_not_found(entity: Entity, key: impl Into<String>) -> Self {
        Error::BackupNotFound { entity, key: key.into() }
    }

    pub fn already_exists(entity: Entity, key: impl Into<String>) -> Self {
        Error::AlreadyExists { entity, key: key.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
