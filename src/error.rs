use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a rejected signup/unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidOperation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadyRegistered { activity: String, email: String },

    #[error("Student is not signed up for this activity")]
    NotRegistered { activity: String, email: String },

    #[error("Email must not be empty")]
    BlankEmail,
}

impl SignupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignupError::ActivityNotFound { .. } => ErrorKind::NotFound,
            SignupError::AlreadyRegistered { .. }
            | SignupError::NotRegistered { .. }
            | SignupError::BlankEmail => ErrorKind::InvalidOperation,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("cannot read activities file {path}: {source}")]
    ReadSeed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse activities file {path}: {source}")]
    ParseSeed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate activity in roster: {0}")]
    DuplicateActivity(String),

    #[error("duplicate participant {email} in roster for {activity}")]
    DuplicateParticipant { activity: String, email: String },
}
