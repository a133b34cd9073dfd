//! Unified error types.
//! Store backends return `StoreError`, the connector reduces it to a
//! `ConnectionError`, and everything above the store (config, forms, cli)
//! returns `AppError`.

use std::io;
use thiserror::Error;

// ---------------------------
// Remote store
// ---------------------------
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Google Cloud credentials not found")]
    CredentialsMissing,

    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),

    #[error("Google Drive storage quota exceeded")]
    QuotaExceeded,

    #[error("Spreadsheet not found: {0}")]
    CollectionNotFound(String),

    #[error("Worksheet not found: {0}")]
    TableNotFound(String),

    #[error("Could not write to '{table}': {reason}")]
    WriteFailed { table: String, reason: String },

    #[error("Could not share spreadsheet with {email}: {reason}")]
    ShareFailed { email: String, reason: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

// ---------------------------
// Connection
// ---------------------------
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Google Cloud credentials not found")]
    CredentialsMissing,

    #[error("Google Drive storage is full")]
    QuotaExceeded,

    #[error("Store access disabled (offline mode)")]
    Disabled,

    #[error("Could not connect to Google Sheets: {0}")]
    Unknown(String),
}

impl From<StoreError> for ConnectionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CredentialsMissing => ConnectionError::CredentialsMissing,
            StoreError::QuotaExceeded => ConnectionError::QuotaExceeded,
            other => ConnectionError::Unknown(other.to_string()),
        }
    }
}

// ---------------------------
// Application
// ---------------------------
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Google Sheets not connected. Data not saved.")]
    NotConnected,

    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
