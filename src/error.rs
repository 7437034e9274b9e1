//! Application error types using thiserror
//!
//! Error hierarchy:
//! - NetworkError: the releases request failed or returned garbage
//! - FormatError: a release timestamp is not valid ISO-8601
//! - ConfigError: invalid invocation parameters
//! - IoError: writing the report or the signal file failed

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Releases API related errors
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Timestamp parsing errors
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to the releases API request
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },

    /// The request could not complete (DNS, connect, TLS, timeout)
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The API answered with a non-success status
    #[error("GitHub API returned HTTP {status} for {repo}: {message}")]
    HttpStatus {
        repo: String,
        status: u16,
        message: String,
    },

    /// The response body was not a release list
    #[error("invalid releases response for {repo}: {message}")]
    InvalidResponse { repo: String, message: String },
}

/// Errors related to timestamp parsing
#[derive(Error, Debug)]
pub enum FormatError {
    /// Timestamp is not ISO-8601
    #[error("invalid timestamp '{value}': {message}")]
    InvalidTimestamp { value: String, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Repository identifier is not in owner/name form
    #[error("invalid repository '{value}': expected 'owner/name'")]
    InvalidRepository { value: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// The report file could not be written
    #[error("failed to write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The signal file could not be appended to
    #[error("failed to append signal to {path}: {source}")]
    AppendSignal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NetworkError {
    /// Creates a new Request error
    pub fn request(url: impl Into<String>, message: impl Into<String>) -> Self {
        NetworkError::Request {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new HttpStatus error
    pub fn http_status(repo: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        NetworkError::HttpStatus {
            repo: repo.into(),
            status,
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(repo: impl Into<String>, message: impl Into<String>) -> Self {
        NetworkError::InvalidResponse {
            repo: repo.into(),
            message: message.into(),
        }
    }
}

impl FormatError {
    /// Creates a new InvalidTimestamp error
    pub fn invalid_timestamp(value: impl Into<String>, message: impl Into<String>) -> Self {
        FormatError::InvalidTimestamp {
            value: value.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new WriteReport error
    pub fn write_report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::WriteReport {
            path: path.into(),
            source,
        }
    }

    /// Creates a new AppendSignal error
    pub fn append_signal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::AppendSignal {
            path: path.into(),
            source,
        }
    }
}
