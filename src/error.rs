//! Error types for the Fess administration CLI.

use thiserror::Error;

/// Status code carried by [`ClientError`] when no HTTP response was received.
pub const TRANSPORT_FAILURE_STATUS: i32 = -1;

/// Errors related to parsing the server version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid version format: '{0}' (expected major.minor[.patch])")]
    InvalidFormat(String),
}

/// Failure of a single request issued by the API client.
///
/// Transport failures (DNS, refused connection, timeout) carry
/// [`TRANSPORT_FAILURE_STATUS`]. Responses whose body is not JSON carry the
/// real HTTP status and the raw body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {status_code} Error: {content}")]
pub struct ClientError {
    pub status_code: i32,
    pub content: String,
}

impl ClientError {
    pub fn new(status_code: i32, content: impl Into<String>) -> Self {
        Self {
            status_code,
            content: content.into(),
        }
    }

    /// Build the error for a request that never produced a response.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::new(TRANSPORT_FAILURE_STATUS, format!("Network error: {err}"))
    }

    pub fn is_transport(&self) -> bool {
        self.status_code == TRANSPORT_FAILURE_STATUS
    }
}

/// Errors related to configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error(transparent)]
    InvalidVersion(#[from] VersionError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Errors raised for malformed command-line input before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid attribute format: {0}")]
    InvalidAttribute(String),

    #[error("Password must be {max} characters or less.")]
    PasswordTooLong { max: usize },
}

/// Application-level errors that wrap domain errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-zero `response.status`.
    #[error("Failed to {operation}. {message} Status code: {status}")]
    Server {
        operation: String,
        status: i64,
        message: String,
    },

    #[error("{label} with ID '{id}' not found. {message}")]
    NotFound {
        label: String,
        id: String,
        message: String,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Process exit code for this failure. Server statuses that do not fit
    /// a non-zero exit byte become 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Server { status, .. } => i32::try_from(*status)
                .ok()
                .filter(|code| (1..=255).contains(code))
                .unwrap_or(1),
            _ => 1,
        }
    }

    /// Whether the failure comes from a response the caller has already
    /// printed in full (json/yaml output).
    pub fn is_server_reported(&self) -> bool {
        matches!(self, AppError::Server { .. })
    }
}
