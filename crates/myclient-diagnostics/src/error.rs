//! Client error types

use std::fmt;
use thiserror::Error;

/// Error reported by the database connection layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct DbError {
    /// Server error number, when the server supplied one
    pub code: Option<u16>,
    /// Human-readable message from the driver or server
    pub message: String,
}

impl DbError {
    /// Create an error without a server error number
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Create an error carrying a server error number
    pub fn with_code(code: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "ERROR {}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Main client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Handshake or ping failed
    #[error("failed to connect to database: {0}")]
    Connection(#[source] DbError),

    /// A statement of a file or stdin batch failed; the rest of the batch is skipped
    #[error("batch statement failed: {source} (statement: {statement})")]
    BatchExecution {
        statement: String,
        #[source]
        source: DbError,
    },

    /// An interactive statement failed
    #[error("execution failed: {0}")]
    Execution(#[source] DbError),

    /// Reading rows from a cursor failed
    #[error("failed to render results: {0}")]
    Render(#[source] DbError),

    /// Malformed command-line argument
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Line reader failure other than end of input
    #[error("failed to read input: {0}")]
    ReadInput(String),

    /// Terminal or file I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Whether the error ends the process rather than a single statement.
    /// Fatal errors exit with code 1.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::BatchExecution { .. } | Self::Argument(_)
        )
    }
}
