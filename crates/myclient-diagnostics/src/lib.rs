//! Error handling for the myclient SQL shell
//!
//! Every failure the shell can report is a [`ClientError`]. Failures coming
//! from the database connection layer are carried as [`DbError`] so their text
//! is always shown to the user.

mod error;

pub use error::*;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Result type for connection-layer operations
pub type DbResult<T> = std::result::Result<T, DbError>;
