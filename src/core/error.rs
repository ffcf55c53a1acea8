/// Litetab Error Module
///
/// This module defines the error types for the litetab helper layer.
/// Engine errors are passed through uninterpreted; the only locally
/// raised variant is `InvalidArgument` from connection resolution.
use thiserror::Error;

/// Error type for all litetab operations.
///
/// This enum covers the error scenarios of the helper layer:
/// - Database operations (connection, statements, transactions)
/// - Invalid database arguments caught before any statement runs
/// - Configuration loading and validation
/// - File system operations
#[derive(Error, Debug)]
pub enum LitetabError {
    /// Database-related errors from SQLite operations, passed through
    /// without translation or recovery
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The database argument was neither a usable path nor an
    /// already-open connection
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use LitetabError as the error type.
pub type Result<T> = std::result::Result<T, LitetabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let db_err = LitetabError::Database(rusqlite::Error::ExecuteReturnedResults);
        assert!(db_err.to_string().contains("Database error"));

        let arg_err =
            LitetabError::InvalidArgument("database name or connection object expected".to_string());
        assert!(arg_err.to_string().contains("Invalid argument"));

        let config_err = LitetabError::Config("Invalid config".to_string());
        assert!(config_err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let litetab_err: LitetabError = io_err.into();
        match litetab_err {
            LitetabError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }

        let sql_err = rusqlite::Error::ExecuteReturnedResults;
        let litetab_err: LitetabError = sql_err.into();
        match litetab_err {
            LitetabError::Database(_) => {}
            _ => panic!("Expected Database error"),
        }
    }
}
