/// Connection Resolution Module
///
/// Every public operation on `TableAccessor` accepts the database either as
/// a path to open or as an already-open `rusqlite::Connection` borrowed from
/// the caller. This module normalizes the two forms into a single handle so
/// each operation is independently safe to call with either.
///
/// Connections opened here are owned by the handle and close when it drops,
/// so internally-opened connections are released on every exit path.
/// Borrowed connections remain the caller's responsibility.
use crate::core::{LitetabError, Result};
use rusqlite::Connection;
use std::ops::Deref;
use tracing::debug;

/// A database argument: either a path to open or a borrowed open connection.
pub enum DbInput<'a> {
    /// Path to a SQLite database file, or ":memory:"
    Path(String),
    /// An already-open connection owned by the caller
    Open(&'a Connection),
}

impl From<&str> for DbInput<'_> {
    fn from(path: &str) -> Self {
        DbInput::Path(path.to_string())
    }
}

impl From<String> for DbInput<'_> {
    fn from(path: String) -> Self {
        DbInput::Path(path)
    }
}

impl<'a> From<&'a Connection> for DbInput<'a> {
    fn from(conn: &'a Connection) -> Self {
        DbInput::Open(conn)
    }
}

/// A resolved connection: owned if opened from a path, borrowed otherwise.
pub enum DbHandle<'a> {
    Owned(Connection),
    Borrowed(&'a Connection),
}

impl Deref for DbHandle<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        match self {
            DbHandle::Owned(conn) => conn,
            DbHandle::Borrowed(conn) => conn,
        }
    }
}

/// Resolves a database argument into a usable connection handle.
///
/// A path opens a new connection; an open connection passes through
/// unchanged. A blank path is the one representable invalid argument and
/// fails with `InvalidArgument` before any statement is executed.
pub fn resolve(input: DbInput<'_>) -> Result<DbHandle<'_>> {
    match input {
        DbInput::Path(path) => {
            if path.trim().is_empty() {
                return Err(LitetabError::InvalidArgument(
                    "database name or connection object expected".to_string(),
                ));
            }
            debug!("Opening database at {}", path);
            Ok(DbHandle::Owned(Connection::open(path)?))
        }
        DbInput::Open(conn) => Ok(DbHandle::Borrowed(conn)),
    }
}
