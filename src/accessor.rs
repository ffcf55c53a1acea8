/// Table Accessor Module
///
/// This module provides `TableAccessor`, the single component responsible
/// for all database operations in litetab: creating and dropping tables,
/// inserting column-oriented record sets, listing tables, inspecting
/// schema, and printing table contents.
///
/// Every operation that takes a database argument resolves it first
/// (path or open connection, see `db::resolve`), so each operation is
/// independently safe to call with either form. Table names interpolated
/// into statement text are always scrubbed down to alphanumerics first,
/// since identifiers cannot be bound as parameters.
use crate::config::{Config, DEFAULT_DB_PATH};
use crate::core::Result;
use crate::db::{self, DbInput};
use crate::ident;
use crate::output::{OutputSink, TracingSink};
use crate::records::RecordSet;
use crate::render;
use rusqlite::Connection;
use tracing::{debug, info};

/// Statement used by `create_table` when no override is supplied.
pub const DEFAULT_CREATE_TABLE_SQL: &str = "\
CREATE TABLE users(
    id INTEGER PRIMARY KEY,
    name TEXT,
    phone TEXT,
    email TEXT UNIQUE,
    password TEXT)";

/// The single component behind all litetab database operations.
///
/// Holds the configured database target used by `create_table`, an
/// optional create-statement override from configuration, and the output
/// sink that receives table listings and formatted rows.
pub struct TableAccessor<S: OutputSink = TracingSink> {
    db_path: String,
    create_sql: Option<String>,
    sink: S,
}

impl TableAccessor<TracingSink> {
    /// Creates an accessor targeting the given database path, with output
    /// routed through tracing.
    pub fn new(db_path: impl Into<String>) -> Self {
        TableAccessor::with_sink(db_path, TracingSink)
    }
}

impl Default for TableAccessor<TracingSink> {
    fn default() -> Self {
        TableAccessor::new(DEFAULT_DB_PATH)
    }
}

impl<S: OutputSink> TableAccessor<S> {
    /// Creates an accessor with an explicit output sink.
    pub fn with_sink(db_path: impl Into<String>, sink: S) -> Self {
        TableAccessor {
            db_path: db_path.into(),
            create_sql: None,
            sink,
        }
    }

    /// Creates an accessor from loaded configuration.
    pub fn from_config(config: &Config, sink: S) -> Self {
        TableAccessor {
            db_path: config.database_path().to_string(),
            create_sql: config.create_table_sql().map(str::to_string),
            sink,
        }
    }

    /// The sink receiving informational output. Lets callers that injected
    /// a buffering sink read the emitted lines back.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Executes the supplied create statement, or the configured/default
    /// five-column users table, against the accessor's database target.
    ///
    /// Returns the opened connection so callers can keep working with the
    /// freshly created schema. Engine errors (table already exists, bad
    /// syntax) propagate uninterpreted.
    pub fn create_table(&self, sql: Option<&str>) -> Result<Connection> {
        let sql = sql
            .or(self.create_sql.as_deref())
            .unwrap_or(DEFAULT_CREATE_TABLE_SQL);

        debug!("{}", sql);
        let conn = Connection::open(&self.db_path)?;
        conn.execute(sql, [])?;
        Ok(conn)
    }

    /// Drops the named table.
    ///
    /// The table name is scrubbed before interpolation, the same guard the
    /// other operations apply.
    pub fn drop_table<'a>(&self, db: impl Into<DbInput<'a>>, table: &str) -> Result<()> {
        let conn = db::resolve(db.into())?;
        let table = ident::scrub(table);

        let sql = format!("DROP TABLE {}", table);
        debug!("{}", sql);
        conn.execute(&sql, [])?;
        Ok(())
    }

    /// Inserts a column-oriented record set into the named table.
    ///
    /// The column list and the placeholder list are both generated from the
    /// record set's column order, and each transposed row is bound
    /// positionally to the placeholders. All rows run inside one
    /// transaction committed at the end; on a mid-batch failure the commit
    /// is skipped and the error propagates, leaving the open transaction to
    /// SQLite's default handling (rolled back when an internally-opened
    /// connection closes).
    ///
    /// Ragged record sets truncate to the shortest column; see
    /// `RecordSet::rows`.
    pub fn insert_rows<'a>(
        &self,
        db: impl Into<DbInput<'a>>,
        table: &str,
        records: &RecordSet,
    ) -> Result<()> {
        let conn = db::resolve(db.into())?;
        let table = ident::scrub(table);

        let columns = records.column_names();
        let columns_sql = format!("({})", columns.join(","));
        let values_sql = format!("({})", vec!["?"; columns.len()].join(","));
        let sql = format!("INSERT INTO {} {} VALUES{}", table, columns_sql, values_sql);

        debug!("{}", sql);
        info!("Inserting {} rows into {}", records.row_count(), table);

        conn.execute_batch("BEGIN")?;
        let mut stmt = conn.prepare(&sql)?;
        for row in records.rows() {
            stmt.execute(rusqlite::params_from_iter(row))?;
        }
        drop(stmt);
        conn.execute_batch("COMMIT")?;
        Ok(())
    }

    /// Prints the named table: header row, dashed separator, then each data
    /// row, all through the accessor's output sink.
    pub fn display_table<'a>(&mut self, db: impl Into<DbInput<'a>>, table: &str) -> Result<()> {
        let conn = db::resolve(db.into())?;
        let table = ident::scrub(table);

        let columns = table_columns(&conn, &table)?;
        self.sink.line(&render::format_row(&columns));
        self.sink.line(&render::separator_row(columns.len()));

        let sql = format!("SELECT * FROM {}", table);
        debug!("{}", sql);
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(columns.len());
            for i in 0..columns.len() {
                cells.push(render::format_value(row.get_ref(i)?));
            }
            self.sink.line(&render::format_row(&cells));
        }
        Ok(())
    }

    /// Returns the column names of the named table, in the order the
    /// engine reports them. A table that does not exist yields an empty
    /// sequence rather than an error.
    pub fn get_columns<'a>(&self, db: impl Into<DbInput<'a>>, table: &str) -> Result<Vec<String>> {
        let conn = db::resolve(db.into())?;
        let table = ident::scrub(table);
        table_columns(&conn, &table)
    }

    /// Emits the name of every table in the master catalog through the
    /// accessor's output sink.
    pub fn list_tables<'a>(&mut self, db: impl Into<DbInput<'a>>) -> Result<()> {
        let conn = db::resolve(db.into())?;

        let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table'")?;
        let names = stmt.query_map([], |row| row.get::<_, String>(0))?;
        for name in names {
            self.sink.line(&name?);
        }
        Ok(())
    }
}

/// Shared PRAGMA table_info lookup for an already-resolved connection.
/// The name-column field of each metadata row, in engine order.
fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let sql = format!("PRAGMA table_info({})", table);
    let mut stmt = conn.prepare(&sql)?;
    let column_iter = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut columns = Vec::new();
    for column in column_iter {
        columns.push(column?);
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferSink;
    use tempfile::TempDir;

    fn temp_accessor(dir: &TempDir) -> TableAccessor<BufferSink> {
        let path = dir.path().join("test.db");
        TableAccessor::with_sink(path.to_string_lossy().to_string(), BufferSink::new())
    }

    #[test]
    fn test_create_table_uses_default_schema() {
        let dir = TempDir::new().unwrap();
        let accessor = temp_accessor(&dir);

        let conn = accessor.create_table(None).unwrap();
        let columns = accessor.get_columns(&conn, "users").unwrap();
        assert_eq!(columns, vec!["id", "name", "phone", "email", "password"]);
    }

    #[test]
    fn test_create_table_twice_propagates_engine_error() {
        let dir = TempDir::new().unwrap();
        let accessor = temp_accessor(&dir);

        accessor.create_table(None).unwrap();
        let result = accessor.create_table(None);
        assert!(matches!(result, Err(crate::core::LitetabError::Database(_))));
    }

    #[test]
    fn test_drop_table_scrubs_name() {
        let dir = TempDir::new().unwrap();
        let accessor = temp_accessor(&dir);

        let conn = accessor.create_table(None).unwrap();
        // The scrubbed name reduces to "users"; the trailing injection
        // attempt is stripped rather than executed.
        accessor.drop_table(&conn, "users;--").unwrap();
        assert!(accessor.get_columns(&conn, "users").unwrap().is_empty());
    }

    #[test]
    fn test_drop_missing_table_propagates_engine_error() {
        let dir = TempDir::new().unwrap();
        let accessor = temp_accessor(&dir);

        let conn = accessor.create_table(None).unwrap();
        let result = accessor.drop_table(&conn, "no_such_table");
        assert!(matches!(result, Err(crate::core::LitetabError::Database(_))));
    }

    #[test]
    fn test_get_columns_missing_table_is_empty() {
        let dir = TempDir::new().unwrap();
        let accessor = temp_accessor(&dir);

        let conn = accessor.create_table(None).unwrap();
        assert!(accessor.get_columns(&conn, "missing").unwrap().is_empty());
    }

    #[test]
    fn test_from_config_overrides_target_and_statement() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configured.db");
        let toml = format!(
            "[database]\npath = \"{}\"\ncreate_table_sql = \"CREATE TABLE pets(id INTEGER PRIMARY KEY, name TEXT)\"\n",
            path.to_string_lossy()
        );
        let config: Config = toml::from_str(&toml).unwrap();
        let accessor = TableAccessor::from_config(&config, BufferSink::new());

        let conn = accessor.create_table(None).unwrap();
        let columns = accessor.get_columns(&conn, "pets").unwrap();
        assert_eq!(columns, vec!["id", "name"]);
    }
}
