use crate::core::{LitetabError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default database target used when no configuration is supplied.
pub const DEFAULT_DB_PATH: &str = "mydb.db";

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub database: Option<DatabaseConfig>,
}

/// Database-related configuration.
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseConfig {
    /// Target database path for `create_table` and the CLI
    pub path: Option<String>,
    /// Override for the default create-table statement
    pub create_table_sql: Option<String>,
}

impl Config {
    /// The configured database path, falling back to the default target.
    pub fn database_path(&self) -> &str {
        self.database
            .as_ref()
            .and_then(|db| db.path.as_deref())
            .unwrap_or(DEFAULT_DB_PATH)
    }

    /// The configured create-table statement override, if any.
    pub fn create_table_sql(&self) -> Option<&str> {
        self.database
            .as_ref()
            .and_then(|db| db.create_table_sql.as_deref())
    }
}

/// Loads configuration from a TOML file at the given path.
///
/// # Example
///
/// ```no_run
/// use litetab::config::load_config;
///
/// let config = load_config("litetab.toml").expect("Failed to load config");
/// println!("{}", config.database_path());
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| LitetabError::Config(e.to_string()))
}
