// Core infrastructure modules
pub mod core;

// Feature-specific modules
pub mod accessor;
pub mod config;
pub mod db;
pub mod ident;
pub mod output;
pub mod records;
pub mod render;

// Re-export commonly used types for convenience
pub use accessor::TableAccessor;
pub use crate::core::{LitetabError, Result};
pub use db::DbInput;
pub use records::RecordSet;
