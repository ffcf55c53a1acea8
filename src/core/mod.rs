/// Core Module for litetab
///
/// This module contains the shared infrastructure used across the crate,
/// currently the error types and the crate-wide `Result` alias.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{LitetabError, Result};
