/// Core Module for connuri
///
/// This module contains the shared infrastructure used by the parsing
/// modules: the crate-wide error type and `Result` alias.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{ConnUriError, Result};
