//! Error types for forgedown

use thiserror::Error;

/// Main error type for forgedown operations
#[derive(Error, Debug)]
pub enum ForgedownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for forgedown operations
pub type Result<T> = std::result::Result<T, ForgedownError>;
