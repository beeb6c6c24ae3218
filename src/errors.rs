//! Structured error types for portable-dialogs
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations.
//!
//! Dialogs themselves never fail: a helper that cannot be launched reports
//! exit code -1 and the facades turn that into Cancel or an empty path list.
//! These errors cover the setup paths around them (config files, parsing
//! user-supplied filters and helper names, native API failures).

use thiserror::Error;

/// All possible errors in portable-dialogs
#[derive(Error, Debug)]
pub enum DialogError {
    /// File system or process I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML for this schema
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized back to TOML
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// File filter spec is not `label=pattern [pattern...]`
    #[error("Invalid file filter '{0}'. Expected: label=*.ext [*.ext ...]")]
    InvalidFilter(String),

    /// Unknown desktop helper name
    #[error("Unknown helper '{0}'. Expected: zenity, matedialog, qarma, kdialog")]
    InvalidHelper(String),

    /// A native (Win32) dialog call failed
    #[error("Native dialog error: {0}")]
    Native(String),
}

/// Convenience Result type using DialogError
pub type Result<T> = std::result::Result<T, DialogError>;
