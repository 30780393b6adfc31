use thiserror::Error;

/// Core error types for fwbatch
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rule source could not be read or parsed
    #[error("Failed to load rules from '{path}': {message}")]
    Load { path: String, message: String },

    /// Rule name violates the command-line embedding constraints
    #[error("Invalid rule name {name:?}: {reason}")]
    InvalidRuleName { name: String, reason: String },

    /// Script or report artifact could not be written
    #[error("Failed to write '{path}': {message}")]
    Write { path: String, message: String },

    /// The show-command invocation mechanism itself failed
    ///
    /// A non-zero exit status from netsh is not a verification error;
    /// only a failure to spawn or communicate with the process is.
    #[error("Verification aborted at rule '{rule}': {message}")]
    Verification { rule: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
