//! Error types for the credit scoring pipeline

use thiserror::Error;

/// Result type alias using our custom Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the credit scoring pipeline
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Normalization produced no usable records, so the table has none of its columns
    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<&'static str> },

    // Lookup errors
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    // Serialization errors
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("CSV error: {0}")]
    Csv(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Name of the failure category, used in user-facing abort messages
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) | Error::Deserialization(_) => "malformed-input",
            Error::MissingColumns { .. } => "empty-result",
            Error::WalletNotFound(_) => "lookup-failure",
            Error::Csv(_) | Error::Io(_) => "io-failure",
            Error::Anyhow(_) => "internal",
        }
    }

    /// Check if this error must abort a batch run
    ///
    /// Lookup failures only affect the single explanation request that raised them.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::WalletNotFound(_))
    }
}

// Conversion from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::Io(e.to_string())
        } else {
            Error::Deserialization(e.to_string())
        }
    }
}

// Conversion from csv errors
impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e.to_string())
    }
}

// Conversion from I/O errors
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
