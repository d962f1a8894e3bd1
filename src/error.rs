//! Error types for the activities API.

use thiserror::Error;

/// Coarse classification of a rejected registry operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The named activity does not exist.
    NotFound,
    /// The request contradicts the current participant list.
    Conflict,
}

/// Errors returned by signup/unregister. The display text is the message
/// shown to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::ActivityNotFound => ErrorKind::NotFound,
            RegistryError::AlreadySignedUp | RegistryError::NotSignedUp => ErrorKind::Conflict,
        }
    }
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {value:?}")]
    InvalidPort { value: String },

    #[error("cannot parse bind address {addr:?}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
