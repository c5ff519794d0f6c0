//! Error types for contactbook.
//!
//! This module defines all error types used throughout the contactbook crate,
//! split into the conditions a user can recover from (a bad form, an unknown
//! contact) and the ones that end the request (storage, configuration, views).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for contactbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Request Errors ===
    /// Submitted contact fields failed the shape rules.
    #[error("validation failed: {message}")]
    Validation {
        /// Generic message suitable for showing next to the form.
        message: String,
    },

    /// No contact exists with the given id.
    #[error("contact not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    // === Storage Errors ===
    /// The contacts file is missing, unreadable, or not a valid contact array.
    #[error("failed to read contacts from {path}: {source}")]
    StorageRead {
        /// Path to the contacts file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The contacts file could not be written.
    #[error("failed to write contacts to {path}: {source}")]
    StorageWrite {
        /// Path to the contacts file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Web Errors ===
    /// A view template failed to load or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The HTTP server failed to bind or stopped with an error.
    #[error("server error: {0}")]
    Server(String),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for contactbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a contact id.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a new server error.
    #[must_use]
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error came from reading or writing the contacts file.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageRead { .. } | Self::StorageWrite { .. } | Self::DirectoryCreate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("abc");
        assert_eq!(err.to_string(), "contact not found: abc");

        let err = Error::validation("Please fill in all required fields.");
        assert_eq!(
            err.to_string(),
            "validation failed: Please fill in all required fields."
        );
    }

    #[test]
    fn test_error_is_storage() {
        let err = Error::StorageRead {
            path: PathBuf::from("/tmp/contacts.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_storage());

        let err = Error::StorageWrite {
            path: PathBuf::from("/tmp/contacts.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_storage());

        assert!(!Error::not_found("x").is_storage());
    }

    #[test]
    fn test_storage_read_error_display() {
        let err = Error::StorageRead {
            path: PathBuf::from("/data/contacts.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/contacts.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_storage_read_from_json_error() {
        let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = Error::StorageRead {
            path: PathBuf::from("contacts.json"),
            source: json_err.into(),
        };
        if let Error::StorageRead { source, .. } = &err {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
    }

    #[test]
    fn test_server_error() {
        let err = Error::server("address in use");
        assert_eq!(err.to_string(), "server error: address in use");
    }

    #[test]
    fn test_internal_error() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "port must be greater than 0".to_string(),
        };
        assert!(err.to_string().contains("port must be greater than 0"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/root/forbidden"));
    }
}
