// --- File: crates/whereabouts_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for startup and cross-crate failures.
///
/// Request-scoped errors live next to their handlers; this enum covers the
/// things that can go wrong before the server is ready to accept traffic.
#[derive(Error, Debug)]
pub enum WhereaboutsError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for WhereaboutsError {
    fn status_code(&self) -> u16 {
        match self {
            WhereaboutsError::ConfigError(_) => 500,
            WhereaboutsError::AuthError(_) => 401,
            WhereaboutsError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, WhereaboutsError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, WhereaboutsError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, WhereaboutsError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| WhereaboutsError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, WhereaboutsError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| WhereaboutsError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<std::io::Error> for WhereaboutsError {
    fn from(err: std::io::Error) -> Self {
        WhereaboutsError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> WhereaboutsError {
    WhereaboutsError::ConfigError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> WhereaboutsError {
    WhereaboutsError::AuthError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> WhereaboutsError {
    WhereaboutsError::InternalError(message.to_string())
}
