// --- File: crates/whereabouts_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod logging;  // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{auth_error, config_error, internal_error, Context, HttpStatusCode, WhereaboutsError};

// Re-export service abstractions for easier access
pub use services::{BoxFuture, BoxedError, CalendarService, UpcomingEvent};
