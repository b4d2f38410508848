// --- File: crates/whereabouts_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for external services used by the
//! application. These traits allow for dependency injection and easier testing
//! by decoupling the application logic from specific implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for read-only calendar service operations.
///
/// Implementations fetch events from a backing calendar; consumers stay
/// unaware of the wire protocol, which keeps request handlers testable with
/// in-memory fakes.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the next events of a calendar, ordered by start time.
    ///
    /// Recurring events are expanded to single instances. `starting_from`
    /// bounds the window from below: events already over by that instant are
    /// excluded. At most `max_results` events are returned (one page, no
    /// follow-up fetches).
    fn list_upcoming_events(
        &self,
        calendar_id: &str,
        starting_from: DateTime<Utc>,
        max_results: i32,
    ) -> BoxFuture<'_, Vec<UpcomingEvent>, Self::Error>;
}

/// The resolver-facing projection of a calendar event.
///
/// Every field is optional because the upstream API omits any of them freely;
/// interpretation of absent values is the consumer's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingEvent {
    /// The upstream event type tag (e.g. "workingLocation", "outOfOffice").
    pub event_type: Option<String>,
    /// The summary or title of the event.
    pub summary: Option<String>,
    /// When the event was last updated.
    pub updated: Option<DateTime<Utc>>,
    /// The start of the event, RFC 3339; all-day events carry midnight UTC.
    pub start_time: Option<String>,
}
