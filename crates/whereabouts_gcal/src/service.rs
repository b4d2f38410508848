// --- File: crates/whereabouts_gcal/src/service.rs ---
//! Google Calendar service implementation.
//!
//! This module provides the production implementation of the CalendarService
//! trait plus the error-erasing adapter that handlers consume.

use chrono::{DateTime, Utc};
use google_calendar3::api::Scope;
use std::sync::Arc;
use thiserror::Error;
use whereabouts_common::services::{BoxFuture, BoxedError, CalendarService, UpcomingEvent};

use crate::auth::HubType;

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
}

/// Google Calendar service implementation.
pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarService {
    /// Create a new Google Calendar service.
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    /// Retrieves the next events of a calendar, ordered by start time.
    ///
    /// Recurring events are expanded to single instances so per-day
    /// working-location declarations show up individually. Only the first
    /// page is requested; `max_results` bounds its size. The call runs under
    /// the read-only scope.
    fn list_upcoming_events(
        &self,
        calendar_id: &str,
        starting_from: DateTime<Utc>,
        max_results: i32,
    ) -> BoxFuture<'_, Vec<UpcomingEvent>, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let request = calendar_hub
                .events()
                .list(&calendar_id)
                .time_min(starting_from)
                .max_results(max_results)
                .single_events(true) // Expand recurring events
                .order_by("startTime") // Sort by start time
                .add_scope(Scope::Readonly);

            // Make the API call
            let (_, events_list) = request.doit().await?;

            let mut upcoming = Vec::new();

            if let Some(items) = events_list.items {
                for event in items {
                    // Handle start time; all-day events only carry a date
                    let start_time = event.start.and_then(|start| match start.date_time {
                        Some(dt) => Some(dt.to_rfc3339()),
                        None => start.date.map(|d| format!("{}T00:00:00Z", d)),
                    });

                    upcoming.push(UpcomingEvent {
                        event_type: event.event_type,
                        summary: event.summary,
                        updated: event.updated,
                        start_time,
                    });
                }
            }

            Ok(upcoming)
        })
    }
}

/// Adapter exposing any [`CalendarService`] with `Error = BoxedError`.
///
/// Handler state holds the service as a trait object with a fixed error
/// type; this wrapper erases the concrete error at that boundary.
pub struct ErasedCalendarService<S> {
    inner: S,
}

impl<S> ErasedCalendarService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> CalendarService for ErasedCalendarService<S>
where
    S: CalendarService,
{
    type Error = BoxedError;

    fn list_upcoming_events(
        &self,
        calendar_id: &str,
        starting_from: DateTime<Utc>,
        max_results: i32,
    ) -> BoxFuture<'_, Vec<UpcomingEvent>, Self::Error> {
        let fut = self
            .inner
            .list_upcoming_events(calendar_id, starting_from, max_results);
        Box::pin(async move { fut.await.map_err(|err| BoxedError(Box::new(err))) })
    }
}
