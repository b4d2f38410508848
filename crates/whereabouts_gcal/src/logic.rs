// --- File: crates/whereabouts_gcal/src/logic.rs ---
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use whereabouts_common::error::HttpStatusCode;
use whereabouts_common::services::{CalendarService, UpcomingEvent};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum GcalError {
    #[error("Calendar service error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HttpStatusCode for GcalError {
    fn status_code(&self) -> u16 {
        match self {
            GcalError::Upstream(_) => 500,
        }
    }
}

// --- Constants ---

/// Calendar queried when neither the request nor the configuration names one.
pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// Upstream tag distinguishing working-location declarations from plain events.
pub const WORKING_LOCATION_EVENT_TYPE: &str = "workingLocation";

/// Upper bound on events fetched from the calendar (a single page).
pub const MAX_UPCOMING_EVENTS: i32 = 10;

/// Label returned when the calendar has no upcoming events at all.
pub const NO_EVENTS_FALLBACK: &str = "No working location found for today";

/// Label returned when no upcoming event is a working-location declaration.
pub const NO_WORKING_LOCATION_EVENTS_FALLBACK: &str = "No working location events found for today";

/// Label returned when the chosen declaration has no usable summary.
pub const NO_SUMMARY_FALLBACK: &str = "No working location summary found";

/// Body of every 500 response; upstream details never reach callers.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching working location";

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct WorkingLocationQuery {
    /// Calendar to query; falls back to the configured calendar, then "primary"
    #[serde(rename = "calendarId")]
    #[cfg_attr(feature = "openapi", schema(example = "primary"))]
    pub calendar_id: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WorkingLocationResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Office"))]
    pub working_location: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Error fetching working location"))]
    pub error: String,
}

// --- Resolver Logic ---

/// Resolves the current working-location label for a calendar.
///
/// Fetches the next [`MAX_UPCOMING_EVENTS`] events starting now and hands them
/// to [`select_working_location`]. Only upstream failures are errors; an empty
/// or declaration-free window resolves to a fallback label.
pub async fn resolve_working_location<S>(
    calendar: &S,
    calendar_id: &str,
) -> Result<String, GcalError>
where
    S: CalendarService + ?Sized,
{
    let now = Utc::now();
    let events = calendar
        .list_upcoming_events(calendar_id, now, MAX_UPCOMING_EVENTS)
        .await
        .map_err(|err| GcalError::Upstream(Box::new(err)))?;

    debug!(calendar_id = %calendar_id, fetched = events.len(), "fetched upcoming events");

    Ok(select_working_location(&events))
}

/// Picks the working-location label out of a window of upcoming events.
///
/// Declarations are matched by `event_type`; among them the most recently
/// updated one wins, with ties going to the first seen. Events without an
/// `updated` stamp lose to any stamped event.
pub fn select_working_location(events: &[UpcomingEvent]) -> String {
    if events.is_empty() {
        return NO_EVENTS_FALLBACK.to_string();
    }

    let freshest = events
        .iter()
        .filter(|event| event.event_type.as_deref() == Some(WORKING_LOCATION_EVENT_TYPE))
        .reduce(|best, candidate| {
            if candidate.updated > best.updated {
                candidate
            } else {
                best
            }
        });

    let declaration = match freshest {
        Some(event) => event,
        None => return NO_WORKING_LOCATION_EVENTS_FALLBACK.to_string(),
    };

    declaration
        .summary
        .as_deref()
        .filter(|summary| !summary.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string())
}
