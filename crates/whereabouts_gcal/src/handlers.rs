// File: crates/whereabouts_gcal/src/handlers.rs
use crate::logic::{
    resolve_working_location, ErrorResponse, WorkingLocationQuery, WorkingLocationResponse,
    DEFAULT_CALENDAR_ID, FETCH_ERROR_MESSAGE,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};
use whereabouts_common::error::HttpStatusCode;
use whereabouts_common::services::{BoxedError, CalendarService};
use whereabouts_config::AppConfig;

// Define shared state needed by the working-location handlers
#[derive(Clone)]
pub struct GcalState {
    pub config: Arc<AppConfig>,
    /// The authenticated calendar client, shared across requests.
    pub calendar: Arc<dyn CalendarService<Error = BoxedError>>,
}

/// Handler to report the current working location.
///
/// Always answers 200 with a label (possibly a fallback); only an upstream
/// calendar failure produces the 500 error body.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/working-location",
    params(WorkingLocationQuery),
    responses(
        (status = 200, description = "Working location label, or a fallback label", body = WorkingLocationResponse),
        (status = 500, description = "Upstream calendar failure", body = ErrorResponse)
    ),
    tag = "whereabouts"
))]
pub async fn working_location_handler(
    State(state): State<Arc<GcalState>>,
    Query(query): Query<WorkingLocationQuery>,
) -> Result<Json<WorkingLocationResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Request beats configuration beats the built-in default. Empty strings
    // count as absent.
    let calendar_id = query
        .calendar_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .or_else(|| {
            state
                .config
                .gcal
                .calendar_id
                .as_deref()
                .filter(|id| !id.is_empty())
        })
        .unwrap_or(DEFAULT_CALENDAR_ID);

    match resolve_working_location(state.calendar.as_ref(), calendar_id).await {
        Ok(working_location) => {
            info!(calendar_id = %calendar_id, working_location = %working_location, "resolved working location");
            Ok(Json(WorkingLocationResponse { working_location }))
        }
        Err(err) => {
            error!(calendar_id = %calendar_id, error = %err, "Error fetching working location");
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((
                status,
                Json(ErrorResponse {
                    error: FETCH_ERROR_MESSAGE.to_string(),
                }),
            ))
        }
    }
}
