// --- File: crates/whereabouts_gcal/src/routes.rs ---

use crate::auth::{create_calendar_hub, CredentialError};
use crate::handlers::{working_location_handler, GcalState};
use crate::service::{ErasedCalendarService, GoogleCalendarService};
use axum::{routing::get, Router};
use std::sync::Arc;
use whereabouts_common::services::{BoxedError, CalendarService};
use whereabouts_config::AppConfig;

/// Creates a router containing all routes for the working-location feature.
///
/// The authenticated calendar client is built (and its credentials verified)
/// first, so a misconfigured deployment fails here instead of serving
/// requests it can never answer.
pub async fn routes(config: Arc<AppConfig>) -> Result<Router, CredentialError> {
    let calendar_hub = create_calendar_hub(&config.gcal).await?;
    let service = ErasedCalendarService::new(GoogleCalendarService::new(Arc::new(calendar_hub)));
    Ok(router_with_service(config, Arc::new(service)))
}

/// Assembles the router around an already constructed calendar service.
///
/// This is the injection seam: [`routes`] wires the real client through it,
/// tests pass a fake.
pub fn router_with_service(
    config: Arc<AppConfig>,
    calendar: Arc<dyn CalendarService<Error = BoxedError>>,
) -> Router {
    let gcal_state = Arc::new(GcalState { config, calendar });

    Router::new()
        .route("/working-location", get(working_location_handler))
        .with_state(gcal_state)
}
