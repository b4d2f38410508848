// File: crates/whereabouts_gcal/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{ErrorResponse, WorkingLocationQuery, WorkingLocationResponse};

#[utoipa::path(
    get,
    path = "/working-location",
    params(
        ("calendarId" = Option<String>, Query, description = "Calendar to query; falls back to the configured calendar, then \"primary\"", example = "primary")
    ),
    responses(
        (status = 200, description = "Working location label, or a fallback label", body = WorkingLocationResponse,
         example = json!({
             "working_location": "Office"
         })
        ),
        (status = 500, description = "Upstream calendar failure", body = ErrorResponse,
         example = json!({
             "error": "Error fetching working location"
         })
        )
    ),
    tag = "whereabouts"
)]
fn doc_working_location_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_working_location_handler),
    components(
        schemas(
            WorkingLocationQuery,
            WorkingLocationResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "whereabouts", description = "Working location API")
    ),
    servers(
        (url = "/", description = "Whereabouts API server")
    )
)]
pub struct GcalApiDoc;
