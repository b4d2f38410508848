// File: services/whereabouts_backend/src/main.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use whereabouts_common::error::{auth_error, config_error, WhereaboutsError};
use whereabouts_common::logging;
use whereabouts_config::load_config;
use whereabouts_gcal::routes as gcal_routes;

#[tokio::main]
async fn main() -> Result<(), WhereaboutsError> {
    logging::init();

    let config = Arc::new(
        load_config().map_err(|err| config_error(format!("Failed to load config: {}", err)))?,
    );

    // Credentials are verified here; a misconfigured service never reaches
    // the listening state.
    let gcal_router = gcal_routes::routes(config.clone()).await.map_err(auth_error)?;

    #[allow(unused_mut)] // reassigned only when the openapi feature is on
    let mut app = Router::new()
        .route("/", get(|| async { "Welcome to the Whereabouts API!" }))
        .merge(gcal_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        use whereabouts_gcal::doc::GcalApiDoc;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Whereabouts API",
                version = "0.1.0",
                description = "Working location service API docs"
            ),
            components(),
            tags((name = "whereabouts", description = "Working location endpoints")),
            servers((url = "/", description = "Service root")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(GcalApiDoc::openapi());
        info!("Adding Swagger UI at /docs");

        let swagger_ui = SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
