// File: crates/whereabouts_gcal/src/auth.rs
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{self, read_service_account_key, ServiceAccountAuthenticator, ServiceAccountKey},
    CalendarHub,
};
use std::path::Path;
use thiserror::Error;
use tracing::info;
use whereabouts_config::GcalConfig;

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// OAuth scope requested for all calendar access; the service never writes.
pub const CALENDAR_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Startup failures around service account credentials.
///
/// All of these are fatal: the caller is expected to abort before the server
/// starts listening.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error(
        "no credentials configured: set SERVICE_ACCOUNT_EMAIL and PRIVATE_KEY, or gcal.key_path"
    )]
    Missing,
    #[error("incomplete inline credentials: {present} is set but {missing} is not")]
    IncompletePair {
        present: &'static str,
        missing: &'static str,
    },
    #[error("failed to read service account key file: {0}")]
    KeyFile(#[from] std::io::Error),
    #[error("failed to initialize the authenticator: {0}")]
    Authenticator(#[source] std::io::Error),
    #[error("failed to build the HTTPS connector: {0}")]
    Connector(#[source] std::io::Error),
    #[error("failed to obtain an access token: {0}")]
    TokenFetch(#[from] yup_oauth2::Error),
}

/// Builds an authenticated Calendar hub from the configured credentials.
///
/// A complete inline pair (`service_account_email` + `private_key`) takes
/// precedence over `key_path`; half a pair is an error rather than a silent
/// fallback. One access token is fetched before the hub is handed out, so
/// unusable credentials fail here instead of on the first request.
pub async fn create_calendar_hub(config: &GcalConfig) -> Result<HubType, CredentialError> {
    let sa_key = load_service_account_key(config).await?;
    let client_email = sa_key.client_email.clone();

    let auth = ServiceAccountAuthenticator::builder(sa_key)
        .build()
        .await
        .map_err(CredentialError::Authenticator)?;

    // One token round-trip up front; startup aborts on unusable credentials.
    auth.token(&[CALENDAR_READONLY_SCOPE]).await?;
    info!(client_email = %client_email, "calendar credentials verified");

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(CredentialError::Connector)?
        .https_or_http()
        .enable_http1()
        .build();

    // Create client without specifying body type
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = CalendarHub::new(client, auth);

    Ok(hub)
}

/// Picks the credential source and produces the service account key.
async fn load_service_account_key(config: &GcalConfig) -> Result<ServiceAccountKey, CredentialError> {
    match (
        config.service_account_email.as_deref(),
        config.private_key.as_deref(),
    ) {
        (Some(email), Some(private_key)) => Ok(inline_service_account_key(email, private_key)),
        (Some(_), None) => Err(CredentialError::IncompletePair {
            present: "service_account_email",
            missing: "private_key",
        }),
        (None, Some(_)) => Err(CredentialError::IncompletePair {
            present: "private_key",
            missing: "service_account_email",
        }),
        (None, None) => match config.key_path.as_deref() {
            Some(key_path) => Ok(read_service_account_key(Path::new(key_path)).await?),
            None => Err(CredentialError::Missing),
        },
    }
}

/// Assembles a [`ServiceAccountKey`] from env-style inline credentials.
fn inline_service_account_key(client_email: &str, private_key: &str) -> ServiceAccountKey {
    ServiceAccountKey {
        key_type: Some("service_account".to_string()),
        project_id: None,
        private_key_id: None,
        private_key: normalize_private_key(private_key),
        client_email: client_email.to_string(),
        client_id: None,
        auth_uri: None,
        token_uri: GOOGLE_TOKEN_URI.to_string(),
        auth_provider_x509_cert_url: None,
        client_x509_cert_url: None,
    }
}

/// Turns `\n` escape sequences back into real newlines.
///
/// PEM material passed through env files or deployment UIs usually arrives
/// single-line with literal backslash-n pairs; the signer needs real line
/// breaks.
pub fn normalize_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
