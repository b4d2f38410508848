// --- File: crates/whereabouts_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16, // Overridable via PORT
}

// --- Google Calendar Config ---
// Holds non-secret calendar settings plus the credential material, which is
// normally injected through env vars rather than written into config files.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    /// Calendar queried when a request does not name one. Falls back to
    /// `"primary"` when unset.
    pub calendar_id: Option<String>,
    /// Path to a service account JSON key file.
    /// Loaded via GOOGLE_APPLICATION_CREDENTIALS.
    pub key_path: Option<String>,
    /// Service account identity. Loaded via SERVICE_ACCOUNT_EMAIL.
    pub service_account_email: Option<String>,
    /// PEM private key, possibly with `\n` escapes. Loaded via PRIVATE_KEY.
    pub private_key: Option<String>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory (defaults are seeded by the loader)
    pub server: ServerConfig,

    // Calendar section may be absent entirely; credential checks happen at
    // startup, not at deserialization time.
    #[serde(default)]
    pub gcal: GcalConfig,
}
