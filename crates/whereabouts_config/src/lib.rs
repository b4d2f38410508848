// --- File: crates/whereabouts_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, later entries winning:
/// 1. built-in defaults (`server.host` = "127.0.0.1", `server.port` = 3000),
/// 2. `config/default.*` then `config/{RUN_ENV}.*` files (both optional),
/// 3. prefixed environment variables (`WHEREABOUTS__SERVER__PORT` style,
///    prefix overridable via `PREFIX`),
/// 4. the well-known variables: `SERVICE_ACCOUNT_EMAIL`, `PRIVATE_KEY`,
///    `GOOGLE_APPLICATION_CREDENTIALS` and `PORT`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "WHEREABOUTS".to_string());

    // Resolved relative to the workspace root during development; deployed
    // binaries fall back to the working directory.
    let workspace_root = env::var("CARGO_MANIFEST_DIR")
        .ok()
        .and_then(|dir| {
            PathBuf::from(dir)
                .ancestors()
                .nth(2) // go from crates/whereabouts_config to workspace root
                .map(Path::to_path_buf)
        })
        .unwrap_or_else(|| PathBuf::from("."));

    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{run_env}"));

    tracing::debug!(
        run_env = %run_env,
        default_path = %default_path.display(),
        env_path = %env_path.display(),
        "loading configuration"
    );

    let builder = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000_i64)?
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"))
        // The plain variable names always win over files and prefixed vars.
        .set_override_option(
            "gcal.service_account_email",
            env::var("SERVICE_ACCOUNT_EMAIL").ok(),
        )?
        .set_override_option("gcal.private_key", env::var("PRIVATE_KEY").ok())?
        .set_override_option(
            "gcal.key_path",
            env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
        )?
        .set_override_option("server.port", env::var("PORT").ok())?;

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// Loads at most once per process; subsequent calls are no-ops. The file
/// defaults to ".env" and can be redirected with `DOTENV_OVERRIDE`. A missing
/// file is not an error.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
