use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for auth-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub guard: GuardConfig,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Session cookie configuration.
#[derive(Deserialize, Clone)]
pub struct SessionConfig {
    /// Signing secret for the session cookie; no default is shipped
    pub secret: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
    #[serde(default)]
    pub secure_cookie: bool,
}

// Keeps the secret out of startup logs and panics.
impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"***")
            .field("cookie_name", &self.cookie_name)
            .field("expiration_hours", &self.expiration_hours)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

/// Authentication guard configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GuardConfig {
    /// Reject sessions that never completed a handshake
    #[serde(default)]
    pub require_handshake: bool,
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_expiration_hours() -> i64 {
    24
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SESSION__SECRET, AUTH__SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: AUTH__SESSION__SECRET=... overrides session.secret
            .add_source(
                Environment::with_prefix("AUTH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.secret.len() < auth::session::MIN_SECRET_LEN {
            return Err(ConfigError::Message(format!(
                "session.secret must be at least {} bytes",
                auth::session::MIN_SECRET_LEN
            )));
        }

        if self.session.expiration_hours <= 0 {
            return Err(ConfigError::Message(
                "session.expiration_hours must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
