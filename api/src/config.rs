use thiserror::Error;

const DEFAULT_UPSTREAM_BASE: &str =
    "https://yunus-freefire-api.onrender.com/get_player_personal_show";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Process configuration, read from the environment once at startup
/// and injected into the router state. Nothing else in the service
/// touches the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot auth token for the Telegram API.
    pub telegram_token: String,
    /// Shared secret embedded in the webhook path.
    pub webhook_secret: String,
    /// Externally reachable base URL for webhook self-registration.
    /// When absent, registration is skipped with a warning.
    pub public_url: Option<String>,
    /// Server code used when a check omits one.
    pub default_server: String,
    /// Base URL of the player lookup API.
    pub upstream_base: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Ok(Config {
            telegram_token: required("TELEGRAM_TOKEN")?,
            webhook_secret: required("WEBHOOK_SECRET")?,
            public_url: std::env::var("PUBLIC_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty()),
            default_server: std::env::var("DEFAULT_SERVER").unwrap_or_else(|_| "sg".to_string()),
            upstream_base: std::env::var("UPSTREAM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        })
    }

    pub fn telegram_api_base(&self) -> String {
        format!("https://api.telegram.org/bot{}", self.telegram_token)
    }

    /// Full webhook URL to register, when PUBLIC_URL is configured.
    pub fn webhook_url(&self) -> Option<String> {
        self.public_url
            .as_ref()
            .map(|base| format!("{base}/webhook/{}", self.webhook_secret))
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    required_value(name, std::env::var(name).ok())
}

// Split from the env read so tests don't have to mutate process
// environment.
fn required_value(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing(name)),
    }
}
