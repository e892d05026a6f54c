use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// Both outbound legs (upstream lookup and Telegram dispatch) share
/// one client and one bounded wait. No retries anywhere.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> AppState {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        AppState {
            config: Arc::new(config),
            http,
        }
    }
}
