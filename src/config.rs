use std::time::Duration;

use clap::Args;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Connection settings for the orphanage API.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Base URL of the orphanage API
    #[arg(long = "api-url", env = "ORPHANAGE_API_URL", default_value = DEFAULT_API_URL)]
    pub base_url: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long = "timeout-secs", env = "ORPHANAGE_API_TIMEOUT", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

/// Screen behaviour switches.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ClientConfig {
    /// Drop map responses that settle after a newer request was issued
    #[arg(long)]
    pub discard_stale_responses: bool,

    /// Refuse a second submit while one is already in flight
    #[arg(long)]
    pub single_flight_submit: bool,
}

fn parse_timeout(value: &str) -> Result<Duration, String> {
    let secs: u64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a whole number of seconds"))?;
    if secs == 0 {
        return Err("timeout must be at least one second".to_string());
    }
    Ok(Duration::from_secs(secs))
}
