use std::env;
use std::time::Duration;

use crate::error::{Result, ResultsError};
use crate::logging::{LogConfig, LogFormat};

pub const DEFAULT_API_URL: &str = "https://stats.nba.com/stats/scoreboardV2";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Scoreboard endpoint settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub bind_addr: String,
    pub port: u16,
    pub log: LogConfig,
}

impl Config {
    /// Load settings from the environment (and `.env`, when present)
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let timeout_secs = parse_var("NBA_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let port = parse_var("PORT", 8080u16)?;

        let log_format = match var_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            other => {
                return Err(ResultsError::Config(format!(
                    "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            api: ApiConfig {
                base_url: var_or("NBA_API_URL", DEFAULT_API_URL),
                user_agent: var_or("NBA_API_USER_AGENT", DEFAULT_USER_AGENT),
                timeout: Duration::from_secs(timeout_secs),
            },
            bind_addr: var_or("BIND_ADDR", "127.0.0.1"),
            port,
            log: LogConfig {
                level: var_or("LOG_LEVEL", "info"),
                format: log_format,
            },
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ResultsError::Config(format!("{} has an invalid value '{}'", key, raw))),
        _ => Ok(default),
    }
}
