//! Application configuration sourced from the environment

use std::env;

const ENV_EMERGENCY_HOTLINE: &str = "EMERGENCY_HOTLINE";
const ENV_LEGAL_AID_URL: &str = "LEGAL_AID_URL";
const ENV_DEBUG: &str = "DEBUG";
const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";
const ENV_ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";

const DEFAULT_EMERGENCY_HOTLINE: &str = "1-800-799-SAFE";
const DEFAULT_LEGAL_AID_URL: &str = "www.womenslaw.org";
const DEFAULT_ENVIRONMENT: &str = "production";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Local development origins allowed when `ALLOWED_ORIGINS` is unset
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
];

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Emergency hotline surfaced in responses and failure messages
    pub emergency_hotline: String,
    /// Legal-aid reference surfaced alongside generated letters
    pub legal_aid_url: String,
    /// When set, error responses carry internal error detail
    pub debug: bool,
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Cross-origin allow-list
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emergency_hotline: DEFAULT_EMERGENCY_HOTLINE.to_string(),
            legal_aid_url: DEFAULT_LEGAL_AID_URL.to_string(),
            debug: false,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let emergency_hotline = env::var(ENV_EMERGENCY_HOTLINE)
            .unwrap_or_else(|_| DEFAULT_EMERGENCY_HOTLINE.to_string());

        let legal_aid_url =
            env::var(ENV_LEGAL_AID_URL).unwrap_or_else(|_| DEFAULT_LEGAL_AID_URL.to_string());

        let debug = env::var(ENV_DEBUG)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let environment =
            env::var(ENV_ENVIRONMENT).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let host = env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = env::var(ENV_PORT)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let allowed_origins = env::var(ENV_ALLOWED_ORIGINS)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|_| {
                DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        Self {
            emergency_hotline,
            legal_aid_url,
            debug,
            environment,
            host,
            port,
            allowed_origins,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
