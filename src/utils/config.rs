use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context as _;
use chrono_tz::Tz;

/// Environment variable which overrides `api.base_url`.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

impl Config {
    /// Load a `.toml` file from disk and parse it as a [`Config`].
    pub async fn load(file: &str) -> anyhow::Result<Config> {
        async fn load_inner(file: &str) -> anyhow::Result<Config> {
            let contents = tokio::fs::read_to_string(file).await?;
            Ok(toml::from_str(&contents)?)
        }
        load_inner(file).await.with_context(|| format!("loading config={file}"))
    }

    /// Load the config from an optional file, falling back to defaults,
    /// then apply environment overrides.
    pub async fn resolve(file: Option<&str>) -> anyhow::Result<Config> {
        let mut config = match file {
            Some(file) => Config::load(file).await?,
            None => Config::default(),
        };
        config.apply_env(std::env::var(BACKEND_URL_ENV).ok());
        Ok(config)
    }

    fn apply_env(&mut self, backend_url: Option<String>) {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
    }
}

/// Bag of app configuration values, parsed from a TOML file with serde.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub net: NetConfig,
    pub tls: Option<TlsConfig>,
}

/// Webapp configuration.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Public facing URL, e.g. `https://fest.college.edu`.
    pub url: String,
    /// Local timezone. Datetime inputs are interpreted in it and dates are displayed in it.
    pub tz: Tz,
    /// `strftime` format for date-only labels.
    pub date_format: String,
    /// `strftime` format for date and time labels.
    pub datetime_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".into(),
            tz: Tz::UTC,
            date_format: "%-m/%-d/%Y".into(),
            datetime_format: "%-m/%-d/%Y, %-I:%M:%S %p".into(),
        }
    }
}

/// Remote events API configuration.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to.
    pub base_url: String,
    /// Request timeout. Requests never time out when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:8000".into(), timeout_secs: None }
    }
}

/// Networking configuration.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// Server bind address.
    pub http_addr: SocketAddr,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self { http_addr: SocketAddr::from(([127, 0, 0, 1], 3000)) }
    }
}

/// TLS certificate configuration. When present the server speaks HTTPS.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TlsConfig {
    /// PEM certificate chain.
    pub cert: PathBuf,
    /// PEM private key.
    pub key: PathBuf,
}
