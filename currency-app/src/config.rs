//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use currency_types::Acronym;

/// Which quote provider backs the last link of the exchange chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteProviderKind {
    AwesomeApi,
    Static,
}

impl std::str::FromStr for QuoteProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "awesomeapi" => Ok(Self::AwesomeApi),
            "static" => Ok(Self::Static),
            other => anyhow::bail!("unknown QUOTE_PROVIDER `{other}` (expected awesomeapi or static)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown LOG_FORMAT `{other}` (expected text or json)"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub quote_provider: QuoteProviderKind,
    pub quote_api_url: String,
    pub quote_timeout: Duration,
    /// How long a resolved rate is served from the cache.
    pub rate_cache_ttl: Duration,
    pub rate_cache_max_entries: usize,
    /// Unit stored reference prices are expressed in.
    pub reference_acronym: Acronym,
    pub log_format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()?;

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let quote_provider = var("QUOTE_PROVIDER")
            .as_deref()
            .unwrap_or("awesomeapi")
            .parse()?;

        let quote_api_url =
            var("QUOTE_API_URL").unwrap_or_else(|| rate_source::DEFAULT_BASE_URL.to_string());

        let quote_timeout = Duration::from_secs(
            var("QUOTE_TIMEOUT_SECS")
                .unwrap_or_else(|| "5".to_string())
                .parse()?,
        );

        let rate_cache_ttl = Duration::from_secs(
            var("RATE_CACHE_TTL_SECS")
                .unwrap_or_else(|| "300".to_string())
                .parse()?,
        );

        let rate_cache_max_entries = var("RATE_CACHE_MAX_ENTRIES")
            .unwrap_or_else(|| "10000".to_string())
            .parse()?;

        let reference_acronym = Acronym::parse(
            var("REFERENCE_ACRONYM").as_deref().unwrap_or("USD"),
        )?;

        let log_format = var("LOG_FORMAT").as_deref().unwrap_or("text").parse()?;

        let otlp_endpoint = var("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            database_url,
            quote_provider,
            quote_api_url,
            quote_timeout,
            rate_cache_ttl,
            rate_cache_max_entries,
            reference_acronym,
            log_format,
            otlp_endpoint,
        })
    }
}
