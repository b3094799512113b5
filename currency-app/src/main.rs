//! # Currency Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the repository, rate cache and quote provider
//! - Create the currency and exchange services
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_hex::{CurrencyService, ExchangeService, inbound::HttpServer};
use currency_repo::{MemoryRateCache, RateCacheConfig, build_repo};
use currency_types::{QuoteProvider, RateCache};
use rate_source::{AwesomeApiClient, StaticQuoteProvider};

use config::{Config, LogFormat, QuoteProviderKind};

fn init_tracer(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("currency-service"), provider))
}

fn build_quote_provider(config: &Config) -> anyhow::Result<Arc<dyn QuoteProvider>> {
    let quotes: Arc<dyn QuoteProvider> = match config.quote_provider {
        QuoteProviderKind::AwesomeApi => Arc::new(AwesomeApiClient::new(
            config.quote_api_url.clone(),
            config.quote_timeout,
        )?),
        QuoteProviderKind::Static => Arc::new(StaticQuoteProvider::new()),
    };
    Ok(quotes)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Span export only when a collector is configured
    let otel = config
        .otlp_endpoint
        .as_deref()
        .map(init_tracer)
        .transpose()?;
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    let (text, json) = match config.log_format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,currency_app=debug,currency_hex=debug".into()),
        )
        .with(text)
        .with(json)
        .with(telemetry)
        .init();

    tracing::info!("Starting currency server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!(
        provider = ?config.quote_provider,
        reference = %config.reference_acronym,
        "Quote provider configured"
    );

    // Build repository (handles connection and schema)
    let repo = Arc::new(build_repo(&config.database_url).await?);
    let cache: Arc<dyn RateCache> = Arc::new(MemoryRateCache::with_config(RateCacheConfig {
        ttl: config.rate_cache_ttl,
        max_entries: config.rate_cache_max_entries,
    }));
    let quotes = build_quote_provider(&config)?;

    let currencies = CurrencyService::new(repo.clone(), cache.clone());
    let exchange = ExchangeService::new(repo, cache, quotes, config.reference_acronym.clone());

    // Create and run the HTTP server
    let server = HttpServer::new(currencies, exchange);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
