//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use currency_types::CurrencyRepository;

use super::handlers::{self, AppState};
use crate::openapi::ApiDoc;
use crate::{CurrencyService, ExchangeService};

/// Prefix every versioned route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// HTTP Server for the Currency API.
pub struct HttpServer<R: CurrencyRepository> {
    state: Arc<AppState<R>>,
}

impl<R: CurrencyRepository> HttpServer<R> {
    /// Creates a new HTTP server over the two services.
    pub fn new(currencies: CurrencyService<R>, exchange: ExchangeService) -> Self {
        Self {
            state: Arc::new(AppState {
                currencies,
                exchange,
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        let api = Router::new()
            .route(
                "/currency/{acronym}",
                get(handlers::get_currency::<R>)
                    .post(handlers::create_currency::<R>)
                    .put(handlers::update_currency::<R>)
                    .delete(handlers::delete_currency::<R>),
            )
            .route("/currencies", get(handlers::list_currencies::<R>))
            .route(
                "/currency_exchange",
                get(handlers::currency_exchange::<R>),
            )
            .route("/sort", post(handlers::sort_words))
            .route("/words/vowel-count", post(handlers::vowel_count));

        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .nest(API_PREFIX, api)
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
