//! HTTP client for AwesomeAPI-style quote services.
//!
//! `GET {base}/json/last/USD-BRL` answers with
//! `{"USDBRL": {"bid": "5.1234", ...}}`; the bid may also be a JSON number.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};

use currency_types::domain::conversion::parse_decimal;
use currency_types::{CurrencyPair, QuoteError, QuoteProvider};

/// Public AwesomeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://economia.awesomeapi.com.br";

/// Quote provider backed by an AwesomeAPI-compatible HTTP service.
pub struct AwesomeApiClient {
    base_url: String,
    http: Client,
}

impl AwesomeApiClient {
    /// Creates a client with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, QuoteError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, pair: &CurrencyPair) -> String {
        format!("{}/json/last/{}-{}", self.base_url, pair.from, pair.to)
    }
}

#[async_trait]
impl QuoteProvider for AwesomeApiClient {
    async fn fetch(&self, pair: &CurrencyPair) -> Result<Decimal, QuoteError> {
        let url = self.url(pair);
        debug!(%pair, %url, "requesting quote");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!(%pair, status = status.as_u16(), "quote provider rejected pair");
            return Err(QuoteError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| QuoteError::Malformed(e.to_string()))?;

        parse_bid(&body, pair)
    }
}

/// Extracts the bid for `pair` from a provider payload.
pub fn parse_bid(body: &Value, pair: &CurrencyPair) -> Result<Decimal, QuoteError> {
    let key = pair.key();
    let bid = body
        .get(&key)
        .and_then(|quote| quote.get("bid"))
        .ok_or_else(|| QuoteError::MissingBid(key.clone()))?;

    let parsed = match bid {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    };

    parsed.ok_or_else(|| QuoteError::Malformed(format!("bid for {key} is not a decimal: {bid}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::Path, http::StatusCode as AxumStatus, routing::get};
    use currency_types::Acronym;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn usd_brl() -> CurrencyPair {
        CurrencyPair::new(Acronym::parse("USD").unwrap(), Acronym::parse("BRL").unwrap())
    }

    /// Serves a fake quote API on an ephemeral port and returns its base URL.
    async fn spawn_provider() -> String {
        async fn last(Path(pair): Path<String>) -> (AxumStatus, Json<Value>) {
            match pair.as_str() {
                "USD-BRL" => (
                    AxumStatus::OK,
                    Json(json!({"USDBRL": {"code": "USD", "codein": "BRL", "bid": "5.4321"}})),
                ),
                "USD-EUR" => (AxumStatus::OK, Json(json!({"USDEUR": {"ask": "0.92"}}))),
                _ => (
                    AxumStatus::NOT_FOUND,
                    Json(json!({"status": 404, "code": "CoinNotExists"})),
                ),
            }
        }

        let app = Router::new().route("/json/last/{pair}", get(last));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_parse_numeric_bid() {
        let body = json!({"USDBRL": {"bid": 1}});
        assert_eq!(parse_bid(&body, &usd_brl()).unwrap(), dec!(1));
    }

    #[test]
    fn test_parse_string_bid() {
        let body = json!({"USDBRL": {"bid": "5.1234"}});
        assert_eq!(parse_bid(&body, &usd_brl()).unwrap(), dec!(5.1234));
    }

    #[test]
    fn test_missing_pair_key() {
        let body = json!({"EURBRL": {"bid": "6.0"}});
        assert!(matches!(
            parse_bid(&body, &usd_brl()),
            Err(QuoteError::MissingBid(_))
        ));
    }

    #[test]
    fn test_non_numeric_bid() {
        let body = json!({"USDBRL": {"bid": "n/a"}});
        assert!(matches!(
            parse_bid(&body, &usd_brl()),
            Err(QuoteError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = spawn_provider().await;
        let client = AwesomeApiClient::new(base, Duration::from_secs(5)).unwrap();

        let bid = client.fetch(&usd_brl()).await.unwrap();

        assert_eq!(bid, dec!(5.4321));
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_invalid_response() {
        let base = spawn_provider().await;
        let client = AwesomeApiClient::new(base, Duration::from_secs(5)).unwrap();
        let pair = CurrencyPair::new(Acronym::parse("XXX").unwrap(), Acronym::parse("BRL").unwrap());

        let result = client.fetch(&pair).await;

        assert!(matches!(
            result,
            Err(QuoteError::InvalidResponse { status: 404 })
        ));
    }

    #[tokio::test]
    async fn test_fetch_without_bid_is_missing_bid() {
        let base = spawn_provider().await;
        let client = AwesomeApiClient::new(base, Duration::from_secs(5)).unwrap();
        let pair = CurrencyPair::new(Acronym::parse("USD").unwrap(), Acronym::parse("EUR").unwrap());

        let result = client.fetch(&pair).await;

        assert!(matches!(result, Err(QuoteError::MissingBid(_))));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let client =
            AwesomeApiClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();

        let result = client.fetch(&usd_brl()).await;

        assert!(matches!(result, Err(QuoteError::Transport(_))));
    }
}
