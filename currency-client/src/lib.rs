//! # Currency Client SDK
//!
//! A typed Rust client for the Currency API.

use currency_types::{
    AcronymResponse, CreateCurrencyRequest, CreatedResponse, Currency, CurrencyId,
    ExchangeResponse, SortWordsRequest, UpdateCurrencyRequest, VowelCountRequest,
    VowelCountResponse,
};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Versioned API prefix.
const API: &str = "/api/v1";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency API client.
pub struct CurrencyClient {
    base_url: String,
    http: Client,
}

impl CurrencyClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Gets a currency by acronym. `None` when the server has no record.
    pub async fn get_currency(&self, acronym: &str) -> Result<Option<Currency>, ClientError> {
        let resp = self.http.get(self.url(&format!("/currency/{acronym}"))).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.handle_response(resp).await.map(Some)
    }

    /// Lists all currencies.
    pub async fn list_currencies(&self) -> Result<Vec<Currency>, ClientError> {
        let resp = self.http.get(self.url("/currencies")).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a currency and returns its id.
    pub async fn create_currency(
        &self,
        acronym: &str,
        name: &str,
        dolar_price_reference: Decimal,
    ) -> Result<CurrencyId, ClientError> {
        let req = CreateCurrencyRequest {
            name: name.to_string(),
            dolar_price_reference,
        };
        let resp = self
            .http
            .post(self.url(&format!("/currency/{acronym}")))
            .json(&req)
            .send()
            .await?;
        let created: CreatedResponse = self.handle_response(resp).await?;
        Ok(created.id)
    }

    /// Partially updates a currency. Returns whether anything was modified.
    pub async fn update_currency(
        &self,
        acronym: &str,
        req: &UpdateCurrencyRequest,
    ) -> Result<bool, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/currency/{acronym}")))
            .json(req)
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        let _: AcronymResponse = self.handle_response(resp).await?;
        Ok(true)
    }

    /// Deletes a currency. Succeeds when it was already absent.
    pub async fn delete_currency(&self, acronym: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/currency/{acronym}")))
            .send()
            .await?;
        let _: AcronymResponse = self.handle_response(resp).await?;
        Ok(())
    }

    /// Converts `amount` and returns the server's fixed-point string.
    pub async fn convert(&self, from: &str, to: &str, amount: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .get(self.url("/currency_exchange"))
            .query(&[("from", from), ("to", to), ("amount", amount)])
            .send()
            .await?;
        let converted: ExchangeResponse = self.handle_response(resp).await?;
        Ok(converted.converted_value)
    }

    /// Sorts words server-side (`asc`, `desc`, anything else keeps the order).
    pub async fn sort_words(
        &self,
        words: Vec<String>,
        order: &str,
    ) -> Result<Vec<String>, ClientError> {
        self.post(
            "/sort",
            &SortWordsRequest {
                words,
                order: order.to_string(),
            },
        )
        .await
    }

    pub async fn count_vowels(&self, words: Vec<String>) -> Result<VowelCountResponse, ClientError> {
        self.post("/words/vowel-count", &VowelCountRequest { words })
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API, path)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
