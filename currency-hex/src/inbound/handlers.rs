//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use currency_types::domain::words;
use currency_types::{
    Acronym, AcronymResponse, AppError, CreateCurrencyRequest, CreatedResponse, CurrencyRepository,
    ExchangeQuery, SortOrder, SortWordsRequest, UpdateCurrencyRequest, VowelCountRequest,
};

use crate::{CurrencyService, ExchangeService};

/// Message returned for every unexpected failure. Details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Some error ocurred!";

/// Application state shared across handlers.
pub struct AppState<R: CurrencyRepository> {
    pub currencies: CurrencyService<R>,
    pub exchange: ExchangeService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidAcronym(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }
            AppError::ApiInvalidResponse => (StatusCode::FORBIDDEN, self.0.to_string()),
            AppError::CurrencyService(op) => {
                (StatusCode::INTERNAL_SERVER_ERROR, op.message().to_string())
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn empty_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({}))).into_response()
}

fn bad_payload(rejection: JsonRejection) -> ApiError {
    AppError::BadRequest(rejection.body_text()).into()
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "OK" }))
}

/// Sends browsers to the interactive docs.
pub async fn root() -> Redirect {
    Redirect::temporary("/docs")
}

// ─────────────────────────────────────────────────────────────────────────────
// Currencies
// ─────────────────────────────────────────────────────────────────────────────

/// Get a currency by acronym. A missing record is a bare 404 `{}`.
#[tracing::instrument(skip(state))]
pub async fn get_currency<R: CurrencyRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(acronym): Path<String>,
) -> Result<Response, ApiError> {
    match state.currencies.get(&acronym).await? {
        Some(currency) => Ok(Json(currency).into_response()),
        None => Ok(empty_not_found()),
    }
}

/// List all currencies.
#[tracing::instrument(skip(state))]
pub async fn list_currencies<R: CurrencyRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let currencies = state.currencies.get_all().await?;
    Ok(Json(currencies))
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_currency<R: CurrencyRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(acronym): Path<String>,
    payload: Result<Json<CreateCurrencyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(bad_payload)?;
    let id = state.currencies.create(&acronym, req).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Partially update a currency. Nothing modified is a bare 404 `{}`.
#[tracing::instrument(skip(state, payload))]
pub async fn update_currency<R: CurrencyRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(acronym): Path<String>,
    payload: Result<Json<UpdateCurrencyRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload.map_err(bad_payload)?;
    if !state.currencies.update(&acronym, req).await? {
        return Ok(empty_not_found());
    }

    let acronym = Acronym::parse(&acronym).map_err(AppError::from)?;
    Ok(Json(AcronymResponse { acronym }).into_response())
}

#[tracing::instrument(skip(state))]
pub async fn delete_currency<R: CurrencyRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(acronym): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let acronym = state.currencies.delete(&acronym).await?;
    Ok(Json(AcronymResponse { acronym }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange
// ─────────────────────────────────────────────────────────────────────────────

/// Convert an amount between two currencies.
#[tracing::instrument(skip(state, query))]
pub async fn currency_exchange<R: CurrencyRepository>(
    State(state): State<Arc<AppState<R>>>,
    query: Result<Query<ExchangeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(q) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    tracing::debug!(from = %q.from, to = %q.to, amount = %q.amount, "exchange requested");

    let response = state.exchange.exchange(&q.from, &q.to, &q.amount).await?;
    Ok(Json(response))
}

// ─────────────────────────────────────────────────────────────────────────────
// Words
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
pub async fn sort_words(
    payload: Result<Json<SortWordsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(bad_payload)?;
    let order = SortOrder::from(req.order.as_str());
    Ok(Json(words::sort_words(req.words, order)))
}

/// Malformed payloads surface as the generic 500.
#[tracing::instrument(skip_all)]
pub async fn vowel_count(
    payload: Result<Json<VowelCountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| AppError::Internal(e.body_text()))?;
    Ok(Json(words::count_vowels(&req.words)))
}
