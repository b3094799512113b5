//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use currency_types::domain::{Acronym, Currency, CurrencyId};
use currency_types::dto::{
    AcronymResponse, CreateCurrencyRequest, CreatedResponse, ExchangeQuery, ExchangeResponse,
    SortWordsRequest, UpdateCurrencyRequest, VowelCountRequest,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "OK"}))
    )
)]
async fn health() {}

/// Get a currency by acronym
#[utoipa::path(
    get,
    path = "/api/v1/currency/{acronym}",
    tag = "currencies",
    params(
        ("acronym" = String, Path, description = "Three-letter currency code", example = "BRL")
    ),
    responses(
        (status = 200, description = "Currency record", body = Currency),
        (status = 404, description = "No currency stored under this acronym", body = inline(serde_json::Value), example = json!({})),
        (status = 500, description = "Acronym value not valid")
    )
)]
async fn get_currency() {}

/// Create a currency
#[utoipa::path(
    post,
    path = "/api/v1/currency/{acronym}",
    tag = "currencies",
    request_body = CreateCurrencyRequest,
    params(
        ("acronym" = String, Path, description = "Three-letter currency code", example = "BRL")
    ),
    responses(
        (status = 201, description = "Currency created", body = CreatedResponse),
        (status = 400, description = "Invalid fields"),
        (status = 500, description = "Acronym value not valid, or error to create currency")
    )
)]
async fn create_currency() {}

/// Partially update a currency
#[utoipa::path(
    put,
    path = "/api/v1/currency/{acronym}",
    tag = "currencies",
    request_body = UpdateCurrencyRequest,
    params(
        ("acronym" = String, Path, description = "Three-letter currency code", example = "BRL")
    ),
    responses(
        (status = 200, description = "Currency updated", body = AcronymResponse),
        (status = 404, description = "Nothing was modified", body = inline(serde_json::Value), example = json!({})),
        (status = 500, description = "Error to update currency")
    )
)]
async fn update_currency() {}

/// Delete a currency
#[utoipa::path(
    delete,
    path = "/api/v1/currency/{acronym}",
    tag = "currencies",
    params(
        ("acronym" = String, Path, description = "Three-letter currency code", example = "BRL")
    ),
    responses(
        (status = 200, description = "Currency deleted (or already absent)", body = AcronymResponse),
        (status = 500, description = "Error to delete currency")
    )
)]
async fn delete_currency() {}

/// List all currencies
#[utoipa::path(
    get,
    path = "/api/v1/currencies",
    tag = "currencies",
    responses(
        (status = 200, description = "All stored currencies", body = Vec<Currency>)
    )
)]
async fn list_currencies() {}

/// Convert an amount between two currencies
///
/// Six decimal places mean the rate came from stored currencies, two mean
/// it came from the live quote provider.
#[utoipa::path(
    get,
    path = "/api/v1/currency_exchange",
    tag = "exchange",
    params(ExchangeQuery),
    responses(
        (status = 200, description = "Converted amount", body = ExchangeResponse),
        (status = 400, description = "Invalid amount"),
        (status = 403, description = "Invalid values for the api"),
        (status = 500, description = "Acronym value not valid, or some error ocurred")
    )
)]
async fn currency_exchange() {}

/// Sort a list of words
#[utoipa::path(
    post,
    path = "/api/v1/sort",
    tag = "words",
    request_body = SortWordsRequest,
    responses(
        (status = 200, description = "Sorted words", body = Vec<String>),
        (status = 400, description = "Malformed payload")
    )
)]
async fn sort_words() {}

/// Count the vowels of each word
#[utoipa::path(
    post,
    path = "/api/v1/words/vowel-count",
    tag = "words",
    request_body = VowelCountRequest,
    responses(
        (status = 200, description = "Vowel count per word", body = inline(serde_json::Value), example = json!({"batman": 2, "robin": 2})),
        (status = 500, description = "Some error ocurred!")
    )
)]
async fn vowel_count() {}

/// OpenAPI documentation for the Currency API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Exchange API",
        version = "1.0.0",
        description = "Currency records and conversions.\n\nRates are looked up in the cache first, then derived from stored reference prices, and finally fetched from a live quote provider.",
        license(name = "MIT"),
    ),
    paths(
        health,
        get_currency,
        create_currency,
        update_currency,
        delete_currency,
        list_currencies,
        currency_exchange,
        sort_words,
        vowel_count,
    ),
    components(
        schemas(
            Currency,
            CurrencyId,
            Acronym,
            CreateCurrencyRequest,
            UpdateCurrencyRequest,
            CreatedResponse,
            AcronymResponse,
            ExchangeResponse,
            SortWordsRequest,
            VowelCountRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "currencies", description = "Currency record management"),
        (name = "exchange", description = "Currency conversion"),
        (name = "words", description = "Word utilities"),
    )
)]
pub struct ApiDoc;
