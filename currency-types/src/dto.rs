//! Data Transfer Objects (DTOs) for requests and responses.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Acronym, CurrencyId};

// ─────────────────────────────────────────────────────────────────────────────
// Currency DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request body to create a currency. The acronym comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCurrencyRequest {
    /// Display name
    #[schema(example = "Brazilian Real")]
    pub name: String,
    /// Price of one unit in the reference currency
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 0.2)]
    pub dolar_price_reference: Decimal,
}

/// Request body to partially update a currency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCurrencyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Real")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    #[schema(value_type = Option<f64>, example = 0.19)]
    pub dolar_price_reference: Option<Decimal>,
}

/// Response after creating a currency.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: CurrencyId,
}

/// Response echoing the acronym an update or delete applied to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AcronymResponse {
    pub acronym: Acronym,
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query string of `/currency_exchange`.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExchangeQuery {
    /// Source currency acronym
    #[param(example = "USD")]
    pub from: String,
    /// Target currency acronym
    #[param(example = "BRL")]
    pub to: String,
    /// Non-negative amount in the source currency
    #[param(example = "200")]
    pub amount: String,
}

/// Result of a conversion. Decimal places signal the rate source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExchangeResponse {
    #[schema(example = "1000.000000")]
    pub converted_value: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Word DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to sort a list of words.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SortWordsRequest {
    #[schema(example = json!(["batman", "robin", "coringa"]))]
    pub words: Vec<String>,
    /// `asc`, `desc`; anything else keeps the input order
    #[schema(example = "asc")]
    pub order: String,
}

/// Request to count the vowels of each word.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VowelCountRequest {
    #[schema(example = json!(["batman", "robin", "coringa"]))]
    pub words: Vec<String>,
}

/// Vowel count per word, in the order the words were sent.
pub type VowelCountResponse = IndexMap<String, usize>;
