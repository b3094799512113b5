//! Currency domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Number of characters in a currency acronym.
pub const ACRONYM_LEN: usize = 3;

/// A validated, uppercased 3-letter currency code (e.g. `USD`, `BRL`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "BRL")]
pub struct Acronym(String);

impl Acronym {
    /// Uppercases the input and checks it is exactly three ASCII letters.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let upper = raw.trim().to_ascii_uppercase();
        if upper.len() != ACRONYM_LEN || !upper.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::InvalidAcronym(raw.to_string()));
        }
        Ok(Self(upper))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Acronym {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Acronym {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Acronym {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Acronym> for String {
    fn from(acronym: Acronym) -> Self {
        acronym.0
    }
}

impl AsRef<str> for Acronym {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a stored Currency, assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CurrencyId(Uuid);

impl CurrencyId {
    /// Creates a new random CurrencyId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CurrencyId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CurrencyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A supported currency with its reference price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Currency {
    pub id: CurrencyId,
    pub acronym: Acronym,
    #[schema(example = "Brazilian Real")]
    pub name: String,
    /// Price of one unit of this currency in the reference unit.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 0.2)]
    pub dolar_price_reference: Decimal,
}

/// A currency that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCurrency {
    pub acronym: Acronym,
    pub name: String,
    pub dolar_price_reference: Decimal,
}

impl NewCurrency {
    /// Builds a new currency, rejecting empty names and negative prices.
    pub fn new(
        acronym: Acronym,
        name: String,
        dolar_price_reference: Decimal,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Currency name cannot be empty".into(),
            ));
        }
        if dolar_price_reference.is_sign_negative() {
            return Err(DomainError::NegativePrice);
        }

        Ok(Self {
            acronym,
            name,
            dolar_price_reference,
        })
    }

    /// Attaches the repository-assigned id.
    pub fn into_currency(self, id: CurrencyId) -> Currency {
        Currency {
            id,
            acronym: self.acronym,
            name: self.name,
            dolar_price_reference: self.dolar_price_reference,
        }
    }
}

/// Partial update of a stored currency. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyPatch {
    pub name: Option<String>,
    pub dolar_price_reference: Option<Decimal>,
}

impl CurrencyPatch {
    pub fn new(
        name: Option<String>,
        dolar_price_reference: Option<Decimal>,
    ) -> Result<Self, DomainError> {
        if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(DomainError::ValidationError(
                "Currency name cannot be empty".into(),
            ));
        }
        if dolar_price_reference.is_some_and(|p| p.is_sign_negative()) {
            return Err(DomainError::NegativePrice);
        }
        if name.is_none() && dolar_price_reference.is_none() {
            return Err(DomainError::ValidationError(
                "Nothing to update".into(),
            ));
        }

        Ok(Self {
            name,
            dolar_price_reference,
        })
    }

    /// Applies the patch onto an existing record.
    pub fn apply(&self, currency: &mut Currency) {
        if let Some(name) = &self.name {
            currency.name = name.clone();
        }
        if let Some(price) = self.dolar_price_reference {
            currency.dolar_price_reference = price;
        }
    }
}
