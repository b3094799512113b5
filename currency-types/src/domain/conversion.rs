//! Conversion requests, resolved rates and provenance precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::currency::Acronym;
use crate::error::DomainError;

/// Decimal places used when the rate comes from a stored currency record.
pub const REPOSITORY_PRECISION: u32 = 6;

/// Decimal places used when the rate comes from the live quote provider.
pub const QUOTE_PRECISION: u32 = 2;

/// An ordered `from -> to` pair of currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub from: Acronym,
    pub to: Acronym,
}

impl CurrencyPair {
    pub fn new(from: Acronym, to: Acronym) -> Self {
        Self { from, to }
    }

    /// Cache key for the pair, e.g. `USDBRL`.
    pub fn key(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Whether a cache key built by [`CurrencyPair::key`] has `acronym` on
    /// either side.
    pub fn key_involves(key: &str, acronym: &Acronym) -> bool {
        key.starts_with(acronym.as_str()) || key.ends_with(acronym.as_str())
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Where a conversion rate was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateSource {
    Cache,
    Repository,
    Quote,
}

impl std::fmt::Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateSource::Cache => f.write_str("cache"),
            RateSource::Repository => f.write_str("repository"),
            RateSource::Quote => f.write_str("quote"),
        }
    }
}

/// A rate together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRate {
    pub rate: Decimal,
    pub precision: u32,
    pub source: RateSource,
}

impl ResolvedRate {
    pub fn from_repository(rate: Decimal) -> Self {
        Self {
            rate,
            precision: REPOSITORY_PRECISION,
            source: RateSource::Repository,
        }
    }

    pub fn from_quote(rate: Decimal) -> Self {
        Self {
            rate,
            precision: QUOTE_PRECISION,
            source: RateSource::Quote,
        }
    }

    pub fn from_cache(cached: CachedRate) -> Self {
        Self {
            rate: cached.rate,
            precision: cached.precision,
            source: RateSource::Cache,
        }
    }

    /// Multiplies `amount` by the rate and formats it at the provenance precision.
    pub fn apply(&self, amount: Decimal) -> Result<String, DomainError> {
        let value = amount
            .checked_mul(self.rate)
            .ok_or(DomainError::ArithmeticOverflow)?;
        Ok(format_fixed(value, self.precision))
    }
}

/// Value kept in the rate cache for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedRate {
    pub rate: Decimal,
    pub precision: u32,
}

impl From<ResolvedRate> for CachedRate {
    fn from(resolved: ResolvedRate) -> Self {
        Self {
            rate: resolved.rate,
            precision: resolved.precision,
        }
    }
}

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub pair: CurrencyPair,
    pub amount: Decimal,
}

impl ConversionRequest {
    /// Validates both acronyms and parses a non-negative amount.
    pub fn parse(from: &str, to: &str, amount: &str) -> Result<Self, DomainError> {
        let from = Acronym::parse(from)?;
        let to = Acronym::parse(to)?;
        let amount = parse_decimal(amount)
            .ok_or_else(|| DomainError::ValidationError(format!("Invalid amount: {amount}")))?;
        if amount.is_sign_negative() {
            return Err(DomainError::NegativeAmount);
        }

        Ok(Self {
            pair: CurrencyPair::new(from, to),
            amount,
        })
    }
}

/// Parses plain or scientific decimal notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    raw.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
}

/// Formats `value` with exactly `places` decimal places.
///
/// `rescale` stops short of `places` when the mantissa cannot hold the extra
/// digits, so the missing zeros are appended to the text.
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let mut value = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(places);

    let mut text = value.to_string();
    let scale = value.scale();
    if scale < places {
        if scale == 0 {
            text.push('.');
        }
        text.extend(std::iter::repeat_n('0', (places - scale) as usize));
    }
    text
}
