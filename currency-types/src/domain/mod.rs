//! Domain models for the currency service.

pub mod conversion;
pub mod currency;
pub mod words;

pub use conversion::{
    CachedRate, ConversionRequest, CurrencyPair, QUOTE_PRECISION, REPOSITORY_PRECISION,
    RateSource, ResolvedRate,
};
pub use currency::{Acronym, Currency, CurrencyId, CurrencyPatch, NewCurrency};
pub use words::SortOrder;
