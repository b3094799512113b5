//! # Currency Types
//!
//! Domain types and port traits for the currency service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Acronym, Currency, CurrencyPair, word utilities)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Acronym, CachedRate, ConversionRequest, Currency, CurrencyId, CurrencyPair, CurrencyPatch,
    NewCurrency, RateSource, ResolvedRate, SortOrder,
};
pub use dto::*;
pub use error::{AppError, CacheError, CurrencyOperation, DomainError, QuoteError, RepoError};
pub use ports::{CurrencyRepository, QuoteProvider, RateCache};
