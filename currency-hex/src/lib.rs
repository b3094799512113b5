//! # Currency Hex
//!
//! Application service layer and HTTP adapter for the currency service.
//!
//! ## Architecture
//!
//! - `service/` - Currency CRUD service (orchestrates repository calls)
//! - `exchange/` - Rate resolution chain (cache, repository, quote provider)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! `CurrencyService` is generic over `R: CurrencyRepository`; the exchange
//! chain holds its collaborators as trait objects so the quote provider can
//! be picked at start-up.

pub mod exchange;
pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use exchange::{ExchangeService, RateStrategy, Resolution};
pub use service::CurrencyService;
