//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod cache;
mod quote;
mod repository;

pub use cache::RateCache;
pub use quote::QuoteProvider;
pub use repository::CurrencyRepository;
