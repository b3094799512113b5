//! Quote provider adapters.
//!
//! Both adapters implement the `QuoteProvider` port from `currency-types`:
//! - [`AwesomeApiClient`] asks an AwesomeAPI-compatible HTTP service for the
//!   latest bid of a pair.
//! - [`StaticQuoteProvider`] answers from a hardcoded USD-based table, for
//!   development and offline testing.
//!
//! # Example
//! ```
//! use currency_types::{Acronym, CurrencyPair, QuoteProvider};
//! use rate_source::StaticQuoteProvider;
//!
//! # async fn demo() {
//! let provider = StaticQuoteProvider::new();
//! let pair = CurrencyPair::new(Acronym::parse("USD").unwrap(), Acronym::parse("EUR").unwrap());
//! let bid = provider.fetch(&pair).await.unwrap();
//! # }
//! ```

mod awesome;
mod fixed;

pub use awesome::{AwesomeApiClient, DEFAULT_BASE_URL, parse_bid};
pub use fixed::StaticQuoteProvider;
