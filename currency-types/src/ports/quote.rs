//! Quote provider port.
//!
//! Implementations can be HTTP clients, static tables, mocks, etc.

use rust_decimal::Decimal;

use crate::domain::CurrencyPair;
use crate::error::QuoteError;

/// External source of live exchange quotes.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync + 'static {
    /// Returns the bid price for `pair`: units of `to` per unit of `from`.
    async fn fetch(&self, pair: &CurrencyPair) -> Result<Decimal, QuoteError>;
}
