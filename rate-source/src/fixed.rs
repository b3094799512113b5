//! Hardcoded quotes for development and offline testing.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use currency_types::{CurrencyPair, QuoteError, QuoteProvider};

/// Price of one unit of each currency in USD.
const RATES: &[(&str, Decimal)] = &[
    ("USD", dec!(1.0)),
    ("EUR", dec!(1.087)),
    ("GBP", dec!(1.266)),
    ("BRL", dec!(0.195)),
    ("INR", dec!(0.01203)),
];

/// Quote provider answering from a fixed USD-based table.
///
/// Cross rates go through USD. Unknown currencies are answered like the live
/// provider answers them: a 404 `InvalidResponse`.
pub struct StaticQuoteProvider {
    to_usd: HashMap<&'static str, Decimal>,
}

impl StaticQuoteProvider {
    pub fn new() -> Self {
        Self {
            to_usd: RATES.iter().copied().collect(),
        }
    }

    /// Units of `to` per unit of `from`.
    pub fn rate(&self, from: &str, to: &str) -> Option<Decimal> {
        let from_usd = self.to_usd.get(from)?;
        let to_usd = self.to_usd.get(to)?;
        from_usd.checked_div(*to_usd)
    }
}

impl Default for StaticQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for StaticQuoteProvider {
    async fn fetch(&self, pair: &CurrencyPair) -> Result<Decimal, QuoteError> {
        self.rate(pair.from.as_str(), pair.to.as_str())
            .ok_or(QuoteError::InvalidResponse { status: 404 })
    }
}
