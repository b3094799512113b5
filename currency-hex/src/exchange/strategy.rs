//! Rate sources tried by the exchange chain, cheapest first.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use currency_types::{
    Acronym, AppError, CurrencyPair, CurrencyRepository, QuoteError, QuoteProvider, RateCache,
    RateSource, RepoError, ResolvedRate,
};

/// Outcome of asking one source for a rate.
#[derive(Debug)]
pub enum Resolution {
    /// The source produced a rate; the chain stops here.
    Hit(ResolvedRate),
    /// The source has nothing for this pair.
    Miss,
    /// The source failed in a recoverable way. Carries the reason for logs.
    Fallback(String),
    /// The source failed in a way that ends the conversion.
    Failed(AppError),
}

/// One link of the rate resolution chain.
#[async_trait]
pub trait RateStrategy: Send + Sync {
    fn source(&self) -> RateSource;

    async fn resolve(&self, pair: &CurrencyPair) -> Resolution;
}

// ─────────────────────────────────────────────────────────────────────────────
// Cache
// ─────────────────────────────────────────────────────────────────────────────

/// Looks the pair up in the rate cache. Read failures count as a miss.
pub struct CacheStrategy {
    cache: Arc<dyn RateCache>,
}

impl CacheStrategy {
    pub fn new(cache: Arc<dyn RateCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl RateStrategy for CacheStrategy {
    fn source(&self) -> RateSource {
        RateSource::Cache
    }

    async fn resolve(&self, pair: &CurrencyPair) -> Resolution {
        match self.cache.get(&pair.key()).await {
            Ok(Some(cached)) => Resolution::Hit(ResolvedRate::from_cache(cached)),
            Ok(None) => Resolution::Miss,
            Err(e) => {
                warn!(%pair, error = %e, "rate cache read failed");
                Resolution::Miss
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository
// ─────────────────────────────────────────────────────────────────────────────

/// Derives the rate from the stored reference prices of both currencies.
///
/// The reference currency prices at 1 when it has no record of its own.
pub struct RepositoryStrategy<R: CurrencyRepository> {
    repo: Arc<R>,
    reference: Acronym,
}

impl<R: CurrencyRepository> RepositoryStrategy<R> {
    pub fn new(repo: Arc<R>, reference: Acronym) -> Self {
        Self { repo, reference }
    }

    async fn price(&self, acronym: &Acronym) -> Result<Option<Decimal>, RepoError> {
        let stored = self.repo.get_by_acronym(acronym).await?;
        Ok(match stored {
            Some(currency) => Some(currency.dolar_price_reference),
            None if *acronym == self.reference => Some(Decimal::ONE),
            None => None,
        })
    }

    async fn prices(&self, pair: &CurrencyPair) -> Result<Option<(Decimal, Decimal)>, RepoError> {
        let Some(from) = self.price(&pair.from).await? else {
            return Ok(None);
        };
        let Some(to) = self.price(&pair.to).await? else {
            return Ok(None);
        };
        Ok(Some((from, to)))
    }
}

#[async_trait]
impl<R: CurrencyRepository> RateStrategy for RepositoryStrategy<R> {
    fn source(&self) -> RateSource {
        RateSource::Repository
    }

    async fn resolve(&self, pair: &CurrencyPair) -> Resolution {
        match self.prices(pair).await {
            Ok(Some((from, to))) => match from.checked_div(to) {
                Some(rate) => Resolution::Hit(ResolvedRate::from_repository(rate)),
                None => Resolution::Failed(AppError::Internal(format!(
                    "cannot derive {pair} rate from reference prices {from} and {to}"
                ))),
            },
            Ok(None) => {
                debug!(%pair, "pair not stored in repository");
                Resolution::Miss
            }
            Err(e) => Resolution::Fallback(e.to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quote provider
// ─────────────────────────────────────────────────────────────────────────────

/// Asks the live quote provider. Last link: every failure is terminal.
pub struct QuoteStrategy {
    quotes: Arc<dyn QuoteProvider>,
}

impl QuoteStrategy {
    pub fn new(quotes: Arc<dyn QuoteProvider>) -> Self {
        Self { quotes }
    }
}

#[async_trait]
impl RateStrategy for QuoteStrategy {
    fn source(&self) -> RateSource {
        RateSource::Quote
    }

    async fn resolve(&self, pair: &CurrencyPair) -> Resolution {
        match self.quotes.fetch(pair).await {
            Ok(bid) => Resolution::Hit(ResolvedRate::from_quote(bid)),
            Err(e @ QuoteError::InvalidResponse { .. }) => {
                warn!(%pair, error = %e, "quote provider rejected pair");
                Resolution::Failed(e.into())
            }
            Err(e) => Resolution::Failed(AppError::Internal(format!("quote for {pair}: {e}"))),
        }
    }
}
