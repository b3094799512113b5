//! Exchange Service
//!
//! Resolves a conversion rate through an ordered chain of sources
//! (cache, repository, live quotes) and applies it to an amount.
//!
//! The first source that answers wins. Rates found past the cache are
//! written back so the next request for the pair is served from it.

mod strategy;

use std::sync::Arc;

use tracing::{debug, info, warn};

use currency_types::{
    Acronym, AppError, CachedRate, ConversionRequest, CurrencyPair, CurrencyRepository,
    ExchangeResponse, QuoteProvider, RateCache, RateSource, ResolvedRate,
};

pub use strategy::{CacheStrategy, QuoteStrategy, RateStrategy, RepositoryStrategy, Resolution};

/// Converts amounts between currencies.
pub struct ExchangeService {
    cache: Arc<dyn RateCache>,
    strategies: Vec<Box<dyn RateStrategy>>,
}

impl ExchangeService {
    /// Builds the default chain: cache, then repository, then quote provider.
    ///
    /// `reference` is the unit stored prices are expressed in.
    pub fn new<R: CurrencyRepository>(
        repo: Arc<R>,
        cache: Arc<dyn RateCache>,
        quotes: Arc<dyn QuoteProvider>,
        reference: Acronym,
    ) -> Self {
        let strategies: Vec<Box<dyn RateStrategy>> = vec![
            Box::new(CacheStrategy::new(cache.clone())),
            Box::new(RepositoryStrategy::new(repo, reference)),
            Box::new(QuoteStrategy::new(quotes)),
        ];
        Self::with_strategies(cache, strategies)
    }

    /// Builds a service over an explicit chain. `cache` receives write-backs.
    pub fn with_strategies(
        cache: Arc<dyn RateCache>,
        strategies: Vec<Box<dyn RateStrategy>>,
    ) -> Self {
        Self { cache, strategies }
    }

    /// Walks the chain until a source answers.
    pub async fn resolve(&self, pair: &CurrencyPair) -> Result<ResolvedRate, AppError> {
        for strategy in &self.strategies {
            match strategy.resolve(pair).await {
                Resolution::Hit(rate) => {
                    debug!(%pair, source = %rate.source, rate = %rate.rate, "rate resolved");
                    if rate.source != RateSource::Cache {
                        self.write_back(pair, rate).await;
                    }
                    return Ok(rate);
                }
                Resolution::Miss => {
                    debug!(%pair, source = %strategy.source(), "rate source missed");
                }
                Resolution::Fallback(reason) => {
                    warn!(%pair, source = %strategy.source(), %reason, "rate source failed, falling back");
                }
                Resolution::Failed(err) => return Err(err),
            }
        }

        Err(AppError::Internal(format!("no rate source answered for {pair}")))
    }

    /// Converts an already validated request.
    pub async fn convert(&self, req: &ConversionRequest) -> Result<String, AppError> {
        let rate = self.resolve(&req.pair).await?;
        let converted = rate.apply(req.amount)?;

        info!(pair = %req.pair, amount = %req.amount, source = %rate.source, %converted, "converted");
        Ok(converted)
    }

    /// Validates raw query input, then converts.
    pub async fn exchange(
        &self,
        from: &str,
        to: &str,
        amount: &str,
    ) -> Result<ExchangeResponse, AppError> {
        let req = ConversionRequest::parse(from, to, amount)?;
        let converted_value = self.convert(&req).await?;
        Ok(ExchangeResponse { converted_value })
    }

    async fn write_back(&self, pair: &CurrencyPair, rate: ResolvedRate) {
        if let Err(e) = self.cache.create(&pair.key(), CachedRate::from(rate)).await {
            warn!(%pair, error = %e, "rate cache write failed");
        }
    }
}
