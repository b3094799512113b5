//! Currency Application Service
//!
//! Orchestrates CRUD operations through the repository port and drops cached
//! rates that a write made stale.
//! Contains NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use tracing::{debug, error, warn};

use currency_types::{
    Acronym, AppError, CreateCurrencyRequest, Currency, CurrencyId, CurrencyOperation,
    CurrencyPatch, CurrencyRepository, NewCurrency, RateCache, RepoError, UpdateCurrencyRequest,
};

/// Application service for currency records.
///
/// Generic over `R: CurrencyRepository` - the adapter is injected at compile time.
/// The repository and the rate cache are shared with the exchange chain,
/// hence the `Arc`s.
pub struct CurrencyService<R: CurrencyRepository> {
    repo: Arc<R>,
    cache: Arc<dyn RateCache>,
}

impl<R: CurrencyRepository> CurrencyService<R> {
    /// Creates a new currency service over `repo`. Writes evict the rates in
    /// `cache` that were derived from the changed record.
    pub fn new(repo: Arc<R>, cache: Arc<dyn RateCache>) -> Self {
        Self { repo, cache }
    }

    /// Gets a currency by acronym. `Ok(None)` when no record exists.
    pub async fn get(&self, acronym: &str) -> Result<Option<Currency>, AppError> {
        let acronym = Acronym::parse(acronym)?;

        self.repo
            .get_by_acronym(&acronym)
            .await
            .map_err(|e| unexpected("get", &acronym, e))
    }

    /// Lists all currencies. An empty list is a valid result.
    pub async fn get_all(&self) -> Result<Vec<Currency>, AppError> {
        self.repo.get_all().await.map_err(|e| {
            error!(error = %e, "failed to list currencies");
            AppError::Internal(e.to_string())
        })
    }

    /// Creates a currency under `acronym`.
    ///
    /// Validation happens before the repository is touched; any repository
    /// failure, a duplicate acronym included, becomes a creation error.
    pub async fn create(
        &self,
        acronym: &str,
        req: CreateCurrencyRequest,
    ) -> Result<CurrencyId, AppError> {
        let acronym = Acronym::parse(acronym)?;
        let currency = NewCurrency::new(acronym, req.name, req.dolar_price_reference)?;

        debug!(acronym = %currency.acronym, "creating currency");
        self.repo
            .create(currency)
            .await
            .map_err(|e| wrap(CurrencyOperation::Create, e))
    }

    /// Applies a partial update. Returns whether a record was modified.
    pub async fn update(&self, acronym: &str, req: UpdateCurrencyRequest) -> Result<bool, AppError> {
        let acronym = Acronym::parse(acronym)?;
        let patch = CurrencyPatch::new(req.name, req.dolar_price_reference)?;

        let modified = self
            .repo
            .update(&acronym, patch)
            .await
            .map_err(|e| wrap(CurrencyOperation::Update, e))?;

        if modified {
            self.forget_rates(&acronym).await;
        }
        Ok(modified)
    }

    /// Deletes a currency and returns the acronym it applied to.
    ///
    /// Deleting a missing acronym succeeds.
    pub async fn delete(&self, acronym: &str) -> Result<Acronym, AppError> {
        let acronym = Acronym::parse(acronym)?;

        self.repo
            .delete_by_acronym(&acronym)
            .await
            .map_err(|e| wrap(CurrencyOperation::Delete, e))?;

        self.forget_rates(&acronym).await;
        Ok(acronym)
    }

    /// Evicts cached rates involving `acronym`. The write already succeeded,
    /// so a cache failure is only logged.
    async fn forget_rates(&self, acronym: &Acronym) {
        match self.cache.invalidate(acronym).await {
            Ok(removed) => debug!(%acronym, removed, "evicted cached rates"),
            Err(e) => warn!(%acronym, error = %e, "failed to evict cached rates"),
        }
    }
}

fn wrap(operation: CurrencyOperation, err: RepoError) -> AppError {
    match err {
        RepoError::Domain(e) => e.into(),
        e => {
            error!(?operation, error = %e, "currency repository failure");
            AppError::CurrencyService(operation)
        }
    }
}

fn unexpected(action: &str, acronym: &Acronym, err: RepoError) -> AppError {
    error!(action, %acronym, error = %err, "currency repository failure");
    AppError::Internal(err.to_string())
}
