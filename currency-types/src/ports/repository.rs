//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite) implement this trait.

use crate::domain::{Acronym, Currency, CurrencyId, CurrencyPatch, NewCurrency};
use crate::error::RepoError;

/// Document store of Currency records keyed by acronym.
///
/// Each operation is atomic on its own; callers never span a
/// transaction across several calls.
#[async_trait::async_trait]
pub trait CurrencyRepository: Send + Sync + 'static {
    /// Gets a currency by acronym. `Ok(None)` when absent.
    async fn get_by_acronym(&self, acronym: &Acronym) -> Result<Option<Currency>, RepoError>;

    /// Lists all currencies.
    async fn get_all(&self) -> Result<Vec<Currency>, RepoError>;

    /// Stores a new currency and returns the assigned id.
    async fn create(&self, currency: NewCurrency) -> Result<CurrencyId, RepoError>;

    /// Applies a partial update. Returns whether a record was modified.
    async fn update(&self, acronym: &Acronym, patch: CurrencyPatch) -> Result<bool, RepoError>;

    /// Removes the currency permanently. Deleting a missing acronym is not an error.
    async fn delete_by_acronym(&self, acronym: &Acronym) -> Result<(), RepoError>;
}
