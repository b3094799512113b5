//! Rate cache port.

use crate::domain::{Acronym, CachedRate};
use crate::error::CacheError;

/// Key/value store of resolved rates keyed by pair string (e.g. `USDBRL`).
///
/// Freshness belongs to the store: callers only see an entry as present or
/// absent.
#[async_trait::async_trait]
pub trait RateCache: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<CachedRate>, CacheError>;

    /// Stores a rate, replacing any previous value (last writer wins).
    async fn create(&self, key: &str, value: CachedRate) -> Result<(), CacheError>;

    /// Drops every pair that has `acronym` on either side. Returns how many
    /// entries were removed.
    async fn invalidate(&self, acronym: &Acronym) -> Result<usize, CacheError>;
}
