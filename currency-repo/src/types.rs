//! Shared database types with feature-gated fields for SQLite and PostgreSQL.

use sqlx::FromRow;

use currency_types::{Acronym, Currency, CurrencyId, DomainError, RepoError};

// ─────────────────────────────────────────────────────────────────────────────
// Feature-gated imports
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(not(feature = "sqlite"))]
use rust_decimal::Decimal;
#[cfg(not(feature = "sqlite"))]
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Currency row from database.
#[derive(FromRow)]
pub struct DbCurrency {
    #[cfg(not(feature = "sqlite"))]
    pub id: Uuid,
    #[cfg(feature = "sqlite")]
    pub id: String,

    pub acronym: String,
    pub name: String,

    #[cfg(not(feature = "sqlite"))]
    pub dolar_price_reference: Decimal,
    #[cfg(feature = "sqlite")]
    pub dolar_price_reference: String,
}

impl DbCurrency {
    pub fn into_domain(self) -> Result<Currency, RepoError> {
        #[cfg(not(feature = "sqlite"))]
        let (id, dolar_price_reference) = (self.id, self.dolar_price_reference);

        #[cfg(feature = "sqlite")]
        let (id, dolar_price_reference) = (
            self.id
                .parse::<uuid::Uuid>()
                .map_err(|e| RepoError::Database(format!("Invalid currency id: {e}")))?,
            self.dolar_price_reference
                .parse::<rust_decimal::Decimal>()
                .map_err(|e| RepoError::Database(format!("Invalid reference price: {e}")))?,
        );

        let acronym = Acronym::parse(&self.acronym).map_err(|e| match e {
            DomainError::InvalidAcronym(raw) => {
                RepoError::Database(format!("Stored acronym is invalid: {raw}"))
            }
            other => RepoError::Domain(other),
        })?;

        Ok(Currency {
            id: CurrencyId::from_uuid(id),
            acronym,
            name: self.name,
            dolar_price_reference,
        })
    }
}

/// Maps a sqlx error onto the repository error set.
///
/// Unique-key violations are conflicts; losing the connection or the pool
/// is a transaction failure.
pub fn map_db_error(err: sqlx::Error) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepoError::Conflict(db.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepoError::Transaction(err.to_string())
        }
        _ => RepoError::Database(err.to_string()),
    }
}
