//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use currency_types::{
    Acronym, Currency, CurrencyId, CurrencyPatch, CurrencyRepository, NewCurrency, RepoError,
};

use crate::types::{DbCurrency, map_db_error};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Creates the database schema (idempotent).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_currencies.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CurrencyRepository for SqliteRepo {
    async fn get_by_acronym(&self, acronym: &Acronym) -> Result<Option<Currency>, RepoError> {
        let row: Option<DbCurrency> = sqlx::query_as(
            r#"SELECT id, acronym, name, dolar_price_reference FROM currencies WHERE acronym = ?"#,
        )
        .bind(acronym.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(DbCurrency::into_domain).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Currency>, RepoError> {
        let rows: Vec<DbCurrency> = sqlx::query_as(
            r#"SELECT id, acronym, name, dolar_price_reference FROM currencies ORDER BY acronym"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(DbCurrency::into_domain).collect()
    }

    async fn create(&self, currency: NewCurrency) -> Result<CurrencyId, RepoError> {
        let id = CurrencyId::new();

        sqlx::query(
            r#"INSERT INTO currencies (id, acronym, name, dolar_price_reference) VALUES (?, ?, ?, ?)"#,
        )
        .bind(id.to_string())
        .bind(currency.acronym.as_str())
        .bind(&currency.name)
        .bind(currency.dolar_price_reference.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    async fn update(&self, acronym: &Acronym, patch: CurrencyPatch) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"UPDATE currencies
               SET name = COALESCE(?, name),
                   dolar_price_reference = COALESCE(?, dolar_price_reference)
               WHERE acronym = ?"#,
        )
        .bind(patch.name)
        .bind(patch.dolar_price_reference.map(|p| p.to_string()))
        .bind(acronym.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_acronym(&self, acronym: &Acronym) -> Result<(), RepoError> {
        sqlx::query(r#"DELETE FROM currencies WHERE acronym = ?"#)
            .bind(acronym.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
