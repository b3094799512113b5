//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use currency_types::{
    Acronym, Currency, CurrencyId, CurrencyPatch, CurrencyRepository, NewCurrency, RepoError,
};

use crate::types::{DbCurrency, map_db_error};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_currencies_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        run_migrations(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CurrencyRepository for PostgresRepo {
    async fn get_by_acronym(&self, acronym: &Acronym) -> Result<Option<Currency>, RepoError> {
        let row: Option<DbCurrency> = sqlx::query_as(
            r#"SELECT id, acronym, name, dolar_price_reference FROM currencies WHERE acronym = $1"#,
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
            r#"INSERT INTO currencies (id, acronym, name, dolar_price_reference) VALUES ($1, $2, $3, $4)"#,
        )
        .bind(*id.as_uuid())
        .bind(currency.acronym.as_str())
        .bind(&currency.name)
        .bind(currency.dolar_price_reference)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    async fn update(&self, acronym: &Acronym, patch: CurrencyPatch) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"UPDATE currencies
               SET name = COALESCE($1, name),
                   dolar_price_reference = COALESCE($2, dolar_price_reference)
               WHERE acronym = $3"#,
        )
        .bind(patch.name)
        .bind(patch.dolar_price_reference)
        .bind(acronym.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_acronym(&self, acronym: &Acronym) -> Result<(), RepoError> {
        sqlx::query(r#"DELETE FROM currencies WHERE acronym = $1"#)
            .bind(acronym.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
