//! Data context over the Pessoa table
//!
//! A single fixed query per operation. Postgres renders each row as a JSON
//! object, so the column set is whatever the table defines.

use sqlx::types::Json;
use sqlx::PgPool;

use super::pool::{create_lazy_pool, create_pool, DatabaseConfig};
use crate::models::{Pessoa, TableName};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Typed handle to the backing table.
///
/// Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct DataContext {
    pool: PgPool,
    table: TableName,
    select_all: String,
}

impl DataContext {
    pub fn new(pool: PgPool, table: TableName) -> Self {
        let select_all = format!("SELECT row_to_json(t) FROM {} AS t", table.quoted());
        Self {
            pool,
            table,
            select_all,
        }
    }

    /// Open the pool eagerly, failing if the database is unreachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let pool = create_pool(config).await?;
        Ok(Self::new(pool, config.table.clone()))
    }

    /// Build the context without touching the database; the first query
    /// opens the first connection.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, DbError> {
        let pool = create_lazy_pool(config)?;
        Ok(Self::new(pool, config.table.clone()))
    }

    pub fn table(&self) -> &TableName {
        &self.table
    }

    /// Every row of the table, materialized eagerly, in database order.
    pub async fn all(&self) -> Result<Vec<Pessoa>, DbError> {
        let rows: Vec<Json<Pessoa>> = sqlx::query_scalar(&self.select_all)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(table = %self.table, count = rows.len(), "fetched all rows");
        Ok(rows.into_iter().map(|Json(row)| row).collect())
    }

    /// Round-trip a trivial query to check connectivity.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
