//! PostgreSQL backend.

use super::CadastroStore;
use crate::config::AppConfig;
use crate::error::StoreError;
use crate::model::{Cadastro, NewCadastro};
use crate::sql::{Statements, TableName};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgCadastroStore {
    pool: PgPool,
    sql: Statements,
}

impl PgCadastroStore {
    pub fn new(pool: PgPool, table: &TableName) -> Self {
        PgCadastroStore {
            pool,
            sql: Statements::for_table(table),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Open the pool and run the connectivity check. Any failure is returned; there is no retry.
pub async fn connect_store(config: &AppConfig) -> Result<PgCadastroStore, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "could not connect to database"))?;

    let store = PgCadastroStore::new(pool, &config.table);
    store
        .ping()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "database connectivity check failed"))?;
    tracing::info!(table = %config.table, "connected to database");
    Ok(store)
}

#[async_trait]
impl CadastroStore for PgCadastroStore {
    async fn list(&self) -> Result<Vec<Cadastro>, StoreError> {
        tracing::debug!(sql = %self.sql.select_all, "query");
        let rows = sqlx::query_as::<_, Cadastro>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: &str) -> Result<Option<Cadastro>, StoreError> {
        tracing::debug!(sql = %self.sql.select_by_id, id, "query");
        let row = sqlx::query_as::<_, Cadastro>(&self.sql.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: &NewCadastro) -> Result<Cadastro, StoreError> {
        tracing::debug!(sql = %self.sql.insert, "query");
        let row = sqlx::query_as::<_, Cadastro>(&self.sql.insert)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.celular)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: &str, input: &NewCadastro) -> Result<Option<Cadastro>, StoreError> {
        tracing::debug!(sql = %self.sql.update, id, "query");
        let row = sqlx::query_as::<_, Cadastro>(&self.sql.update)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.celular)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: &str) -> Result<Option<Cadastro>, StoreError> {
        tracing::debug!(sql = %self.sql.delete, id, "query");
        let row = sqlx::query_as::<_, Cadastro>(&self.sql.delete)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query(self.sql.ping).execute(&self.pool).await?;
        Ok(())
    }
}
