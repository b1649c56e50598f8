//! In-process backend. Used by tests and for running the HTTP surface without a database.

use super::CadastroStore;
use crate::error::StoreError;
use crate::model::{Cadastro, NewCadastro};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Cadastro>,
    last_id: i64,
}

/// Ids start at 1 and are never reused, like a SERIAL column.
#[derive(Default)]
pub struct MemoryCadastroStore {
    inner: RwLock<Inner>,
}

impl MemoryCadastroStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Same coercion PostgreSQL applies to `$1::text::bigint`.
fn parse_id(id: &str) -> Result<i64, StoreError> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[async_trait]
impl CadastroStore for MemoryCadastroStore {
    async fn list(&self) -> Result<Vec<Cadastro>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Cadastro>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, input: &NewCadastro) -> Result<Cadastro, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let row = input.clone().into_cadastro(inner.last_id);
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: &str, input: &NewCadastro) -> Result<Option<Cadastro>, StoreError> {
        let id = parse_id(id)?;
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            *row = input.clone().into_cadastro(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Cadastro>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.inner.write().await.rows.remove(&id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
