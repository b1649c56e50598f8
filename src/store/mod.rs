//! Storage seam for registrants. Handlers only see [`CadastroStore`]; the backend is chosen at startup.

mod memory;
mod postgres;

pub use memory::MemoryCadastroStore;
pub use postgres::{connect_store, PgCadastroStore};

use crate::error::StoreError;
use crate::model::{Cadastro, NewCadastro};
use async_trait::async_trait;

/// Ids are passed through as the raw path text; each backend decides whether it names a row.
#[async_trait]
pub trait CadastroStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Cadastro>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Cadastro>, StoreError>;

    /// Insert and return the row with its assigned id.
    async fn create(&self, input: &NewCadastro) -> Result<Cadastro, StoreError>;

    /// Replace all fields. None when no row has this id.
    async fn update(&self, id: &str, input: &NewCadastro) -> Result<Option<Cadastro>, StoreError>;

    /// Remove the row, returning it. None when no row has this id.
    async fn delete(&self, id: &str) -> Result<Option<Cadastro>, StoreError>;

    /// Connectivity check used at startup and by `/ready`.
    async fn ping(&self) -> Result<(), StoreError>;
}
