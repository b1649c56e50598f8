//! Registrant operations: validation, store call, not-found and error mapping.

use crate::error::AppError;
use crate::model::{Cadastro, NewCadastro};
use crate::store::CadastroStore;

pub struct CadastroService;

impl CadastroService {
    /// All rows in database order. Empty table is an empty list.
    pub async fn list(store: &dyn CadastroStore) -> Result<Vec<Cadastro>, AppError> {
        store
            .list()
            .await
            .map_err(AppError::database("Erro ao buscar cadastros"))
    }

    pub async fn read(store: &dyn CadastroStore, id: &str) -> Result<Cadastro, AppError> {
        store
            .get(id)
            .await
            .map_err(AppError::database("Erro ao buscar cadastro"))?
            .ok_or_else(|| AppError::not_found(id))
    }

    pub async fn create(store: &dyn CadastroStore, input: &NewCadastro) -> Result<Cadastro, AppError> {
        let row = store
            .create(input)
            .await
            .map_err(AppError::database("Erro ao inserir cadastro"))?;
        tracing::info!(?row, "cadastro created");
        Ok(row)
    }

    /// Full replace of nome, email and celular.
    pub async fn update(
        store: &dyn CadastroStore,
        id: &str,
        input: &NewCadastro,
    ) -> Result<Cadastro, AppError> {
        let row = store
            .update(id, input)
            .await
            .map_err(AppError::database("Erro ao atualizar cadastro"))?
            .ok_or_else(|| AppError::not_found(id))?;
        tracing::info!(?row, "cadastro updated");
        Ok(row)
    }

    /// Returns the deleted row; callers only report the id.
    pub async fn delete(store: &dyn CadastroStore, id: &str) -> Result<Cadastro, AppError> {
        let row = store
            .delete(id)
            .await
            .map_err(AppError::database("Erro ao deletar cadastro"))?
            .ok_or_else(|| AppError::not_found(id))?;
        tracing::info!(?row, "cadastro deleted");
        Ok(row)
    }
}
