//! Registrant records as stored and as accepted from clients.

use serde::Serialize;

/// Body of `GET /`.
pub const ROOT_MESSAGE: &str = "Ok – Servidor disponível.";

/// One row of the Cadastro table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Cadastro {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub celular: String,
}

/// Validated create/update payload. All three fields are replaced together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCadastro {
    pub nome: String,
    pub email: String,
    pub celular: String,
}

impl NewCadastro {
    pub fn into_cadastro(self, id: i64) -> Cadastro {
        Cadastro {
            id,
            nome: self.nome,
            email: self.email,
            celular: self.celular,
        }
    }
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn deleted(id: &str) -> Self {
        MessageBody {
            message: format!("Cadastro ID {} deletado com sucesso.", id),
        }
    }
}
