//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing setting: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("config load: {0}")]
    Load(String),
}

/// Failures raised by a [`crate::store::CadastroStore`] backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("invalid id: {0}")]
    InvalidId(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// `message` is the generic text returned to the caller; `source` is only logged.
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

pub const REQUIRED_FIELDS_MESSAGE: &str = "Nome, email e celular são obrigatórios.";
pub const INVALID_BODY_MESSAGE: &str = "Corpo da requisição inválido.";

impl AppError {
    pub fn required_fields() -> Self {
        AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
    }

    pub fn not_found(id: &str) -> Self {
        AppError::NotFound(format!("Cadastro com ID {} não encontrado.", id))
    }

    /// Wraps a store failure with the message shown to the caller.
    pub fn database(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Database { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database { message, source } = &self {
            tracing::error!(error = %source, "{}", message);
        }
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
