//! Cadastro CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{MessageBody, ROOT_MESSAGE};
use crate::service::{CadastroService, RequestValidator};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn root() -> &'static str {
    tracing::info!("GET / called");
    ROOT_MESSAGE
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /cadastros called");
    let rows = CadastroService::list(state.store.as_ref()).await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(%id, "GET /cadastros/:id called");
    let row = CadastroService::read(state.store.as_ref(), &id).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, AppError> {
    let body = RequestValidator::parse_body(&body)?;
    let input = RequestValidator::validate(&body)?;
    tracing::info!(?input, "POST /cadastros called");
    let row = CadastroService::create(state.store.as_ref(), &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = RequestValidator::parse_body(&body)?;
    let input = RequestValidator::validate(&body)?;
    tracing::info!(%id, ?input, "PUT /cadastros/:id called");
    let row = CadastroService::update(state.store.as_ref(), &id, &input).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(%id, "DELETE /cadastros/:id called");
    CadastroService::delete(state.store.as_ref(), &id).await?;
    Ok((StatusCode::OK, Json(MessageBody::deleted(&id))))
}
