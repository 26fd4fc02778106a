// src/handlers/clientes.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::registro_ou_confirmacao,
    models::cliente::Cliente,
};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "Maria da Silva")]
    pub nome: String,

    #[validate(email(message = "E-mail inválido"))]
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    #[schema(example = "(11) 98888-7777")]
    pub telefone: Option<String>,
}

// GET /api/clientes
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Cliente>)
    )
)]
pub async fn listar_clientes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.clientes_service.listar().await?;

    Ok((StatusCode::OK, Json(clientes)))
}

// GET /api/clientes/{id}
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(
        ("id" = i64, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Cliente encontrado", body = Cliente),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn buscar_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state.clientes_service.buscar(id).await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// POST /api/clientes
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = ClientePayload,
    responses(
        (status = 201, description = "Cliente criado", body = Cliente),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_cliente(
    State(app_state): State<AppState>,
    Json(payload): Json<ClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = app_state.clientes_service.criar(&payload).await?;

    Ok((StatusCode::CREATED, Json(registro_ou_confirmacao(cliente))))
}

// PUT /api/clientes/{id}
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    request_body = ClientePayload,
    params(
        ("id" = i64, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Cliente atualizado", body = Cliente),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn atualizar_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = app_state.clientes_service.atualizar(id, &payload).await?;

    Ok((StatusCode::OK, Json(registro_ou_confirmacao(cliente))))
}

// DELETE /api/clientes/{id}
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(
        ("id" = i64, Path, description = "ID do cliente")
    ),
    responses(
        (status = 204, description = "Cliente excluído")
    )
)]
pub async fn deletar_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.clientes_service.excluir(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
