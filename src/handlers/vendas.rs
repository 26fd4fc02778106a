// src/handlers/vendas.rs

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
    models::venda::{FormaPagamento, StatusPagamento, Venda},
};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendaPayload {
    #[schema(example = 1)]
    pub id_cliente: i64,

    #[schema(example = 2)]
    pub id_produto: i64,

    #[validate(range(min = 0.01, message = "O peso vendido deve ser maior que zero"))]
    #[schema(example = 1.5)]
    pub peso_vendido: f64,

    #[validate(range(min = 0.0, message = "O preço por kg não pode ser negativo"))]
    #[schema(example = 24.9)]
    pub preco_kg: f64,

    #[schema(example = "pix")]
    pub forma_pagamento: FormaPagamento,

    #[schema(example = "pendente")]
    pub status_pagamento: StatusPagamento,
}

// GET /api/vendas
#[utoipa::path(
    get,
    path = "/api/vendas",
    tag = "Vendas",
    responses(
        (status = 200, description = "Lista de vendas", body = Vec<Venda>)
    )
)]
pub async fn listar_vendas(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vendas = app_state.vendas_service.listar().await?;

    Ok((StatusCode::OK, Json(vendas)))
}

// GET /api/vendas/{id}
#[utoipa::path(
    get,
    path = "/api/vendas/{id}",
    tag = "Vendas",
    params(
        ("id" = i64, Path, description = "ID da venda")
    ),
    responses(
        (status = 200, description = "Venda encontrada", body = Venda),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn buscar_venda(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let venda = app_state.vendas_service.buscar(id).await?;

    Ok((StatusCode::OK, Json(venda)))
}

// POST /api/vendas
#[utoipa::path(
    post,
    path = "/api/vendas",
    tag = "Vendas",
    request_body = VendaPayload,
    responses(
        (status = 201, description = "Venda registrada", body = Venda),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_venda(
    State(app_state): State<AppState>,
    Json(payload): Json<VendaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let venda = app_state.vendas_service.criar(&payload).await?;

    Ok((StatusCode::CREATED, Json(registro_ou_confirmacao(venda))))
}

// PUT /api/vendas/{id}
#[utoipa::path(
    put,
    path = "/api/vendas/{id}",
    tag = "Vendas",
    request_body = VendaPayload,
    params(
        ("id" = i64, Path, description = "ID da venda")
    ),
    responses(
        (status = 200, description = "Venda atualizada", body = Venda),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn atualizar_venda(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<VendaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let venda = app_state.vendas_service.atualizar(id, &payload).await?;

    Ok((StatusCode::OK, Json(registro_ou_confirmacao(venda))))
}

// DELETE /api/vendas/{id}
#[utoipa::path(
    delete,
    path = "/api/vendas/{id}",
    tag = "Vendas",
    params(
        ("id" = i64, Path, description = "ID da venda")
    ),
    responses(
        (status = 204, description = "Venda cancelada")
    )
)]
pub async fn cancelar_venda(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vendas_service.cancelar(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
