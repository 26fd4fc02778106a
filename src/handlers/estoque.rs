// src/handlers/estoque.rs

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
    models::estoque::EstoqueIngrediente,
};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstoquePayload {
    #[validate(length(min = 1, message = "O nome do ingrediente é obrigatório"))]
    #[schema(example = "Farinha de Trigo")]
    pub nome_ingrediente: String,

    #[validate(range(min = 0.0, message = "A quantidade não pode ser negativa"))]
    #[schema(example = 25.0)]
    pub quantidade_estoque: f64,

    #[validate(length(min = 1, message = "A unidade de medida é obrigatória"))]
    #[schema(example = "kg")]
    pub unidade_medida: String,

    #[validate(range(min = 0.0, message = "O estoque mínimo não pode ser negativo"))]
    #[schema(example = 10.0)]
    pub estoque_minimo: f64,

    #[validate(range(min = 0.0, message = "O custo médio não pode ser negativo"))]
    #[schema(example = 4.5)]
    pub custo_medio: f64,
}

// GET /api/estoque-ingredientes
#[utoipa::path(
    get,
    path = "/api/estoque-ingredientes",
    tag = "Estoque",
    responses(
        (status = 200, description = "Lista de ingredientes em estoque", body = Vec<EstoqueIngrediente>)
    )
)]
pub async fn listar_estoque(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let estoque = app_state.estoque_service.listar().await?;

    Ok((StatusCode::OK, Json(estoque)))
}

// GET /api/estoque-ingredientes/{id}
#[utoipa::path(
    get,
    path = "/api/estoque-ingredientes/{id}",
    tag = "Estoque",
    params(
        ("id" = i64, Path, description = "ID do ingrediente")
    ),
    responses(
        (status = 200, description = "Ingrediente encontrado", body = EstoqueIngrediente),
        (status = 404, description = "Ingrediente não encontrado")
    )
)]
pub async fn buscar_ingrediente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let ingrediente = app_state.estoque_service.buscar(id).await?;

    Ok((StatusCode::OK, Json(ingrediente)))
}

// POST /api/estoque-ingredientes
#[utoipa::path(
    post,
    path = "/api/estoque-ingredientes",
    tag = "Estoque",
    request_body = EstoquePayload,
    responses(
        (status = 201, description = "Ingrediente criado", body = EstoqueIngrediente),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_ingrediente(
    State(app_state): State<AppState>,
    Json(payload): Json<EstoquePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ingrediente = app_state.estoque_service.criar(&payload).await?;

    Ok((StatusCode::CREATED, Json(registro_ou_confirmacao(ingrediente))))
}

// PUT /api/estoque-ingredientes/{id}
#[utoipa::path(
    put,
    path = "/api/estoque-ingredientes/{id}",
    tag = "Estoque",
    request_body = EstoquePayload,
    params(
        ("id" = i64, Path, description = "ID do ingrediente")
    ),
    responses(
        (status = 200, description = "Ingrediente atualizado", body = EstoqueIngrediente),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn atualizar_ingrediente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EstoquePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ingrediente = app_state.estoque_service.atualizar(id, &payload).await?;

    Ok((StatusCode::OK, Json(registro_ou_confirmacao(ingrediente))))
}

// DELETE /api/estoque-ingredientes/{id}
#[utoipa::path(
    delete,
    path = "/api/estoque-ingredientes/{id}",
    tag = "Estoque",
    params(
        ("id" = i64, Path, description = "ID do ingrediente")
    ),
    responses(
        (status = 204, description = "Ingrediente excluído")
    )
)]
pub async fn deletar_ingrediente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.estoque_service.excluir(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
