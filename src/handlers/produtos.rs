// src/handlers/produtos.rs

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
    models::produto::Produto,
};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoPayload {
    #[validate(length(min = 1, message = "O nome do produto é obrigatório"))]
    #[schema(example = "Pão Francês")]
    pub nome_produto: String,

    // Preço de venda por quilo
    #[validate(range(min = 0.0, message = "O preço não pode ser negativo"))]
    #[schema(example = 24.9)]
    pub preco_kg: f64,
}

// GET /api/produtos
#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Produtos",
    responses(
        (status = 200, description = "Lista de produtos", body = Vec<Produto>)
    )
)]
pub async fn listar_produtos(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state.produtos_service.listar().await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// GET /api/produtos/{id}
#[utoipa::path(
    get,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    params(
        ("id" = i64, Path, description = "ID do produto")
    ),
    responses(
        (status = 200, description = "Produto encontrado", body = Produto),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn buscar_produto(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let produto = app_state.produtos_service.buscar(id).await?;

    Ok((StatusCode::OK, Json(produto)))
}

// POST /api/produtos
#[utoipa::path(
    post,
    path = "/api/produtos",
    tag = "Produtos",
    request_body = ProdutoPayload,
    responses(
        (status = 201, description = "Produto criado", body = Produto),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_produto(
    State(app_state): State<AppState>,
    Json(payload): Json<ProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let produto = app_state.produtos_service.criar(&payload).await?;

    Ok((StatusCode::CREATED, Json(registro_ou_confirmacao(produto))))
}

// PUT /api/produtos/{id}
#[utoipa::path(
    put,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    request_body = ProdutoPayload,
    params(
        ("id" = i64, Path, description = "ID do produto")
    ),
    responses(
        (status = 200, description = "Produto atualizado", body = Produto),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn atualizar_produto(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let produto = app_state.produtos_service.atualizar(id, &payload).await?;

    Ok((StatusCode::OK, Json(registro_ou_confirmacao(produto))))
}

// DELETE /api/produtos/{id}
#[utoipa::path(
    delete,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    params(
        ("id" = i64, Path, description = "ID do produto")
    ),
    responses(
        (status = 204, description = "Produto excluído")
    )
)]
pub async fn deletar_produto(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.produtos_service.excluir(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
