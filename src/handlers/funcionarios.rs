// src/handlers/funcionarios.rs

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
    models::funcionario::Funcionario,
};

fn ativo_padrao() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuncionarioPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    #[schema(example = "João Pereira")]
    pub nome: String,

    #[validate(email(message = "E-mail inválido"))]
    #[schema(example = "joao@email.com")]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "O cargo é obrigatório"))]
    #[schema(example = "padeiro")]
    pub cargo: String,

    #[validate(range(min = 0.0, message = "O salário não pode ser negativo"))]
    #[schema(example = 2500.0)]
    pub salario_base: f64,

    #[schema(example = "2024-01-10")]
    pub data_admissao: String,

    #[serde(default = "ativo_padrao")]
    #[schema(example = true)]
    pub ativo: bool,
}

// GET /api/funcionarios
#[utoipa::path(
    get,
    path = "/api/funcionarios",
    tag = "Funcionários",
    responses(
        (status = 200, description = "Lista de funcionários", body = Vec<Funcionario>)
    )
)]
pub async fn listar_funcionarios(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let funcionarios = app_state.funcionarios_service.listar().await?;

    Ok((StatusCode::OK, Json(funcionarios)))
}

// GET /api/funcionarios/{id}
#[utoipa::path(
    get,
    path = "/api/funcionarios/{id}",
    tag = "Funcionários",
    params(
        ("id" = i64, Path, description = "ID do funcionário")
    ),
    responses(
        (status = 200, description = "Funcionário encontrado", body = Funcionario),
        (status = 404, description = "Funcionário não encontrado")
    )
)]
pub async fn buscar_funcionario(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let funcionario = app_state.funcionarios_service.buscar(id).await?;

    Ok((StatusCode::OK, Json(funcionario)))
}

// POST /api/funcionarios
#[utoipa::path(
    post,
    path = "/api/funcionarios",
    tag = "Funcionários",
    request_body = FuncionarioPayload,
    responses(
        (status = 201, description = "Funcionário criado", body = Funcionario),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn criar_funcionario(
    State(app_state): State<AppState>,
    Json(payload): Json<FuncionarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let funcionario = app_state.funcionarios_service.criar(&payload).await?;

    Ok((StatusCode::CREATED, Json(registro_ou_confirmacao(funcionario))))
}

// PUT /api/funcionarios/{id}
// Também é o caminho para ativar/desativar: não existe DELETE de funcionário.
#[utoipa::path(
    put,
    path = "/api/funcionarios/{id}",
    tag = "Funcionários",
    request_body = FuncionarioPayload,
    params(
        ("id" = i64, Path, description = "ID do funcionário")
    ),
    responses(
        (status = 200, description = "Funcionário atualizado", body = Funcionario),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn atualizar_funcionario(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<FuncionarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let funcionario = app_state
        .funcionarios_service
        .atualizar(id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(registro_ou_confirmacao(funcionario))))
}
