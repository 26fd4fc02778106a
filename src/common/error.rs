use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api::FetchError;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Qualquer falha ao falar com a API da padaria
    #[error("Falha ao consultar o backend")]
    Backend(#[from] FetchError),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::Backend(FetchError::Timeout) => (
                StatusCode::GATEWAY_TIMEOUT,
                "Tempo limite excedido. O servidor está demorando para responder.".to_string(),
            ),
            AppError::Backend(FetchError::Conexao(_)) => (
                StatusCode::BAD_GATEWAY,
                "Não foi possível conectar ao servidor.".to_string(),
            ),
            // Status do backend é repassado para quem chamou.
            AppError::Backend(FetchError::Status(status_backend)) => (
                StatusCode::from_u16(status_backend.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("Erro HTTP: {}", status_backend),
            ),
            AppError::Backend(FetchError::RespostaInvalida) => (
                StatusCode::BAD_GATEWAY,
                "O servidor devolveu uma resposta inválida.".to_string(),
            ),

            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
