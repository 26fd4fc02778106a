// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{config::AppState, models::dashboard::ResumoDashboard};

// GET /api/dashboard/resumo
#[utoipa::path(
    get,
    path = "/api/dashboard/resumo",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo de vendas, clientes e estoque do painel", body = ResumoDashboard)
    )
)]
pub async fn get_resumo(State(app_state): State<AppState>) -> impl IntoResponse {
    // O resumo nunca falha: fonte indisponível vira zeros no card.
    let resumo = app_state.dashboard_service.montar_resumo().await;

    (StatusCode::OK, Json(resumo))
}
