// src/handlers/cftv.rs

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Local;

use crate::models::cftv::{Camera, StatusCftv};

// As câmeras são fixas e as imagens são estáticas, servidas pelo frontend.
const CAMERAS: [(u32, &str, &str); 4] = [
    (1, "Câmera 1 - Entrada", "resources/imagens-camera/imagem_1.png"),
    (2, "Câmera 2 - Balcão", "resources/imagens-camera/imagem_2.png"),
    (3, "Câmera 3 - Forno", "resources/imagens-camera/imagem_3.png"),
    (4, "Câmera 4 - Estoque", "resources/imagens-camera/imagem_4.png"),
];

// GET /api/cftv/cameras
#[utoipa::path(
    get,
    path = "/api/cftv/cameras",
    tag = "CFTV",
    responses(
        (status = 200, description = "Câmeras do circuito interno", body = StatusCftv)
    )
)]
pub async fn listar_cameras() -> impl IntoResponse {
    let cameras = CAMERAS
        .iter()
        .map(|(id, nome, imagem)| Camera {
            id: *id,
            nome: nome.to_string(),
            imagem: imagem.to_string(),
            online: true,
        })
        .collect();

    let status = StatusCftv {
        cameras,
        atualizado_em: Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
    };

    (StatusCode::OK, Json(status))
}
