// src/models/cftv.rs

use serde::Serialize;
use utoipa::ToSchema;

// O CFTV exibe imagens estáticas; não há streaming.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: u32,
    pub nome: String,
    pub imagem: String,
    pub online: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCftv {
    pub cameras: Vec<Camera>,
    pub atualizado_em: String,
}
