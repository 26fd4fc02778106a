// src/models/cliente.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id_cliente: i64,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub data_cadastro: Option<String>,
}
