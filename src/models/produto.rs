// src/models/produto.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    pub id_produto: i64,

    // Registros antigos usam "nome" e "preco"
    #[serde(alias = "nome")]
    pub nome_produto: String,

    #[serde(alias = "preco")]
    pub preco_kg: f64,
}
