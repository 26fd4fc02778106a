// src/models/estoque.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Item de estoque de ingrediente. `precisa_repor` é calculado pelo backend;
// o dashboard também compara quantidade com o mínimo e alerta se QUALQUER
// um dos dois sinais disparar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstoqueIngrediente {
    pub id_ingrediente: i64,

    #[serde(alias = "nome")]
    pub nome_ingrediente: String,

    pub quantidade_estoque: f64,
    pub unidade_medida: String,
    pub estoque_minimo: f64,

    pub custo_medio: Option<f64>,
    pub data_atualizacao: Option<String>,

    #[serde(default)]
    pub precisa_repor: bool,
}
