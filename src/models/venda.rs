// src/models/venda.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- ENUMS ---

// Valores gravados pelo backend em formaPagamento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormaPagamento {
    Dinheiro,
    Cartao,
    Pix,
    Fiado,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusPagamento {
    Pendente,
    Pago,
    // Vendas antigas carregam "fiado" também como status
    Fiado,
}

impl StatusPagamento {
    /// "pendente" e "fiado" contam como valor em aberto.
    pub fn em_aberto(&self) -> bool {
        matches!(self, StatusPagamento::Pendente | StatusPagamento::Fiado)
    }
}

// --- VENDA ---

// A venda como o backend devolve. `total` pode vir ausente em registros
// antigos; os agregadores tratam ausência como zero.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Venda {
    pub id_venda: i64,

    pub id_cliente: Option<i64>,
    pub nome_cliente: Option<String>,

    pub id_produto: Option<i64>,
    pub nome_produto: Option<String>,

    // Peso em kg
    #[serde(default)]
    pub peso_vendido: f64,

    // Registros antigos usam "preco" em vez de "precoKg"
    #[serde(alias = "preco")]
    pub preco_kg: Option<f64>,

    pub total: Option<f64>,

    pub forma_pagamento: FormaPagamento,
    pub status_pagamento: StatusPagamento,

    // Data em formato livre; passa pelo normalizador antes de qualquer conta
    pub data_venda: Option<String>,
    pub data_vencimento: Option<String>,
}
