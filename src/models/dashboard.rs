// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// Estruturas derivadas do dashboard. São montadas do zero a cada passada
// de agregação e nunca voltam para o backend.

// 1. Resumo geral (os cards do topo)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoDashboard {
    pub vendas_hoje: f64,     // Total vendido no dia
    pub vendas_mes: f64,      // Total vendido no mês corrente
    pub total_clientes: u64,  // Clientes cadastrados
    pub alertas_estoque: u64, // Ingredientes pedindo reposição
    pub produtos_mais_vendidos: Vec<ProdutoMaisVendido>,
    pub inadimplencia: ResumoInadimplencia,
}

// 2. Ranking de produtos (Top 3)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoMaisVendido {
    pub nome: String,
    // Número de vendas em que o produto aparece
    pub quantidade: u64,
    // Posição no ranking (1º, 2º, ...); valor puramente de exibição
    pub posicao: u32,
}

// 3. Inadimplência (Top 4 + totais gerais)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoInadimplencia {
    // Soma de TODAS as vendas em aberto, não só as dos clientes exibidos
    pub total_pendencias: f64,
    pub vendas_pendentes: u64,
    pub top_clientes: Vec<ClienteInadimplente>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteInadimplente {
    pub nome: String,
    pub total: f64,
    pub quantidade: u64,
}
