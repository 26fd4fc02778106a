// tests/dashboard_flow_test.rs
//
// O resumo do painel de ponta a ponta, com o backend simulado por httpmock:
// as três fontes respondendo, uma fonte caindo e todas caindo.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Local};
use httpmock::prelude::*;
use serde_json::{json, Value};

use painel_padaria::api::ApiClient;
use painel_padaria::services::DashboardService;

fn servico_para(server: &MockServer) -> DashboardService {
    DashboardService::new(ApiClient::new(server.base_url(), Duration::from_secs(2)).unwrap())
}

fn venda_json(id: i64, nome_produto: &str, total: f64, status: &str, data: &str) -> Value {
    json!({
        "idVenda": id,
        "idCliente": 1,
        "nomeCliente": "Ana",
        "idProduto": 1,
        "nomeProduto": nome_produto,
        "pesoVendido": 1.0,
        "precoKg": total,
        "total": total,
        "formaPagamento": "dinheiro",
        "statusPagamento": status,
        "dataVenda": data
    })
}

#[tokio::test]
async fn resumo_agrega_as_tres_fontes() {
    let server = MockServer::start_async().await;

    let hoje = Local::now().format("%Y-%m-%d").to_string();
    let mes_passado = (Local::now() - ChronoDuration::days(40))
        .format("%Y-%m-%d")
        .to_string();

    server
        .mock_async(|when, then| {
            when.method(GET).path("/vendas");
            then.status(200).json_body(json!([
                venda_json(1, "Pão Francês", 10.0, "pago", &hoje),
                venda_json(2, "Pão Francês", 20.0, "pago", &hoje),
                venda_json(3, "Bolo", 5.0, "pendente", &mes_passado),
            ]));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/clientes");
            then.status(200).json_body(json!([
                { "idCliente": 1, "nome": "Ana" },
                { "idCliente": 2, "nome": "Bruno" },
            ]));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/estoque-ingredientes");
            then.status(200).json_body(json!([
                {
                    "idIngrediente": 1,
                    "nomeIngrediente": "Farinha de Trigo",
                    "quantidadeEstoque": 2.0,
                    "unidadeMedida": "kg",
                    "estoqueMinimo": 5.0,
                    "precisaRepor": false
                },
                {
                    "idIngrediente": 2,
                    "nomeIngrediente": "Fermento",
                    "quantidadeEstoque": 10.0,
                    "unidadeMedida": "g",
                    "estoqueMinimo": 5.0,
                    "precisaRepor": true
                },
            ]));
        })
        .await;

    let resumo = servico_para(&server).montar_resumo().await;

    assert_eq!(resumo.vendas_hoje, 30.0);
    assert_eq!(resumo.vendas_mes, 30.0);
    assert_eq!(resumo.total_clientes, 2);
    // Um dispara pelo limite, o outro pela flag
    assert_eq!(resumo.alertas_estoque, 2);

    assert_eq!(resumo.produtos_mais_vendidos[0].nome, "Pão Francês");
    assert_eq!(resumo.produtos_mais_vendidos[0].quantidade, 2);

    assert_eq!(resumo.inadimplencia.total_pendencias, 5.0);
    assert_eq!(resumo.inadimplencia.vendas_pendentes, 1);
    assert_eq!(resumo.inadimplencia.top_clientes[0].nome, "Ana");
}

#[tokio::test]
async fn falha_em_uma_fonte_nao_derruba_as_outras() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/vendas");
            then.status(500);
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/clientes");
            then.status(200)
                .json_body(json!([{ "idCliente": 1, "nome": "Ana" }]));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/estoque-ingredientes");
            then.status(200).json_body(json!([
                {
                    "idIngrediente": 1,
                    "nomeIngrediente": "Farinha de Trigo",
                    "quantidadeEstoque": 1.0,
                    "unidadeMedida": "kg",
                    "estoqueMinimo": 5.0,
                    "precisaRepor": false
                }
            ]));
        })
        .await;

    let resumo = servico_para(&server).montar_resumo().await;

    // Vendas indisponíveis viram zeros
    assert_eq!(resumo.vendas_hoje, 0.0);
    assert_eq!(resumo.vendas_mes, 0.0);
    assert!(resumo.produtos_mais_vendidos.is_empty());

    // As outras fontes seguem normais
    assert_eq!(resumo.total_clientes, 1);
    assert_eq!(resumo.alertas_estoque, 1);
}

#[tokio::test]
async fn todas_as_fontes_fora_do_ar_geram_resumo_zerado() {
    // Nenhuma rota registrada: tudo responde 404
    let server = MockServer::start_async().await;

    let resumo = servico_para(&server).montar_resumo().await;

    assert_eq!(resumo.vendas_hoje, 0.0);
    assert_eq!(resumo.vendas_mes, 0.0);
    assert_eq!(resumo.total_clientes, 0);
    assert_eq!(resumo.alertas_estoque, 0);
    assert!(resumo.produtos_mais_vendidos.is_empty());
    assert!(resumo.inadimplencia.top_clientes.is_empty());
    assert_eq!(resumo.inadimplencia.total_pendencias, 0.0);
    assert_eq!(resumo.inadimplencia.vendas_pendentes, 0);
}
