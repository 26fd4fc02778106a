// src/services/dashboard_service.rs

use chrono::{Datelike, Local, NaiveDateTime};
use indexmap::IndexMap;

use crate::{
    api::{ApiClient, FetchError},
    models::{
        cliente::Cliente,
        dashboard::{
            ClienteInadimplente, ProdutoMaisVendido, ResumoDashboard, ResumoInadimplencia,
        },
        estoque::EstoqueIngrediente,
        venda::Venda,
    },
    services::datas::normalizar_data,
};

const PRODUTO_SEM_NOME: &str = "Produto não informado";
const CLIENTE_SEM_NOME: &str = "Cliente não identificado";

// Quantos itens cada ranking do painel exibe
const LIMITE_PRODUTOS: usize = 3;
const LIMITE_INADIMPLENTES: usize = 4;

#[derive(Clone)]
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Monta o resumo do painel a partir das três listas do backend.
    ///
    /// As três buscas partem juntas e cada falha é isolada: uma fonte
    /// indisponível vira zeros/listas vazias sem derrubar o resto.
    /// Por isso o retorno não é `Result` — o resumo sempre sai.
    pub async fn montar_resumo(&self) -> ResumoDashboard {
        let (vendas, clientes, estoque) = tokio::join!(
            self.api.get::<Vec<Venda>>("/vendas"),
            self.api.get::<Vec<Cliente>>("/clientes"),
            self.api.get::<Vec<EstoqueIngrediente>>("/estoque-ingredientes"),
        );

        let vendas = descartar_falha("vendas", vendas);
        let clientes = descartar_falha("clientes", clientes);
        let estoque = descartar_falha("estoque-ingredientes", estoque);

        let agora = Local::now().naive_local();
        montar_resumo_com(
            vendas.as_deref(),
            clientes.as_deref(),
            estoque.as_deref(),
            agora,
        )
    }
}

fn descartar_falha<T>(origem: &str, resultado: Result<T, FetchError>) -> Option<T> {
    match resultado {
        Ok(dados) => Some(dados),
        Err(erro) => {
            tracing::warn!("Falha ao buscar {origem} para o dashboard: {erro}");
            None
        }
    }
}

/// Composição pura do resumo; `None` marca uma fonte indisponível.
pub fn montar_resumo_com(
    vendas: Option<&[Venda]>,
    clientes: Option<&[Cliente]>,
    estoque: Option<&[EstoqueIngrediente]>,
    agora: NaiveDateTime,
) -> ResumoDashboard {
    let vendas = vendas.unwrap_or(&[]);

    ResumoDashboard {
        vendas_hoje: vendas_do_dia(vendas, agora),
        vendas_mes: vendas_do_mes(vendas, agora),
        total_clientes: clientes.map_or(0, |lista| lista.len() as u64),
        alertas_estoque: alertas_de_estoque(estoque.unwrap_or(&[])),
        produtos_mais_vendidos: produtos_mais_vendidos(vendas, LIMITE_PRODUTOS),
        inadimplencia: top_clientes_inadimplentes(vendas, LIMITE_INADIMPLENTES),
    }
}

/// Soma de `total` das vendas do mesmo dia de `agora`; a hora é ignorada.
/// Vendas sem data (ou com data que não normaliza) ficam de fora.
pub fn vendas_do_dia(vendas: &[Venda], agora: NaiveDateTime) -> f64 {
    let hoje = agora.date();

    vendas
        .iter()
        .filter(|venda| {
            venda
                .data_venda
                .as_deref()
                .and_then(normalizar_data)
                .is_some_and(|data| data.date() == hoje)
        })
        .map(|venda| venda.total.unwrap_or(0.0))
        .sum()
}

/// Soma de `total` das vendas do mesmo mês E ano de `agora`.
pub fn vendas_do_mes(vendas: &[Venda], agora: NaiveDateTime) -> f64 {
    vendas
        .iter()
        .filter(|venda| {
            venda
                .data_venda
                .as_deref()
                .and_then(normalizar_data)
                .is_some_and(|data| data.month() == agora.month() && data.year() == agora.year())
        })
        .map(|venda| venda.total.unwrap_or(0.0))
        .sum()
}

/// Ranking por número de vendas de cada produto. Empates mantêm a ordem em
/// que cada produto apareceu na lista (sort estável, sem critério
/// secundário); `posicao` é só rótulo de exibição.
pub fn produtos_mais_vendidos(vendas: &[Venda], limite: usize) -> Vec<ProdutoMaisVendido> {
    let mut contagem: IndexMap<&str, u64> = IndexMap::new();
    for venda in vendas {
        let nome = venda.nome_produto.as_deref().unwrap_or(PRODUTO_SEM_NOME);
        *contagem.entry(nome).or_insert(0) += 1;
    }

    let mut ranking: Vec<(&str, u64)> = contagem.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1));

    ranking
        .into_iter()
        .take(limite)
        .enumerate()
        .map(|(indice, (nome, quantidade))| ProdutoMaisVendido {
            nome: nome.to_string(),
            quantidade,
            posicao: indice as u32 + 1,
        })
        .collect()
}

/// Clientes com vendas em aberto, do maior para o menor devedor.
/// `total_pendencias` e `vendas_pendentes` cobrem TODAS as vendas em
/// aberto, não apenas os clientes que cabem no ranking.
pub fn top_clientes_inadimplentes(vendas: &[Venda], limite: usize) -> ResumoInadimplencia {
    let pendentes: Vec<&Venda> = vendas
        .iter()
        .filter(|venda| venda.status_pagamento.em_aberto())
        .collect();

    let total_pendencias: f64 = pendentes.iter().map(|v| v.total.unwrap_or(0.0)).sum();

    // Agrupa por id do cliente; vendas sem cliente caem num balde único
    let mut por_cliente: IndexMap<Option<i64>, ClienteInadimplente> = IndexMap::new();
    for venda in &pendentes {
        let entrada = por_cliente
            .entry(venda.id_cliente)
            .or_insert_with(|| ClienteInadimplente {
                nome: venda
                    .nome_cliente
                    .clone()
                    .unwrap_or_else(|| CLIENTE_SEM_NOME.to_string()),
                total: 0.0,
                quantidade: 0,
            });
        entrada.total += venda.total.unwrap_or(0.0);
        entrada.quantidade += 1;
    }

    let mut ranking: Vec<ClienteInadimplente> = por_cliente.into_values().collect();
    ranking.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranking.truncate(limite);

    ResumoInadimplencia {
        total_pendencias,
        vendas_pendentes: pendentes.len() as u64,
        top_clientes: ranking,
    }
}

/// Conta ingredientes pedindo reposição: flag do backend OU quantidade no
/// limite mínimo. Os dois sinais valem; nenhum é fonte única de verdade.
pub fn alertas_de_estoque(estoque: &[EstoqueIngrediente]) -> u64 {
    estoque
        .iter()
        .filter(|item| item.precisa_repor || item.quantidade_estoque <= item.estoque_minimo)
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::venda::{FormaPagamento, StatusPagamento};
    use chrono::NaiveDate;

    fn agora() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn venda(total: Option<f64>, data: Option<&str>) -> Venda {
        Venda {
            id_venda: 0,
            id_cliente: Some(1),
            nome_cliente: Some("Ana".to_string()),
            id_produto: Some(1),
            nome_produto: Some("Pão Francês".to_string()),
            peso_vendido: 1.0,
            preco_kg: Some(10.0),
            total,
            forma_pagamento: FormaPagamento::Dinheiro,
            status_pagamento: StatusPagamento::Pago,
            data_venda: data.map(str::to_string),
            data_vencimento: None,
        }
    }

    fn venda_pendente(
        id_cliente: Option<i64>,
        nome: Option<&str>,
        total: Option<f64>,
        status: StatusPagamento,
    ) -> Venda {
        Venda {
            id_cliente,
            nome_cliente: nome.map(str::to_string),
            forma_pagamento: FormaPagamento::Fiado,
            status_pagamento: status,
            ..venda(total, Some("2024-03-10"))
        }
    }

    fn ingrediente(quantidade: f64, minimo: f64, precisa_repor: bool) -> EstoqueIngrediente {
        EstoqueIngrediente {
            id_ingrediente: 0,
            nome_ingrediente: "Farinha de Trigo".to_string(),
            quantidade_estoque: quantidade,
            unidade_medida: "kg".to_string(),
            estoque_minimo: minimo,
            custo_medio: Some(4.5),
            data_atualizacao: None,
            precisa_repor,
        }
    }

    // --- vendas do dia / do mês ---

    #[test]
    fn soma_apenas_as_vendas_do_dia() {
        let vendas = vec![
            venda(Some(10.0), Some("2024-03-15")),
            venda(Some(20.0), Some("15/03/2024 08:00:00")),
            venda(Some(5.0), Some("2024-02-10")),
        ];

        assert_eq!(vendas_do_dia(&vendas, agora()), 30.0);
        assert_eq!(vendas_do_mes(&vendas, agora()), 30.0);
    }

    #[test]
    fn total_ausente_conta_como_zero() {
        let vendas = vec![
            venda(None, Some("2024-03-15")),
            venda(Some(12.5), Some("2024-03-15")),
        ];

        assert_eq!(vendas_do_dia(&vendas, agora()), 12.5);
    }

    #[test]
    fn ignora_vendas_sem_data_ou_com_data_invalida() {
        let vendas = vec![
            venda(Some(10.0), None),
            venda(Some(10.0), Some("not-a-date")),
            venda(Some(7.0), Some("2024-03-15T09:12:00")),
        ];

        assert_eq!(vendas_do_dia(&vendas, agora()), 7.0);
        assert_eq!(vendas_do_mes(&vendas, agora()), 7.0);
    }

    #[test]
    fn mes_seguinte_fica_fora_do_total_mensal() {
        // Dia 1º do mês seguinte não pode entrar
        let vendas = vec![
            venda(Some(10.0), Some("2024-03-31")),
            venda(Some(99.0), Some("2024-04-01")),
            venda(Some(50.0), Some("2023-03-15")), // mesmo mês, ano errado
        ];

        assert_eq!(vendas_do_mes(&vendas, agora()), 10.0);
    }

    #[test]
    fn lista_vazia_soma_zero() {
        assert_eq!(vendas_do_dia(&[], agora()), 0.0);
        assert_eq!(vendas_do_mes(&[], agora()), 0.0);
    }

    // --- ranking de produtos ---

    #[test]
    fn ranking_ordena_por_contagem_e_limita() {
        let mut vendas = Vec::new();
        for nome in ["Sonho", "Pão Francês", "Pão Francês", "Bolo", "Bolo", "Bolo"] {
            let mut v = venda(Some(1.0), Some("2024-03-15"));
            v.nome_produto = Some(nome.to_string());
            vendas.push(v);
        }
        let mut v = venda(Some(1.0), Some("2024-03-15"));
        v.nome_produto = Some("Torta".to_string());
        vendas.push(v);

        let ranking = produtos_mais_vendidos(&vendas, 3);

        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].nome, "Bolo");
        assert_eq!(ranking[0].quantidade, 3);
        assert_eq!(ranking[0].posicao, 1);
        assert_eq!(ranking[1].nome, "Pão Francês");
        assert_eq!(ranking[2].posicao, 3);

        let total: u64 = ranking.iter().map(|p| p.quantidade).sum();
        assert!(total <= vendas.len() as u64);
    }

    #[test]
    fn empate_mantem_a_ordem_de_chegada() {
        let mut vendas = Vec::new();
        for nome in ["Sonho", "Bolo", "Sonho", "Bolo"] {
            let mut v = venda(Some(1.0), Some("2024-03-15"));
            v.nome_produto = Some(nome.to_string());
            vendas.push(v);
        }

        let ranking = produtos_mais_vendidos(&vendas, 3);

        // "Sonho" apareceu primeiro, então desempata na frente
        assert_eq!(ranking[0].nome, "Sonho");
        assert_eq!(ranking[1].nome, "Bolo");
    }

    #[test]
    fn produto_sem_nome_ganha_rotulo_padrao() {
        let mut v = venda(Some(1.0), Some("2024-03-15"));
        v.nome_produto = None;

        let ranking = produtos_mais_vendidos(&[v], 3);

        assert_eq!(ranking[0].nome, "Produto não informado");
    }

    // --- inadimplência ---

    #[test]
    fn acumula_pendente_e_fiado_do_mesmo_cliente() {
        let vendas = vec![
            venda_pendente(Some(1), Some("Ana"), Some(15.0), StatusPagamento::Pendente),
            venda_pendente(Some(1), Some("Ana"), Some(5.0), StatusPagamento::Fiado),
        ];

        let resumo = top_clientes_inadimplentes(&vendas, 4);

        assert_eq!(resumo.top_clientes.len(), 1);
        assert_eq!(resumo.top_clientes[0].nome, "Ana");
        assert_eq!(resumo.top_clientes[0].total, 20.0);
        assert_eq!(resumo.top_clientes[0].quantidade, 2);
        assert_eq!(resumo.total_pendencias, 20.0);
        assert_eq!(resumo.vendas_pendentes, 2);
    }

    #[test]
    fn total_geral_cobre_clientes_fora_do_ranking() {
        let mut vendas = Vec::new();
        for id in 1..=6 {
            vendas.push(venda_pendente(
                Some(id),
                Some("Cliente"),
                Some(id as f64 * 10.0),
                StatusPagamento::Pendente,
            ));
        }

        let resumo = top_clientes_inadimplentes(&vendas, 4);

        assert_eq!(resumo.top_clientes.len(), 4);
        assert_eq!(resumo.top_clientes[0].total, 60.0);
        // 10 + 20 + ... + 60, incluindo os dois que não aparecem
        assert_eq!(resumo.total_pendencias, 210.0);
        assert_eq!(resumo.vendas_pendentes, 6);
    }

    #[test]
    fn venda_paga_nao_gera_inadimplencia() {
        let vendas = vec![venda(Some(100.0), Some("2024-03-15"))];

        let resumo = top_clientes_inadimplentes(&vendas, 4);

        assert!(resumo.top_clientes.is_empty());
        assert_eq!(resumo.total_pendencias, 0.0);
        assert_eq!(resumo.vendas_pendentes, 0);
    }

    #[test]
    fn vendas_sem_cliente_caem_no_mesmo_balde() {
        let vendas = vec![
            venda_pendente(None, None, Some(5.0), StatusPagamento::Pendente),
            venda_pendente(None, None, Some(7.0), StatusPagamento::Fiado),
        ];

        let resumo = top_clientes_inadimplentes(&vendas, 4);

        assert_eq!(resumo.top_clientes.len(), 1);
        assert_eq!(resumo.top_clientes[0].nome, "Cliente não identificado");
        assert_eq!(resumo.top_clientes[0].total, 12.0);
    }

    // --- alertas de estoque ---

    #[test]
    fn alerta_por_limite_ou_por_flag() {
        let estoque = vec![
            ingrediente(2.0, 5.0, false),  // dispara pelo limite
            ingrediente(10.0, 5.0, true),  // dispara pela flag
            ingrediente(10.0, 5.0, false), // não dispara
        ];

        assert_eq!(alertas_de_estoque(&estoque), 2);
    }

    #[test]
    fn quantidade_igual_ao_minimo_tambem_alerta() {
        let estoque = vec![ingrediente(5.0, 5.0, false)];

        assert_eq!(alertas_de_estoque(&estoque), 1);
    }

    // --- composição ---

    #[test]
    fn fontes_indisponiveis_viram_resumo_zerado() {
        let resumo = montar_resumo_com(None, None, None, agora());

        assert_eq!(resumo.vendas_hoje, 0.0);
        assert_eq!(resumo.vendas_mes, 0.0);
        assert_eq!(resumo.total_clientes, 0);
        assert_eq!(resumo.alertas_estoque, 0);
        assert!(resumo.produtos_mais_vendidos.is_empty());
        assert!(resumo.inadimplencia.top_clientes.is_empty());
        assert_eq!(resumo.inadimplencia.total_pendencias, 0.0);
    }

    #[test]
    fn falha_em_uma_fonte_nao_afeta_as_outras() {
        let estoque = vec![ingrediente(1.0, 5.0, false)];

        let resumo = montar_resumo_com(None, None, Some(&estoque), agora());

        assert_eq!(resumo.vendas_hoje, 0.0);
        assert_eq!(resumo.alertas_estoque, 1);
    }
}
