// src/config.rs

use std::{env, time::Duration};

use crate::{
    api::ApiClient,
    services::{
        ClientesService, DashboardService, EstoqueService, FuncionariosService, ProdutosService,
        VendasService,
    },
};

// Endereço da API da padaria quando nada é configurado
const API_BASE_URL_PADRAO: &str = "http://localhost:8080/api";

// Prazo de cada requisição ao backend, em segundos
const TIMEOUT_PADRAO_SEGUNDOS: u64 = 10;

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub clientes_service: ClientesService,
    pub produtos_service: ProdutosService,
    pub estoque_service: EstoqueService,
    pub vendas_service: VendasService,
    pub funcionarios_service: FuncionariosService,
}

impl AppState {
    // Carrega as configurações e monta o estado da aplicação
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| API_BASE_URL_PADRAO.to_string());
        let timeout_segundos = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|valor| valor.parse().ok())
            .unwrap_or(TIMEOUT_PADRAO_SEGUNDOS);

        let api_client = ApiClient::new(&api_base_url, Duration::from_secs(timeout_segundos))?;
        tracing::info!("✅ Cliente configurado para a API em {}", api_base_url);

        // --- Monta o gráfico de dependências ---
        Ok(Self {
            dashboard_service: DashboardService::new(api_client.clone()),
            clientes_service: ClientesService::new(api_client.clone()),
            produtos_service: ProdutosService::new(api_client.clone()),
            estoque_service: EstoqueService::new(api_client.clone()),
            vendas_service: VendasService::new(api_client.clone()),
            funcionarios_service: FuncionariosService::new(api_client),
        })
    }
}
