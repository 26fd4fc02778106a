// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_resumo,

        // --- Clientes ---
        handlers::clientes::listar_clientes,
        handlers::clientes::buscar_cliente,
        handlers::clientes::criar_cliente,
        handlers::clientes::atualizar_cliente,
        handlers::clientes::deletar_cliente,

        // --- Produtos ---
        handlers::produtos::listar_produtos,
        handlers::produtos::buscar_produto,
        handlers::produtos::criar_produto,
        handlers::produtos::atualizar_produto,
        handlers::produtos::deletar_produto,

        // --- Estoque ---
        handlers::estoque::listar_estoque,
        handlers::estoque::buscar_ingrediente,
        handlers::estoque::criar_ingrediente,
        handlers::estoque::atualizar_ingrediente,
        handlers::estoque::deletar_ingrediente,

        // --- Vendas ---
        handlers::vendas::listar_vendas,
        handlers::vendas::buscar_venda,
        handlers::vendas::criar_venda,
        handlers::vendas::atualizar_venda,
        handlers::vendas::cancelar_venda,

        // --- Funcionários ---
        handlers::funcionarios::listar_funcionarios,
        handlers::funcionarios::buscar_funcionario,
        handlers::funcionarios::criar_funcionario,
        handlers::funcionarios::atualizar_funcionario,

        // --- CFTV ---
        handlers::cftv::listar_cameras,
    ),
    components(
        schemas(
            // --- DASHBOARD ---
            models::dashboard::ResumoDashboard,
            models::dashboard::ProdutoMaisVendido,
            models::dashboard::ResumoInadimplencia,
            models::dashboard::ClienteInadimplente,

            // --- Registros do backend ---
            models::cliente::Cliente,
            models::produto::Produto,
            models::estoque::EstoqueIngrediente,
            models::venda::Venda,
            models::venda::FormaPagamento,
            models::venda::StatusPagamento,
            models::funcionario::Funcionario,

            // --- CFTV ---
            models::cftv::Camera,
            models::cftv::StatusCftv,

            // --- Payloads ---
            handlers::clientes::ClientePayload,
            handlers::produtos::ProdutoPayload,
            handlers::estoque::EstoquePayload,
            handlers::vendas::VendaPayload,
            handlers::funcionarios::FuncionarioPayload,
        )
    ),
    tags(
        (name = "Dashboard", description = "Indicadores do painel gerencial"),
        (name = "Clientes", description = "Cadastro de Clientes"),
        (name = "Produtos", description = "Catálogo de Produtos"),
        (name = "Estoque", description = "Estoque de Ingredientes"),
        (name = "Vendas", description = "Registro de Vendas"),
        (name = "Funcionários", description = "Gestão de Funcionários"),
        (name = "CFTV", description = "Circuito interno de câmeras")
    )
)]
pub struct ApiDoc;
