//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use painel_padaria::{config::AppState, docs::ApiDoc, handlers};

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let rotas_dashboard = Router::new().route("/resumo", get(handlers::dashboard::get_resumo));

    let rotas_clientes = Router::new()
        .route(
            "/",
            post(handlers::clientes::criar_cliente).get(handlers::clientes::listar_clientes),
        )
        .route(
            "/{id}",
            get(handlers::clientes::buscar_cliente)
                .put(handlers::clientes::atualizar_cliente)
                .delete(handlers::clientes::deletar_cliente),
        );

    let rotas_produtos = Router::new()
        .route(
            "/",
            post(handlers::produtos::criar_produto).get(handlers::produtos::listar_produtos),
        )
        .route(
            "/{id}",
            get(handlers::produtos::buscar_produto)
                .put(handlers::produtos::atualizar_produto)
                .delete(handlers::produtos::deletar_produto),
        );

    let rotas_estoque = Router::new()
        .route(
            "/",
            post(handlers::estoque::criar_ingrediente).get(handlers::estoque::listar_estoque),
        )
        .route(
            "/{id}",
            get(handlers::estoque::buscar_ingrediente)
                .put(handlers::estoque::atualizar_ingrediente)
                .delete(handlers::estoque::deletar_ingrediente),
        );

    let rotas_vendas = Router::new()
        .route(
            "/",
            post(handlers::vendas::criar_venda).get(handlers::vendas::listar_vendas),
        )
        .route(
            "/{id}",
            get(handlers::vendas::buscar_venda)
                .put(handlers::vendas::atualizar_venda)
                .delete(handlers::vendas::cancelar_venda),
        );

    // Funcionários não têm DELETE: a desativação é feita pelo PUT
    let rotas_funcionarios = Router::new()
        .route(
            "/",
            post(handlers::funcionarios::criar_funcionario)
                .get(handlers::funcionarios::listar_funcionarios),
        )
        .route(
            "/{id}",
            get(handlers::funcionarios::buscar_funcionario)
                .put(handlers::funcionarios::atualizar_funcionario),
        );

    let rotas_cftv = Router::new().route("/cameras", get(handlers::cftv::listar_cameras));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/dashboard", rotas_dashboard)
        .nest("/api/clientes", rotas_clientes)
        .nest("/api/produtos", rotas_produtos)
        .nest("/api/estoque-ingredientes", rotas_estoque)
        .nest("/api/vendas", rotas_vendas)
        .nest("/api/funcionarios", rotas_funcionarios)
        .nest("/api/cftv", rotas_cftv)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr =
        std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
