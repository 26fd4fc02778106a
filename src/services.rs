pub mod datas;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod clientes_service;
pub use clientes_service::ClientesService;
pub mod produtos_service;
pub use produtos_service::ProdutosService;
pub mod estoque_service;
pub use estoque_service::EstoqueService;
pub mod vendas_service;
pub use vendas_service::VendasService;
pub mod funcionarios_service;
pub use funcionarios_service::FuncionariosService;
