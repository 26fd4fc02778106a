// src/services/vendas_service.rs

use serde::Serialize;

use crate::{api::ApiClient, common::error::AppError, models::venda::Venda};

#[derive(Clone)]
pub struct VendasService {
    api: ApiClient,
}

impl VendasService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self) -> Result<Vec<Venda>, AppError> {
        Ok(self.api.get("/vendas").await?)
    }

    pub async fn buscar(&self, id: i64) -> Result<Venda, AppError> {
        Ok(self.api.get(&format!("/vendas/{id}")).await?)
    }

    pub async fn criar<B: Serialize>(&self, dados: &B) -> Result<Option<Venda>, AppError> {
        Ok(self.api.post("/vendas", dados).await?)
    }

    pub async fn atualizar<B: Serialize>(
        &self,
        id: i64,
        dados: &B,
    ) -> Result<Option<Venda>, AppError> {
        Ok(self.api.put(&format!("/vendas/{id}"), dados).await?)
    }

    // Cancelar uma venda é a exclusão do registro no backend.
    pub async fn cancelar(&self, id: i64) -> Result<(), AppError> {
        Ok(self.api.delete(&format!("/vendas/{id}")).await?)
    }
}
