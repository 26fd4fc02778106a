// src/services/estoque_service.rs

use serde::Serialize;

use crate::{api::ApiClient, common::error::AppError, models::estoque::EstoqueIngrediente};

#[derive(Clone)]
pub struct EstoqueService {
    api: ApiClient,
}

impl EstoqueService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self) -> Result<Vec<EstoqueIngrediente>, AppError> {
        Ok(self.api.get("/estoque-ingredientes").await?)
    }

    pub async fn buscar(&self, id: i64) -> Result<EstoqueIngrediente, AppError> {
        Ok(self.api.get(&format!("/estoque-ingredientes/{id}")).await?)
    }

    pub async fn criar<B: Serialize>(
        &self,
        dados: &B,
    ) -> Result<Option<EstoqueIngrediente>, AppError> {
        Ok(self.api.post("/estoque-ingredientes", dados).await?)
    }

    pub async fn atualizar<B: Serialize>(
        &self,
        id: i64,
        dados: &B,
    ) -> Result<Option<EstoqueIngrediente>, AppError> {
        Ok(self
            .api
            .put(&format!("/estoque-ingredientes/{id}"), dados)
            .await?)
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        Ok(self
            .api
            .delete(&format!("/estoque-ingredientes/{id}"))
            .await?)
    }
}
