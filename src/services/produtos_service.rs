// src/services/produtos_service.rs

use serde::Serialize;

use crate::{api::ApiClient, common::error::AppError, models::produto::Produto};

#[derive(Clone)]
pub struct ProdutosService {
    api: ApiClient,
}

impl ProdutosService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self) -> Result<Vec<Produto>, AppError> {
        Ok(self.api.get("/produtos").await?)
    }

    pub async fn buscar(&self, id: i64) -> Result<Produto, AppError> {
        Ok(self.api.get(&format!("/produtos/{id}")).await?)
    }

    pub async fn criar<B: Serialize>(&self, dados: &B) -> Result<Option<Produto>, AppError> {
        Ok(self.api.post("/produtos", dados).await?)
    }

    pub async fn atualizar<B: Serialize>(
        &self,
        id: i64,
        dados: &B,
    ) -> Result<Option<Produto>, AppError> {
        Ok(self.api.put(&format!("/produtos/{id}"), dados).await?)
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        Ok(self.api.delete(&format!("/produtos/{id}")).await?)
    }
}
