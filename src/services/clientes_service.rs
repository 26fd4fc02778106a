// src/services/clientes_service.rs

use serde::Serialize;

use crate::{api::ApiClient, common::error::AppError, models::cliente::Cliente};

// Repasse fino para o recurso /clientes do backend.
#[derive(Clone)]
pub struct ClientesService {
    api: ApiClient,
}

impl ClientesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        Ok(self.api.get("/clientes").await?)
    }

    pub async fn buscar(&self, id: i64) -> Result<Cliente, AppError> {
        Ok(self.api.get(&format!("/clientes/{id}")).await?)
    }

    pub async fn criar<B: Serialize>(&self, dados: &B) -> Result<Option<Cliente>, AppError> {
        Ok(self.api.post("/clientes", dados).await?)
    }

    pub async fn atualizar<B: Serialize>(
        &self,
        id: i64,
        dados: &B,
    ) -> Result<Option<Cliente>, AppError> {
        Ok(self.api.put(&format!("/clientes/{id}"), dados).await?)
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        Ok(self.api.delete(&format!("/clientes/{id}")).await?)
    }
}
