// src/services/funcionarios_service.rs

use serde::Serialize;

use crate::{api::ApiClient, common::error::AppError, models::funcionario::Funcionario};

// Funcionários não têm exclusão: a desativação é um update de `ativo`.
#[derive(Clone)]
pub struct FuncionariosService {
    api: ApiClient,
}

impl FuncionariosService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn listar(&self) -> Result<Vec<Funcionario>, AppError> {
        Ok(self.api.get("/funcionarios").await?)
    }

    pub async fn buscar(&self, id: i64) -> Result<Funcionario, AppError> {
        Ok(self.api.get(&format!("/funcionarios/{id}")).await?)
    }

    pub async fn criar<B: Serialize>(&self, dados: &B) -> Result<Option<Funcionario>, AppError> {
        Ok(self.api.post("/funcionarios", dados).await?)
    }

    pub async fn atualizar<B: Serialize>(
        &self,
        id: i64,
        dados: &B,
    ) -> Result<Option<Funcionario>, AppError> {
        Ok(self.api.put(&format!("/funcionarios/{id}"), dados).await?)
    }
}
