// src/models/funcionario.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Funcionario {
    pub id_funcionario: i64,
    pub nome: String,
    pub email: Option<String>,
    pub cargo: String,

    // Registros antigos usam "salario"
    #[serde(alias = "salario")]
    pub salario_base: f64,

    pub data_admissao: Option<String>,

    // Funcionário nunca é excluído, apenas desativado
    pub ativo: bool,
}
