pub mod cftv;
pub mod clientes;
pub mod dashboard;
pub mod estoque;
pub mod funcionarios;
pub mod produtos;
pub mod vendas;

use serde::Serialize;
use serde_json::{json, Value};

// O backend às vezes confirma uma escrita com 204/corpo em branco.
// Nesses casos devolvemos uma confirmação genérica no lugar do registro.
pub(crate) fn registro_ou_confirmacao<T: Serialize>(registro: Option<T>) -> Value {
    match registro {
        Some(registro) => json!(registro),
        None => json!({
            "success": true,
            "message": "Operação realizada com sucesso"
        }),
    }
}
