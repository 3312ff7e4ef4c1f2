// src/models/crm.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Cliente ---
// Cadastro simples: vendas que apontam para um cliente apagado
// continuam existindo e exibem "Desconhecido" na consulta.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    #[schema(example = "Ana Silva")]
    pub name: String,

    #[schema(example = "11987654321")]
    pub phone: Option<String>,
}
