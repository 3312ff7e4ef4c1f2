// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Serviços ---
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,

    #[schema(example = "Esmaltação em Gel")]
    pub name: String,

    #[schema(example = 90)]
    pub duration_minutes: u32,

    // Fração sobre o custo do produto: 0.9 = 90% de markup.
    #[schema(example = "0.867")]
    pub desired_margin: Decimal,

    // Preço fechado definido pela dona. Quando presente, ignora a margem.
    #[schema(example = "80.00")]
    pub manual_price: Option<Decimal>,
}

// --- Composição (ficha técnica do serviço) ---
// Liga um serviço a um insumo com o consumo médio por atendimento.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceComposition {
    pub id: Uuid,
    pub service_id: Uuid,
    pub supply_id: Uuid,

    // Na unidade de medida do insumo (ex.: 0.6 g de gel por aplicação).
    #[schema(example = "0.6")]
    pub consumption_per_service: Decimal,
}
