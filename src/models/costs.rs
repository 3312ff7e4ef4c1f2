// src/models/costs.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostKind {
    Fixed,    // Aluguel, internet, DAS...
    Variable, // Energia, taxas por atendimento...
}

// --- Custo Operacional (valor mensal) ---
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationalCost {
    pub id: Uuid,

    #[schema(example = "Aluguel do Espaço")]
    pub description: String,

    pub kind: CostKind,

    #[schema(example = "800.00")]
    pub monthly_value: Decimal,

    #[schema(value_type = String, format = Date, example = "2023-01-01")]
    pub registered_at: NaiveDate,
}

// --- Ativo Fixo (equipamento amortizado por hora de uso) ---
// A relação com serviços é uma lista de ids embutida, não uma tabela
// de junção: um ativo atende vários serviços e vice-versa.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FixedAsset {
    pub id: Uuid,

    #[schema(example = "Cabine UV/LED")]
    pub name: String,

    #[schema(example = "150.00")]
    pub acquisition_cost: Decimal,

    #[schema(example = "3000")]
    pub useful_life_hours: Decimal,

    pub related_services: Vec<Uuid>,
}
