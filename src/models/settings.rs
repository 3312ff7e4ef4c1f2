// src/models/settings.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// --- Configurações do Estúdio ---
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudioSettings {
    // Horas trabalhadas por mês, base do rateio de custos.
    // Padrão: 160 (40h/semana).
    #[schema(example = "160")]
    pub monthly_labor_hours: Decimal,

    pub updated_at: DateTime<Utc>,
}

// Sugestão de horas calculada a partir das vendas dos últimos 30 dias.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaborHoursEstimate {
    pub estimated_hours: Decimal,

    // Quantas vendas recentes entraram na conta (0 = usou o padrão).
    pub based_on_sales: u64,
}
