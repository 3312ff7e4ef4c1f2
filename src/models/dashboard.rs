// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// 1. Resumo (os cards do topo)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: Decimal,     // Faturamento acumulado
    pub services_rendered: u64,     // Quantidade de vendas registradas
    pub average_ticket: Decimal,    // Faturamento / vendas
    pub break_even_revenue: Decimal, // Ponto de equilíbrio financeiro
}

// 2. Gráfico de faturamento por mês
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenueEntry {
    #[schema(example = "2024-03")]
    pub month: String,
    pub total: Decimal,
}

// 3. Ranking de serviços por faturamento
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopServiceEntry {
    pub service_id: Uuid,
    pub name: String,
    pub total_revenue: Decimal,
}

// 4. Rentabilidade (margem de contribuição por hora, decrescente)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProfitabilityEntry {
    pub service_id: Uuid,
    pub name: String,
    pub contribution_margin_per_hour: Decimal,
}
