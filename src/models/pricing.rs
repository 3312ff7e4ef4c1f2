// src/models/pricing.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Política de Precificação ---
// O histórico do negócio tem duas convenções de markup e duas formas de
// ratear o custo operacional. A escolha é decisão de produto, então fica
// explícita na configuração em vez de escondida no código.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkupConvention {
    // preco = custo do produto * (1 + margem). Convenção padrão.
    MarginOnCost,
    // preco = custo total / (1 - margem); margem como fração do preço final.
    MarginOnPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostAllocation {
    // Taxas horárias separadas para custos fixos e variáveis. Padrão.
    Split,
    // Uma taxa horária única com todos os custos operacionais.
    Pooled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    pub markup: MarkupConvention,
    pub allocation: CostAllocation,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            markup: MarkupConvention::MarginOnCost,
            allocation: CostAllocation::Split,
        }
    }
}

// --- Detalhamento de preço por serviço (derivado, nunca persistido) ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceDetails {
    pub material_cost: Decimal,
    pub amortization_cost: Decimal,

    // Rateio do custo operacional proporcional à duração do serviço.
    pub fixed_cost_share: Decimal,
    pub variable_cost_share: Decimal,

    pub total_cost: Decimal,
    pub suggested_price: Decimal,

    // Margem de contribuição: preço menos os custos "variáveis"
    // (material + amortização + rateio variável). O rateio fixo fica de
    // fora: existe com ou sem atendimento.
    pub contribution_margin: Decimal,
    pub contribution_margin_percent: Decimal,
    pub contribution_margin_per_hour: Decimal,
}

// Entrada da listagem de precificação exposta pela API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicePriceEntry {
    pub service_id: Uuid,
    pub service_name: String,
    pub details: PriceDetails,
}
