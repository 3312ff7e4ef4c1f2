// src/models/sales.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Pix,
    Credito,
    Debito,
    Dinheiro,
}

// --- Venda (registro do caixa) ---
// Registrar uma venda baixa o estoque dos insumos da composição do
// serviço; apagar a venda devolve exatamente o mesmo saldo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,

    pub sold_at: DateTime<Utc>,

    pub client_id: Uuid,
    pub service_id: Uuid,

    #[schema(example = 1)]
    pub quantity: u32,

    // Valor efetivamente cobrado (pode diferir do preço sugerido).
    #[schema(example = "60.00")]
    pub amount: Decimal,

    pub payment_method: PaymentMethod,
}

// --- Agenda ---
// Vendas agrupadas por dia, do dia mais recente para o mais antigo.

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEntry {
    pub sale_id: Uuid,

    #[schema(example = "Ana Silva")]
    pub client_name: String,

    #[schema(example = "Esmaltação em Gel")]
    pub service_name: String,

    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDay {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub entries: Vec<AgendaEntry>,
}
