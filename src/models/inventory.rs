// src/models/inventory.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Unidades de Medida ---
// As três unidades que o estúdio usa na prática (unidade, grama, mililitro).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    Un,
    G,
    Ml,
}

// --- Insumos ---
// O estoque é contado em embalagens (pode ser fracionado: meio pote de gel).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub id: Uuid,

    #[schema(example = "Gel Construtor Classic Pink")]
    pub name: String,

    #[schema(example = "Vòlia")]
    pub brand: String,

    pub unit: UnitOfMeasure,

    // Quantidade por embalagem, na unidade de medida do insumo.
    #[schema(example = "24")]
    pub package_size: Decimal,

    #[schema(example = "67.00")]
    pub package_cost: Decimal,

    #[schema(value_type = String, format = Date, example = "2023-10-01")]
    pub purchase_date: NaiveDate,

    #[schema(value_type = String, format = Date, example = "2024-10-01")]
    pub expiry_date: NaiveDate,

    #[schema(example = "Cosméticos Web")]
    pub supplier: String,

    #[schema(example = "2")]
    pub current_stock: Decimal,

    #[schema(example = "0.5")]
    pub min_stock_alert: Decimal,
}

impl Supply {
    /// Custo por unidade de medida. Embalagem sem tamanho contribui zero.
    pub fn unit_cost(&self) -> Decimal {
        if self.package_size.is_zero() {
            Decimal::ZERO
        } else {
            self.package_cost / self.package_size
        }
    }
}

// --- Alertas de Estoque ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockAlertKind {
    LowStock,
    ExpiringSoon,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub supply_id: Uuid,
    pub name: String,
    pub kind: StockAlertKind,
    pub current_stock: Decimal,
    pub min_stock_alert: Decimal,

    #[schema(value_type = String, format = Date)]
    pub expiry_date: NaiveDate,
}
