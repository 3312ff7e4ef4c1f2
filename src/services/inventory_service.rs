// src/services/inventory_service.rs

use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::inventory::{StockAlert, StockAlertKind, Supply, UnitOfMeasure},
    store::SupplyRepository,
};

// Validade a menos de 30 dias entra no painel de alertas.
const EXPIRY_WARNING_DAYS: u64 = 30;

#[derive(Clone)]
pub struct InventoryService {
    supplies: SupplyRepository,
}

pub struct SupplyInput {
    pub name: String,
    pub brand: String,
    pub unit: UnitOfMeasure,
    pub package_size: Decimal,
    pub package_cost: Decimal,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub supplier: String,
    pub current_stock: Decimal,
    pub min_stock_alert: Decimal,
}

impl InventoryService {
    pub fn new(supplies: SupplyRepository) -> Self {
        Self { supplies }
    }

    pub fn list_supplies(&self) -> Vec<Supply> {
        self.supplies.list()
    }

    pub fn create_supply(&self, input: SupplyInput) -> Supply {
        let supply = Supply {
            id: Uuid::new_v4(),
            name: input.name,
            brand: input.brand,
            unit: input.unit,
            package_size: input.package_size,
            package_cost: input.package_cost,
            purchase_date: input.purchase_date,
            expiry_date: input.expiry_date,
            supplier: input.supplier,
            current_stock: input.current_stock,
            min_stock_alert: input.min_stock_alert,
        };
        tracing::info!("Insumo cadastrado: {}", supply.name);
        self.supplies.add(supply)
    }

    pub fn update_supply(&self, id: Uuid, input: SupplyInput) -> Result<Supply, AppError> {
        self.supplies.update(Supply {
            id,
            name: input.name,
            brand: input.brand,
            unit: input.unit,
            package_size: input.package_size,
            package_cost: input.package_cost,
            purchase_date: input.purchase_date,
            expiry_date: input.expiry_date,
            supplier: input.supplier,
            current_stock: input.current_stock,
            min_stock_alert: input.min_stock_alert,
        })
    }

    pub fn delete_supply(&self, id: Uuid) -> Result<(), AppError> {
        self.supplies.delete(id)
    }

    /// Alertas para o painel: estoque no limite e validade próxima.
    /// Um insumo pode aparecer duas vezes, uma por motivo.
    pub fn alerts(&self) -> Vec<StockAlert> {
        self.alerts_at(Utc::now().date_naive())
    }

    pub fn alerts_at(&self, today: NaiveDate) -> Vec<StockAlert> {
        let expiry_limit = today
            .checked_add_days(Days::new(EXPIRY_WARNING_DAYS))
            .unwrap_or(NaiveDate::MAX);

        let mut alerts = Vec::new();
        for supply in self.supplies.list() {
            if supply.current_stock <= supply.min_stock_alert {
                alerts.push(alert(&supply, StockAlertKind::LowStock));
            }
            if supply.expiry_date <= expiry_limit {
                alerts.push(alert(&supply, StockAlertKind::ExpiringSoon));
            }
        }
        alerts
    }
}

fn alert(supply: &Supply, kind: StockAlertKind) -> StockAlert {
    StockAlert {
        supply_id: supply.id,
        name: supply.name.clone(),
        kind,
        current_stock: supply.current_stock,
        min_stock_alert: supply.min_stock_alert,
        expiry_date: supply.expiry_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(stock: &str, min_alert: &str, expiry: NaiveDate) -> SupplyInput {
        SupplyInput {
            name: "Gel".to_string(),
            brand: "Vòlia".to_string(),
            unit: UnitOfMeasure::G,
            package_size: dec("24"),
            package_cost: dec("67.00"),
            purchase_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            expiry_date: expiry,
            supplier: "Cosméticos Web".to_string(),
            current_stock: dec(stock),
            min_stock_alert: dec(min_alert),
        }
    }

    #[test]
    fn alerta_de_estoque_baixo_e_validade() {
        let service = InventoryService::new(SupplyRepository::new());
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        // Estoque ok, validade longe: sem alerta.
        service.create_supply(input("5", "1", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        // Estoque no limite.
        let low = service.create_supply(input(
            "1",
            "1",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ));
        // Vence em 10 dias.
        let expiring = service.create_supply(input(
            "5",
            "1",
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
        ));

        let alerts = service.alerts_at(today);
        assert_eq!(alerts.len(), 2);
        assert!(alerts
            .iter()
            .any(|a| a.supply_id == low.id && a.kind == StockAlertKind::LowStock));
        assert!(alerts
            .iter()
            .any(|a| a.supply_id == expiring.id && a.kind == StockAlertKind::ExpiringSoon));
    }
}
