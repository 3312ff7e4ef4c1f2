// src/services/costs_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::costs::{CostKind, FixedAsset, OperationalCost},
    store::CostRepository,
};

#[derive(Clone)]
pub struct CostsService {
    costs: CostRepository,
}

impl CostsService {
    pub fn new(costs: CostRepository) -> Self {
        Self { costs }
    }

    // ---
    // Custos operacionais
    // ---

    pub fn list_costs(&self) -> Vec<OperationalCost> {
        self.costs.list_costs()
    }

    pub fn create_cost(
        &self,
        description: String,
        kind: CostKind,
        monthly_value: Decimal,
    ) -> OperationalCost {
        self.costs.add_cost(OperationalCost {
            id: Uuid::new_v4(),
            description,
            kind,
            monthly_value,
            registered_at: Utc::now().date_naive(),
        })
    }

    pub fn update_cost(
        &self,
        id: Uuid,
        description: String,
        kind: CostKind,
        monthly_value: Decimal,
    ) -> Result<OperationalCost, AppError> {
        // A data de registro original é preservada.
        let registered_at = self
            .costs
            .list_costs()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.registered_at)
            .ok_or(AppError::CostNotFound)?;
        self.costs.update_cost(OperationalCost {
            id,
            description,
            kind,
            monthly_value,
            registered_at,
        })
    }

    pub fn delete_cost(&self, id: Uuid) -> Result<(), AppError> {
        self.costs.delete_cost(id)
    }

    // ---
    // Ativos fixos
    // ---

    pub fn list_assets(&self) -> Vec<FixedAsset> {
        self.costs.list_assets()
    }

    pub fn create_asset(
        &self,
        name: String,
        acquisition_cost: Decimal,
        useful_life_hours: Decimal,
        related_services: Vec<Uuid>,
    ) -> FixedAsset {
        self.costs.add_asset(FixedAsset {
            id: Uuid::new_v4(),
            name,
            acquisition_cost,
            useful_life_hours,
            related_services,
        })
    }

    pub fn update_asset(
        &self,
        id: Uuid,
        name: String,
        acquisition_cost: Decimal,
        useful_life_hours: Decimal,
        related_services: Vec<Uuid>,
    ) -> Result<FixedAsset, AppError> {
        self.costs.update_asset(FixedAsset {
            id,
            name,
            acquisition_cost,
            useful_life_hours,
            related_services,
        })
    }

    pub fn delete_asset(&self, id: Uuid) -> Result<(), AppError> {
        self.costs.delete_asset(id)
    }
}
