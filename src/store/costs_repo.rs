// src/store/costs_repo.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::costs::{FixedAsset, OperationalCost},
};

// Custos operacionais mensais e ativos fixos amortizáveis. Mesmo
// repositório porque ambos só existem para alimentar a precificação.
#[derive(Clone)]
pub struct CostRepository {
    costs: Arc<RwLock<Vec<OperationalCost>>>,
    assets: Arc<RwLock<Vec<FixedAsset>>>,
    version: Arc<AtomicU64>,
}

impl CostRepository {
    pub fn new() -> Self {
        Self {
            costs: Arc::new(RwLock::new(Vec::new())),
            assets: Arc::new(RwLock::new(Vec::new())),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    // ---
    // Custos operacionais
    // ---

    pub fn list_costs(&self) -> Vec<OperationalCost> {
        self.costs.read().clone()
    }

    pub fn add_cost(&self, cost: OperationalCost) -> OperationalCost {
        self.costs.write().push(cost.clone());
        self.bump();
        cost
    }

    pub fn update_cost(&self, updated: OperationalCost) -> Result<OperationalCost, AppError> {
        let mut costs = self.costs.write();
        let slot = costs
            .iter_mut()
            .find(|c| c.id == updated.id)
            .ok_or(AppError::CostNotFound)?;
        *slot = updated.clone();
        drop(costs);
        self.bump();
        Ok(updated)
    }

    pub fn delete_cost(&self, id: Uuid) -> Result<(), AppError> {
        let mut costs = self.costs.write();
        let before = costs.len();
        costs.retain(|c| c.id != id);
        if costs.len() == before {
            return Err(AppError::CostNotFound);
        }
        drop(costs);
        self.bump();
        Ok(())
    }

    // ---
    // Ativos fixos
    // ---

    pub fn list_assets(&self) -> Vec<FixedAsset> {
        self.assets.read().clone()
    }

    pub fn add_asset(&self, asset: FixedAsset) -> FixedAsset {
        self.assets.write().push(asset.clone());
        self.bump();
        asset
    }

    pub fn update_asset(&self, updated: FixedAsset) -> Result<FixedAsset, AppError> {
        let mut assets = self.assets.write();
        let slot = assets
            .iter_mut()
            .find(|a| a.id == updated.id)
            .ok_or(AppError::AssetNotFound)?;
        *slot = updated.clone();
        drop(assets);
        self.bump();
        Ok(updated)
    }

    pub fn delete_asset(&self, id: Uuid) -> Result<(), AppError> {
        let mut assets = self.assets.write();
        let before = assets.len();
        assets.retain(|a| a.id != id);
        if assets.len() == before {
            return Err(AppError::AssetNotFound);
        }
        drop(assets);
        self.bump();
        Ok(())
    }
}
