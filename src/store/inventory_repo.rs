// src/store/inventory_repo.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{common::error::AppError, models::inventory::Supply};

// Repositório de insumos. Clonar é barato: os clones compartilham o
// mesmo vetor por trás do Arc.
#[derive(Clone)]
pub struct SupplyRepository {
    supplies: Arc<RwLock<Vec<Supply>>>,
    version: Arc<AtomicU64>,
}

impl SupplyRepository {
    pub fn new() -> Self {
        Self {
            supplies: Arc::new(RwLock::new(Vec::new())),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Versão estrutural da coleção (muda a cada escrita).
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    // ---
    // Leitura
    // ---

    pub fn list(&self) -> Vec<Supply> {
        self.supplies.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Supply> {
        self.supplies.read().iter().find(|s| s.id == id).cloned()
    }

    // ---
    // Escrita
    // ---

    pub fn add(&self, supply: Supply) -> Supply {
        self.supplies.write().push(supply.clone());
        self.bump();
        supply
    }

    pub fn update(&self, updated: Supply) -> Result<Supply, AppError> {
        let mut supplies = self.supplies.write();
        let slot = supplies
            .iter_mut()
            .find(|s| s.id == updated.id)
            .ok_or(AppError::SupplyNotFound)?;
        *slot = updated.clone();
        drop(supplies);
        self.bump();
        Ok(updated)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut supplies = self.supplies.write();
        let before = supplies.len();
        supplies.retain(|s| s.id != id);
        if supplies.len() == before {
            return Err(AppError::SupplyNotFound);
        }
        drop(supplies);
        self.bump();
        Ok(())
    }

    /// Soma `delta` ao estoque do insumo (negativo = baixa).
    /// Referência inexistente é ignorada em silêncio: baixa de estoque é
    /// efeito colateral da venda e nunca pode derrubar o registro dela.
    pub fn adjust_stock(&self, id: Uuid, delta: Decimal) {
        let mut supplies = self.supplies.write();
        if let Some(supply) = supplies.iter_mut().find(|s| s.id == id) {
            supply.current_stock += delta;
            drop(supplies);
            self.bump();
        }
    }
}
