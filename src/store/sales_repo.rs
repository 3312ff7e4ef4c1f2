// src/store/sales_repo.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::sales::Sale;

// Histórico do caixa. Mantido da venda mais recente para a mais antiga,
// que é a ordem em que o caixa exibe.
#[derive(Clone)]
pub struct SaleRepository {
    sales: Arc<RwLock<Vec<Sale>>>,
    version: Arc<AtomicU64>,
}

impl SaleRepository {
    pub fn new() -> Self {
        Self {
            sales: Arc::new(RwLock::new(Vec::new())),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn list(&self) -> Vec<Sale> {
        self.sales.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Sale> {
        self.sales.read().iter().find(|v| v.id == id).cloned()
    }

    pub fn add(&self, sale: Sale) -> Sale {
        self.sales.write().insert(0, sale.clone());
        self.bump();
        sale
    }

    /// Remove a venda e a devolve, para o chamador repor o estoque.
    pub fn delete(&self, id: Uuid) -> Option<Sale> {
        let mut sales = self.sales.write();
        let pos = sales.iter().position(|v| v.id == id)?;
        let removed = sales.remove(pos);
        drop(sales);
        self.bump();
        Some(removed)
    }

    /// Zera o histórico e devolve quantas vendas havia.
    pub fn clear(&self) -> usize {
        let mut sales = self.sales.write();
        let removed = sales.len();
        sales.clear();
        drop(sales);
        self.bump();
        removed
    }
}
